use regex::Regex;
use thiserror::Error;

const LBS_PER_KG: f64 = 2.20462;

/// A set entry parsed from user input
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSet {
    pub reps: u32,
    pub weight_lbs: f64,
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unrecognized set entry '{0}' (expected e.g. '185x8', '100kg x 5' or '8 @ 185')")]
    UnrecognizedSet(String),

    #[error("Missing exercise name in '{0}' (expected 'Exercise: 185x8, 185x8')")]
    MissingExercise(String),

    #[error("No sets given for exercise '{0}'")]
    EmptySets(String),
}

/// Parse set entries like "185x8", "100kg x 5", "8 @ 185 lbs" or "bw x 12"
pub struct SetParser {
    weight_x_reps: Regex,
    reps_at_weight: Regex,
}

impl Default for SetParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SetParser {
    pub fn new() -> Self {
        // Weight-first gym shorthand: "<weight>[unit] x <reps>"
        let weight_x_reps = Regex::new(
            r"(?i)^(bw|bodyweight|\d+(?:\.\d+)?)\s*(kg|kgs|lb|lbs)?\s*[x×]\s*(\d+)$",
        )
        .unwrap();

        // Reps-first form: "<reps> [reps] @ <weight>[unit]"
        let reps_at_weight = Regex::new(
            r"(?i)^(\d+)\s*(?:reps?)?\s*@\s*(bw|bodyweight|\d+(?:\.\d+)?)\s*(kg|kgs|lb|lbs)?$",
        )
        .unwrap();

        Self {
            weight_x_reps,
            reps_at_weight,
        }
    }

    /// Parse a single set entry
    pub fn parse(&self, entry: &str) -> Result<ParsedSet, ParseError> {
        let entry = entry.trim();

        if let Some(captures) = self.weight_x_reps.captures(entry) {
            let weight_lbs = Self::weight_lbs(
                captures.get(1).map(|m| m.as_str()).unwrap_or(""),
                captures.get(2).map(|m| m.as_str()),
            );
            let reps = captures[3].parse::<u32>().ok();

            if let (Some(weight_lbs), Some(reps)) = (weight_lbs, reps) {
                return Ok(ParsedSet { reps, weight_lbs });
            }
        }

        if let Some(captures) = self.reps_at_weight.captures(entry) {
            let reps = captures[1].parse::<u32>().ok();
            let weight_lbs = Self::weight_lbs(
                captures.get(2).map(|m| m.as_str()).unwrap_or(""),
                captures.get(3).map(|m| m.as_str()),
            );

            if let (Some(weight_lbs), Some(reps)) = (weight_lbs, reps) {
                return Ok(ParsedSet { reps, weight_lbs });
            }
        }

        Err(ParseError::UnrecognizedSet(entry.to_string()))
    }

    /// Parse "Exercise Name: 185x8, 185x8, 180x6" into a name and its sets
    pub fn parse_line(&self, line: &str) -> Result<(String, Vec<ParsedSet>), ParseError> {
        let (name, specs) = line
            .split_once(':')
            .ok_or_else(|| ParseError::MissingExercise(line.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(ParseError::MissingExercise(line.to_string()));
        }

        let sets = specs
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| self.parse(s))
            .collect::<Result<Vec<_>, _>>()?;

        if sets.is_empty() {
            return Err(ParseError::EmptySets(name.to_string()));
        }

        Ok((name.to_string(), sets))
    }

    fn weight_lbs(value: &str, unit: Option<&str>) -> Option<f64> {
        if value.eq_ignore_ascii_case("bw") || value.eq_ignore_ascii_case("bodyweight") {
            return Some(0.0);
        }

        let value = value.parse::<f64>().ok()?;

        match unit.map(|u| u.to_lowercase()) {
            Some(u) if u.starts_with("kg") => Some(value * LBS_PER_KG),
            _ => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight_x_reps() {
        let parser = SetParser::new();
        let set = parser.parse("185x8").unwrap();

        assert_eq!(set.reps, 8);
        assert!((set.weight_lbs - 185.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_with_spaces_and_unit() {
        let parser = SetParser::new();
        let set = parser.parse("100 kg x 5").unwrap();

        assert_eq!(set.reps, 5);
        assert!((set.weight_lbs - 220.462).abs() < 0.001);
    }

    #[test]
    fn test_parse_reps_at_weight() {
        let parser = SetParser::new();
        let set = parser.parse("8 @ 185 lbs").unwrap();

        assert_eq!(set.reps, 8);
        assert!((set.weight_lbs - 185.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_reps_at_weight_kg() {
        let parser = SetParser::new();
        let set = parser.parse("5 reps @ 80kg").unwrap();

        assert_eq!(set.reps, 5);
        assert!((set.weight_lbs - 176.3696).abs() < 0.001);
    }

    #[test]
    fn test_parse_bodyweight() {
        let parser = SetParser::new();

        let set = parser.parse("bw x 12").unwrap();
        assert_eq!(set.reps, 12);
        assert!((set.weight_lbs - 0.0).abs() < f64::EPSILON);

        let set = parser.parse("12 @ bodyweight").unwrap();
        assert_eq!(set.reps, 12);
    }

    #[test]
    fn test_parse_fractional_weight() {
        let parser = SetParser::new();
        let set = parser.parse("72.5x10").unwrap();

        assert_eq!(set.reps, 10);
        assert!((set.weight_lbs - 72.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_unrecognized() {
        let parser = SetParser::new();

        assert!(parser.parse("a bunch of reps").is_err());
        assert!(parser.parse("x8").is_err());
        assert!(parser.parse("").is_err());
    }

    #[test]
    fn test_parse_line() {
        let parser = SetParser::new();
        let (name, sets) = parser
            .parse_line("Barbell Bench Press: 185x8, 185x8, 180x6")
            .unwrap();

        assert_eq!(name, "Barbell Bench Press");
        assert_eq!(sets.len(), 3);
        assert_eq!(sets[2].reps, 6);
        assert!((sets[2].weight_lbs - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_line_missing_name() {
        let parser = SetParser::new();

        assert!(parser.parse_line("185x8, 185x8").is_err());
        assert!(parser.parse_line(": 185x8").is_err());
        assert!(parser.parse_line("Dips:").is_err());
    }
}
