use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const LBS_PER_KG: f64 = 2.20462;

/// Weight unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Lbs,
    Kg,
}

impl WeightUnit {
    /// Convert a value expressed in `self` into `unit`
    pub fn convert(&self, value: f64, unit: WeightUnit) -> f64 {
        match (self, unit) {
            (WeightUnit::Lbs, WeightUnit::Kg) => value / LBS_PER_KG,
            (WeightUnit::Kg, WeightUnit::Lbs) => value * LBS_PER_KG,
            _ => value,
        }
    }

    pub fn to_lbs(&self, value: f64) -> f64 {
        self.convert(value, WeightUnit::Lbs)
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightUnit::Lbs => write!(f, "lbs"),
            WeightUnit::Kg => write!(f, "kg"),
        }
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lbs" | "lb" | "pounds" => Ok(WeightUnit::Lbs),
            "kg" | "kgs" | "kilograms" => Ok(WeightUnit::Kg),
            _ => Err(anyhow::anyhow!("Invalid weight unit: {}", s)),
        }
    }
}

/// A body-weight measurement; stored in pounds regardless of entry unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub weight_lbs: f64,
}

impl WeightEntry {
    pub fn new(weight: f64, unit: WeightUnit, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            weight_lbs: unit.to_lbs(weight),
        }
    }

    pub fn weight_in(&self, unit: WeightUnit) -> f64 {
        WeightUnit::Lbs.convert(self.weight_lbs, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kg_entry_stored_as_lbs() {
        let entry = WeightEntry::new(100.0, WeightUnit::Kg, Utc::now());
        assert!((entry.weight_lbs - 220.462).abs() < 0.001);
        assert!((entry.weight_in(WeightUnit::Kg) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_lbs_entry_unchanged() {
        let entry = WeightEntry::new(180.0, WeightUnit::Lbs, Utc::now());
        assert!((entry.weight_lbs - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unit_round_trip() {
        let kg = WeightUnit::Lbs.convert(220.462, WeightUnit::Kg);
        assert!((kg - 100.0).abs() < 0.001);
        assert!((WeightUnit::Kg.convert(50.0, WeightUnit::Kg) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unit_parse() {
        use std::str::FromStr;
        assert_eq!(WeightUnit::from_str("KG").unwrap(), WeightUnit::Kg);
        assert_eq!(WeightUnit::from_str("lb").unwrap(), WeightUnit::Lbs);
        assert!(WeightUnit::from_str("stone").is_err());
    }
}
