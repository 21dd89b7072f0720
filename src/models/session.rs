use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged repetition-weight pair performed during a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedSet {
    /// 1-based position within the exercise
    pub ordinal: u32,
    pub reps: u32,
    /// Weight is stored in pounds; display converts to the preferred unit
    pub weight_lbs: f64,
    pub date: DateTime<Utc>,
}

impl LoggedSet {
    pub fn new(ordinal: u32, reps: u32, weight_lbs: f64, date: DateTime<Utc>) -> Self {
        Self {
            ordinal,
            reps,
            weight_lbs,
            date,
        }
    }

    pub fn volume_lbs(&self) -> f64 {
        self.weight_lbs * f64::from(self.reps)
    }
}

/// Recorded sets for one exercise within a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Plan exercise name; an unknown name is kept as-is and simply
    /// doesn't resolve to a muscle group
    pub exercise: String,
    pub sets: Vec<LoggedSet>,
}

impl ExerciseLog {
    pub fn new(exercise: String, sets: Vec<LoggedSet>) -> Self {
        Self { exercise, sets }
    }

    pub fn volume_lbs(&self) -> f64 {
        self.sets.iter().map(LoggedSet::volume_lbs).sum()
    }

    pub fn total_reps(&self) -> u32 {
        self.sets.iter().map(|s| s.reps).sum()
    }
}

/// One instance of performing a workout day on a specific date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: String,
    pub date: DateTime<Utc>,
    /// References a plan day by number; a dangling reference is harmless
    pub day_number: u8,
    pub duration_minutes: u32,
    pub notes: Option<String>,
    pub logs: Vec<ExerciseLog>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkoutSession {
    pub fn new(
        day_number: u8,
        date: DateTime<Utc>,
        duration_minutes: u32,
        notes: Option<String>,
        logs: Vec<ExerciseLog>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            day_number,
            duration_minutes,
            notes,
            logs,
            created_at: now,
            updated_at: now,
        }
    }

    /// Training volume: sum over completed sets of reps x weight
    pub fn volume_lbs(&self) -> f64 {
        self.logs.iter().map(ExerciseLog::volume_lbs).sum()
    }

    pub fn total_sets(&self) -> u32 {
        self.logs.iter().map(|l| l.sets.len() as u32).sum()
    }

    pub fn total_reps(&self) -> u32 {
        self.logs.iter().map(ExerciseLog::total_reps).sum()
    }
}

/// Filter criteria for listing sessions
#[derive(Debug, Default)]
pub struct SessionFilter {
    pub day_number: Option<u8>,
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
}

impl SessionFilter {
    pub fn matches(&self, session: &WorkoutSession) -> bool {
        if let Some(day) = self.day_number {
            if session.day_number != day {
                return false;
            }
        }

        if let Some(from) = self.from_date {
            if session.date < from {
                return false;
            }
        }

        if let Some(to) = self.to_date {
            if session.date > to {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn set(ordinal: u32, reps: u32, weight: f64) -> LoggedSet {
        LoggedSet::new(ordinal, reps, weight, Utc::now())
    }

    fn session_with_sets() -> WorkoutSession {
        WorkoutSession::new(
            2,
            Utc::now(),
            55,
            Some("felt strong".to_string()),
            vec![
                ExerciseLog::new(
                    "Barbell Bench Press".to_string(),
                    vec![set(1, 8, 185.0), set(2, 8, 185.0), set(3, 6, 185.0)],
                ),
                ExerciseLog::new("Dips".to_string(), vec![set(1, 12, 0.0)]),
            ],
        )
    }

    #[test]
    fn test_volume_totals() {
        let session = session_with_sets();
        assert_eq!(session.total_sets(), 4);
        assert_eq!(session.total_reps(), 34);
        // 8*185 + 8*185 + 6*185 + 12*0
        assert!((session.volume_lbs() - 4070.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_filter_by_day_and_range() {
        let session = session_with_sets();

        let mut filter = SessionFilter::default();
        assert!(filter.matches(&session));

        filter.day_number = Some(2);
        assert!(filter.matches(&session));
        filter.day_number = Some(3);
        assert!(!filter.matches(&session));

        let filter = SessionFilter {
            day_number: None,
            from_date: Some(Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap()),
            to_date: None,
        };
        assert!(!filter.matches(&session));
    }
}
