use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Muscle group targeted by an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Core,
    FullBody,
    Arms,
}

impl std::fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MuscleGroup::Chest => write!(f, "Chest"),
            MuscleGroup::Back => write!(f, "Back"),
            MuscleGroup::Shoulders => write!(f, "Shoulders"),
            MuscleGroup::Biceps => write!(f, "Biceps"),
            MuscleGroup::Triceps => write!(f, "Triceps"),
            MuscleGroup::Legs => write!(f, "Legs"),
            MuscleGroup::Core => write!(f, "Core"),
            MuscleGroup::FullBody => write!(f, "Full Body"),
            MuscleGroup::Arms => write!(f, "Arms"),
        }
    }
}

impl std::str::FromStr for MuscleGroup {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chest" => Ok(MuscleGroup::Chest),
            "back" => Ok(MuscleGroup::Back),
            "shoulders" => Ok(MuscleGroup::Shoulders),
            "biceps" => Ok(MuscleGroup::Biceps),
            "triceps" => Ok(MuscleGroup::Triceps),
            "legs" => Ok(MuscleGroup::Legs),
            "core" => Ok(MuscleGroup::Core),
            "full_body" | "fullbody" | "full body" => Ok(MuscleGroup::FullBody),
            "arms" => Ok(MuscleGroup::Arms),
            _ => Err(anyhow::anyhow!("Invalid muscle group: {}", s)),
        }
    }
}

/// Kind of training day in the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    LegsSquat,
    Push,
    Pull,
    LegsDeadlift,
    Rest,
    Cardio,
    FullBody,
}

impl WorkoutType {
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::LegsSquat => "Legs (Squat Focus)",
            WorkoutType::Push => "Push (Upper Body)",
            WorkoutType::Pull => "Pull (Upper Body)",
            WorkoutType::LegsDeadlift => "Legs (Deadlift Focus)",
            WorkoutType::Rest => "Rest",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::FullBody => "Full Body",
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, WorkoutType::Rest)
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A prescribed movement within a workout day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    /// Prescribed number of working sets
    pub sets: u32,
    /// Rep prescription; may be a range ("10-12") or a hold ("30 seconds")
    pub reps: String,
    /// Load prescription, e.g. "80% 1RM" or "Body weight"
    pub target: String,
    pub notes: Option<String>,
    pub muscle_group: MuscleGroup,
}

impl Exercise {
    pub fn new(
        name: &str,
        sets: u32,
        reps: &str,
        target: &str,
        notes: Option<&str>,
        muscle_group: MuscleGroup,
    ) -> Self {
        Self {
            name: name.to_string(),
            sets,
            reps: reps.to_string(),
            target: target.to_string(),
            notes: notes.map(|n| n.to_string()),
            muscle_group,
        }
    }
}

/// One scheduled day in the fixed training program
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutDay {
    /// 1-based position in the program; sessions reference days by this number
    pub day_number: u8,
    pub name: String,
    pub workout_type: WorkoutType,
    pub focus_area: String,
    pub estimated_minutes: u32,
    pub exercises: Vec<Exercise>,
}

impl WorkoutDay {
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets).sum()
    }

    /// Distinct muscle groups hit by this day, in plan order
    pub fn muscle_groups(&self) -> Vec<MuscleGroup> {
        let mut groups = Vec::new();
        for exercise in &self.exercises {
            if !groups.contains(&exercise.muscle_group) {
                groups.push(exercise.muscle_group);
            }
        }
        groups
    }

    pub fn exercise(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name == name)
    }
}

/// The fixed multi-day training program
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub days: Vec<WorkoutDay>,
}

impl WorkoutPlan {
    /// Look up a plan day; unknown numbers resolve to None
    pub fn day(&self, day_number: u8) -> Option<&WorkoutDay> {
        self.days.iter().find(|d| d.day_number == day_number)
    }

    /// Plan day scheduled for a weekday (Monday = Day 1 .. Sunday = Day 7)
    pub fn day_for_weekday(&self, weekday: Weekday) -> Option<&WorkoutDay> {
        self.day(weekday.number_from_monday() as u8)
    }

    pub fn today(&self) -> Option<&WorkoutDay> {
        use chrono::Datelike;
        self.day_for_weekday(chrono::Local::now().weekday())
    }

    /// Number of non-rest days in the program
    pub fn training_days(&self) -> u32 {
        self.days
            .iter()
            .filter(|d| !d.workout_type.is_rest())
            .count() as u32
    }

    /// Find an exercise anywhere in the program by exact name
    pub fn find_exercise(&self, name: &str) -> Option<&Exercise> {
        self.days.iter().find_map(|d| d.exercise(name))
    }

    /// The default 6-day push/pull/legs split plus a rest day
    pub fn default_program() -> Self {
        use MuscleGroup::*;

        let days = vec![
            WorkoutDay {
                day_number: 1,
                name: "Legs (Squat Focus)".to_string(),
                workout_type: WorkoutType::LegsSquat,
                focus_area: "Lower Body".to_string(),
                estimated_minutes: 60,
                exercises: vec![
                    Exercise::new(
                        "Barbell Back Squat",
                        3,
                        "4",
                        "80% 1RM",
                        Some("Focus on form"),
                        Legs,
                    ),
                    Exercise::new("Romanian Deadlift", 3, "10", "Body weight", None, Legs),
                    Exercise::new("Single-Leg Press", 3, "15", "Body weight", None, Legs),
                    Exercise::new(
                        "Eccentric Leg Extension",
                        3,
                        "10-12",
                        "Body weight",
                        None,
                        Legs,
                    ),
                    Exercise::new("Seated Leg Curl", 3, "10-12", "Body weight", None, Legs),
                    Exercise::new("Standing Calf Raise", 3, "10-12", "Body weight", None, Legs),
                    Exercise::new("Decline Crunches", 2, "10-12", "Body weight", None, Core),
                    Exercise::new("Long-Lever Plank", 2, "30 seconds", "Body weight", None, Core),
                ],
            },
            WorkoutDay {
                day_number: 2,
                name: "Push (Upper Body)".to_string(),
                workout_type: WorkoutType::Push,
                focus_area: "Chest, Shoulders, Triceps".to_string(),
                estimated_minutes: 60,
                exercises: vec![
                    Exercise::new("Barbell Bench Press", 3, "8", "72.5% 1RM", None, Chest),
                    Exercise::new(
                        "Machine Shoulder Press",
                        3,
                        "12",
                        "Body weight",
                        None,
                        Shoulders,
                    ),
                    Exercise::new("Dips", 3, "12-15", "Body weight", None, Triceps),
                    Exercise::new(
                        "Eccentric Skull Crushers",
                        3,
                        "8-10",
                        "Body weight",
                        None,
                        Triceps,
                    ),
                    Exercise::new(
                        "Egyptian Lateral Raise",
                        3,
                        "12",
                        "Body weight",
                        None,
                        Shoulders,
                    ),
                    Exercise::new(
                        "Cable Triceps Kickbacks",
                        3,
                        "20-30",
                        "Body weight",
                        None,
                        Triceps,
                    ),
                ],
            },
            WorkoutDay {
                day_number: 3,
                name: "Pull (Upper Body)".to_string(),
                workout_type: WorkoutType::Pull,
                focus_area: "Back, Biceps".to_string(),
                estimated_minutes: 60,
                exercises: vec![
                    Exercise::new("Weighted Pull-Up", 3, "6", "Body weight", None, Back),
                    Exercise::new("Seated Cable Row", 3, "10-12", "Body weight", None, Back),
                    Exercise::new("Cable Pullover", 3, "15-20", "Body weight", None, Back),
                    Exercise::new("Hammer Cheat Curl", 3, "8-10", "Body weight", None, Biceps),
                    Exercise::new(
                        "Incline Dumbbell Curl",
                        2,
                        "12-15",
                        "Body weight",
                        None,
                        Biceps,
                    ),
                ],
            },
            WorkoutDay {
                day_number: 4,
                name: "Legs (Deadlift Focus)".to_string(),
                workout_type: WorkoutType::LegsDeadlift,
                focus_area: "Lower Body".to_string(),
                estimated_minutes: 60,
                exercises: vec![
                    Exercise::new("Barbell Deadlift", 3, "3", "80-85% 1RM", None, Legs),
                    Exercise::new("Hack Squat", 3, "10-12", "Body weight", None, Legs),
                    Exercise::new("Single-Leg Hip Thrust", 3, "15", "Body weight", None, Legs),
                    Exercise::new(
                        "Nordic Hamstring Curl",
                        2,
                        "10-12",
                        "Body weight",
                        None,
                        Legs,
                    ),
                    Exercise::new(
                        "Prisoner Back Extension",
                        2,
                        "10-12",
                        "Body weight",
                        None,
                        Back,
                    ),
                    Exercise::new(
                        "Single-Leg Calf Raise",
                        3,
                        "8-10",
                        "Body weight",
                        None,
                        Legs,
                    ),
                    Exercise::new(
                        "Weighted L-Sit Hold",
                        3,
                        "30 seconds",
                        "Body weight",
                        None,
                        Core,
                    ),
                ],
            },
            WorkoutDay {
                day_number: 5,
                name: "Push (Upper Body)".to_string(),
                workout_type: WorkoutType::Push,
                focus_area: "Shoulders, Chest, Triceps".to_string(),
                estimated_minutes: 60,
                exercises: vec![
                    Exercise::new("Overhead Press", 4, "4", "80% 1RM", None, Shoulders),
                    Exercise::new(
                        "Close-Grip Bench Press",
                        3,
                        "10",
                        "Body weight",
                        None,
                        Chest,
                    ),
                    Exercise::new("Cable Crossover", 3, "10-12", "Body weight", None, Chest),
                    Exercise::new(
                        "Overhead Triceps Extension",
                        3,
                        "10-12",
                        "Body weight",
                        None,
                        Triceps,
                    ),
                    Exercise::new(
                        "Lateral Raise 21s",
                        3,
                        "21",
                        "Body weight",
                        Some("7 reps at bottom range, 7 at top range, 7 full range"),
                        Shoulders,
                    ),
                    Exercise::new(
                        "Neck Flexion/Extension",
                        3,
                        "10-12",
                        "Body weight",
                        None,
                        Shoulders,
                    ),
                ],
            },
            WorkoutDay {
                day_number: 6,
                name: "Pull (Upper Body)".to_string(),
                workout_type: WorkoutType::Pull,
                focus_area: "Back, Biceps".to_string(),
                estimated_minutes: 60,
                exercises: vec![
                    Exercise::new(
                        "Omni-Grip Lat Pulldown",
                        3,
                        "10-12",
                        "Body weight",
                        None,
                        Back,
                    ),
                    Exercise::new(
                        "Chest-Supported Row",
                        3,
                        "10-12",
                        "Body weight",
                        None,
                        Back,
                    ),
                    Exercise::new("Rope Face Pull", 3, "15-20", "Body weight", None, Back),
                    Exercise::new(
                        "Incline Dumbbell Shrug",
                        3,
                        "15-20",
                        "Body weight",
                        None,
                        Back,
                    ),
                    Exercise::new(
                        "Reverse Pec Deck",
                        2,
                        "15+",
                        "Body weight",
                        Some("Optional"),
                        Back,
                    ),
                    Exercise::new(
                        "Pronated/Supinated Curl",
                        3,
                        "10",
                        "Body weight",
                        Some("Each grip"),
                        Biceps,
                    ),
                ],
            },
            WorkoutDay {
                day_number: 7,
                name: "Rest Day".to_string(),
                workout_type: WorkoutType::Rest,
                focus_area: "Recovery".to_string(),
                estimated_minutes: 0,
                exercises: vec![],
            },
        ];

        Self { days }
    }
}

impl Default for WorkoutPlan {
    fn default() -> Self {
        Self::default_program()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program_shape() {
        let plan = WorkoutPlan::default_program();
        assert_eq!(plan.days.len(), 7);
        assert_eq!(plan.training_days(), 6);

        let day1 = plan.day(1).unwrap();
        assert_eq!(day1.name, "Legs (Squat Focus)");
        assert_eq!(day1.exercises.len(), 8);
        assert_eq!(day1.total_sets(), 22);

        let day7 = plan.day(7).unwrap();
        assert!(day7.workout_type.is_rest());
        assert!(day7.exercises.is_empty());
        assert_eq!(day7.estimated_minutes, 0);
    }

    #[test]
    fn test_unknown_day_is_none() {
        let plan = WorkoutPlan::default_program();
        assert!(plan.day(0).is_none());
        assert!(plan.day(8).is_none());
    }

    #[test]
    fn test_weekday_mapping() {
        let plan = WorkoutPlan::default_program();
        let monday = plan.day_for_weekday(Weekday::Mon).unwrap();
        assert_eq!(monday.day_number, 1);
        let sunday = plan.day_for_weekday(Weekday::Sun).unwrap();
        assert!(sunday.workout_type.is_rest());
    }

    #[test]
    fn test_muscle_groups_distinct_and_ordered() {
        let plan = WorkoutPlan::default_program();
        let day1 = plan.day(1).unwrap();
        assert_eq!(day1.muscle_groups(), vec![MuscleGroup::Legs, MuscleGroup::Core]);
    }

    #[test]
    fn test_find_exercise() {
        let plan = WorkoutPlan::default_program();
        let bench = plan.find_exercise("Barbell Bench Press").unwrap();
        assert_eq!(bench.sets, 3);
        assert_eq!(bench.muscle_group, MuscleGroup::Chest);
        assert!(plan.find_exercise("Cable Flamingo").is_none());
    }

    #[test]
    fn test_muscle_group_parse() {
        use std::str::FromStr;
        assert_eq!(MuscleGroup::from_str("legs").unwrap(), MuscleGroup::Legs);
        assert_eq!(
            MuscleGroup::from_str("Full Body").unwrap(),
            MuscleGroup::FullBody
        );
        assert!(MuscleGroup::from_str("wings").is_err());
    }
}
