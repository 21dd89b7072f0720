//! Derived metrics over logged history: volume, muscle-group distribution,
//! personal records, streaks and frequency. All functions are pure so the
//! CLI, the dashboard and the tests share one implementation.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::Serialize;

use crate::models::{MuscleGroup, WeightEntry, WorkoutPlan, WorkoutSession};

/// Reporting window for analytics queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Week,
    Month,
    Year,
    #[default]
    AllTime,
}

impl Period {
    pub fn days(&self) -> Option<i64> {
        match self {
            Period::Week => Some(7),
            Period::Month => Some(30),
            Period::Year => Some(365),
            Period::AllTime => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Week => "Week",
            Period::Month => "Month",
            Period::Year => "Year",
            Period::AllTime => "All Time",
        }
    }
}

/// Training volume for one calendar day
#[derive(Debug, Clone, Serialize)]
pub struct VolumePoint {
    pub date: NaiveDate,
    pub volume_lbs: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VolumeSummary {
    pub total_lbs: f64,
    pub average_lbs: f64,
    /// Percent change of the recent half vs the older half of the window
    pub trend_pct: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MuscleGroupShare {
    pub muscle_group: MuscleGroup,
    pub sets: u32,
    pub share: f64,
}

/// Maximum logged weight for an exercise at the qualifying rep count
#[derive(Debug, Clone, Serialize)]
pub struct PersonalRecord {
    pub exercise: String,
    pub weight_lbs: f64,
    pub reps: u32,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickStats {
    pub workouts: usize,
    pub total_minutes: u32,
    pub avg_minutes: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightOverview {
    pub current_lbs: f64,
    pub change_lbs: f64,
    pub target_lbs: Option<f64>,
}

fn in_window(session: &WorkoutSession, period: Period, now: DateTime<Utc>) -> bool {
    match period.days() {
        Some(days) => session.date >= now - chrono::Duration::days(days),
        None => true,
    }
}

/// Volume per calendar day, ascending by date
pub fn volume_by_date(
    sessions: &[WorkoutSession],
    period: Period,
    now: DateTime<Utc>,
) -> Vec<VolumePoint> {
    let mut by_date: HashMap<NaiveDate, f64> = HashMap::new();

    for session in sessions.iter().filter(|s| in_window(s, period, now)) {
        *by_date.entry(session.date.date_naive()).or_insert(0.0) += session.volume_lbs();
    }

    let mut points: Vec<VolumePoint> = by_date
        .into_iter()
        .map(|(date, volume_lbs)| VolumePoint { date, volume_lbs })
        .collect();
    points.sort_by_key(|p| p.date);

    points
}

/// Total, per-day average and half-over-half trend for a volume series
pub fn volume_summary(points: &[VolumePoint]) -> VolumeSummary {
    let total_lbs: f64 = points.iter().map(|p| p.volume_lbs).sum();
    let average_lbs = if points.is_empty() {
        0.0
    } else {
        total_lbs / points.len() as f64
    };

    let trend_pct = if points.len() >= 2 {
        let half = points.len() / 2;
        let old_avg: f64 =
            points[..half].iter().map(|p| p.volume_lbs).sum::<f64>() / half as f64;
        let recent_avg: f64 = points[points.len() - half..]
            .iter()
            .map(|p| p.volume_lbs)
            .sum::<f64>()
            / half as f64;
        (old_avg > 0.0).then(|| (recent_avg - old_avg) / old_avg * 100.0)
    } else {
        None
    };

    VolumeSummary {
        total_lbs,
        average_lbs,
        trend_pct,
    }
}

/// Prescribed sets per muscle group across the sessions performed in the
/// window. Sessions whose plan day no longer resolves are skipped.
pub fn muscle_group_distribution(
    sessions: &[WorkoutSession],
    plan: &WorkoutPlan,
    period: Period,
    now: DateTime<Utc>,
) -> Vec<MuscleGroupShare> {
    let mut sets_by_group: HashMap<MuscleGroup, u32> = HashMap::new();

    for session in sessions.iter().filter(|s| in_window(s, period, now)) {
        if let Some(day) = plan.day(session.day_number) {
            for exercise in &day.exercises {
                *sets_by_group.entry(exercise.muscle_group).or_insert(0) += exercise.sets;
            }
        }
    }

    let total: u32 = sets_by_group.values().sum();
    let mut shares: Vec<MuscleGroupShare> = sets_by_group
        .into_iter()
        .map(|(muscle_group, sets)| MuscleGroupShare {
            muscle_group,
            sets,
            share: if total > 0 {
                f64::from(sets) / f64::from(total)
            } else {
                0.0
            },
        })
        .collect();
    shares.sort_by(|a, b| {
        b.sets
            .cmp(&a.sets)
            .then_with(|| a.muscle_group.to_string().cmp(&b.muscle_group.to_string()))
    });

    shares
}

/// Max logged weight per exercise among sets with at least `min_reps`
/// repetitions. The earliest date the record was hit is kept; results are
/// sorted newest-first.
pub fn personal_records(sessions: &[WorkoutSession], min_reps: u32) -> Vec<PersonalRecord> {
    let mut records: HashMap<&str, PersonalRecord> = HashMap::new();

    for session in sessions {
        for log in &session.logs {
            for set in log.sets.iter().filter(|s| s.reps >= min_reps) {
                let candidate = PersonalRecord {
                    exercise: log.exercise.clone(),
                    weight_lbs: set.weight_lbs,
                    reps: set.reps,
                    date: set.date,
                };
                match records.get_mut(log.exercise.as_str()) {
                    Some(best) => {
                        let heavier = candidate.weight_lbs > best.weight_lbs;
                        let earlier_at_same = candidate.weight_lbs == best.weight_lbs
                            && candidate.date < best.date;
                        if heavier || earlier_at_same {
                            *best = candidate;
                        }
                    }
                    None => {
                        records.insert(log.exercise.as_str(), candidate);
                    }
                }
            }
        }
    }

    let mut records: Vec<PersonalRecord> = records.into_values().collect();
    records.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.exercise.cmp(&b.exercise)));

    records
}

/// Consecutive training days counted back from the most recent session,
/// breaking on the first gap of more than one calendar day
pub fn workout_streak(sessions: &[WorkoutSession]) -> u32 {
    let mut dates: Vec<NaiveDate> = sessions.iter().map(|s| s.date.date_naive()).collect();
    dates.sort_unstable();
    dates.dedup();
    dates.reverse();

    let mut streak = 0u32;
    let mut last: Option<NaiveDate> = None;

    for date in dates {
        if let Some(prev) = last {
            if (prev - date).num_days() > 1 {
                break;
            }
        }
        streak += 1;
        last = Some(date);
    }

    streak
}

/// Sessions completed since Monday of the current week, as a fraction of
/// the weekly target
pub fn weekly_progress(
    sessions: &[WorkoutSession],
    sessions_per_week: u32,
    now: DateTime<Utc>,
) -> f32 {
    if sessions_per_week == 0 {
        return 0.0;
    }

    let week_start = now.date_naive().week(Weekday::Mon).first_day();
    let this_week = sessions
        .iter()
        .filter(|s| s.date.date_naive() >= week_start)
        .count();

    this_week as f32 / sessions_per_week as f32
}

/// Session counts per weekday, Monday through Sunday
pub fn workout_frequency(
    sessions: &[WorkoutSession],
    period: Period,
    now: DateTime<Utc>,
) -> [u32; 7] {
    let mut by_day = [0u32; 7];

    for session in sessions.iter().filter(|s| in_window(s, period, now)) {
        by_day[session.date.weekday().num_days_from_monday() as usize] += 1;
    }

    by_day
}

/// Headline figures over the 30 most recent sessions
pub fn quick_stats(sessions: &[WorkoutSession]) -> QuickStats {
    let mut recent: Vec<&WorkoutSession> = sessions.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(30);

    let workouts = recent.len();
    let total_minutes: u32 = recent.iter().map(|s| s.duration_minutes).sum();
    let avg_minutes = if workouts > 0 {
        total_minutes / workouts as u32
    } else {
        0
    };

    QuickStats {
        workouts,
        total_minutes,
        avg_minutes,
    }
}

/// Latest weight and change across the window; None when nothing is logged
pub fn weight_overview(
    entries: &[WeightEntry],
    period: Period,
    now: DateTime<Utc>,
    target_lbs: Option<f64>,
) -> Option<WeightOverview> {
    let mut in_range: Vec<&WeightEntry> = entries
        .iter()
        .filter(|e| match period.days() {
            Some(days) => e.date >= now - chrono::Duration::days(days),
            None => true,
        })
        .collect();
    in_range.sort_by_key(|e| e.date);

    let first = in_range.first()?;
    let last = in_range.last()?;

    Some(WeightOverview {
        current_lbs: last.weight_lbs,
        change_lbs: last.weight_lbs - first.weight_lbs,
        target_lbs,
    })
}
