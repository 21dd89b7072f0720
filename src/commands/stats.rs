use anyhow::Result;
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::session::format_weight;
use crate::analytics::{
    self, MuscleGroupShare, Period, PersonalRecord, QuickStats, VolumeSummary, WeightOverview,
};
use crate::config::Config;
use crate::models::{WeightUnit, WorkoutPlan};
use crate::storage::Storage;

#[derive(Args)]
pub struct StatsCommand {
    /// Show weekly stats
    #[arg(long)]
    week: bool,

    /// Show monthly stats
    #[arg(long)]
    month: bool,

    /// Show yearly stats
    #[arg(long)]
    year: bool,

    /// Print as JSON
    #[arg(long)]
    json: bool,
}

/// Everything the stats command derives, in one serializable bundle
#[derive(Serialize)]
struct StatsReport {
    period: Period,
    quick: QuickStats,
    streak_days: u32,
    weekly_progress: f32,
    volume: VolumeSummary,
    muscle_distribution: Vec<MuscleGroupShare>,
    personal_records: Vec<PersonalRecord>,
    frequency_by_weekday: [u32; 7],
    weight: Option<WeightOverview>,
}

impl StatsCommand {
    pub async fn execute(self) -> Result<()> {
        let config = Config::load()?;
        let storage = Storage::init()?;
        let plan = WorkoutPlan::default_program();

        let period = if self.week {
            Period::Week
        } else if self.month {
            Period::Month
        } else if self.year {
            Period::Year
        } else {
            Period::AllTime
        };

        let now = Utc::now();
        let sessions = storage.list_sessions()?;
        let weight_entries = storage.list_weight_entries()?;

        let points = analytics::volume_by_date(&sessions, period, now);
        let report = StatsReport {
            period,
            quick: analytics::quick_stats(&sessions),
            streak_days: analytics::workout_streak(&sessions),
            weekly_progress: analytics::weekly_progress(
                &sessions,
                config.workout.sessions_per_week,
                now,
            ),
            volume: analytics::volume_summary(&points),
            muscle_distribution: analytics::muscle_group_distribution(
                &sessions, &plan, period, now,
            ),
            personal_records: analytics::personal_records(&sessions, config.workout.pr_min_reps),
            frequency_by_weekday: analytics::workout_frequency(&sessions, period, now),
            weight: analytics::weight_overview(
                &weight_entries,
                period,
                now,
                config.profile.target_weight_lbs,
            ),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        render_report(&report, &config);
        Ok(())
    }
}

fn render_report(report: &StatsReport, config: &Config) {
    let unit = config.weight_unit();

    println!("{}", "Training Statistics".bold());
    println!("Period: {}", report.period.label().cyan());
    println!();

    // Headline figures
    println!(
        "  Workouts: {}   Time: {}   Avg: {} min",
        report.quick.workouts.to_string().green().bold(),
        format_minutes(report.quick.total_minutes).yellow(),
        report.quick.avg_minutes
    );
    println!(
        "  Streak: {}   This week: {}%",
        format!("{} days", report.streak_days).green(),
        ((report.weekly_progress * 100.0).round() as u32).min(100)
    );
    println!();

    // Volume
    println!("{}", "Volume".bold());
    let trend = match report.volume.trend_pct {
        Some(pct) if pct >= 0.0 => format!("+{:.1}%", pct).green().to_string(),
        Some(pct) => format!("{:.1}%", pct).red().to_string(),
        None => "n/a".dimmed().to_string(),
    };
    println!(
        "  Total: {}   Avg/day: {}   Trend: {}",
        format_volume(report.volume.total_lbs, unit),
        format_volume(report.volume.average_lbs, unit),
        trend
    );
    println!();

    // Muscle group distribution
    if !report.muscle_distribution.is_empty() {
        println!("{}", "Muscle Groups".bold());
        for share in &report.muscle_distribution {
            let bar_len = (share.share * 24.0).round() as usize;
            println!(
                "  {:<12} {:>3} sets {:>5.1}%  {}",
                share.muscle_group.to_string(),
                share.sets,
                share.share * 100.0,
                "█".repeat(bar_len).cyan()
            );
        }
        println!();
    }

    // Personal records
    if !report.personal_records.is_empty() {
        println!("{}", "Personal Records".bold());
        for record in &report.personal_records {
            println!(
                "  {:<28} {:>12} x {:<3} {}",
                record.exercise,
                format_weight(record.weight_lbs, unit).yellow(),
                record.reps,
                record.date.format(&config.ui.date_format).to_string().dimmed()
            );
        }
        println!();
    }

    // Weekday frequency
    println!("{}", "Frequency".bold());
    let days = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    for (day, count) in days.iter().zip(report.frequency_by_weekday.iter()) {
        println!(
            "  {} {:>3}  {}",
            day,
            count,
            "▪".repeat(*count as usize).green()
        );
    }
    println!();

    // Weight overview
    if let Some(weight) = &report.weight {
        println!("{}", "Body Weight".bold());
        let change = if weight.change_lbs >= 0.0 {
            format!("+{}", format_weight(weight.change_lbs, unit)).red().to_string()
        } else {
            format!("-{}", format_weight(weight.change_lbs.abs(), unit))
                .green()
                .to_string()
        };
        let target = weight
            .target_lbs
            .map(|t| format!("   Target: {}", format_weight(t, unit)))
            .unwrap_or_default();
        println!(
            "  Current: {}   Change: {}{}",
            format_weight(weight.current_lbs, unit).bold(),
            change,
            target
        );
    }
}

fn format_minutes(total: u32) -> String {
    let hours = total / 60;
    let minutes = total % 60;
    if hours > 0 && minutes > 0 {
        format!("{}h {}m", hours, minutes)
    } else if hours > 0 {
        format!("{}h", hours)
    } else {
        format!("{}m", minutes)
    }
}

/// Volume figures get compact K/M formatting like the original charts
fn format_volume(volume_lbs: f64, unit: WeightUnit) -> String {
    let value = WeightUnit::Lbs.convert(volume_lbs, unit);
    if value >= 1_000_000.0 {
        format!("{:.1}M {}", value / 1_000_000.0, unit)
    } else if value >= 1_000.0 {
        format!("{:.1}K {}", value / 1_000.0, unit)
    } else {
        format!("{:.0} {}", value, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h");
        assert_eq!(format_minutes(95), "1h 35m");
        assert_eq!(format_minutes(0), "0m");
    }

    #[test]
    fn test_format_volume_scales() {
        assert_eq!(format_volume(850.0, WeightUnit::Lbs), "850 lbs");
        assert_eq!(format_volume(24_500.0, WeightUnit::Lbs), "24.5K lbs");
        assert_eq!(format_volume(1_200_000.0, WeightUnit::Lbs), "1.2M lbs");
    }
}
