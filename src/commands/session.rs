use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use dialoguer::{Confirm, Input};

use super::set_parser::SetParser;
use crate::config::Config;
use crate::models::{
    ExerciseLog, LoggedSet, SessionFilter, WeightUnit, WorkoutDay, WorkoutPlan, WorkoutSession,
};
use crate::storage::Storage;

#[derive(Args)]
pub struct SessionLogCommand {
    /// Plan day number (defaults to today's scheduled day)
    day: Option<u8>,

    /// Session duration in minutes
    #[arg(short = 'm', long)]
    duration: Option<u32>,

    /// Session notes
    #[arg(short, long)]
    notes: Option<String>,

    /// Session date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Non-interactive set entry, repeatable: --set "Exercise: 185x8, 185x8"
    #[arg(long = "set", value_name = "LINE")]
    sets: Vec<String>,
}

impl SessionLogCommand {
    pub async fn execute(self) -> Result<()> {
        let config = Config::load()?;
        let plan = WorkoutPlan::default_program();
        let storage = Storage::init()?;

        let day = match self.day {
            Some(n) => plan
                .day(n)
                .with_context(|| format!("No plan day {} (the program has days 1-7)", n))?,
            None => plan
                .today()
                .context("No workout scheduled for today; pass a day number")?,
        };

        if day.workout_type.is_rest() && self.sets.is_empty() {
            println!("{}", "Rest day — nothing to log.".green());
            return Ok(());
        }

        let date = match &self.date {
            Some(d) => super::parse_date_arg(d, 12, 0, 0)?,
            None => Utc::now(),
        };

        let parser = SetParser::new();
        let logs = if self.sets.is_empty() {
            prompt_logs(day, &parser, &config, date)?
        } else {
            let mut logs = Vec::new();
            for line in &self.sets {
                let (exercise, parsed) = parser.parse_line(line)?;
                let sets = parsed
                    .iter()
                    .enumerate()
                    .map(|(i, s)| LoggedSet::new(i as u32 + 1, s.reps, s.weight_lbs, date))
                    .collect();
                logs.push(ExerciseLog::new(exercise, sets));
            }
            logs
        };

        if logs.is_empty() {
            println!("No sets entered, session not saved.");
            return Ok(());
        }

        let duration = match self.duration {
            Some(m) => m,
            None if self.sets.is_empty() => Input::new()
                .with_prompt("Duration (minutes)")
                .default(day.estimated_minutes)
                .interact_text()?,
            None => day.estimated_minutes,
        };

        let notes = match self.notes {
            Some(n) => Some(n),
            None if self.sets.is_empty() => {
                let text: String = Input::new()
                    .with_prompt("Notes")
                    .allow_empty(true)
                    .interact_text()?;
                (!text.is_empty()).then_some(text)
            }
            None => None,
        };

        let session = WorkoutSession::new(day.day_number, date, duration, notes, logs);
        storage.save_session(&session)?;

        let unit = config.weight_unit();
        println!();
        println!("{} {} {}", "✓".green(), "Session logged:".bold(), day.name);
        println!(
            "  {} sets · {} reps · {} volume · {} min",
            session.total_sets(),
            session.total_reps(),
            format_weight(session.volume_lbs(), unit),
            session.duration_minutes
        );
        println!("  ID: {}", short_id(&session.id).dimmed());

        Ok(())
    }
}

/// Interactive set entry, one exercise at a time
fn prompt_logs(
    day: &WorkoutDay,
    parser: &SetParser,
    config: &Config,
    date: chrono::DateTime<Utc>,
) -> Result<Vec<ExerciseLog>> {
    println!(
        "{} — {} ({})",
        format!("Day {}", day.day_number).cyan(),
        day.name.bold(),
        day.focus_area
    );
    println!("Enter sets like '185x8' or '8 @ 185'; leave blank to move on.");
    println!();

    let mut logs = Vec::new();

    for exercise in &day.exercises {
        println!(
            "{} — {} x {} @ {}",
            exercise.name.bold(),
            exercise.sets.to_string().yellow(),
            exercise.reps,
            exercise.target.dimmed()
        );

        let mut sets = Vec::new();
        loop {
            let prompt = format!("  Set {}", sets.len() + 1);
            let entry: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;

            if entry.trim().is_empty() {
                break;
            }

            match parser.parse(&entry) {
                Ok(parsed) => {
                    sets.push(LoggedSet::new(
                        sets.len() as u32 + 1,
                        parsed.reps,
                        parsed.weight_lbs,
                        date,
                    ));
                    if config.workout.rest_timer_enabled {
                        println!(
                            "    {}",
                            format!("rest {}s", config.workout.default_rest_seconds).dimmed()
                        );
                    }
                }
                Err(e) => println!("    {}", e.to_string().red()),
            }
        }

        if !sets.is_empty() {
            logs.push(ExerciseLog::new(exercise.name.clone(), sets));
        }
    }

    Ok(logs)
}

pub async fn list_sessions(
    day: Option<u8>,
    from: Option<String>,
    to: Option<String>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let storage = Storage::init()?;
    let plan = WorkoutPlan::default_program();

    let filter = SessionFilter {
        day_number: day,
        from_date: from
            .as_deref()
            .map(|d| super::parse_date_arg(d, 0, 0, 0))
            .transpose()?,
        to_date: to
            .as_deref()
            .map(|d| super::parse_date_arg(d, 23, 59, 59))
            .transpose()?,
    };

    let sessions: Vec<WorkoutSession> = storage
        .list_sessions()?
        .into_iter()
        .filter(|s| filter.matches(s))
        .take(limit)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
        return Ok(());
    }

    if sessions.is_empty() {
        println!("No sessions logged yet. Try: liftlog session log");
        return Ok(());
    }

    let unit = config.weight_unit();
    println!("{}", "Recent Sessions".bold());
    println!();

    for session in &sessions {
        let day_name = plan
            .day(session.day_number)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| format!("Day {}", session.day_number));

        println!(
            "  {} {} {:<24} {:>2} sets {:>12} {:>4} min",
            short_id(&session.id).dimmed(),
            session.date.format(&config.ui.date_format),
            day_name,
            session.total_sets(),
            format_weight(session.volume_lbs(), unit),
            session.duration_minutes
        );
    }

    Ok(())
}

pub async fn show_session(id: &str) -> Result<()> {
    let config = Config::load()?;
    let storage = Storage::init()?;
    let plan = WorkoutPlan::default_program();

    let Some(session) = storage.find_session(id)? else {
        println!("Session '{}' not found", id);
        return Ok(());
    };

    let day_name = plan
        .day(session.day_number)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| format!("Day {}", session.day_number));
    let unit = config.weight_unit();

    println!("{} — {}", day_name.bold(), session.date.format(&config.ui.date_format));
    println!(
        "  {} sets · {} reps · {} volume · {} min",
        session.total_sets(),
        session.total_reps(),
        format_weight(session.volume_lbs(), unit),
        session.duration_minutes
    );
    if let Some(notes) = &session.notes {
        println!("  Notes: {}", notes);
    }
    println!("  ID: {}", session.id.dimmed());
    println!();

    for log in &session.logs {
        println!("  {}", log.exercise.bold());
        for set in &log.sets {
            println!(
                "    {}. {} x {}",
                set.ordinal,
                format_weight(set.weight_lbs, unit),
                set.reps
            );
        }
    }

    Ok(())
}

pub async fn delete_session(id: &str, force: bool) -> Result<()> {
    let storage = Storage::init()?;

    let Some(session) = storage.find_session(id)? else {
        println!("Session '{}' not found", id);
        return Ok(());
    };

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete session {} from {}?",
                short_id(&session.id),
                session.date.format("%Y-%m-%d")
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    storage.delete_session(&session.id)?;
    println!("{} Session deleted", "✓".green());

    Ok(())
}

pub(crate) fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}

pub(crate) fn format_weight(weight_lbs: f64, unit: WeightUnit) -> String {
    format!("{:.1} {}", WeightUnit::Lbs.convert(weight_lbs, unit), unit)
}
