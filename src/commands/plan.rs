use anyhow::Result;
use colored::Colorize;

use crate::models::{WorkoutDay, WorkoutPlan};

pub async fn list_days() -> Result<()> {
    let plan = WorkoutPlan::default_program();

    println!("{}", "Training Program".bold());
    println!();

    for day in &plan.days {
        let summary = if day.workout_type.is_rest() {
            "recovery".dimmed().to_string()
        } else {
            format!(
                "{} exercises, {} sets, ~{} min",
                day.exercises.len(),
                day.total_sets(),
                day.estimated_minutes
            )
        };

        println!(
            "  {} {:<24} {:<28} {}",
            format!("Day {}", day.day_number).cyan(),
            day.name,
            day.focus_area.dimmed(),
            summary
        );
    }

    Ok(())
}

pub async fn show_day(day_number: u8) -> Result<()> {
    let plan = WorkoutPlan::default_program();

    let Some(day) = plan.day(day_number) else {
        println!("No plan day {} (the program has days 1-7)", day_number);
        return Ok(());
    };

    print_day(day);
    Ok(())
}

pub async fn show_today() -> Result<()> {
    let plan = WorkoutPlan::default_program();

    match plan.today() {
        Some(day) if day.workout_type.is_rest() => {
            println!("{}", "Rest day — recovery time.".green());
        }
        Some(day) => print_day(day),
        None => println!("No workout scheduled for today"),
    }

    Ok(())
}

fn print_day(day: &WorkoutDay) {
    println!(
        "{} — {}",
        format!("Day {}", day.day_number).cyan().bold(),
        day.name.bold()
    );
    println!(
        "{} · ~{} min",
        day.focus_area.dimmed(),
        day.estimated_minutes
    );
    println!();

    for exercise in &day.exercises {
        let notes = exercise
            .notes
            .as_deref()
            .map(|n| format!("  ({})", n).dimmed().to_string())
            .unwrap_or_default();

        println!(
            "  {:<28} {} x {:<12} {}{}",
            exercise.name,
            exercise.sets.to_string().yellow(),
            exercise.reps,
            exercise.target.dimmed(),
            notes
        );
    }
}
