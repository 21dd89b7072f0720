use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use dialoguer::Confirm;
use std::str::FromStr;

use super::session::{format_weight, short_id};
use crate::config::Config;
use crate::models::{WeightEntry, WeightUnit};
use crate::storage::Storage;

pub async fn log_weight(value: f64, unit: Option<String>, date: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let storage = Storage::init()?;

    let unit = match unit {
        Some(u) => WeightUnit::from_str(&u)?,
        None => config.weight_unit(),
    };

    let date = match date {
        Some(d) => super::parse_date_arg(&d, 12, 0, 0)?,
        None => Utc::now(),
    };

    let entry = WeightEntry::new(value, unit, date);
    storage.save_weight_entry(&entry)?;

    println!(
        "{} Logged {} on {}",
        "✓".green(),
        format_weight(entry.weight_lbs, config.weight_unit()),
        entry.date.format(&config.ui.date_format)
    );

    if let Some(target) = config.profile.target_weight_lbs {
        let to_go = entry.weight_lbs - target;
        println!(
            "  {} to target ({})",
            format_weight(to_go.abs(), config.weight_unit()).yellow(),
            format_weight(target, config.weight_unit())
        );
    }

    Ok(())
}

pub async fn list_weights(limit: usize, json: bool) -> Result<()> {
    let config = Config::load()?;
    let storage = Storage::init()?;

    let entries = storage.list_weight_entries()?;
    let recent: Vec<&WeightEntry> = entries.iter().rev().take(limit).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&recent)?);
        return Ok(());
    }

    if recent.is_empty() {
        println!("No weight entries yet. Try: liftlog weight log 185");
        return Ok(());
    }

    let unit = config.weight_unit();
    println!("{}", "Weight History".bold());
    println!();

    for entry in recent {
        println!(
            "  {} {} {:>12}",
            short_id(&entry.id).dimmed(),
            entry.date.format(&config.ui.date_format),
            format_weight(entry.weight_lbs, unit)
        );
    }

    Ok(())
}

pub async fn delete_weight(id: &str, force: bool) -> Result<()> {
    let storage = Storage::init()?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete weight entry {}?", id))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    if storage.delete_weight_entry(id)? {
        println!("{} Weight entry deleted", "✓".green());
    } else {
        println!("Weight entry '{}' not found", id);
    }

    Ok(())
}
