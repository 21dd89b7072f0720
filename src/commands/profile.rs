use anyhow::Result;
use colored::Colorize;
use std::str::FromStr;

use super::session::format_weight;
use crate::config::Config;
use crate::models::WeightUnit;

pub async fn show_profile() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Profile".bold());
    println!();
    println!("  Name:   {}", config.profile.name);
    if let Some(email) = &config.profile.email {
        println!("  Email:  {}", email);
    }
    println!("  Unit:   {}", config.units.weight);
    if let Some(target) = config.profile.target_weight_lbs {
        println!(
            "  Target: {}",
            format_weight(target, config.weight_unit())
        );
    }

    Ok(())
}

pub async fn set_profile(
    name: Option<String>,
    email: Option<String>,
    target_weight: Option<f64>,
    unit: Option<String>,
) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(u) = unit {
        config.units.weight = WeightUnit::from_str(&u)?;
    }

    if let Some(n) = name {
        config.profile.name = n;
    }

    if let Some(e) = email {
        config.profile.email = Some(e);
    }

    // The target arrives in the (possibly just-changed) preferred unit
    if let Some(t) = target_weight {
        config.profile.target_weight_lbs = Some(config.weight_unit().to_lbs(t));
    }

    config.save()?;
    println!("{} Profile updated", "✓".green());

    Ok(())
}
