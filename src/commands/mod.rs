mod config_cmd;
mod dashboard;
mod plan;
mod profile;
mod session;
mod set_parser;
mod stats;
mod weight;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use dashboard::DashboardCommand;
pub use session::SessionLogCommand;
pub use set_parser::{ParseError, ParsedSet, SetParser};
pub use stats::StatsCommand;

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "Terminal-based strength-training log", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "LIFTLOG_CONFIG")]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the training program
    #[command(subcommand)]
    Plan(PlanSubcommands),

    /// Log and manage workout sessions
    #[command(subcommand)]
    Session(SessionSubcommands),

    /// Track body weight
    #[command(subcommand)]
    Weight(WeightSubcommands),

    /// Show training statistics
    Stats(StatsCommand),

    /// Launch interactive dashboard
    Dashboard(DashboardCommand),

    /// Manage the user profile
    #[command(subcommand)]
    Profile(ProfileSubcommands),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum PlanSubcommands {
    /// List all days in the program
    List,

    /// Show one day's exercises
    Show {
        /// Day number (1-7)
        day: u8,
    },

    /// Show the workout scheduled for today
    Today,
}

#[derive(Subcommand)]
enum SessionSubcommands {
    /// Log a workout session
    Log(SessionLogCommand),

    /// List recent sessions
    List {
        /// Filter by plan day number
        #[arg(short, long)]
        day: Option<u8>,

        /// Filter from date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Filter to date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Number of sessions to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show session details
    Show {
        /// Session ID (or unique prefix)
        id: String,
    },

    /// Delete a session
    Delete {
        /// Session ID (or unique prefix)
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum WeightSubcommands {
    /// Log a body-weight entry
    Log {
        /// Weight value, in the configured unit unless --unit is given
        value: f64,

        /// Entry unit (lbs or kg)
        #[arg(short, long)]
        unit: Option<String>,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List weight entries
    List {
        /// Number of entries to show (most recent)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a weight entry
    Delete {
        /// Entry ID (or unique prefix)
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ProfileSubcommands {
    /// Show the current profile
    Show,

    /// Update profile fields
    Set {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// Target body weight, in the configured unit
        #[arg(long)]
        target_weight: Option<f64>,

        /// Preferred weight unit (lbs or kg)
        #[arg(long)]
        unit: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Edit configuration file
    Edit,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::info!("Verbose mode enabled");
        }

        // Make an explicit --config visible to every Config::load() below
        if let Some(ref path) = self.config {
            std::env::set_var("LIFTLOG_CONFIG", path);
        }

        match self.command {
            Commands::Plan(subcmd) => match subcmd {
                PlanSubcommands::List => plan::list_days().await,
                PlanSubcommands::Show { day } => plan::show_day(day).await,
                PlanSubcommands::Today => plan::show_today().await,
            },
            Commands::Session(subcmd) => match subcmd {
                SessionSubcommands::Log(cmd) => cmd.execute().await,
                SessionSubcommands::List {
                    day,
                    from,
                    to,
                    limit,
                    json,
                } => session::list_sessions(day, from, to, limit, json).await,
                SessionSubcommands::Show { id } => session::show_session(&id).await,
                SessionSubcommands::Delete { id, force } => {
                    session::delete_session(&id, force).await
                }
            },
            Commands::Weight(subcmd) => match subcmd {
                WeightSubcommands::Log { value, unit, date } => {
                    weight::log_weight(value, unit, date).await
                }
                WeightSubcommands::List { limit, json } => weight::list_weights(limit, json).await,
                WeightSubcommands::Delete { id, force } => weight::delete_weight(&id, force).await,
            },
            Commands::Stats(cmd) => cmd.execute().await,
            Commands::Dashboard(cmd) => cmd.execute().await,
            Commands::Profile(subcmd) => match subcmd {
                ProfileSubcommands::Show => profile::show_profile().await,
                ProfileSubcommands::Set {
                    name,
                    email,
                    target_weight,
                    unit,
                } => profile::set_profile(name, email, target_weight, unit).await,
            },
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config().await,
                ConfigSubcommands::Edit => config_cmd::edit_config().await,
                ConfigSubcommands::Init { force } => config_cmd::init_config(force).await,
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Parse a YYYY-MM-DD argument into a UTC timestamp at the given time of day
pub(crate) fn parse_date_arg(
    value: &str,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<chrono::DateTime<chrono::Utc>> {
    let date = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}' (expected YYYY-MM-DD)", value))?;
    let datetime = date
        .and_hms_opt(hour, minute, second)
        .ok_or_else(|| anyhow::anyhow!("Invalid time of day"))?;
    Ok(datetime.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_arg() {
        let parsed = parse_date_arg("2025-06-10", 12, 0, 0).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-06-10T12:00:00+00:00");

        assert!(parse_date_arg("06/10/2025", 0, 0, 0).is_err());
        assert!(parse_date_arg("not-a-date", 0, 0, 0).is_err());
    }
}
