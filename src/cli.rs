//! Command-line front end.
//!
//! Commands:
//! - space-missions count <company>
//! - space-missions success-rate <company>
//! - space-missions range <start> <end>
//! - space-missions top <n>
//! - space-missions statuses
//! - space-missions year <year>
//! - space-missions rocket
//! - space-missions average <start-year> <end-year>
//! - space-missions dashboard [--from <year>] [--to <year>] [--company <name>]... [--status <s>]... [--rocket-status <s>]...
//!
//! Company names and date bounds are always passed as text. Numeric arguments are taken as raw
//! text and inferred into [`Value`]s, so malformed input gets the query's neutral answer instead
//! of a usage error. Results are printed as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::json;
use thiserror::Error;

use crate::error::LoadError;
use crate::ingestion::{LoadOptions, LoadSeverity, RecordStore, TracingObserver};
use crate::processing::{DashboardView, FilterCriteria};
use crate::query;
use crate::types::Value;

/// Analytical queries over the historical orbital launch record
#[derive(Parser, Debug)]
#[command(name = "space-missions")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the launch record CSV
    #[arg(long, env = "SPACE_MISSIONS_DATA", default_value = "space_missions.csv")]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Number of launches by a company
    Count { company: String },

    /// Success rate (percent) of a company
    SuccessRate { company: String },

    /// Missions launched between two dates (inclusive), oldest first
    Range { start: String, end: String },

    /// Top N companies by launch count
    Top { n: String },

    /// Launch count per mission status
    Statuses,

    /// Number of launches in a year
    Year { year: String },

    /// Most frequently used rocket
    Rocket,

    /// Average launches per year over an inclusive year window
    Average { start_year: String, end_year: String },

    /// Filtered view and chart aggregates
    Dashboard {
        /// First year (defaults to the earliest year in the data)
        #[arg(long)]
        from: Option<i32>,
        /// Last year (defaults to the latest year in the data)
        #[arg(long)]
        to: Option<i32>,
        /// Restrict to a company (repeatable)
        #[arg(long = "company")]
        companies: Vec<String>,
        /// Restrict to a mission status (repeatable)
        #[arg(long = "status")]
        statuses: Vec<String>,
        /// Restrict to a rocket status (repeatable)
        #[arg(long = "rocket-status")]
        rocket_statuses: Vec<String>,
    },
}

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to load launch record: {0}")]
    Load(#[from] LoadError),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Parse arguments, run one command, print its result.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let output = execute(&cli)?;
    println!("{output}");
    Ok(())
}

/// Run a parsed command and return its JSON output.
pub fn execute(cli: &Cli) -> Result<String, CliError> {
    let store = RecordStore::new(LoadOptions {
        observer: Some(Arc::new(TracingObserver)),
        alert_at_or_above: LoadSeverity::Critical,
    });
    let table = store.load(&cli.data)?;

    let value = match &cli.command {
        Command::Count { company } => {
            json!(query::mission_count_by_company(&table, Value::from(company)))
        }
        Command::SuccessRate { company } => {
            json!(query::success_rate(&table, Value::from(company)))
        }
        Command::Range { start, end } => json!(query::missions_by_date_range(
            &table,
            Value::from(start),
            Value::from(end)
        )),
        Command::Top { n } => json!(query::top_companies_by_mission_count(&table, Value::infer(n))),
        Command::Statuses => json!(query::mission_status_count(&table)),
        Command::Year { year } => json!(query::missions_by_year(&table, Value::infer(year))),
        Command::Rocket => json!(query::most_used_rocket(&table)),
        Command::Average {
            start_year,
            end_year,
        } => json!(query::average_missions_per_year(
            &table,
            Value::infer(start_year),
            Value::infer(end_year)
        )),
        Command::Dashboard {
            from,
            to,
            companies,
            statuses,
            rocket_statuses,
        } => {
            let defaults = FilterCriteria::for_table(&table);
            let (lo, hi) = defaults.year_range;
            let criteria = defaults
                .with_year_range(from.unwrap_or(lo), to.unwrap_or(hi))
                .with_companies(companies.iter().cloned())
                .with_mission_statuses(statuses.iter().cloned())
                .with_rocket_statuses(rocket_statuses.iter().cloned());
            return Ok(DashboardView::build(&table, &criteria).to_json()?);
        }
    };

    Ok(serde_json::to_string_pretty(&value)?)
}
