use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::game::Game;
use crate::normalize::parse_date;
use crate::sampler::DEFAULT_MAX_ATTEMPTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "lotto-report",
    about = "Report on historical Mega Millions and Powerball winning numbers",
    version,
    long_about = None
)]
pub struct Args {
    /// Game to report on
    #[arg(value_enum)]
    pub game: Game,

    /// Only include drawings on or after this date (yyyy-mm-dd)
    #[arg(value_parser = parse_start_date)]
    pub start_date: Option<NaiveDate>,

    /// Directory holding cached drawing data
    #[arg(long, default_value = "data")]
    pub cache_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Number of top entries to display per ranking
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Leave the lucky fun pick out of the report
    #[arg(long)]
    pub no_lucky_pick: bool,

    /// Seed for a reproducible lucky fun pick
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum draws the lucky pick sampler may attempt
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_start_date(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).ok_or_else(|| format!("'{}' is not a date, expected yyyy-mm-dd", s))
}
