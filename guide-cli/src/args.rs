//! Command-line argument types shared by the subcommands.

use std::str::FromStr;

use clap::{Args, ValueEnum};
use guide_core::AssumptionOverrides;
use guide_core::canonical::{CanonicalKey, MatchingKey};
use rust_decimal::Decimal;

/// How `run` prints its outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Flags that override `[assumptions]` from the config file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct AssumptionArgs {
    /// Average fully-loaded salary, e.g. 70000
    #[arg(long, value_parser = parse_decimal)]
    pub avg_salary: Option<Decimal>,

    /// Annual turnover rate as a fraction, e.g. 0.20
    #[arg(long, value_parser = parse_decimal)]
    pub turnover_rate: Option<Decimal>,

    /// Replacement cost as a multiple of salary, e.g. 0.75
    #[arg(long, value_parser = parse_decimal)]
    pub replacement_multiplier: Option<Decimal>,

    /// Turnover reduction among participants, e.g. 0.25
    #[arg(long, value_parser = parse_decimal)]
    pub retention_lift: Option<Decimal>,

    /// Share of employees who participate, e.g. 0.50
    #[arg(long, value_parser = parse_decimal)]
    pub participants_pct: Option<Decimal>,

    /// Explicit participant count; replaces the share
    #[arg(long)]
    pub participant_count: Option<u64>,

    /// Annual revenue; enables the productivity estimate
    #[arg(long, value_parser = parse_decimal)]
    pub total_revenue: Option<Decimal>,
}

impl AssumptionArgs {
    pub fn overrides(&self) -> AssumptionOverrides {
        AssumptionOverrides {
            avg_salary: self.avg_salary,
            annual_turnover_rate: self.turnover_rate,
            replacement_cost_multiplier: self.replacement_multiplier,
            retention_lift_pct: self.retention_lift,
            participants_pct: self.participants_pct,
            participant_count: self.participant_count,
            total_revenue: self.total_revenue,
        }
    }
}

/// Parses a plain decimal such as `0.25` or `70000`.
pub fn parse_decimal(value: &str) -> Result<Decimal, String> {
    Decimal::from_str(value.trim()).map_err(|e| format!("'{value}' is not a number: {e}"))
}

/// Accepts a matching label from either guide, a display name or a key.
pub fn parse_matching(value: &str) -> Result<MatchingKey, String> {
    MatchingKey::resolve(value).ok_or_else(|| {
        let known: Vec<&str> = MatchingKey::ALL.iter().map(|key| key.key()).collect();
        format!("unknown matching approach '{value}' (expected one of: {})", known.join(", "))
    })
}
