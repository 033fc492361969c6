use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use guide_core::GuideKind;
use guide_core::calculations::{RoiCalculator, estimate_effort, parse_employee_count};
use guide_core::canonical::MatchingKey;
use guide_core::sinks::TracingEventSink;
use tracing::debug;

use guide_cli::args::{AssumptionArgs, OutputFormat, parse_matching};
use guide_cli::logging::{apply_logging_config, init_logging, set_log_level, set_stderr_enabled};
use guide_cli::render::{render_effort, render_options, render_progress, render_report, render_roi};
use guide_cli::sinks::build_lead_sink;
use guide_cli::{AppConfig, SessionRunner, SessionScript};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Mentorship guide engine.
///
/// Lists guide questions, runs the turnover and effort calculators, and
/// replays recorded guide sessions into finished reports.
#[derive(Debug, Parser)]
#[command(name = "guide", version, about)]
struct Cli {
    /// Configuration file. Defaults to `guide.toml` when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level or filter directive; overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Silence log output on stderr. A configured log file still receives it.
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print each question of a guide with its options.
    Options {
        /// `business-case` or `mentorship-template`.
        guide: GuideKind,
    },

    /// Print the turnover and ROI projection.
    Roi {
        /// Company size bucket, e.g. `1000-2499` or `5000+`.
        #[arg(long)]
        employee_size: Option<String>,

        #[command(flatten)]
        assumptions: AssumptionArgs,
    },

    /// Print the manual versus software administration estimate.
    Effort {
        /// Number of program participants.
        #[arg(long)]
        participants: u64,

        /// Matching approach, as a guide label or key.
        #[arg(long, value_parser = parse_matching)]
        matching: Option<MatchingKey>,
    },

    /// Replay a session script and print its progress and report.
    Run {
        /// Session script (TOML).
        session: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Report date; defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        assumptions: AssumptionArgs,
    },
}

// ─── subcommands ─────────────────────────────────────────────────────────────

fn run_roi(
    config: &AppConfig,
    employee_size: Option<&str>,
    flags: &AssumptionArgs,
) -> Result<()> {
    let assumptions = config
        .assumptions_with(&flags.overrides())
        .context("invalid assumption flags")?;
    let employee_count = parse_employee_count(employee_size);
    debug!(?employee_size, employee_count, "projecting turnover");

    let projection = RoiCalculator::new(assumptions.clone()).calculate(employee_count);
    print!("{}", render_roi(&projection, &assumptions));
    Ok(())
}

async fn run_session(
    config: &AppConfig,
    session: &Path,
    format: OutputFormat,
    date: Option<NaiveDate>,
    flags: &AssumptionArgs,
) -> Result<()> {
    let script = SessionScript::load(session)
        .with_context(|| format!("failed to load session: {}", session.display()))?;
    let assumptions = config
        .assumptions_with(&flags.overrides())
        .context("invalid assumption flags")?;
    let lead_sink = build_lead_sink(&config.sinks).context("invalid sink configuration")?;

    let runner = SessionRunner::new(
        assumptions,
        config.report.clone(),
        lead_sink,
        Arc::new(TracingEventSink),
    )
    .with_lead_timeout(Duration::from_secs(config.sinks.lead_timeout_secs));
    let generated_on = date.unwrap_or_else(|| Local::now().date_naive());
    let outcome = runner.run(&script, generated_on).await?;

    match format {
        OutputFormat::Text => {
            print!("{}", render_progress(&outcome.progress));
            println!();
            print!("{}", render_report(&outcome.report));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome).context("failed to encode outcome")?;
            println!("{json}");
        }
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();
    if cli.quiet {
        set_stderr_enabled(false)?;
    }

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    apply_logging_config(&config.logging)?;
    if let Some(level) = &cli.log_level {
        set_log_level(level)?;
    }

    match cli.command {
        Command::Options { guide } => {
            print!("{}", render_options(guide));
            Ok(())
        }
        Command::Roi {
            employee_size,
            assumptions,
        } => run_roi(&config, employee_size.as_deref(), &assumptions),
        Command::Effort {
            participants,
            matching,
        } => {
            print!("{}", render_effort(&estimate_effort(participants, matching)));
            Ok(())
        }
        Command::Run {
            session,
            format,
            date,
            assumptions,
        } => run_session(&config, &session, format, date, &assumptions).await,
    }
}
