//! TOML configuration for the `guide` binary.
//!
//! Every section is optional. A missing file is not an error when no path
//! was given explicitly.
//!
//! ```toml
//! [assumptions]
//! avg_salary = 70000
//! annual_turnover_rate = 0.20
//!
//! [logging]
//! level = "info"
//! file = "guide.log"
//!
//! [report]
//! timeout_secs = 10
//! page_uri = "https://example.com/guides/business-case"
//!
//! [sinks]
//! lead = "jsonl"
//! lead_path = "leads.jsonl"
//! lead_timeout_secs = 10
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use guide_core::{AssumptionOverrides, AssumptionsError, RoiAssumptions};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "guide.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid assumptions: {0}")]
    Assumptions(#[from] AssumptionsError),

    #[error("report timeout must be at least one second")]
    ZeroTimeout,

    #[error("lead sink '{0}' needs a lead_path")]
    MissingLeadPath(LeadSinkKind),

    #[error("lead timeout must be at least one second")]
    ZeroLeadTimeout,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub assumptions: RoiAssumptions,
    pub logging: LoggingConfig,
    pub report: ReportConfig,
    pub sinks: SinkConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// A level or any `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub timeout_secs: u64,
    pub page_uri: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            page_uri: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadSinkKind {
    /// Logs each lead.
    #[default]
    Log,
    /// Appends each lead as one JSON line to `lead_path`.
    Jsonl,
}

impl std::fmt::Display for LeadSinkKind {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(match self {
            Self::Log => "log",
            Self::Jsonl => "jsonl",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SinkConfig {
    pub lead: LeadSinkKind,
    pub lead_path: Option<PathBuf>,
    /// How long one lead submission may take before it counts as failed.
    pub lead_timeout_secs: u64,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            lead: LeadSinkKind::default(),
            lead_path: None,
            lead_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// Parses and validates a configuration document.
    pub fn from_toml(
        text: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, or [`DEFAULT_CONFIG_FILE`] if present, or defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !explicit && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&text, &path)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.assumptions.validate()?;
        if self.report.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.sinks.lead == LeadSinkKind::Jsonl && self.sinks.lead_path.is_none() {
            return Err(ConfigError::MissingLeadPath(self.sinks.lead));
        }
        if self.sinks.lead_timeout_secs == 0 {
            return Err(ConfigError::ZeroLeadTimeout);
        }
        Ok(())
    }

    /// The file assumptions with command-line overrides applied, revalidated.
    pub fn assumptions_with(
        &self,
        overrides: &AssumptionOverrides,
    ) -> Result<RoiAssumptions, ConfigError> {
        let assumptions = overrides.apply(self.assumptions.clone());
        assumptions.validate()?;
        Ok(assumptions)
    }
}
