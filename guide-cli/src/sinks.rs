//! Lead sinks available to the binary, chosen by `[sinks] lead`.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use guide_core::{LeadSink, LeadSinkError, LeadSubmission};
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::config::{ConfigError, LeadSinkKind, SinkConfig};

/// Logs each lead instead of sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLeadSink;

#[async_trait]
impl LeadSink for LogLeadSink {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn submit(
        &self,
        lead: &LeadSubmission,
    ) -> Result<(), LeadSinkError> {
        info!(
            email = lead.email(),
            fields = lead.fields.len(),
            page_uri = %lead.context.page_uri,
            "lead captured"
        );
        Ok(())
    }
}

/// Appends each lead to a file as one line of JSON.
#[derive(Debug, Clone)]
pub struct JsonlLeadSink {
    path: PathBuf,
}

impl JsonlLeadSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LeadSink for JsonlLeadSink {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    async fn submit(
        &self,
        lead: &LeadSubmission,
    ) -> Result<(), LeadSinkError> {
        let mut line =
            serde_json::to_string(lead).map_err(|e| LeadSinkError::Rejected(e.to_string()))?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| LeadSinkError::Unreachable(format!("{}: {e}", self.path.display())))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| LeadSinkError::Unreachable(format!("{}: {e}", self.path.display())))?;
        file.flush()
            .await
            .map_err(|e| LeadSinkError::Unreachable(format!("{}: {e}", self.path.display())))
    }
}

/// Builds the configured lead sink.
pub fn build_lead_sink(config: &SinkConfig) -> Result<Arc<dyn LeadSink>, ConfigError> {
    match (config.lead, &config.lead_path) {
        (LeadSinkKind::Log, _) => Ok(Arc::new(LogLeadSink)),
        (LeadSinkKind::Jsonl, Some(path)) => Ok(Arc::new(JsonlLeadSink::new(path.clone()))),
        (LeadSinkKind::Jsonl, None) => Err(ConfigError::MissingLeadPath(LeadSinkKind::Jsonl)),
    }
}
