//! Outbound side-effect channels: CRM lead submission and analytics events.
//!
//! Both are fire-and-forget relative to the session. A failed lead
//! submission is logged and never reverts the local submitted state.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::lead::LeadSubmission;
use crate::models::{FieldId, GuideKind, Selection};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadSinkError {
    #[error("lead service unreachable: {0}")]
    Unreachable(String),

    #[error("lead service rejected submission: {0}")]
    Rejected(String),

    #[error("lead submission timed out after {0:?}")]
    TimedOut(Duration),
}

/// Receives leads after a successful submit.
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    async fn submit(
        &self,
        lead: &LeadSubmission,
    ) -> Result<(), LeadSinkError>;
}

/// Submits `lead` to `sink`, logging a failure as a warning.
///
/// Returns whether the sink accepted the lead. Callers that need a deadline
/// race [`LeadSink::submit`] themselves and hand the result to
/// [`log_delivery`].
pub async fn dispatch_lead(
    sink: &dyn LeadSink,
    lead: &LeadSubmission,
) -> bool {
    log_delivery(sink.name(), sink.submit(lead).await)
}

/// Logs the result of one lead submission and reports whether it landed.
pub fn log_delivery(
    sink_name: &'static str,
    result: Result<(), LeadSinkError>,
) -> bool {
    match result {
        Ok(()) => {
            info!(sink = sink_name, "lead submitted");
            true
        }
        Err(error) => {
            warn!(sink = sink_name, %error, "lead submission failed");
            false
        }
    }
}

/// An analytics event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideEvent {
    /// A submit was accepted.
    LeadCaptured { guide: GuideKind },

    /// A report was generated for download.
    ReportDownload {
        pdf_name: String,
        properties: Vec<(&'static str, String)>,
    },
}

impl GuideEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LeadCaptured { .. } => "lead_captured",
            Self::ReportDownload { .. } => "pdf_download",
        }
    }

    /// The download event for a report built from `selection`. Unanswered
    /// questions are left out of the properties.
    pub fn report_download(selection: &Selection) -> Self {
        let kind = selection.kind();
        let tracked: &[(&'static str, FieldId)] = match kind {
            GuideKind::BusinessCase => &[
                ("employee_size", FieldId::EmployeeSize),
                ("primary_goal", FieldId::PrimaryGoal),
                ("program_type", FieldId::ProgramType),
                ("audience_size", FieldId::AudienceSize),
            ],
            GuideKind::MentorshipTemplate => &[
                ("program_goal", FieldId::ProgramGoal),
                ("program_format", FieldId::ProgramFormat),
                ("mentoring_style", FieldId::MentoringStyle),
                ("matching_process", FieldId::MatchingProcess),
                ("employee_populations", FieldId::EmployeePopulations),
            ],
        };
        let properties = tracked
            .iter()
            .filter_map(|(name, field)| {
                selection.answer(*field).joined().map(|value| (*name, value))
            })
            .collect();

        Self::ReportDownload {
            pdf_name: kind.report_name().to_string(),
            properties,
        }
    }
}

/// Receives analytics events.
pub trait EventSink: Send + Sync {
    fn emit(
        &self,
        event: &GuideEvent,
    );
}

/// Writes each event to the log at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(
        &self,
        event: &GuideEvent,
    ) {
        match event {
            GuideEvent::LeadCaptured { guide } => {
                info!(event = event.name(), guide = %guide, "analytics event");
            }
            GuideEvent::ReportDownload {
                pdf_name,
                properties,
            } => {
                info!(event = event.name(), pdf_name = %pdf_name, ?properties, "analytics event");
            }
        }
    }
}
