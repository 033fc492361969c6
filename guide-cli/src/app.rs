//! Replays a session script against a fresh store and produces its report.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use guide_core::progress::{Progress, compute_progress};
use guide_core::sinks::log_delivery;
use guide_core::{
    EventSink, GuideEvent, LeadContext, LeadSink, LeadSinkError, LeadSubmission, RoiAssumptions,
    SelectionStore,
};
use guide_report::{Report, assemble_report};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::ReportConfig;
use crate::logging::log_task_error;
use crate::session::{SessionScript, StepEffect};

/// What a replayed session produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOutcome {
    pub progress: Progress,
    pub submitted: bool,
    /// Leads the sink accepted, out of `leads_sent`.
    pub leads_delivered: usize,
    pub leads_sent: usize,
    pub report: Report,
}

/// Deadline for one lead submission unless [`SessionRunner::with_lead_timeout`]
/// sets another.
pub const DEFAULT_LEAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs session scripts with a fixed set of assumptions and sinks.
pub struct SessionRunner {
    assumptions: RoiAssumptions,
    report: ReportConfig,
    lead_sink: Arc<dyn LeadSink>,
    lead_timeout: Duration,
    events: Arc<dyn EventSink>,
}

impl SessionRunner {
    pub fn new(
        assumptions: RoiAssumptions,
        report: ReportConfig,
        lead_sink: Arc<dyn LeadSink>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            assumptions,
            report,
            lead_sink,
            lead_timeout: DEFAULT_LEAD_TIMEOUT,
            events,
        }
    }

    /// Counts a lead submission as failed once it runs past `timeout`.
    pub fn with_lead_timeout(
        mut self,
        timeout: Duration,
    ) -> Self {
        self.lead_timeout = timeout;
        self
    }

    /// Replays `script`, then assembles the report for the final selection.
    ///
    /// Each accepted submit sends a lead on its own task; the session never
    /// waits on it until the report is built. A failed or timed-out delivery
    /// leaves the session submitted.
    pub async fn run(
        &self,
        script: &SessionScript,
        generated_on: NaiveDate,
    ) -> Result<SessionOutcome> {
        let kind = script.guide;
        let mut store = SelectionStore::new(kind);
        let mut dispatches: Vec<JoinHandle<bool>> = Vec::new();

        for (index, step) in script.steps.iter().enumerate() {
            let number = index + 1;
            match step.apply(&mut store) {
                StepEffect::Applied => debug!(step = number, ?step, "applied"),
                StepEffect::Ignored => warn!(step = number, ?step, "step ignored by store"),
                StepEffect::Rejected(reason) => {
                    warn!(step = number, %reason, "submit rejected");
                }
                StepEffect::Submitted => {
                    self.events.emit(&GuideEvent::LeadCaptured { guide: kind });
                    if let Some(handle) = self.spawn_lead(&store) {
                        dispatches.push(handle);
                    }
                }
            }
        }

        let progress = compute_progress(store.selection(), kind.tracker_fields());
        let report = self.build_report(&store, generated_on).await?;
        self.events.emit(&GuideEvent::report_download(store.selection()));

        let leads_sent = dispatches.len();
        let mut leads_delivered = 0;
        for handle in dispatches {
            match handle.await {
                Ok(true) => leads_delivered += 1,
                Ok(false) => {}
                Err(error) => log_task_error("lead dispatch", Err(anyhow!(error))),
            }
        }

        info!(
            guide = %kind,
            steps = script.steps.len(),
            submitted = store.is_submitted(),
            leads_sent,
            leads_delivered,
            "session replayed"
        );

        Ok(SessionOutcome {
            progress,
            submitted: store.is_submitted(),
            leads_delivered,
            leads_sent,
            report,
        })
    }

    fn spawn_lead(
        &self,
        store: &SelectionStore,
    ) -> Option<JoinHandle<bool>> {
        let envelope = store.envelope()?;
        let context = LeadContext {
            page_uri: self.report.page_uri.clone(),
            page_name: store.kind().title().to_string(),
        };
        let lead = LeadSubmission::from_envelope(&envelope, context);
        let sink = Arc::clone(&self.lead_sink);
        let deadline = self.lead_timeout;
        Some(tokio::spawn(async move {
            let result = tokio::time::timeout(deadline, sink.submit(&lead))
                .await
                .unwrap_or(Err(LeadSinkError::TimedOut(deadline)));
            log_delivery(sink.name(), result)
        }))
    }

    /// Assembles the report on a blocking task, abandoning it after the
    /// configured timeout.
    async fn build_report(
        &self,
        store: &SelectionStore,
        generated_on: NaiveDate,
    ) -> Result<Report> {
        let selection = store.selection().clone();
        let assumptions = self.assumptions.clone();
        let timeout = Duration::from_secs(self.report.timeout_secs);

        let task = tokio::task::spawn_blocking(move || {
            assemble_report(&selection, &assumptions, generated_on)
        });

        tokio::time::timeout(timeout, task)
            .await
            .map_err(|_| {
                anyhow!(
                    "report assembly timed out after {} seconds",
                    self.report.timeout_secs
                )
            })?
            .context("report assembly task failed")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use guide_core::GuideKind;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sinks::LogLeadSink;

    #[derive(Default)]
    struct RecordingEvents(Mutex<Vec<&'static str>>);

    impl EventSink for RecordingEvents {
        fn emit(
            &self,
            event: &GuideEvent,
        ) {
            self.0.lock().unwrap().push(event.name());
        }
    }

    struct FailingSink;

    #[async_trait]
    impl LeadSink for FailingSink {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn submit(
            &self,
            _lead: &LeadSubmission,
        ) -> Result<(), LeadSinkError> {
            Err(LeadSinkError::Unreachable("connection refused".to_string()))
        }
    }

    /// Never answers.
    struct HangingSink;

    #[async_trait]
    impl LeadSink for HangingSink {
        fn name(&self) -> &'static str {
            "hanging"
        }

        async fn submit(
            &self,
            _lead: &LeadSubmission,
        ) -> Result<(), LeadSinkError> {
            std::future::pending::<()>().await;
            Ok(())
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()
    }

    fn runner(
        lead_sink: Arc<dyn LeadSink>,
        events: Arc<dyn EventSink>,
    ) -> SessionRunner {
        SessionRunner::new(
            RoiAssumptions::default(),
            ReportConfig::default(),
            lead_sink,
            events,
        )
    }

    const SUBMITTED: &str = r#"
        guide = "business-case"

        [[steps]]
        action = "select"
        field = "employeeSize"
        value = "1000-2499"

        [[steps]]
        action = "email"
        value = "hr@example.com"

        [[steps]]
        action = "submit"
    "#;

    // =========================================================================
    // Replay
    // =========================================================================

    #[tokio::test]
    async fn submitted_session_sends_lead_and_events() {
        let events = Arc::new(RecordingEvents::default());
        let script = SessionScript::from_toml(SUBMITTED).unwrap();

        let outcome = runner(Arc::new(LogLeadSink), events.clone())
            .run(&script, date())
            .await
            .unwrap();

        assert!(outcome.submitted);
        assert_eq!((outcome.leads_sent, outcome.leads_delivered), (1, 1));
        assert_eq!(*events.0.lock().unwrap(), vec!["lead_captured", "pdf_download"]);
        assert_eq!(outcome.progress.answered, 1);
        assert_eq!(outcome.report.guide, GuideKind::BusinessCase);
    }

    #[tokio::test]
    async fn failed_delivery_keeps_session_submitted() {
        let script = SessionScript::from_toml(SUBMITTED).unwrap();

        let outcome = runner(Arc::new(FailingSink), Arc::new(RecordingEvents::default()))
            .run(&script, date())
            .await
            .unwrap();

        assert!(outcome.submitted);
        assert_eq!((outcome.leads_sent, outcome.leads_delivered), (1, 0));
    }

    #[tokio::test]
    async fn hanging_sink_times_out() {
        let script = SessionScript::from_toml(SUBMITTED).unwrap();

        let outcome = runner(Arc::new(HangingSink), Arc::new(RecordingEvents::default()))
            .with_lead_timeout(Duration::from_millis(50))
            .run(&script, date())
            .await
            .unwrap();

        assert!(outcome.submitted);
        assert_eq!((outcome.leads_sent, outcome.leads_delivered), (1, 0));
    }

    #[tokio::test]
    async fn double_submit_sends_one_lead() {
        let events = Arc::new(RecordingEvents::default());
        let script = SessionScript::from_toml(&format!(
            "{SUBMITTED}\n[[steps]]\naction = \"submit\"\n"
        ))
        .unwrap();

        let outcome = runner(Arc::new(LogLeadSink), events.clone())
            .run(&script, date())
            .await
            .unwrap();

        assert_eq!((outcome.leads_sent, outcome.leads_delivered), (1, 1));
        assert_eq!(*events.0.lock().unwrap(), vec!["lead_captured", "pdf_download"]);
    }

    #[tokio::test]
    async fn rejected_submit_sends_nothing() {
        let events = Arc::new(RecordingEvents::default());
        let script = SessionScript::from_toml(
            "guide = \"business-case\"\n[[steps]]\naction = \"email\"\nvalue = \"not-an-email\"\n[[steps]]\naction = \"submit\"\n",
        )
        .unwrap();

        let outcome = runner(Arc::new(LogLeadSink), events.clone())
            .run(&script, date())
            .await
            .unwrap();

        assert!(!outcome.submitted);
        assert_eq!(outcome.leads_sent, 0);
        assert_eq!(*events.0.lock().unwrap(), vec!["pdf_download"]);
    }

    #[tokio::test]
    async fn empty_session_still_produces_report() {
        let script = SessionScript::from_toml("guide = \"mentorship-template\"\n").unwrap();

        let outcome = runner(Arc::new(LogLeadSink), Arc::new(RecordingEvents::default()))
            .run(&script, date())
            .await
            .unwrap();

        assert_eq!(outcome.progress.answered, 0);
        assert_eq!(outcome.report.title, "Mentorship Program Template");
    }
}
