//! Replays the fixture sessions end to end through the runner.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use guide_cli::config::{ConfigError, LeadSinkKind, SinkConfig};
use guide_cli::session::SessionScriptError;
use guide_cli::sinks::{LogLeadSink, build_lead_sink};
use guide_cli::{AppConfig, SessionRunner, SessionScript};
use guide_core::sinks::TracingEventSink;
use guide_core::{AssumptionsError, GuideKind, LeadSink};
use guide_report::Block;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()
}

fn runner(
    config: &AppConfig,
    lead_sink: Arc<dyn LeadSink>,
) -> SessionRunner {
    SessionRunner::new(
        config.assumptions.clone(),
        config.report.clone(),
        lead_sink,
        Arc::new(TracingEventSink),
    )
}

fn stat_values(blocks: &[Block]) -> Vec<(&str, &str)> {
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Stat { value, label } => Some((label.as_str(), value.as_str())),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Business case
// =============================================================================

#[tokio::test]
async fn business_case_session_reproduces_worked_example() {
    let script = SessionScript::load(&fixture("business_case_session.toml")).unwrap();
    let config = AppConfig::default();

    let outcome = runner(&config, Arc::new(LogLeadSink))
        .run(&script, date())
        .await
        .unwrap();

    assert!(outcome.submitted);
    assert_eq!(outcome.progress.percent, dec!(100));
    assert_eq!((outcome.leads_sent, outcome.leads_delivered), (1, 1));

    let roi = outcome.report.section("Personalized ROI Analysis").unwrap();
    let stats = stat_values(&roi.blocks);
    assert!(stats.contains(&("Projected Annual Savings", "$2,310,000")));
    assert!(stats.contains(&("Employees Retained", "44")));
}

#[tokio::test]
async fn repeated_submit_captures_one_lead() {
    let text = std::fs::read_to_string(fixture("business_case_session.toml")).unwrap();
    let script = SessionScript::from_toml(&format!("{text}\n[[steps]]\naction = \"submit\"\n"))
        .unwrap();

    let outcome = runner(&AppConfig::default(), Arc::new(LogLeadSink))
        .run(&script, date())
        .await
        .unwrap();

    assert!(outcome.submitted);
    assert_eq!((outcome.leads_sent, outcome.leads_delivered), (1, 1));
}

#[tokio::test]
async fn largest_accepted_assumptions_still_render() {
    let config = AppConfig::from_toml(
        r#"
        [assumptions]
        avg_salary = 10000000
        replacement_cost_multiplier = 10
        annual_turnover_rate = 1
        total_revenue = 10000000000000
        "#,
        Path::new("extreme.toml"),
    )
    .unwrap();
    let script = SessionScript::load(&fixture("business_case_session.toml")).unwrap();

    let outcome = runner(&config, Arc::new(LogLeadSink))
        .run(&script, date())
        .await
        .unwrap();

    assert!(outcome.report.section("Personalized ROI Analysis").is_some());
}

#[test]
fn salary_past_bound_is_rejected_at_load() {
    let result = AppConfig::from_toml(
        "[assumptions]\navg_salary = 20000000\n",
        Path::new("extreme.toml"),
    );

    assert!(matches!(
        result,
        Err(ConfigError::Assumptions(AssumptionsError::InvalidAverageSalary(_)))
    ));
}

// =============================================================================
// Mentorship template
// =============================================================================

#[tokio::test]
async fn template_session_follows_store_rules() {
    let script = SessionScript::load(&fixture("template_session.toml")).unwrap();
    let config = AppConfig::load(Some(fixture("guide.toml").as_path())).unwrap();

    let outcome = runner(&config, Arc::new(LogLeadSink))
        .run(&script, date())
        .await
        .unwrap();

    // One accepted submit, then `back` reopened the session.
    assert!(!outcome.submitted);
    assert_eq!(outcome.leads_sent, 1);
    assert_eq!(outcome.progress.answered, 4);
    assert_eq!(outcome.progress.percent, dec!(80));

    let audience = &outcome.progress.rows[1];
    assert_eq!(audience.display_value, "First-time managers, High-potential employees");

    let titles = outcome.report.section_titles();
    assert!(titles.contains(&"Mentoring Style: Peer Mentoring"));
    assert!(!titles.iter().any(|title| title.starts_with("Matching Approach")));
}

#[tokio::test]
async fn jsonl_sink_records_lead_with_page_context() {
    let path = std::env::temp_dir().join(format!("guide-replay-{}.jsonl", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let script = SessionScript::load(&fixture("template_session.toml")).unwrap();
    let config = AppConfig::load(Some(fixture("guide.toml").as_path())).unwrap();
    let sink = build_lead_sink(&SinkConfig {
        lead: LeadSinkKind::Jsonl,
        lead_path: Some(path.clone()),
        ..SinkConfig::default()
    })
    .unwrap();

    let outcome = runner(&config, sink).run(&script, date()).await.unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(outcome.leads_delivered, 1);
    let lead: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(
        lead["context"]["pageUri"],
        "https://example.com/guides/mentorship-template"
    );
    assert_eq!(lead["context"]["pageName"], GuideKind::MentorshipTemplate.title());
    assert_eq!(lead["fields"][0]["value"], "hr@example.com");
}

#[tokio::test]
async fn outcome_serializes_for_json_output() {
    let script = SessionScript::load(&fixture("template_session.toml")).unwrap();

    let outcome = runner(&AppConfig::default(), Arc::new(LogLeadSink))
        .run(&script, date())
        .await
        .unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["submitted"], false);
    assert_eq!(json["leadsSent"], 1);
    assert_eq!(json["report"]["guide"], "mentorship-template");
    assert_eq!(json["report"]["generatedOn"], "2026-02-09");
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn fixture_config_overrides_assumptions() {
    let config = AppConfig::load(Some(fixture("guide.toml").as_path())).unwrap();

    assert_eq!(config.assumptions.avg_salary, dec!(50000));
    assert_eq!(config.assumptions.participant_count, Some(400));
    assert_eq!(config.report.timeout_secs, 5);
    assert_eq!(config.sinks.lead_timeout_secs, 3);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn foreign_field_names_offending_step() {
    let result = SessionScript::load(&fixture("foreign_field_session.toml"));

    let error = result.unwrap_err();
    assert!(matches!(error, SessionScriptError::ForeignField { step: 1, .. }));
    assert_eq!(
        error.to_string(),
        "step 1: field 'programFormat' is not part of the business-case guide"
    );
}
