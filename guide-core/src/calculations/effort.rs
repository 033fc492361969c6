//! Administrative effort estimate: manual program administration versus
//! software-assisted administration.
//!
//! Each task costs a fixed number of hours plus a per-participant rate:
//!
//! | Task | Manual base | Manual rate | Software base | Software rate |
//! |------|-------------|-------------|---------------|---------------|
//! | Setup | 40 | 0 | 4 | 0 |
//! | Registration | 4 | 0.10 | 1 | 0.01 |
//! | Matching | 2 | 0.50 | 0.5 | 0.01 |
//! | Ongoing management | 8 | 0.25 | 2 | 0.02 |
//! | Feedback collection | 4 | 0.10 | 1 | 0.005 |
//! | Reporting | 8 | 0.05 | 1 | 0 |
//!
//! The matching rates are further scaled by the matching approach: a
//! matching algorithm does most of the pairing work, self-directed matching
//! leaves it to participants.
//!
//! # Example
//!
//! ```
//! use guide_core::canonical::MatchingKey;
//! use guide_core::calculations::{EffortTask, estimate_effort};
//!
//! let estimate = estimate_effort(350, Some(MatchingKey::AdminSelected));
//! let matching = estimate.task(EffortTask::Matching).unwrap();
//!
//! // round(2 + 350 × 0.50)
//! assert_eq!(matching.manual_hours, 177);
//! assert!(estimate.software_total < estimate.manual_total);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{midpoint, round_count};
use crate::canonical::MatchingKey;
use crate::models::{AudienceSize, OptionSet};

/// Participant count used when the audience size is missing or unlisted.
pub const DEFAULT_PARTICIPANT_COUNT: u64 = 200;

/// Participant count used for the open-ended enterprise audience.
pub const OPEN_ENDED_PARTICIPANT_COUNT: u64 = 2500;

/// An administrative task category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortTask {
    Setup,
    Registration,
    Matching,
    OngoingManagement,
    FeedbackCollection,
    Reporting,
}

/// Fixed hours and per-participant hours for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rate {
    base: Decimal,
    per_participant: Decimal,
}

impl Rate {
    const fn new(
        base: Decimal,
        per_participant: Decimal,
    ) -> Self {
        Self {
            base,
            per_participant,
        }
    }

    fn hours(
        &self,
        participants: Decimal,
        multiplier: Decimal,
    ) -> u64 {
        round_count(self.base + participants * self.per_participant * multiplier)
    }
}

impl EffortTask {
    pub const ALL: &'static [EffortTask] = &[
        EffortTask::Setup,
        EffortTask::Registration,
        EffortTask::Matching,
        EffortTask::OngoingManagement,
        EffortTask::FeedbackCollection,
        EffortTask::Reporting,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Setup => "Setup",
            Self::Registration => "Registration",
            Self::Matching => "Matching",
            Self::OngoingManagement => "Ongoing management",
            Self::FeedbackCollection => "Feedback collection",
            Self::Reporting => "Reporting",
        }
    }

    /// Manual and software-assisted rates, in that order.
    fn rates(&self) -> (Rate, Rate) {
        let d = Decimal::new;
        match self {
            Self::Setup => (Rate::new(d(40, 0), d(0, 0)), Rate::new(d(4, 0), d(0, 0))),
            Self::Registration => (Rate::new(d(4, 0), d(10, 2)), Rate::new(d(1, 0), d(1, 2))),
            Self::Matching => (Rate::new(d(2, 0), d(50, 2)), Rate::new(d(5, 1), d(1, 2))),
            Self::OngoingManagement => {
                (Rate::new(d(8, 0), d(25, 2)), Rate::new(d(2, 0), d(2, 2)))
            }
            Self::FeedbackCollection => {
                (Rate::new(d(4, 0), d(10, 2)), Rate::new(d(1, 0), d(5, 3)))
            }
            Self::Reporting => (Rate::new(d(8, 0), d(5, 2)), Rate::new(d(1, 0), d(0, 0))),
        }
    }
}

impl std::fmt::Display for EffortTask {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Scale applied to the matching task's per-participant rates.
///
/// Unknown or missing approaches count as fully manual pairing.
pub fn matching_multiplier(matching: Option<MatchingKey>) -> Decimal {
    match matching {
        Some(MatchingKey::AlgorithmLed) => Decimal::new(10, 2),
        Some(MatchingKey::Hybrid) => Decimal::new(40, 2),
        Some(MatchingKey::SelfDirected) => Decimal::new(25, 2),
        Some(MatchingKey::AdminSelected) | None => Decimal::ONE,
    }
}

/// Hours for one task under both scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEffort {
    pub task: EffortTask,
    pub manual_hours: u64,
    pub software_hours: u64,
}

/// Per-task hours and column totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffortEstimate {
    pub participant_count: u64,
    pub matching: Option<MatchingKey>,
    /// One entry per [`EffortTask`], in [`EffortTask::ALL`] order.
    pub tasks: Vec<TaskEffort>,
    pub manual_total: u64,
    pub software_total: u64,
}

impl EffortEstimate {
    pub fn task(
        &self,
        task: EffortTask,
    ) -> Option<&TaskEffort> {
        self.tasks.iter().find(|effort| effort.task == task)
    }

    /// Hours the software-assisted scenario saves over the manual one.
    pub fn hours_saved(&self) -> u64 {
        self.manual_total.saturating_sub(self.software_total)
    }
}

/// Estimates administrative hours for `participant_count` participants.
pub fn estimate_effort(
    participant_count: u64,
    matching: Option<MatchingKey>,
) -> EffortEstimate {
    let participants = Decimal::from(participant_count);
    let matching_scale = matching_multiplier(matching);

    let tasks: Vec<TaskEffort> = EffortTask::ALL
        .iter()
        .map(|task| {
            let multiplier = if *task == EffortTask::Matching {
                matching_scale
            } else {
                Decimal::ONE
            };
            let (manual, software) = task.rates();
            TaskEffort {
                task: *task,
                manual_hours: manual.hours(participants, multiplier),
                software_hours: software.hours(participants, multiplier),
            }
        })
        .collect();

    let manual_total = tasks.iter().map(|effort| effort.manual_hours).sum();
    let software_total = tasks.iter().map(|effort| effort.software_hours).sum();

    debug!(
        participant_count,
        ?matching,
        manual_total,
        software_total,
        "estimated administrative effort"
    );

    EffortEstimate {
        participant_count,
        matching,
        tasks,
        manual_total,
        software_total,
    }
}

/// Maps a business-case audience bucket to a representative participant count.
///
/// # Example
///
/// ```
/// use guide_core::calculations::parse_participant_count;
///
/// assert_eq!(parse_participant_count(Some("Department (200-500)")), 350);
/// assert_eq!(parse_participant_count(Some("Enterprise (2000+)")), 2500);
/// assert_eq!(parse_participant_count(None), 200);
/// ```
pub fn parse_participant_count(audience_size: Option<&str>) -> u64 {
    audience_size
        .and_then(AudienceSize::from_label)
        .map(|audience| match audience.bounds() {
            (low, Some(high)) => midpoint(low, high),
            (_, None) => OPEN_ENDED_PARTICIPANT_COUNT,
        })
        .unwrap_or(DEFAULT_PARTICIPANT_COUNT)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn hours(
        estimate: &EffortEstimate,
        task: EffortTask,
    ) -> (u64, u64) {
        let effort = estimate.task(task).unwrap();
        (effort.manual_hours, effort.software_hours)
    }

    // =========================================================================
    // estimate_effort
    // =========================================================================

    #[test]
    fn estimate_for_department_admin_selected() {
        let estimate = estimate_effort(350, Some(MatchingKey::AdminSelected));

        assert_eq!(hours(&estimate, EffortTask::Setup), (40, 4));
        // 4 + 35 = 39; 1 + 3.5 = 4.5
        assert_eq!(hours(&estimate, EffortTask::Registration), (39, 5));
        // 2 + 175 = 177; 0.5 + 3.5 = 4
        assert_eq!(hours(&estimate, EffortTask::Matching), (177, 4));
        // 8 + 87.5 = 95.5; 2 + 7 = 9
        assert_eq!(hours(&estimate, EffortTask::OngoingManagement), (96, 9));
        // 4 + 35 = 39; 1 + 1.75 = 2.75
        assert_eq!(hours(&estimate, EffortTask::FeedbackCollection), (39, 3));
        // 8 + 17.5 = 25.5; 1
        assert_eq!(hours(&estimate, EffortTask::Reporting), (26, 1));

        assert_eq!(estimate.manual_total, 40 + 39 + 177 + 96 + 39 + 26);
        assert_eq!(estimate.software_total, 4 + 5 + 4 + 9 + 3 + 1);
        assert_eq!(estimate.hours_saved(), 417 - 26);
    }

    #[test]
    fn matching_multiplier_only_scales_matching() {
        let curated = estimate_effort(1000, Some(MatchingKey::AdminSelected));
        let algorithm = estimate_effort(1000, Some(MatchingKey::AlgorithmLed));

        // 2 + 1000 × 0.50 × 0.10
        assert_eq!(hours(&algorithm, EffortTask::Matching).0, 52);
        assert_eq!(
            hours(&curated, EffortTask::Registration),
            hours(&algorithm, EffortTask::Registration)
        );
    }

    #[test]
    fn unknown_matching_counts_as_admin_selected() {
        assert_eq!(
            estimate_effort(500, None),
            EffortEstimate {
                matching: None,
                ..estimate_effort(500, Some(MatchingKey::AdminSelected))
            }
        );
    }

    #[test]
    fn zero_participants_costs_base_hours() {
        let estimate = estimate_effort(0, Some(MatchingKey::Hybrid));

        assert_eq!(estimate.manual_total, 40 + 4 + 2 + 8 + 4 + 8);
        // Matching software base 0.5 rounds up.
        assert_eq!(estimate.software_total, 4 + 1 + 1 + 2 + 1 + 1);
    }

    #[test]
    fn algorithm_software_beats_curated_manual_above_fifty() {
        for participants in [51, 75, 100, 200, 500, 1000, 5000, 50000] {
            let curated = estimate_effort(participants, Some(MatchingKey::AdminSelected));
            let algorithm = estimate_effort(participants, Some(MatchingKey::AlgorithmLed));

            assert!(
                hours(&algorithm, EffortTask::Matching).1 < hours(&curated, EffortTask::Matching).0,
                "failed at {participants} participants"
            );
        }
    }

    #[test]
    fn multipliers() {
        assert_eq!(matching_multiplier(Some(MatchingKey::AlgorithmLed)), dec!(0.10));
        assert_eq!(matching_multiplier(Some(MatchingKey::Hybrid)), dec!(0.40));
        assert_eq!(matching_multiplier(Some(MatchingKey::SelfDirected)), dec!(0.25));
        assert_eq!(matching_multiplier(Some(MatchingKey::AdminSelected)), dec!(1));
        assert_eq!(matching_multiplier(None), dec!(1));
    }

    #[test]
    fn estimate_serializes_with_machine_keys() {
        let estimate = estimate_effort(350, Some(MatchingKey::SelfDirected));

        let json = serde_json::to_value(&estimate).unwrap();

        assert_eq!(json["matching"], "self_directed");
        assert_eq!(json["tasks"][3]["task"], "ongoing_management");
        let decoded: EffortEstimate = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, estimate);
    }

    // =========================================================================
    // parse_participant_count
    // =========================================================================

    #[test]
    fn parse_participant_count_for_every_bucket() {
        assert_eq!(parse_participant_count(Some("Pilot (50-200)")), 125);
        assert_eq!(parse_participant_count(Some("Department (200-500)")), 350);
        assert_eq!(parse_participant_count(Some("Multi-Department (500-2000)")), 1250);
        assert_eq!(parse_participant_count(Some("Enterprise (2000+)")), 2500);
    }

    #[test]
    fn parse_participant_count_defaults() {
        assert_eq!(parse_participant_count(None), 200);
        assert_eq!(parse_participant_count(Some("")), 200);
        assert_eq!(parse_participant_count(Some("Pilot")), 200);
    }
}
