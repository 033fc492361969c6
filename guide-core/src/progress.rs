//! Progress tracker: completion percentage and per-field display rows.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::common::ratio_or_zero;
use crate::models::{Answer, FieldId, Selection, TrackedField};

/// Shown for a field with no answer.
pub const UNANSWERED_PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressRow {
    pub field: FieldId,
    pub label: &'static str,
    pub display_value: String,
    pub answered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Share of tracked fields answered, 0 to 100, unrounded.
    pub percent: Decimal,
    pub answered: usize,
    pub total: usize,
    pub rows: Vec<ProgressRow>,
}

/// Default formatting for multi-select values: up to two are listed, more
/// are counted.
///
/// # Example
///
/// ```
/// use guide_core::progress::format_population_list;
///
/// assert_eq!(format_population_list(&["A", "B"]), "A, B");
/// assert_eq!(format_population_list(&["A", "B", "C"]), "3 populations selected");
/// ```
pub fn format_population_list(values: &[&str]) -> String {
    if values.len() <= 2 {
        values.join(", ")
    } else {
        format!("{} populations selected", values.len())
    }
}

/// Computes progress over `fields` with the default multi-value formatting.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use guide_core::models::{FieldId, GuideKind, Selection};
/// use guide_core::progress::compute_progress;
///
/// let kind = GuideKind::MentorshipTemplate;
/// let mut selection = Selection::new(kind);
/// selection.set_single(FieldId::ProgramGoal, "Employee Retention");
///
/// let progress = compute_progress(&selection, kind.tracker_fields());
///
/// assert_eq!(progress.percent, dec!(20));
/// assert_eq!(progress.rows[1].display_value, "—");
/// ```
pub fn compute_progress(
    selection: &Selection,
    fields: &[TrackedField],
) -> Progress {
    compute_progress_with(selection, fields, format_population_list)
}

/// Computes progress, formatting multi-select values with `format_multi`.
pub fn compute_progress_with<F>(
    selection: &Selection,
    fields: &[TrackedField],
    format_multi: F,
) -> Progress
where
    F: Fn(&[&str]) -> String,
{
    let rows: Vec<ProgressRow> = fields
        .iter()
        .map(|tracked| {
            let answer = selection.answer(tracked.field);
            let answered = answer.is_answered();
            let display_value = match answer {
                Answer::Single(value) => value.to_string(),
                Answer::Multi(values) if !values.is_empty() => format_multi(values.as_slice()),
                _ => UNANSWERED_PLACEHOLDER.to_string(),
            };
            ProgressRow {
                field: tracked.field,
                label: tracked.label,
                display_value,
                answered,
            }
        })
        .collect();

    let answered = rows.iter().filter(|row| row.answered).count();
    let total = rows.len();
    let percent = ratio_or_zero(Decimal::from(answered), Decimal::from(total)) * Decimal::ONE_HUNDRED;

    Progress {
        percent,
        answered,
        total,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::GuideKind;

    fn template_with(populations: &[&str]) -> Selection {
        let mut selection = Selection::new(GuideKind::MentorshipTemplate);
        for population in populations {
            selection.toggle(FieldId::EmployeePopulations, population);
        }
        selection
    }

    #[test]
    fn empty_field_list_is_zero_percent() {
        let selection = Selection::new(GuideKind::BusinessCase);

        let progress = compute_progress(&selection, &[]);

        assert_eq!(progress.percent, dec!(0));
        assert!(progress.rows.is_empty());
    }

    #[test]
    fn nothing_answered_shows_placeholders() {
        let kind = GuideKind::BusinessCase;
        let selection = Selection::new(kind);

        let progress = compute_progress(&selection, kind.tracker_fields());

        assert_eq!(progress.percent, dec!(0));
        assert_eq!(progress.total, 7);
        assert!(progress.rows.iter().all(|row| row.display_value == UNANSWERED_PLACEHOLDER));
    }

    #[test]
    fn rows_follow_tracker_order_and_labels() {
        let kind = GuideKind::BusinessCase;
        let mut selection = Selection::new(kind);
        selection.set_single(FieldId::EmployeeSize, "500-999");

        let progress = compute_progress(&selection, kind.tracker_fields());
        let labels: Vec<&str> = progress.rows.iter().map(|row| row.label).collect();

        assert_eq!(
            labels,
            vec!["Goal", "Company Size", "Type", "Size", "Matching", "Measure", "Timeline"]
        );
        assert_eq!(progress.rows[1].display_value, "500-999");
    }

    #[test]
    fn percent_is_not_rounded() {
        let kind = GuideKind::BusinessCase;
        let mut selection = Selection::new(kind);
        selection.set_single(FieldId::PrimaryGoal, "Leadership Pipeline");

        let progress = compute_progress(&selection, kind.tracker_fields());

        assert_eq!(progress.answered, 1);
        assert_eq!(progress.percent.round_dp(2), dec!(14.29));
    }

    #[test]
    fn fully_answered_is_one_hundred_percent() {
        let kind = GuideKind::MentorshipTemplate;
        let mut selection = template_with(&["Technical specialists"]);
        selection.set_single(FieldId::ProgramGoal, "Skills Development");
        selection.set_single(FieldId::ProgramFormat, "Cohort-based");
        selection.set_single(FieldId::MentoringStyle, "Peer Mentoring");
        selection.set_single(FieldId::MatchingProcess, "Hybrid");

        let progress = compute_progress(&selection, kind.tracker_fields());

        assert_eq!(progress.percent, dec!(100));
    }

    #[test]
    fn two_populations_are_listed() {
        let selection = template_with(&["First-time managers", "Technical specialists"]);

        let progress = compute_progress(&selection, GuideKind::MentorshipTemplate.tracker_fields());

        assert_eq!(progress.rows[1].display_value, "First-time managers, Technical specialists");
    }

    #[test]
    fn three_populations_are_counted() {
        let selection = template_with(&[
            "First-time managers",
            "Technical specialists",
            "Cross-functional movers",
        ]);

        let progress = compute_progress(&selection, GuideKind::MentorshipTemplate.tracker_fields());

        assert_eq!(progress.rows[1].display_value, "3 populations selected");
    }

    #[test]
    fn emptied_population_list_counts_as_unanswered() {
        let selection = template_with(&["Technical specialists", "Technical specialists"]);

        let progress = compute_progress(&selection, GuideKind::MentorshipTemplate.tracker_fields());

        assert_eq!(progress.answered, 0);
        assert_eq!(progress.rows[1].display_value, UNANSWERED_PLACEHOLDER);
    }

    #[test]
    fn custom_multi_formatter() {
        let selection = template_with(&["First-time managers", "Technical specialists"]);

        let progress = compute_progress_with(
            &selection,
            GuideKind::MentorshipTemplate.tracker_fields(),
            |values| values.join(" / "),
        );

        assert_eq!(progress.rows[1].display_value, "First-time managers / Technical specialists");
    }
}
