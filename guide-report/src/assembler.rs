//! Entry point: turns a selection into a report.

use chrono::NaiveDate;
use guide_core::{CanonicalSelection, RoiAssumptions, Selection};
use tracing::info;

use crate::blocks::Report;
use crate::business_case::BusinessCaseReport;
use crate::mentorship_template::TemplateReport;

/// Assembles the report for `selection`.
///
/// Canonicalizes the answers once, then hands off to the guide's own
/// assembler. Never fails: missing or unrecognized answers produce fallback
/// content.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use guide_core::{GuideKind, RoiAssumptions, Selection};
/// use guide_report::assemble_report;
///
/// let selection = Selection::new(GuideKind::BusinessCase);
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// let report = assemble_report(&selection, &RoiAssumptions::default(), date);
///
/// assert_eq!(report.guide, GuideKind::BusinessCase);
/// assert_eq!(report.sections[0].title, "Your Program Selections");
/// ```
pub fn assemble_report(
    selection: &Selection,
    assumptions: &RoiAssumptions,
    generated_on: NaiveDate,
) -> Report {
    let canonical = CanonicalSelection::from_selection(selection);

    let report = match selection {
        Selection::BusinessCase(answers) => {
            BusinessCaseReport::new(answers, &canonical, assumptions).assemble(generated_on)
        }
        Selection::MentorshipTemplate(answers) => {
            TemplateReport::new(answers, &canonical, assumptions).assemble(generated_on)
        }
    };

    info!(
        guide = %report.guide,
        sections = report.sections.len(),
        answered = selection.answered_count(),
        "assembled report"
    );
    report
}
