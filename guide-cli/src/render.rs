//! Plain-text rendering for terminal output.

use std::fmt::Write;

use guide_core::calculations::common::round_half_up;
use guide_core::calculations::{EffortEstimate, RoiProjection};
use guide_core::progress::Progress;
use guide_core::{GuideKind, RoiAssumptions};
use guide_report::format::{format_count, format_currency, format_percent};
use guide_report::{Block, Report};

/// Columns padded to their widest cell, separated by two spaces.
fn write_table(
    out: &mut String,
    columns: &[String],
    rows: &[Vec<String>],
) {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            let width = cell.chars().count();
            match widths.get_mut(index) {
                Some(current) => *current = (*current).max(width),
                None => widths.push(width),
            }
        }
    }

    let line = |out: &mut String, cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| format!("{cell:<width$}", width = widths[index]))
            .collect();
        let _ = writeln!(out, "  {}", padded.join("  ").trim_end());
    };

    line(out, columns);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    line(out, &rule);
    for row in rows {
        line(out, row);
    }
}

fn write_heading(
    out: &mut String,
    text: &str,
    underline: char,
) {
    let _ = writeln!(out, "{text}");
    let _ = writeln!(out, "{}", underline.to_string().repeat(text.chars().count()));
}

/// Every question of `kind` with its options.
pub fn render_options(kind: GuideKind) -> String {
    let mut out = String::new();
    write_heading(&mut out, kind.title(), '=');
    for question in kind.questions() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}. {} [{}]",
            question.number,
            question.prompt,
            question.field
        );
        for option in question.field.options() {
            if option.description.is_empty() {
                let _ = writeln!(out, "   - {}", option.label);
            } else {
                let _ = writeln!(out, "   - {}: {}", option.label, option.description);
            }
        }
    }
    out
}

pub fn render_progress(progress: &Progress) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Progress: {}% ({} of {} answered)",
        round_half_up(progress.percent),
        progress.answered,
        progress.total
    );
    let width = progress
        .rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    for row in &progress.rows {
        let mark = if row.answered { "x" } else { " " };
        let _ = writeln!(
            out,
            "  [{mark}] {:<width$}  {}",
            row.label,
            row.display_value
        );
    }
    out
}

pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    write_heading(&mut out, &report.title, '=');
    let _ = writeln!(out, "{}", report.subtitle);
    let _ = writeln!(out, "Generated {}", report.generated_on.format("%B %-d, %Y"));

    for section in &report.sections {
        let _ = writeln!(out);
        write_heading(&mut out, &section.title, '-');
        for block in &section.blocks {
            write_block(&mut out, block);
        }
    }
    out
}

fn write_block(
    out: &mut String,
    block: &Block,
) {
    match block {
        Block::Paragraph { text } => {
            let _ = writeln!(out, "{text}");
        }
        Block::Stat { value, label } => {
            let _ = writeln!(out, "  {value}  {label}");
        }
        Block::BulletList { title, items } => {
            if let Some(title) = title {
                let _ = writeln!(out, "{title}:");
            }
            for item in items {
                let _ = writeln!(out, "  * {item}");
            }
        }
        Block::Table { title, columns, rows } => {
            if let Some(title) = title {
                let _ = writeln!(out, "{title}:");
            }
            write_table(out, columns, rows);
        }
    }
}

pub fn render_roi(
    projection: &RoiProjection,
    assumptions: &RoiAssumptions,
) -> String {
    let mut out = String::new();
    write_heading(&mut out, "Turnover & ROI Projection", '=');

    let mut rows = vec![
        vec!["Employees".to_string(), format_count(projection.employee_count)],
        vec![
            "Annual leavers".to_string(),
            projection.annual_leavers.normalize().to_string(),
        ],
        vec![
            "Current turnover cost".to_string(),
            format_currency(projection.current_turnover_cost),
        ],
        vec!["Participants".to_string(), format_count(projection.participants)],
        vec![
            "Participant leavers".to_string(),
            projection.participant_leavers.normalize().to_string(),
        ],
        vec![
            "Departures avoided".to_string(),
            format_count(projection.avoided_leavers),
        ],
        vec![
            "Retention savings".to_string(),
            format_currency(projection.retention_savings),
        ],
    ];
    if let Some(revenue) = projection.incremental_revenue {
        rows.push(vec!["Productivity gain".to_string(), format_currency(revenue)]);
    }
    write_table(&mut out, &["Figure".to_string(), "Value".to_string()], &rows);

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Assumptions: {} average salary, {} turnover, {} replacement cost, {} retention lift, {}",
        format_currency(assumptions.avg_salary),
        format_percent(assumptions.annual_turnover_rate),
        format_percent(assumptions.replacement_cost_multiplier),
        format_percent(assumptions.retention_lift_pct),
        match assumptions.participant_count {
            Some(count) => format!("{} participants", format_count(count)),
            None => format!("{} participation", format_percent(assumptions.participants_pct)),
        }
    );
    out
}

pub fn render_effort(estimate: &EffortEstimate) -> String {
    let mut out = String::new();
    write_heading(&mut out, "Administration Effort", '=');
    let matching = match estimate.matching {
        Some(key) => key.to_string(),
        None => "default".to_string(),
    };
    let _ = writeln!(
        out,
        "{} participants, {matching} matching",
        format_count(estimate.participant_count)
    );

    let mut rows: Vec<Vec<String>> = estimate
        .tasks
        .iter()
        .map(|task| {
            vec![
                task.task.label().to_string(),
                format!("{} h", format_count(task.manual_hours)),
                format!("{} h", format_count(task.software_hours)),
            ]
        })
        .collect();
    rows.push(vec![
        "Total".to_string(),
        format!("{} h", format_count(estimate.manual_total)),
        format!("{} h", format_count(estimate.software_total)),
    ]);
    write_table(
        &mut out,
        &["Task".to_string(), "Manual".to_string(), "Software".to_string()],
        &rows,
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Hours saved: {}", format_count(estimate.hours_saved()));
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use guide_core::calculations::{calculate_roi, estimate_effort};
    use guide_core::progress::compute_progress;
    use guide_core::{FieldId, Selection};
    use guide_report::Section;
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // Tables
    // =========================================================================

    #[test]
    fn table_pads_to_widest_cell() {
        let mut out = String::new();

        write_table(
            &mut out,
            &["A".to_string(), "B".to_string()],
            &[vec!["long cell".to_string(), "x".to_string()]],
        );

        assert_eq!(out, "  A          B\n  ---------  -\n  long cell  x\n");
    }

    // =========================================================================
    // Progress
    // =========================================================================

    #[test]
    fn progress_marks_answered_rows() {
        let kind = GuideKind::BusinessCase;
        let mut selection = Selection::new(kind);
        selection.set_single(FieldId::EmployeeSize, "500-999");

        let text = render_progress(&compute_progress(&selection, kind.tracker_fields()));

        assert!(text.contains("500-999"));
        assert!(text.contains("[x]"));
        assert!(text.contains("[ ]"));
    }

    #[test]
    fn empty_progress_reports_zero() {
        let selection = Selection::new(GuideKind::MentorshipTemplate);

        let text = render_progress(&compute_progress(&selection, &[]));

        assert_eq!(text, "Progress: 0% (0 of 0 answered)\n");
    }

    // =========================================================================
    // Calculators
    // =========================================================================

    #[test]
    fn roi_uses_display_formatting() {
        let assumptions = RoiAssumptions::default();

        let text = render_roi(&calculate_roi(1750, &assumptions), &assumptions);

        assert!(text.contains("$18,375,000"));
        assert!(text.contains("$2,310,000"));
        assert!(text.contains("$70,000 average salary"));
        assert!(!text.contains("Productivity gain"));
    }

    #[test]
    fn effort_ends_with_totals() {
        let text = render_effort(&estimate_effort(200, None));

        assert!(text.contains("Total"));
        assert!(text.contains("Hours saved:"));
    }

    #[test]
    fn options_list_every_question() {
        let kind = GuideKind::MentorshipTemplate;

        let text = render_options(kind);

        for question in kind.questions() {
            assert!(text.contains(question.prompt));
        }
        assert!(text.contains("Cohort-based"));
    }

    // =========================================================================
    // Reports
    // =========================================================================

    #[test]
    fn report_renders_every_block_kind() {
        let report = Report {
            guide: GuideKind::BusinessCase,
            title: "Title".to_string(),
            subtitle: "Sub".to_string(),
            generated_on: NaiveDate::from_ymd_opt(2026, 2, 9).unwrap(),
            sections: vec![
                Section::new("One")
                    .paragraph("Body")
                    .stat("$1", "Saved")
                    .bullets(Some("Points"), ["a", "b"])
                    .table(None, ["K", "V"], [vec!["k".to_string(), "v".to_string()]]),
            ],
        };

        let text = render_report(&report);

        assert_eq!(
            text,
            "Title\n=====\nSub\nGenerated February 9, 2026\n\nOne\n---\nBody\n  $1  Saved\nPoints:\n  * a\n  * b\n  K  V\n  -  -\n  k  v\n"
        );
    }
}
