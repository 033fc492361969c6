//! Business-case report.
//!
//! # Sections
//!
//! | # | Section | Driven by |
//! |---|---------|-----------|
//! | 1 | Your Program Selections | every answer |
//! | 2 | Program Goal & Outline | goal, matching approach, program type |
//! | 3 | Personalized ROI Analysis | company size, assumptions |
//! | 4 | Resource Comparison: Manual vs. Software | audience size, matching approach |
//! | 5 | Measurement & Launch Planning | measurement focus, timeline |
//! | 6 | Success Stories & Proof Points | static |
//! | 7 | About Together Platform | static |

use chrono::NaiveDate;
use guide_core::calculations::common::round_count;
use guide_core::calculations::{
    EffortEstimate, RoiCalculator, RoiProjection, estimate_effort, parse_employee_count,
    parse_participant_count, productivity_lift_pct,
};
use guide_core::{
    BusinessCaseSelection, CanonicalSelection, Choice, GuideKind, OptionSet, RoiAssumptions,
};
use tracing::debug;

use crate::blocks::{Report, Section};
use crate::content::{goals, matching, metrics, platform, styles, timeline};
use crate::format::{format_count, format_currency, format_percent};

pub(crate) const NOT_SELECTED: &str = "Not selected";

const GENERIC_MATCHING_STRATEGY: &str =
    "Your chosen approach allows flexibility while maintaining program structure.";

/// Assembles the business-case report from one set of answers.
pub struct BusinessCaseReport<'a> {
    answers: &'a BusinessCaseSelection,
    canonical: &'a CanonicalSelection,
    calculator: RoiCalculator,
}

impl<'a> BusinessCaseReport<'a> {
    pub fn new(
        answers: &'a BusinessCaseSelection,
        canonical: &'a CanonicalSelection,
        assumptions: &RoiAssumptions,
    ) -> Self {
        Self {
            answers,
            canonical,
            calculator: RoiCalculator::new(assumptions.clone()),
        }
    }

    pub fn assemble(
        &self,
        generated_on: NaiveDate,
    ) -> Report {
        let employee_count = parse_employee_count(listed_label(&self.answers.employee_size));
        let projection = self.calculator.calculate(employee_count);

        let participant_count =
            parse_participant_count(listed_label(&self.answers.audience_size));
        let effort = estimate_effort(participant_count, self.canonical.matching.key());

        debug!(
            employee_count,
            participant_count,
            savings = %projection.retention_savings,
            "assembling business case report"
        );

        Report {
            guide: GuideKind::BusinessCase,
            title: "Business Case for Mentorship".to_string(),
            subtitle: "Personalized Program Summary".to_string(),
            generated_on,
            sections: vec![
                self.selections_section(),
                self.outline_section(),
                self.roi_section(&projection),
                self.resources_section(&effort),
                self.measurement_section(),
                case_studies_section(),
                about_section(),
            ],
        }
    }

    fn selections_section(&self) -> Section {
        let answers = self.answers;
        let company_size = answers
            .employee_size
            .as_ref()
            .map_or_else(|| NOT_SELECTED.to_string(), |size| format!("{size} employees"));

        let rows = vec![
            row("Primary Goal", choice_or_not_selected(&answers.primary_goal)),
            row("Company Size", company_size),
            row("Program Type", choice_or_not_selected(&answers.program_type)),
            row("Audience Size", choice_or_not_selected(&answers.audience_size)),
            row("Matching Approach", choice_or_not_selected(&answers.matching_approach)),
            row("Measurement Focus", choice_or_not_selected(&answers.measurement_focus)),
            row("Timeline", choice_or_not_selected(&answers.timeline)),
        ];

        Section::new("Your Program Selections").table(None, ["Selection", "Your Choice"], rows)
    }

    fn outline_section(&self) -> Section {
        let outline = goals::resolve_goal_outline(&self.canonical.goal);
        let mut section = Section::new("Program Goal & Outline")
            .paragraph(outline.summary)
            .bullets(Some("Key Program Elements"), outline.key_points.iter().copied());

        if let Some(approach) = &self.answers.matching_approach {
            let strategy = self
                .canonical
                .matching
                .key()
                .map_or(GENERIC_MATCHING_STRATEGY, |key| {
                    matching::matching_content(key).strategy
                });
            section = section.callout(&format!("Matching Strategy: {approach}"), strategy);
        }

        if let Some(style) = self.canonical.style.key() {
            let content = styles::style_content(style);
            section = section.callout(content.insight_title, content.insight);
        }

        section
    }

    fn roi_section(
        &self,
        projection: &RoiProjection,
    ) -> Section {
        let assumptions = self.calculator.assumptions();

        let basis = match listed_label(&self.answers.employee_size) {
            Some(size) => format!("your company size of {size} employees"),
            None => format!(
                "an assumed company size of {} employees",
                format_count(projection.employee_count)
            ),
        };

        let mut section = Section::new("Personalized ROI Analysis")
            .paragraph(format!(
                "Based on {basis} and industry benchmarks, here's your projected mentorship program ROI:"
            ))
            .stat(format_currency(projection.retention_savings), "Projected Annual Savings")
            .stat(format_count(projection.avoided_leavers), "Employees Retained")
            .stat(format_percent(assumptions.retention_lift_pct), "Turnover Reduction");

        if let Some(revenue_gain) = projection.incremental_revenue {
            section = section.stat(format_currency(revenue_gain), "Productivity Gain");
        }

        let participants_label = match assumptions.participant_count {
            Some(_) => "Program Participants".to_string(),
            None => format!("Program Participants ({})", format_percent(assumptions.participants_pct)),
        };

        section
            .table(
                Some("Current State Analysis"),
                ["Metric", "Value"],
                vec![
                    row("Total Employees", format_count(projection.employee_count)),
                    row(
                        &format!(
                            "Annual Turnover ({})",
                            format_percent(assumptions.annual_turnover_rate)
                        ),
                        employees(round_count(projection.annual_leavers)),
                    ),
                    row(
                        "Current Turnover Cost",
                        format_currency(projection.current_turnover_cost),
                    ),
                ],
            )
            .table(
                Some("With Mentorship Program"),
                ["Metric", "Value"],
                vec![
                    row(&participants_label, employees(projection.participants)),
                    row(
                        &format!(
                            "Reduced Turnover ({})",
                            format_percent(assumptions.retention_lift_pct)
                        ),
                        employees(projection.avoided_leavers),
                    ),
                    row("Annual Savings", format_currency(projection.retention_savings)),
                ],
            )
            .bullets(Some("Assumptions"), assumption_lines(assumptions))
    }

    fn resources_section(
        &self,
        effort: &EffortEstimate,
    ) -> Section {
        let audience = match &self.answers.audience_size {
            Some(audience) => audience.to_string(),
            None => format!("{} participants", format_count(effort.participant_count)),
        };

        let mut rows: Vec<Vec<String>> = effort
            .tasks
            .iter()
            .map(|task| {
                vec![
                    task.task.label().to_string(),
                    hours(task.manual_hours),
                    hours(task.software_hours),
                ]
            })
            .collect();
        rows.push(vec![
            "Total".to_string(),
            hours(effort.manual_total),
            hours(effort.software_total),
        ]);

        Section::new("Resource Comparison: Manual vs. Software")
            .paragraph(format!(
                "Based on your audience size of {audience}, here's how program administration compares:"
            ))
            .table(None, ["Task", "Manual Approach", "With Software"], rows)
            .paragraph(format!(
                "Software saves an estimated {} of administrator time over the program.",
                hours(effort.hours_saved())
            ))
            .bullets(Some("Beyond Time Savings"), platform::SOFTWARE_BENEFITS)
            .callout(
                platform::RULE_OF_THUMB_TITLE,
                &platform::rule_of_thumb(&format_count(effort.participant_count)),
            )
    }

    fn measurement_section(&self) -> Section {
        let outcome_metrics = metrics::resolve_measurement_metrics(
            self.answers.measurement_focus.as_ref(),
            &self.canonical.goal,
        );
        let metrics_title = match &self.answers.measurement_focus {
            Some(focus) => format!("Outcome Metrics: {focus}"),
            None => "Outcome Metrics".to_string(),
        };
        let guidance = timeline::resolve_launch_guidance(self.answers.timeline.as_ref());

        Section::new("Measurement & Launch Planning")
            .paragraph(
                "Measure what matters. Track both engagement (are people participating?) and outcomes (is the program delivering results?).",
            )
            .table(
                Some(&metrics_title),
                ["Metric", "What to Measure"],
                outcome_metrics
                    .iter()
                    .map(|metric| row(metric.name, metric.description.to_string())),
            )
            .paragraph(guidance.summary)
            .bullets(Some("Launch Steps"), guidance.steps.iter().copied())
    }
}

fn case_studies_section() -> Section {
    platform::CASE_STUDIES.iter().fold(
        Section::new("Success Stories & Proof Points").paragraph(platform::CASE_STUDIES_INTRO),
        |section, study| {
            let section = section.paragraph(format!(
                "{} ({}, {}): {}",
                study.company, study.industry, study.size, study.headline
            ));
            study
                .stats
                .iter()
                .fold(section, |section, (value, label)| section.stat(*value, *label))
                .paragraph(format!("\"{}\"", study.quote))
        },
    )
}

fn about_section() -> Section {
    let section = Section::new(platform::ABOUT_TITLE).paragraph(platform::ABOUT_TEXT);
    platform::PLATFORM_STATS
        .iter()
        .fold(section, |section, (value, label)| section.stat(*value, *label))
        .bullets(Some("Recommended Next Steps"), platform::BUSINESS_CASE_NEXT_STEPS)
        .paragraph(format!("Questions? Email us at {}", platform::CONTACT_EMAIL))
        .paragraph(format!("Visit: {}", platform::CONTACT_WEBSITE))
}

/// The assumption list, printed from the values actually used.
fn assumption_lines(assumptions: &RoiAssumptions) -> Vec<String> {
    let turnover = format_percent(assumptions.annual_turnover_rate);
    let turnover_line = if assumptions.annual_turnover_rate == RoiAssumptions::default().annual_turnover_rate {
        format!("{turnover} annual turnover rate (US average)")
    } else {
        format!("{turnover} annual turnover rate")
    };

    let participation_line = match assumptions.participant_count {
        Some(count) => format!("{} program participants", format_count(count)),
        None => format!(
            "{} workforce participation in program",
            format_percent(assumptions.participants_pct)
        ),
    };

    let mut lines = vec![
        turnover_line,
        format!("{} average salary", format_currency(assumptions.avg_salary)),
        format!(
            "{} replacement cost multiplier",
            format_percent(assumptions.replacement_cost_multiplier)
        ),
        participation_line,
        format!(
            "{} reduction in turnover among participants",
            format_percent(assumptions.retention_lift_pct)
        ),
    ];

    if let Some(revenue) = assumptions.total_revenue {
        lines.push(format!(
            "{} total annual revenue, with a {} productivity gain attributed to participants",
            format_currency(revenue),
            format_percent(productivity_lift_pct())
        ));
    }

    lines
}

fn listed_label<T: OptionSet>(choice: &Option<Choice<T>>) -> Option<&'static str> {
    choice.as_ref().and_then(Choice::listed).map(T::label)
}

pub(crate) fn choice_or_not_selected<T: OptionSet>(choice: &Option<Choice<T>>) -> String {
    choice
        .as_ref()
        .map_or_else(|| NOT_SELECTED.to_string(), |choice| choice.as_str().to_string())
}

pub(crate) fn row(
    label: &str,
    value: String,
) -> Vec<String> {
    vec![label.to_string(), value]
}

fn employees(count: u64) -> String {
    format!("{} employees", format_count(count))
}

fn hours(count: u64) -> String {
    if count == 1 {
        "1 hour".to_string()
    } else {
        format!("{} hours", format_count(count))
    }
}
