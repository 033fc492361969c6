//! Mentorship program template report.
//!
//! The goal, style and matching sections appear only when the question was
//! answered. The timeline section always appears and uses the cohort plan
//! unless the evergreen format was chosen. The promotion section names the
//! chosen populations when there are any.

use chrono::NaiveDate;
use guide_core::calculations::{DEFAULT_PARTICIPANT_COUNT, EffortEstimate, estimate_effort};
use guide_core::canonical::{Canonical, CanonicalKey};
use guide_core::{CanonicalSelection, GuideKind, RoiAssumptions, TemplateSelection};
use tracing::debug;

use crate::blocks::{Report, Section};
use crate::business_case::{NOT_SELECTED, choice_or_not_selected, row};
use crate::content::{goals, matching, metrics, platform, promotion, styles, timeline};
use crate::format::format_count;

/// Assembles the program template report from one set of answers.
pub struct TemplateReport<'a> {
    answers: &'a TemplateSelection,
    canonical: &'a CanonicalSelection,
    participant_count: u64,
}

impl<'a> TemplateReport<'a> {
    pub fn new(
        answers: &'a TemplateSelection,
        canonical: &'a CanonicalSelection,
        assumptions: &RoiAssumptions,
    ) -> Self {
        Self {
            answers,
            canonical,
            participant_count: assumptions
                .participant_count
                .unwrap_or(DEFAULT_PARTICIPANT_COUNT),
        }
    }

    pub fn assemble(
        &self,
        generated_on: NaiveDate,
    ) -> Report {
        let effort = estimate_effort(self.participant_count, self.canonical.matching.key());
        debug!(
            participant_count = self.participant_count,
            populations = self.answers.employee_populations.len(),
            "assembling program template report"
        );

        let mut sections = vec![self.selections_section()];
        sections.extend(self.goal_section());
        sections.extend(self.style_section());
        sections.extend(self.matching_section());
        sections.push(self.timeline_section());
        sections.push(self.promotion_section());
        sections.push(self.metrics_section());
        sections.push(taking_action_section(&effort));

        Report {
            guide: GuideKind::MentorshipTemplate,
            title: "Mentorship Program Template".to_string(),
            subtitle: "Personalized Program Summary".to_string(),
            generated_on,
            sections,
        }
    }

    fn selections_section(&self) -> Section {
        let answers = self.answers;
        let populations = if answers.employee_populations.is_empty() {
            NOT_SELECTED.to_string()
        } else {
            answers
                .employee_populations
                .iter()
                .map(|population| population.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let rows = vec![
            row("Primary Goal", choice_or_not_selected(&answers.program_goal)),
            row("Target Population", populations),
            row("Program Format", choice_or_not_selected(&answers.program_format)),
            row("Mentoring Style", choice_or_not_selected(&answers.mentoring_style)),
            row("Matching Approach", choice_or_not_selected(&answers.matching_process)),
        ];

        Section::new("Your Program Selections").table(None, ["Selection", "Your Choice"], rows)
    }

    fn goal_section(&self) -> Option<Section> {
        answered(&self.canonical.goal)?;
        let content = goals::resolve_goal_content(&self.canonical.goal);
        Some(
            Section::new(format!("Your Program Goal: {}", content.title))
                .paragraph(content.description)
                .stat(content.statistic, "Research Benchmark")
                .bullets(Some("Key Program Elements"), content.key_elements.iter().copied()),
        )
    }

    fn style_section(&self) -> Option<Section> {
        answered(&self.canonical.style)?;
        let content = styles::resolve_style_content(&self.canonical.style);
        Some(
            Section::new(format!("Mentoring Style: {}", content.title))
                .paragraph(content.description)
                .bullets(Some("Best Practices"), content.best_practices.iter().copied()),
        )
    }

    fn matching_section(&self) -> Option<Section> {
        answered(&self.canonical.matching)?;
        let content = matching::resolve_matching_content(&self.canonical.matching);
        Some(
            Section::new(format!("Matching Approach: {}", content.title))
                .paragraph(content.description)
                .bullets(
                    Some("Implementation Notes"),
                    content.implementation_notes.iter().copied(),
                ),
        )
    }

    fn timeline_section(&self) -> Section {
        let plan = timeline::resolve_timeline_plan(&self.canonical.format);
        let phases = plan.phases.iter().map(|phase| {
            vec![
                phase.name.to_string(),
                phase.weeks.to_string(),
                phase.activities.to_string(),
            ]
        });

        Section::new("Your Implementation Timeline")
            .paragraph(
                "A structured approach to launching your mentorship program, with clear phases and milestones.",
            )
            .table(Some(plan.title), ["Phase", "Weeks", "Key Activities"], phases)
            .callout(plan.callout_title, plan.callout_text)
            .bullets(Some("Planning Tips"), plan.planning_tips.iter().copied())
    }

    fn promotion_section(&self) -> Section {
        let intro =
            Section::new("Promoting Your Mentorship Program").paragraph(promotion::PROMOTION_INTRO);
        let audience: Vec<&str> = self
            .canonical
            .populations
            .iter()
            .filter_map(|population| population.display())
            .collect();
        let intro = if audience.is_empty() {
            intro
        } else {
            intro
                .bullets(Some(promotion::AUDIENCE_TITLE), audience)
                .callout(promotion::AUDIENCE_FIT_TITLE, promotion::AUDIENCE_FIT_TEXT)
        };

        promotion::CHECKLISTS
            .iter()
            .fold(intro, |section, checklist| {
                section.bullets(Some(checklist.title), checklist.items.iter().copied())
            })
            .callout(promotion::KEY_MESSAGING_TITLE, promotion::KEY_MESSAGING_TEXT)
            .bullets(
                Some(promotion::COMMUNICATION_PRACTICES_TITLE),
                promotion::COMMUNICATION_PRACTICES,
            )
    }

    fn metrics_section(&self) -> Section {
        let engagement = metrics::ENGAGEMENT_METRICS.iter().map(|metric| {
            vec![
                metric.name.to_string(),
                metric.description.to_string(),
                metric.target.unwrap_or_default().to_string(),
            ]
        });
        let outcomes = metrics::resolve_outcome_metrics(&self.canonical.goal)
            .iter()
            .map(|metric| row(metric.name, metric.description.to_string()));

        metrics::FEEDBACK_FRAMEWORK.iter().fold(
            Section::new("Success Metrics & Feedback Framework")
                .paragraph(
                    "Measure what matters. Track both engagement (are people participating?) and outcomes (is the program delivering results?).",
                )
                .table(
                    Some("Engagement Metrics (Track Monthly)"),
                    ["Metric", "Description", "Target"],
                    engagement,
                )
                .table(
                    Some("Outcome Metrics (Track Quarterly/Annually)"),
                    ["Metric", "Description"],
                    outcomes,
                ),
            |section, stage| section.bullets(Some(stage.title), stage.questions.iter().copied()),
        )
    }
}

/// `Some(())` when the field was answered, for early return with `?`.
fn answered<K: CanonicalKey>(value: &Canonical<K>) -> Option<()> {
    value.is_answered().then_some(())
}

fn taking_action_section(effort: &EffortEstimate) -> Section {
    let rows = effort.tasks.iter().map(|task| {
        vec![
            task.task.label().to_string(),
            format!("{} hours", format_count(task.manual_hours)),
            format!("{} hours", format_count(task.software_hours)),
        ]
    });

    Section::new("Taking Action on Your Mentorship Program")
        .paragraph(
            "You have a plan. Now it's time to execute. Here's how to move from template to launch.",
        )
        .paragraph(format!(
            "Estimated administration for {} participants: {} hours managed manually versus {} hours with mentorship software.",
            format_count(effort.participant_count),
            format_count(effort.manual_total),
            format_count(effort.software_total),
        ))
        .table(
            Some("Why Leading Organizations Choose Mentorship Software"),
            ["Task", "Manual Approach", "With Software"],
            rows,
        )
        .bullets(Some("Beyond Time Savings"), platform::SOFTWARE_BENEFITS)
        .callout(
            platform::RULE_OF_THUMB_TITLE,
            &platform::rule_of_thumb(&format_count(effort.participant_count)),
        )
        .bullets(Some("Your Recommended Next Steps"), platform::TEMPLATE_NEXT_STEPS)
        .paragraph(format!("Questions? Email us at {}", platform::CONTACT_EMAIL))
        .paragraph(format!("Visit: {}", platform::CONTACT_WEBSITE))
}

#[cfg(test)]
mod tests {
    use guide_core::{
        Choice, EmployeePopulation, MatchingProcess, MentoringStyle, ProgramFormat, ProgramGoal,
        Selection,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::blocks::Block;

    fn assemble(answers: &TemplateSelection) -> Report {
        let selection = Selection::MentorshipTemplate(answers.clone());
        let canonical = CanonicalSelection::from_selection(&selection);
        TemplateReport::new(answers, &canonical, &RoiAssumptions::default())
            .assemble(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
    }

    fn full_answers() -> TemplateSelection {
        TemplateSelection {
            program_goal: Some(ProgramGoal::LeadershipDevelopment.into()),
            employee_populations: vec![
                EmployeePopulation::HighPotential.into(),
                EmployeePopulation::FirstTimeManagers.into(),
            ],
            program_format: Some(ProgramFormat::AlwaysOpen.into()),
            mentoring_style: Some(MentoringStyle::Group.into()),
            matching_process: Some(MatchingProcess::Hybrid.into()),
        }
    }

    // =========================================================================
    // Conditional sections
    // =========================================================================

    #[test]
    fn answered_guide_includes_every_section() {
        let report = assemble(&full_answers());

        assert_eq!(
            report.section_titles(),
            vec![
                "Your Program Selections",
                "Your Program Goal: Leadership Development",
                "Mentoring Style: Group Mentoring",
                "Matching Approach: Hybrid",
                "Your Implementation Timeline",
                "Promoting Your Mentorship Program",
                "Success Metrics & Feedback Framework",
                "Taking Action on Your Mentorship Program",
            ]
        );
    }

    #[test]
    fn unanswered_guide_omits_choice_sections() {
        let report = assemble(&TemplateSelection::default());

        assert_eq!(
            report.section_titles(),
            vec![
                "Your Program Selections",
                "Your Implementation Timeline",
                "Promoting Your Mentorship Program",
                "Success Metrics & Feedback Framework",
                "Taking Action on Your Mentorship Program",
            ]
        );
    }

    #[test]
    fn unlisted_style_renders_fallback_content() {
        let answers = TemplateSelection {
            mentoring_style: Some(Choice::parse("Speed networking")),
            ..TemplateSelection::default()
        };

        let report = assemble(&answers);

        assert!(report.section("Mentoring Style: Traditional 1:1").is_some());
    }

    // =========================================================================
    // Content
    // =========================================================================

    #[test]
    fn selections_table_joins_populations() {
        let report = assemble(&full_answers());
        let section = report.section("Your Program Selections").unwrap();

        let Block::Table { rows, .. } = &section.blocks[0] else {
            panic!("expected a table");
        };
        assert_eq!(
            rows[1][1],
            "High-potential employees, First-time managers"
        );
    }

    #[test]
    fn promotion_names_target_populations() {
        let mut answers = full_answers();
        answers.employee_populations.push(Choice::parse("Interns"));

        let report = assemble(&answers);
        let section = report.section("Promoting Your Mentorship Program").unwrap();

        assert_eq!(
            section.blocks[1],
            Block::BulletList {
                title: Some("Your Target Audience".to_string()),
                items: vec![
                    "High-Potential Employees".to_string(),
                    "First-Time Managers".to_string(),
                    "Interns".to_string(),
                ],
            }
        );
    }

    #[test]
    fn promotion_without_populations_skips_audience() {
        let report = assemble(&TemplateSelection::default());
        let section = report.section("Promoting Your Mentorship Program").unwrap();

        assert!(!section.blocks.iter().any(|block| matches!(
            block,
            Block::BulletList { title: Some(title), .. } if title == "Your Target Audience"
        )));
    }

    #[test]
    fn evergreen_format_uses_evergreen_plan() {
        let report = assemble(&full_answers());
        let section = report.section("Your Implementation Timeline").unwrap();

        assert!(matches!(
            &section.blocks[1],
            Block::Table { title: Some(title), rows, .. }
                if title.contains("Evergreen") && rows.len() == 5
        ));
    }

    #[test]
    fn missing_format_uses_cohort_plan() {
        let report = assemble(&TemplateSelection::default());
        let section = report.section("Your Implementation Timeline").unwrap();

        assert!(matches!(
            &section.blocks[1],
            Block::Table { title: Some(title), rows, .. }
                if title.contains("Cohort") && rows.len() == 6
        ));
    }

    #[test]
    fn outcome_metrics_follow_the_goal() {
        let report = assemble(&full_answers());
        let section = report.section("Success Metrics & Feedback Framework").unwrap();

        let Block::Table { rows, .. } = &section.blocks[2] else {
            panic!("expected a table");
        };
        assert_eq!(rows[0][0], "Promotion Rate");
    }

    #[test]
    fn effort_uses_configured_participant_count() {
        let answers = full_answers();
        let selection = Selection::MentorshipTemplate(answers.clone());
        let canonical = CanonicalSelection::from_selection(&selection);
        let assumptions = RoiAssumptions {
            participant_count: Some(400),
            ..RoiAssumptions::default()
        };

        let report = TemplateReport::new(&answers, &canonical, &assumptions)
            .assemble(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        let section = report.section("Taking Action on Your Mentorship Program").unwrap();

        assert!(matches!(
            &section.blocks[1],
            Block::Paragraph { text } if text.starts_with("Estimated administration for 400 participants")
        ));
    }
}
