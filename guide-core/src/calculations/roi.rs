//! Turnover cost and mentorship ROI projection.
//!
//! The projection estimates what turnover currently costs an organization
//! and how much a mentorship program saves by retaining participants.
//!
//! # Calculation Steps
//!
//! | Step | Value | Formula |
//! |------|-------|---------|
//! | 1 | Current turnover cost | employees × turnover rate × salary × replacement multiplier |
//! | 2 | Participants | round(employees × participation share), or the explicit count |
//! | 3 | Participant leavers | participants × turnover rate |
//! | 4 | Avoided leavers | round(participant leavers × retention lift) |
//! | 5 | Retention savings | avoided leavers × salary × replacement multiplier |
//! | 6 | Incremental revenue | revenue × (participants / employees) × 1.2% |
//!
//! Only steps 2 and 4 round (half-up, to whole people). Dollar figures are
//! exact decimal products, clamped to [`Decimal::MAX`] for headcounts too
//! large to represent. Step 6 is only computed when total revenue is known.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use guide_core::RoiAssumptions;
//! use guide_core::calculations::{calculate_roi, parse_employee_count};
//!
//! let employees = parse_employee_count(Some("1000-2499"));
//! let projection = calculate_roi(employees, &RoiAssumptions::default());
//!
//! assert_eq!(employees, 1750);
//! assert_eq!(projection.current_turnover_cost, dec!(18375000));
//! assert_eq!(projection.participants, 875);
//! assert_eq!(projection.avoided_leavers, 44);
//! assert_eq!(projection.retention_savings, dec!(2310000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{midpoint, ratio_or_zero, round_count, saturating_mul};
use crate::models::{EmployeeSize, OptionSet, RoiAssumptions};

/// Headcount used when the company size is missing or not a listed bucket.
pub const DEFAULT_EMPLOYEE_COUNT: u64 = 1000;

/// Headcount used for the open-ended "5000+" bucket.
pub const OPEN_ENDED_EMPLOYEE_COUNT: u64 = 6000;

/// Productivity gain per participant, as a share of revenue (1.2%).
pub fn productivity_lift_pct() -> Decimal {
    Decimal::new(12, 3)
}

/// Maps a company-size bucket label to a representative headcount.
///
/// Closed buckets use their midpoint, the open-ended bucket uses
/// [`OPEN_ENDED_EMPLOYEE_COUNT`]. Anything else, including a missing or empty
/// value, yields [`DEFAULT_EMPLOYEE_COUNT`].
///
/// # Example
///
/// ```
/// use guide_core::calculations::parse_employee_count;
///
/// assert_eq!(parse_employee_count(Some("250-499")), 375);
/// assert_eq!(parse_employee_count(Some("5000+")), 6000);
/// assert_eq!(parse_employee_count(Some("lots")), 1000);
/// assert_eq!(parse_employee_count(None), 1000);
/// ```
pub fn parse_employee_count(size: Option<&str>) -> u64 {
    size.and_then(EmployeeSize::from_label)
        .map(representative_headcount)
        .unwrap_or(DEFAULT_EMPLOYEE_COUNT)
}

fn representative_headcount(size: EmployeeSize) -> u64 {
    match size.bounds() {
        (low, Some(high)) => midpoint(low, high),
        (_, None) => OPEN_ENDED_EMPLOYEE_COUNT,
    }
}

/// Result of a turnover and ROI projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiProjection {
    pub employee_count: u64,

    /// Employees expected to leave each year, unrounded.
    pub annual_leavers: Decimal,

    /// Annual cost of replacing leavers (step 1).
    pub current_turnover_cost: Decimal,

    /// Program participants (step 2).
    pub participants: u64,

    /// Participants expected to leave without the program (step 3).
    pub participant_leavers: Decimal,

    /// Participant departures the program prevents (step 4).
    pub avoided_leavers: u64,

    /// Replacement cost saved by the avoided departures (step 5).
    pub retention_savings: Decimal,

    /// Productivity gain from participants (step 6). `None` without revenue.
    pub incremental_revenue: Option<Decimal>,
}

/// Calculator for the turnover and ROI projection.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use guide_core::RoiAssumptions;
/// use guide_core::calculations::RoiCalculator;
///
/// let calculator = RoiCalculator::new(RoiAssumptions {
///     total_revenue: Some(dec!(100000000)),
///     ..RoiAssumptions::default()
/// });
///
/// let projection = calculator.calculate(1000);
///
/// // $100M × (500 / 1000) × 1.2%
/// assert_eq!(projection.incremental_revenue, Some(dec!(600000)));
/// ```
#[derive(Debug, Clone)]
pub struct RoiCalculator {
    assumptions: RoiAssumptions,
}

impl RoiCalculator {
    pub fn new(assumptions: RoiAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &RoiAssumptions {
        &self.assumptions
    }

    /// Runs every step of the projection for `employee_count` employees.
    pub fn calculate(
        &self,
        employee_count: u64,
    ) -> RoiProjection {
        let employees = Decimal::from(employee_count);

        let annual_leavers = self.annual_leavers(employees);
        let current_turnover_cost = self.replacement_cost(annual_leavers);
        let participants = self.participants(employees);
        let participant_leavers = self.annual_leavers(Decimal::from(participants));
        let avoided_leavers = self.avoided_leavers(participant_leavers);
        let retention_savings = self.replacement_cost(Decimal::from(avoided_leavers));
        let incremental_revenue = self.incremental_revenue(participants, employees);

        debug!(
            employee_count,
            participants,
            avoided_leavers,
            %current_turnover_cost,
            %retention_savings,
            "calculated ROI projection"
        );

        RoiProjection {
            employee_count,
            annual_leavers,
            current_turnover_cost,
            participants,
            participant_leavers,
            avoided_leavers,
            retention_savings,
            incremental_revenue,
        }
    }

    fn annual_leavers(
        &self,
        headcount: Decimal,
    ) -> Decimal {
        saturating_mul(headcount, self.assumptions.annual_turnover_rate)
    }

    /// Salary times replacement multiplier, for each leaver.
    fn replacement_cost(
        &self,
        leavers: Decimal,
    ) -> Decimal {
        let per_leaver = saturating_mul(
            self.assumptions.avg_salary,
            self.assumptions.replacement_cost_multiplier,
        );
        saturating_mul(leavers, per_leaver)
    }

    fn participants(
        &self,
        employees: Decimal,
    ) -> u64 {
        match self.assumptions.participant_count {
            Some(count) => count,
            None => round_count(saturating_mul(employees, self.assumptions.participants_pct)),
        }
    }

    fn avoided_leavers(
        &self,
        participant_leavers: Decimal,
    ) -> u64 {
        round_count(saturating_mul(
            participant_leavers,
            self.assumptions.retention_lift_pct,
        ))
    }

    fn incremental_revenue(
        &self,
        participants: u64,
        employees: Decimal,
    ) -> Option<Decimal> {
        let revenue = self.assumptions.total_revenue?;
        let share = ratio_or_zero(Decimal::from(participants), employees);
        Some(saturating_mul(
            saturating_mul(revenue, productivity_lift_pct()),
            share,
        ))
    }
}

/// Projects turnover cost and program savings for `employee_count` employees.
///
/// Shorthand for [`RoiCalculator::calculate`].
pub fn calculate_roi(
    employee_count: u64,
    assumptions: &RoiAssumptions,
) -> RoiProjection {
    RoiCalculator::new(assumptions.clone()).calculate(employee_count)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{max_avg_salary, max_replacement_cost_multiplier, max_total_revenue};

    // =========================================================================
    // parse_employee_count
    // =========================================================================

    #[test]
    fn parse_employee_count_uses_bucket_midpoints() {
        assert_eq!(parse_employee_count(Some("1-249")), 125);
        assert_eq!(parse_employee_count(Some("250-499")), 375);
        assert_eq!(parse_employee_count(Some("500-999")), 750);
        assert_eq!(parse_employee_count(Some("1000-2499")), 1750);
        assert_eq!(parse_employee_count(Some("2500-5000")), 3750);
    }

    #[test]
    fn parse_employee_count_uses_sentinel_for_open_bucket() {
        assert_eq!(parse_employee_count(Some("5000+")), 6000);
    }

    #[test]
    fn parse_employee_count_defaults_for_anything_else() {
        assert_eq!(parse_employee_count(None), 1000);
        assert_eq!(parse_employee_count(Some("")), 1000);
        assert_eq!(parse_employee_count(Some("1,000-2,499 employees")), 1000);
        assert_eq!(parse_employee_count(Some("  1-249")), 1000);
    }

    // =========================================================================
    // calculate: worked example
    // =========================================================================

    #[test]
    fn calculate_standard_case() {
        let projection = calculate_roi(1750, &RoiAssumptions::default());

        assert_eq!(projection.employee_count, 1750);
        assert_eq!(projection.annual_leavers, dec!(350));
        assert_eq!(projection.current_turnover_cost, dec!(18375000));
        assert_eq!(projection.participants, 875);
        assert_eq!(projection.participant_leavers, dec!(175));
        assert_eq!(projection.avoided_leavers, 44);
        assert_eq!(projection.retention_savings, dec!(2310000));
        assert_eq!(projection.incremental_revenue, None);
    }

    #[test]
    fn calculate_with_article_salary() {
        let projection = calculate_roi(1750, &RoiAssumptions::article_baseline());

        assert_eq!(projection.current_turnover_cost, dec!(13125000));
        assert_eq!(projection.retention_savings, dec!(1650000));
    }

    // =========================================================================
    // calculate: individual steps
    // =========================================================================

    #[test]
    fn participants_round_half_up() {
        // 125 × 0.5 = 62.5
        let projection = calculate_roi(125, &RoiAssumptions::default());

        assert_eq!(projection.participants, 63);
    }

    #[test]
    fn explicit_participant_count_replaces_share() {
        let assumptions = RoiAssumptions {
            participant_count: Some(400),
            ..RoiAssumptions::default()
        };

        let projection = calculate_roi(1750, &assumptions);

        assert_eq!(projection.participants, 400);
        assert_eq!(projection.participant_leavers, dec!(80));
        assert_eq!(projection.avoided_leavers, 20);
    }

    #[test]
    fn dollar_figures_are_not_rounded() {
        let assumptions = RoiAssumptions {
            avg_salary: dec!(50000.50),
            ..RoiAssumptions::default()
        };

        let projection = calculate_roi(1, &assumptions);

        // 1 × 0.20 × 50000.50 × 0.75
        assert_eq!(projection.current_turnover_cost, dec!(7500.075));
    }

    #[test]
    fn incremental_revenue_with_revenue() {
        let assumptions = RoiAssumptions {
            total_revenue: Some(dec!(250000000)),
            ..RoiAssumptions::default()
        };

        let projection = calculate_roi(1750, &assumptions);

        // 250M × 0.5 × 0.012
        assert_eq!(projection.incremental_revenue, Some(dec!(1500000)));
    }

    #[test]
    fn incremental_revenue_with_zero_employees_is_zero() {
        let assumptions = RoiAssumptions {
            total_revenue: Some(dec!(1000000)),
            participant_count: Some(10),
            ..RoiAssumptions::default()
        };

        let projection = calculate_roi(0, &assumptions);

        assert_eq!(projection.incremental_revenue, Some(dec!(0)));
        assert_eq!(projection.current_turnover_cost, dec!(0));
    }

    // =========================================================================
    // Properties
    // =========================================================================

    #[test]
    fn savings_never_decrease_with_retention_lift() {
        let mut previous = Decimal::ZERO;
        for lift in [dec!(0), dec!(0.1), dec!(0.25), dec!(0.5), dec!(0.75), dec!(1)] {
            let assumptions = RoiAssumptions {
                retention_lift_pct: lift,
                ..RoiAssumptions::default()
            };

            let savings = calculate_roi(3750, &assumptions).retention_savings;

            assert!(savings >= Decimal::ZERO);
            assert!(savings >= previous, "savings fell at lift {lift}");
            previous = savings;
        }
    }

    #[test]
    fn largest_valid_assumptions_do_not_overflow() {
        let assumptions = RoiAssumptions {
            avg_salary: max_avg_salary(),
            annual_turnover_rate: dec!(1),
            replacement_cost_multiplier: max_replacement_cost_multiplier(),
            retention_lift_pct: dec!(1),
            participants_pct: dec!(1),
            participant_count: None,
            total_revenue: Some(max_total_revenue()),
        };
        assert_eq!(assumptions.validate(), Ok(()));

        let projection = calculate_roi(OPEN_ENDED_EMPLOYEE_COUNT, &assumptions);

        // 6000 × 10,000,000 × 10
        assert_eq!(projection.current_turnover_cost, dec!(600000000000));
        assert_eq!(projection.retention_savings, dec!(600000000000));
        assert_eq!(projection.incremental_revenue, Some(dec!(120000000000)));
    }

    #[test]
    fn extreme_participant_count_saturates_revenue() {
        let assumptions = RoiAssumptions {
            avg_salary: max_avg_salary(),
            replacement_cost_multiplier: max_replacement_cost_multiplier(),
            participant_count: Some(u64::MAX),
            total_revenue: Some(max_total_revenue()),
            ..RoiAssumptions::default()
        };

        let projection = calculate_roi(1, &assumptions);

        assert_eq!(projection.participants, u64::MAX);
        // round(u64::MAX × 0.20 × 0.25), each saving 10,000,000 × 10
        assert_eq!(projection.avoided_leavers, 922337203685477581);
        assert_eq!(projection.retention_savings, dec!(92233720368547758100000000));
        assert_eq!(projection.incremental_revenue, Some(Decimal::MAX));
    }

    #[test]
    fn unvalidated_salary_saturates() {
        let assumptions = RoiAssumptions {
            avg_salary: Decimal::MAX,
            ..RoiAssumptions::default()
        };

        let projection = calculate_roi(OPEN_ENDED_EMPLOYEE_COUNT, &assumptions);

        assert_eq!(projection.current_turnover_cost, Decimal::MAX);
        assert_eq!(projection.retention_savings, Decimal::MAX);
    }

    #[test]
    fn zero_lift_saves_nothing() {
        let assumptions = RoiAssumptions {
            retention_lift_pct: dec!(0),
            ..RoiAssumptions::default()
        };

        let projection = calculate_roi(6000, &assumptions);

        assert_eq!(projection.avoided_leavers, 0);
        assert_eq!(projection.retention_savings, dec!(0));
    }
}
