//! Economic assumptions behind the turnover and ROI projection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when assumptions fall outside their valid ranges.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssumptionsError {
    #[error("average salary must be between 0 and 10,000,000, got {0}")]
    InvalidAverageSalary(Decimal),

    #[error("annual turnover rate must be between 0 and 1, got {0}")]
    InvalidTurnoverRate(Decimal),

    #[error("replacement cost multiplier must be between 0 and 10, got {0}")]
    InvalidReplacementMultiplier(Decimal),

    #[error("retention lift must be between 0 and 1, got {0}")]
    InvalidRetentionLift(Decimal),

    #[error("participation share must be between 0 and 1, got {0}")]
    InvalidParticipantsShare(Decimal),

    #[error("total revenue must be between 0 and 10,000,000,000,000, got {0}")]
    InvalidTotalRevenue(Decimal),
}

/// Largest accepted average salary.
pub fn max_avg_salary() -> Decimal {
    Decimal::new(10_000_000, 0)
}

/// Largest accepted replacement cost multiplier.
pub fn max_replacement_cost_multiplier() -> Decimal {
    Decimal::new(10, 0)
}

/// Largest accepted annual revenue.
pub fn max_total_revenue() -> Decimal {
    Decimal::new(10_000_000_000_000, 0)
}

/// Inputs to [`calculate_roi`](crate::calculations::calculate_roi) other than
/// headcount.
///
/// Every field has a default, so a configuration file may set any subset.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use guide_core::RoiAssumptions;
///
/// let assumptions = RoiAssumptions::default();
///
/// assert_eq!(assumptions.avg_salary, dec!(70000));
/// assert_eq!(assumptions.annual_turnover_rate, dec!(0.20));
/// assert!(assumptions.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoiAssumptions {
    /// Average fully-loaded salary per employee.
    pub avg_salary: Decimal,

    /// Share of the workforce that leaves each year.
    pub annual_turnover_rate: Decimal,

    /// Cost of replacing one leaver, as a multiple of salary.
    pub replacement_cost_multiplier: Decimal,

    /// Reduction in turnover among participants attributed to the program.
    pub retention_lift_pct: Decimal,

    /// Share of employees expected to participate.
    pub participants_pct: Decimal,

    /// Explicit participant count. Replaces the share-based estimate when set.
    pub participant_count: Option<u64>,

    /// Annual revenue. When set, the projection includes an incremental
    /// revenue estimate.
    pub total_revenue: Option<Decimal>,
}

impl Default for RoiAssumptions {
    fn default() -> Self {
        Self {
            avg_salary: Decimal::new(70_000, 0),
            annual_turnover_rate: Decimal::new(20, 2),
            replacement_cost_multiplier: Decimal::new(75, 2),
            retention_lift_pct: Decimal::new(25, 2),
            participants_pct: Decimal::new(50, 2),
            participant_count: None,
            total_revenue: None,
        }
    }
}

impl RoiAssumptions {
    /// The defaults with the $50,000 salary figure quoted in the guide article.
    pub fn article_baseline() -> Self {
        Self {
            avg_salary: Decimal::new(50_000, 0),
            ..Self::default()
        }
    }

    /// Checks every field against its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`AssumptionsError`] for the first field found out of range:
    /// - rates and shares outside [0, 1]
    /// - salary, multiplier or revenue below zero or above its `max_*` bound
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use guide_core::{AssumptionsError, RoiAssumptions};
    ///
    /// let assumptions = RoiAssumptions {
    ///     retention_lift_pct: dec!(1.5),
    ///     ..RoiAssumptions::default()
    /// };
    ///
    /// assert_eq!(
    ///     assumptions.validate(),
    ///     Err(AssumptionsError::InvalidRetentionLift(dec!(1.5)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), AssumptionsError> {
        if !in_range(self.avg_salary, max_avg_salary()) {
            return Err(AssumptionsError::InvalidAverageSalary(self.avg_salary));
        }
        if !is_fraction(self.annual_turnover_rate) {
            return Err(AssumptionsError::InvalidTurnoverRate(
                self.annual_turnover_rate,
            ));
        }
        if !in_range(self.replacement_cost_multiplier, max_replacement_cost_multiplier()) {
            return Err(AssumptionsError::InvalidReplacementMultiplier(
                self.replacement_cost_multiplier,
            ));
        }
        if !is_fraction(self.retention_lift_pct) {
            return Err(AssumptionsError::InvalidRetentionLift(
                self.retention_lift_pct,
            ));
        }
        if !is_fraction(self.participants_pct) {
            return Err(AssumptionsError::InvalidParticipantsShare(
                self.participants_pct,
            ));
        }
        if let Some(revenue) = self
            .total_revenue
            .filter(|revenue| !in_range(*revenue, max_total_revenue()))
        {
            return Err(AssumptionsError::InvalidTotalRevenue(revenue));
        }
        Ok(())
    }
}

fn is_fraction(value: Decimal) -> bool {
    in_range(value, Decimal::ONE)
}

fn in_range(
    value: Decimal,
    max: Decimal,
) -> bool {
    value >= Decimal::ZERO && value <= max
}

/// Per-field replacements layered over a base set of assumptions, for
/// command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssumptionOverrides {
    pub avg_salary: Option<Decimal>,
    pub annual_turnover_rate: Option<Decimal>,
    pub replacement_cost_multiplier: Option<Decimal>,
    pub retention_lift_pct: Option<Decimal>,
    pub participants_pct: Option<Decimal>,
    pub participant_count: Option<u64>,
    pub total_revenue: Option<Decimal>,
}

impl AssumptionOverrides {
    /// Returns `base` with every set override applied.
    pub fn apply(
        &self,
        base: RoiAssumptions,
    ) -> RoiAssumptions {
        RoiAssumptions {
            avg_salary: self.avg_salary.unwrap_or(base.avg_salary),
            annual_turnover_rate: self
                .annual_turnover_rate
                .unwrap_or(base.annual_turnover_rate),
            replacement_cost_multiplier: self
                .replacement_cost_multiplier
                .unwrap_or(base.replacement_cost_multiplier),
            retention_lift_pct: self.retention_lift_pct.unwrap_or(base.retention_lift_pct),
            participants_pct: self.participants_pct.unwrap_or(base.participants_pct),
            participant_count: self.participant_count.or(base.participant_count),
            total_revenue: self.total_revenue.or(base.total_revenue),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
