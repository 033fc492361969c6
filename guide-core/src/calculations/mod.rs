//! Formula library: turnover/ROI projection and administrative effort.
//!
//! Every formula is a pure function of its inputs and never fails; missing
//! or unrecognized selections fall back to documented defaults.

pub mod common;
pub mod effort;
pub mod roi;

pub use effort::{
    DEFAULT_PARTICIPANT_COUNT, EffortEstimate, EffortTask, TaskEffort, estimate_effort,
    matching_multiplier, parse_participant_count,
};
pub use roi::{
    DEFAULT_EMPLOYEE_COUNT, RoiCalculator, RoiProjection, calculate_roi, parse_employee_count,
    productivity_lift_pct,
};
