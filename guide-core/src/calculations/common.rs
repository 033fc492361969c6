//! Rounding and ratio helpers shared by the formulas.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

/// Rounds to a whole number, with midpoints going away from zero.
///
/// For the non-negative values the formulas work with this is half-up.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use guide_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(43.75)), dec!(44));
/// assert_eq!(round_half_up(dec!(12.5)), dec!(13));
/// assert_eq!(round_half_up(dec!(12.49)), dec!(12));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds half-up to a whole count. Negative values clamp to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use guide_core::calculations::common::round_count;
///
/// assert_eq!(round_count(dec!(874.5)), 875);
/// assert_eq!(round_count(dec!(-3)), 0);
/// ```
pub fn round_count(value: Decimal) -> u64 {
    round_half_up(value).max(Decimal::ZERO).to_u64().unwrap_or(u64::MAX)
}

/// `a × b`, clamped to [`Decimal::MAX`] or [`Decimal::MIN`] instead of
/// panicking when the product leaves the representable range.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use guide_core::calculations::common::saturating_mul;
///
/// assert_eq!(saturating_mul(dec!(350), dec!(0.75)), dec!(262.50));
/// assert_eq!(saturating_mul(Decimal::MAX, dec!(2)), Decimal::MAX);
/// assert_eq!(saturating_mul(Decimal::MAX, dec!(-2)), Decimal::MIN);
/// ```
pub fn saturating_mul(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_mul(b).unwrap_or(if a.is_sign_negative() == b.is_sign_negative() {
        Decimal::MAX
    } else {
        Decimal::MIN
    })
}

/// `numerator / denominator`, or zero when the denominator is zero.
pub fn ratio_or_zero(
    numerator: Decimal,
    denominator: Decimal,
) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// The rounded-up midpoint of an inclusive range.
pub fn midpoint(
    low: u64,
    high: u64,
) -> u64 {
    (low + high).div_ceil(2)
}
