//! Display formatting for report figures.

use rust_decimal::{Decimal, RoundingStrategy};

/// Whole US dollars with thousands separators.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use guide_report::format::format_currency;
///
/// assert_eq!(format_currency(dec!(2310000)), "$2,310,000");
/// assert_eq!(format_currency(dec!(7500.5)), "$7,501");
/// assert_eq!(format_currency(dec!(-52.4)), "-$52");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = group_thousands(&whole.abs().trunc().to_string());
    if whole.is_sign_negative() && !whole.is_zero() {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

/// A count with thousands separators.
pub fn format_count(count: u64) -> String {
    group_thousands(&count.to_string())
}

/// A fraction as a percentage: whole when exact, else one decimal place.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use guide_report::format::format_percent;
///
/// assert_eq!(format_percent(dec!(0.25)), "25%");
/// assert_eq!(format_percent(dec!(0.125)), "12.5%");
/// assert_eq!(format_percent(dec!(0.012)), "1.2%");
/// ```
pub fn format_percent(fraction: Decimal) -> String {
    let percent = (fraction * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{percent}%")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
