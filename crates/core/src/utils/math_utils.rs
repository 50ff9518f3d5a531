use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// `part / base * 100`, or 0 when `base` is zero.
///
/// Every ratio reported by the engine (margin, ROI, yields, shares of a
/// total) goes through here so a zero denominator never panics.
pub fn percent_of(part: Decimal, base: Decimal) -> Decimal {
    if base.is_zero() {
        Decimal::ZERO
    } else {
        part / base * dec!(100)
    }
}

/// `numerator / denominator`, or 0 when the denominator is zero.
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}
