//! Amount formatting for display.
//!
//! Presentation-boundary helpers: amounts are rounded to the nearest whole
//! currency unit (half away from zero), grouped in thousands with a
//! non-breaking space, and labelled with the configured currency. The engine
//! never calls into here.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::estimator::RateRange;

/// Thousands separator used for display. Non-breaking so ranges do not wrap
/// mid-amount in narrow terminals.
const GROUP_SEPARATOR: char = '\u{a0}';

/// Round to the nearest whole currency unit, halves away from zero.
pub fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as a whole number with thousands grouping.
pub fn amount(value: Decimal) -> String {
    let whole = round_whole(value);
    let digits = whole.abs().to_string();
    let len = digits.len();

    let mut out = String::with_capacity(len + len / 3 + 1);
    if whole.is_sign_negative() && !whole.is_zero() {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Full phrase form: `from <min> to <max> <currency>`.
pub fn range_phrase(range: RateRange, currency: &str) -> String {
    format!(
        "from {} to {} {}",
        amount(range.min),
        amount(range.max),
        currency
    )
}

/// Compact form: `<min>–<max> <currency>`.
pub fn range_compact(range: RateRange, currency: &str) -> String {
    format!(
        "{}\u{2013}{} {}",
        amount(range.min),
        amount(range.max),
        currency
    )
}
