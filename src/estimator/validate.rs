//! Input validation for user-entered quantities.
//!
//! Free-text numeric fields are normalized through [`parse_amount`]: an empty
//! field stays a distinct "unset" value so clearing the input mid-edit does
//! not snap it to zero, while anything else is forced into a safe
//! non-negative number. Invalid input never surfaces as an error.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// Upper bound for user-entered quantities. Values above it are clamped
/// down so later rate arithmetic stays comfortably inside `Decimal`'s
/// range instead of overflowing.
const MAX_AMOUNT: Decimal = dec!(1_000_000_000);

/// Tri-state numeric field: "not yet filled" is distinct from "filled with 0".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericField {
    #[default]
    Unset,
    Value(Decimal),
}

impl NumericField {
    /// Effective amount for calculations; an unset field contributes zero.
    pub fn amount(self) -> Decimal {
        match self {
            NumericField::Unset => Decimal::ZERO,
            NumericField::Value(v) => v,
        }
    }

    pub fn is_set(self) -> bool {
        matches!(self, NumericField::Value(_))
    }
}

/// Clamp a value to the safe non-negative domain: positive values pass
/// through unchanged, everything else becomes zero.
pub fn clamp(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::ZERO
    }
}

/// Parse a raw text field into a [`NumericField`].
///
/// Empty (after trimming) means "unset". Unparseable text and negative
/// numbers are floored to zero rather than rejected, and absurdly large
/// values are capped at [`MAX_AMOUNT`]. Scientific notation ("1e3") is
/// accepted.
pub fn parse_amount(raw: &str) -> NumericField {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NumericField::Unset;
    }
    let parsed = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed));
    match parsed {
        Ok(value) => NumericField::Value(clamp(value).min(MAX_AMOUNT)),
        Err(_) => NumericField::Value(Decimal::ZERO),
    }
}
