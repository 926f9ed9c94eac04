//! Read-only views over the session state.
//!
//! Serializable DTOs consumed by the terminal UI and the JSON export. The
//! engine never renders; it only hands these out.

use rust_decimal::Decimal;
use serde::Serialize;

use super::catalog::Category;
use super::session::{EstimatorState, AGGREGATED};

/// One row of the category menu: display title plus step count.
#[derive(Debug, Clone, Serialize)]
pub struct MenuEntry {
    pub category: Category,
    pub title: &'static str,
    pub steps: u8,
}

/// The full category menu in display order.
pub fn menu() -> Vec<MenuEntry> {
    Category::ALL
        .iter()
        .map(|&category| MenuEntry {
            category,
            title: category.title(),
            steps: category.steps(),
        })
        .collect()
}

/// One committed estimate line.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateLine {
    pub category: Category,
    pub title: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub min: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max: Decimal,
}

/// The committed estimate: one line per present category plus the grand
/// total. Categories without a committed estimate are omitted entirely.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateSummary {
    pub lines: Vec<EstimateLine>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_min: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_max: Decimal,
}

/// Build the committed summary, or `None` when nothing has been committed.
pub fn summary(state: &EstimatorState) -> Option<EstimateSummary> {
    let total = state.total()?;
    let lines = AGGREGATED
        .iter()
        .filter_map(|&category| {
            state.committed.get(category).map(|range| EstimateLine {
                category,
                title: category.title(),
                min: range.min,
                max: range.max,
            })
        })
        .collect();
    Some(EstimateSummary {
        lines,
        total_min: total.min,
        total_max: total.max,
    })
}
