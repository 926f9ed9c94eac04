//! Estimation engine for renovation price ranges.
//!
//! Fully headless and deterministic: a static pricing catalog, validated
//! working states, four pure calculators, a step-gated selection wizard, and
//! the aggregator of committed estimates. The terminal UI consumes this
//! module through [`session::Action`] and the read views only.

pub mod calculators;
pub mod catalog;
pub mod session;
pub mod state;
pub mod validate;
pub mod views;
pub mod wizard;

// Re-export commonly used items
pub use catalog::{Category, RateRange};
pub use session::{Action, EstimatorState};
pub use validate::NumericField;
pub use wizard::WizardPosition;
