//! Renocost: a renovation cost estimator.
//!
//! Gives prospective customers a rough, non-binding price range for one of
//! four service categories (turnkey renovation, finishing, electrical,
//! plumbing) from self-reported quantities and option choices. The engine in
//! [`estimator`] is headless and deterministic; [`ui`] is a thin interactive
//! terminal wizard on top of it.

pub mod config;
pub mod error;
pub mod estimator;
pub mod format;
pub mod ui;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use estimator::{Action, Category, EstimatorState, RateRange};
