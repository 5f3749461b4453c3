//! Calculators for the two Italian tax regimes.
//!
//! Each calculator is a pure function from an input record to a breakdown
//! record; both share the numeric policies in [`common`].

pub mod common;
pub mod forfettario;
pub mod ordinary;

pub use forfettario::calculate_forfettario;
pub use ordinary::{OrdinaryCalculator, calculate_ordinary, estimate_employee_tax_credit};
