//! Estimation core for Italian personal income tax.
//!
//! Two stateless calculators cover the two mutually exclusive regimes:
//!
//! * [`calculate_ordinary`] — the ordinary progressive regime: INPS
//!   contributions, progressive IRPEF across brackets, regional and
//!   municipal surtaxes, credits and net income.
//! * [`calculate_forfettario`] — the flat-rate forfettario regime for small
//!   business owners and freelancers: coefficient-based presumptive income,
//!   one of two INPS contribution paths, and the substitute tax.
//!
//! Both calculators are pure, total functions over a structured input
//! record. Out-of-range percentages are clamped and negative monetary
//! inputs are floored at zero instead of being rejected; every call
//! produces a complete breakdown.

pub mod calculations;
pub mod models;

pub use calculations::forfettario::calculate_forfettario;
pub use calculations::ordinary::{
    OrdinaryCalculator, calculate_ordinary, estimate_employee_tax_credit,
};
pub use models::*;
