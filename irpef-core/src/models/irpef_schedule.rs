use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One IRPEF bracket: income above the previous cap and up to `up_to`
/// (exclusive) is taxed at `rate`.
///
/// `up_to` is `None` for the final, unbounded bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrpefBracket {
    pub up_to: Option<Decimal>,
    /// Marginal rate as a fraction in [0, 1].
    pub rate: Decimal,
}

/// Errors that can occur when building an [`IrpefSchedule`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IrpefScheduleError {
    /// The schedule contains no brackets.
    #[error("no brackets provided")]
    Empty,

    /// A bracket rate is outside [0, 1].
    #[error("bracket rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    /// A bracket cap does not exceed the previous one.
    #[error("bracket caps must be strictly ascending, got {0} after {1}")]
    NonAscendingCap(Decimal, Decimal),

    /// A bracket other than the last has no cap.
    #[error("only the last bracket may be unbounded")]
    UnboundedBeforeLast,

    /// The last bracket has a cap, leaving high incomes uncovered.
    #[error("the last bracket must be unbounded")]
    BoundedLast,
}

/// Ordered IRPEF bracket table.
///
/// The table is data, not code: a rate change is an edit to the bracket
/// records, never to the calculator. Construction via [`IrpefSchedule::new`]
/// validates the table once, so applying it is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrpefSchedule {
    brackets: Vec<IrpefBracket>,
}

impl IrpefSchedule {
    /// Builds a schedule from brackets ordered by ascending cap.
    ///
    /// # Errors
    ///
    /// Returns [`IrpefScheduleError`] if the table is empty, a rate is
    /// outside [0, 1], caps are not strictly ascending, a bracket other
    /// than the last is unbounded, or the last bracket is bounded.
    pub fn new(brackets: Vec<IrpefBracket>) -> Result<Self, IrpefScheduleError> {
        if brackets.is_empty() {
            return Err(IrpefScheduleError::Empty);
        }

        let mut last_cap: Option<Decimal> = None;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(IrpefScheduleError::InvalidRate(bracket.rate));
            }

            let is_last = index == brackets.len() - 1;
            match bracket.up_to {
                None if !is_last => return Err(IrpefScheduleError::UnboundedBeforeLast),
                None => {}
                Some(_) if is_last => return Err(IrpefScheduleError::BoundedLast),
                Some(cap) => {
                    let floor = last_cap.unwrap_or(Decimal::ZERO);
                    if cap <= floor {
                        return Err(IrpefScheduleError::NonAscendingCap(cap, floor));
                    }
                    last_cap = Some(cap);
                }
            }
        }

        Ok(Self { brackets })
    }

    /// The fixed national table: 23% up to 28,000 EUR, 35% up to 50,000 EUR,
    /// 43% above.
    pub fn standard() -> Self {
        Self {
            brackets: vec![
                IrpefBracket {
                    up_to: Some(Decimal::from(28_000)),
                    rate: Decimal::new(23, 2),
                },
                IrpefBracket {
                    up_to: Some(Decimal::from(50_000)),
                    rate: Decimal::new(35, 2),
                },
                IrpefBracket {
                    up_to: None,
                    rate: Decimal::new(43, 2),
                },
            ],
        }
    }

    pub fn brackets(&self) -> &[IrpefBracket] {
        &self.brackets
    }
}
