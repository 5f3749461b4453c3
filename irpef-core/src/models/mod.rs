mod employment_type;
mod forfettario;
mod irpef_schedule;
mod ordinary;

pub use employment_type::EmploymentType;
pub use forfettario::{
    ForfettarioBreakdown, ForfettarioInput, InpsPath, QUICK_COEFFICIENTS, QuickCoefficient,
    ResolvedForfettarioInput, ResolvedInpsPath,
};
pub use irpef_schedule::{IrpefBracket, IrpefSchedule, IrpefScheduleError};
pub use ordinary::{
    BracketTax, OrdinaryTaxBreakdown, OrdinaryTaxInput, ResolvedOrdinaryInput, TaxCredits,
};
