use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmploymentType;

/// Declared inputs for the ordinary-regime calculator.
///
/// All monetary fields are annual EUR amounts. Negative amounts and
/// out-of-range percentages are sanitized by the calculator, not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinaryTaxInput {
    /// Annual gross income.
    pub gross_income: Decimal,

    pub employment_type: EmploymentType,

    /// INPS rate override, percentage in [0, 100]. If `None`, the default
    /// for `employment_type` is used.
    pub inps_rate_pct: Option<Decimal>,

    /// Deductible pension contributions beyond mandatory INPS.
    pub deductible_pension_contributions: Decimal,

    /// Other tax credits (detrazioni) subtracted after tax computation.
    pub other_tax_credits: Decimal,

    /// Regional addizionale IRPEF percentage (e.g. 1.23 for 1.23%).
    /// Clamped to [0, 10].
    pub regional_rate_pct: Decimal,

    /// Municipal addizionale IRPEF percentage. Clamped to [0, 5].
    pub municipal_rate_pct: Decimal,

    /// Apply the approximate employee tax credit. Only effective when
    /// `employment_type` is [`EmploymentType::Employee`].
    pub apply_employee_credit: bool,

    /// Apply the flat 1,200 EUR trattamento integrativo.
    pub trattamento_integrativo_eligible: bool,
}

/// The input record after default resolution and sanitization, echoed in
/// the breakdown so a caller can see exactly what was computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOrdinaryInput {
    pub gross_income: Decimal,
    pub employment_type: EmploymentType,
    /// Effective INPS rate: the caller's override, or the category default.
    pub inps_rate_pct: Decimal,
    pub deductible_pension_contributions: Decimal,
    pub other_tax_credits: Decimal,
    pub regional_rate_pct: Decimal,
    pub municipal_rate_pct: Decimal,
    pub apply_employee_credit: bool,
    pub trattamento_integrativo_eligible: bool,
}

/// Tax due within a single IRPEF bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTax {
    /// Marginal rate as a fraction in [0, 1].
    pub rate: Decimal,
    /// EUR paid in this bracket.
    pub amount: Decimal,
    /// Lower bound of the bracket's income range (inclusive).
    pub from: Decimal,
    /// Upper bound (exclusive); `None` for the unbounded final bracket.
    pub to: Option<Decimal>,
}

/// Credits subtracted from gross taxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCredits {
    pub employee_credit: Decimal,
    pub trattamento_integrativo: Decimal,
    pub other_tax_credits: Decimal,
    pub total_credits: Decimal,
}

/// Full ordinary-regime breakdown, recomputed fresh on every call.
///
/// All amounts are non-negative except `net_income`, which may go negative
/// when contributions and taxes exceed income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinaryTaxBreakdown {
    pub inputs: ResolvedOrdinaryInput,
    pub inps_contributions: Decimal,
    pub taxable_income: Decimal,
    /// Total IRPEF; always equals the sum of `irpef_per_bracket` amounts.
    pub irpef: Decimal,
    pub irpef_per_bracket: Vec<BracketTax>,
    pub regional_tax: Decimal,
    pub municipal_tax: Decimal,
    pub credits: TaxCredits,
    pub gross_taxes_before_credits: Decimal,
    /// Gross taxes minus credits, floored at zero.
    pub total_tax_after_credits: Decimal,
    /// Gross income minus contributions and taxes. Not floored.
    pub net_income: Decimal,
    /// `total_tax_after_credits / gross_income`, or zero at zero income.
    pub effective_tax_rate: Decimal,
}
