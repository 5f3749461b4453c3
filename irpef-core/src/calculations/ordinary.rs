//! Ordinary-regime calculator.
//!
//! Computes the full liability breakdown for the ordinary progressive
//! regime: INPS contributions, taxable income, progressive IRPEF across
//! brackets, regional and municipal surtaxes, credits and net income.
//!
//! The computation is a fixed pipeline:
//!
//! 1. Resolve the effective INPS rate (override or category default).
//! 2. Contributions: `max(0, gross) × rate`.
//! 3. Taxable income: gross minus contributions and deductible pension
//!    contributions, floored at zero.
//! 4. Progressive IRPEF with standard marginal-bracket semantics.
//! 5. Surtaxes on taxable income (not on IRPEF).
//! 6. Credits: employee credit, trattamento integrativo, other credits.
//! 7. Total tax after credits, floored at zero; net income (not floored);
//!    effective rate.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use irpef_core::{EmploymentType, OrdinaryTaxInput, calculate_ordinary};
//!
//! let input = OrdinaryTaxInput {
//!     gross_income: dec!(40000),
//!     employment_type: EmploymentType::Employee,
//!     inps_rate_pct: None,
//!     deductible_pension_contributions: dec!(0),
//!     other_tax_credits: dec!(0),
//!     regional_rate_pct: dec!(1.73),
//!     municipal_rate_pct: dec!(0.8),
//!     apply_employee_credit: true,
//!     trattamento_integrativo_eligible: false,
//! };
//!
//! let breakdown = calculate_ordinary(&input);
//!
//! // Employee INPS share: 40000 × 9.19% = 3676
//! assert_eq!(breakdown.inps_contributions, dec!(3676));
//! assert_eq!(breakdown.taxable_income, dec!(36324));
//! // 28000 × 23% + 8324 × 35%
//! assert_eq!(breakdown.irpef, dec!(9353.40));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{clamp, floor_at_zero};
use crate::models::{
    BracketTax, EmploymentType, IrpefSchedule, OrdinaryTaxBreakdown, OrdinaryTaxInput,
    ResolvedOrdinaryInput, TaxCredits,
};

/// Calculator for the ordinary progressive regime.
///
/// Borrows an [`IrpefSchedule`] so callers can supply a different bracket
/// table; [`calculate_ordinary`] uses the standard one. The calculator is
/// stateless and every call produces a fresh breakdown.
#[derive(Debug, Clone)]
pub struct OrdinaryCalculator<'a> {
    schedule: &'a IrpefSchedule,
}

impl<'a> OrdinaryCalculator<'a> {
    pub fn new(schedule: &'a IrpefSchedule) -> Self {
        Self { schedule }
    }

    /// Computes the full breakdown for `input`.
    ///
    /// Total function: rate percentages are clamped to their documented
    /// ranges and negative monetary inputs are floored at zero rather than
    /// rejected. Sanitized values are echoed in `breakdown.inputs`.
    pub fn calculate(
        &self,
        input: &OrdinaryTaxInput,
    ) -> OrdinaryTaxBreakdown {
        let resolved = self.resolve(input);

        let inps_contributions =
            floor_at_zero(resolved.gross_income) * resolved.inps_rate_pct / Decimal::ONE_HUNDRED;
        let taxable_income = floor_at_zero(
            resolved.gross_income
                - inps_contributions
                - resolved.deductible_pension_contributions,
        );

        let (irpef, irpef_per_bracket) = self.progressive_irpef(taxable_income);

        // Both surtaxes apply to taxable income, not to IRPEF.
        let regional_tax = taxable_income * resolved.regional_rate_pct / Decimal::ONE_HUNDRED;
        let municipal_tax = taxable_income * resolved.municipal_rate_pct / Decimal::ONE_HUNDRED;

        let credits = self.credits(&resolved);

        let gross_taxes_before_credits = irpef + regional_tax + municipal_tax;
        let total_tax_after_credits =
            floor_at_zero(gross_taxes_before_credits - credits.total_credits);
        let net_income = resolved.gross_income - inps_contributions - total_tax_after_credits;
        let effective_tax_rate = if resolved.gross_income > Decimal::ZERO {
            total_tax_after_credits / resolved.gross_income
        } else {
            Decimal::ZERO
        };

        OrdinaryTaxBreakdown {
            inputs: resolved,
            inps_contributions,
            taxable_income,
            irpef,
            irpef_per_bracket,
            regional_tax,
            municipal_tax,
            credits,
            gross_taxes_before_credits,
            total_tax_after_credits,
            net_income,
            effective_tax_rate,
        }
    }

    /// Applies defaults and the sanitization policy to the raw input.
    fn resolve(
        &self,
        input: &OrdinaryTaxInput,
    ) -> ResolvedOrdinaryInput {
        if input.gross_income < Decimal::ZERO {
            warn!(
                gross_income = %input.gross_income,
                "gross income is negative; contributions and taxes will be zero"
            );
        }

        let inps_rate_pct = input
            .inps_rate_pct
            .unwrap_or_else(|| input.employment_type.default_inps_rate_pct());

        let regional_rate_pct = clamp(input.regional_rate_pct, Decimal::ZERO, Decimal::TEN);
        if regional_rate_pct != input.regional_rate_pct {
            warn!(
                requested = %input.regional_rate_pct,
                clamped = %regional_rate_pct,
                "regional surtax rate outside [0, 10]; clamped"
            );
        }

        let municipal_rate_pct =
            clamp(input.municipal_rate_pct, Decimal::ZERO, Decimal::from(5));
        if municipal_rate_pct != input.municipal_rate_pct {
            warn!(
                requested = %input.municipal_rate_pct,
                clamped = %municipal_rate_pct,
                "municipal surtax rate outside [0, 5]; clamped"
            );
        }

        let deductible_pension_contributions =
            floor_at_zero(input.deductible_pension_contributions);
        if deductible_pension_contributions != input.deductible_pension_contributions {
            warn!(
                requested = %input.deductible_pension_contributions,
                "negative pension contributions floored at zero"
            );
        }

        let other_tax_credits = floor_at_zero(input.other_tax_credits);
        if other_tax_credits != input.other_tax_credits {
            warn!(
                requested = %input.other_tax_credits,
                "negative tax credits floored at zero"
            );
        }

        ResolvedOrdinaryInput {
            gross_income: input.gross_income,
            employment_type: input.employment_type,
            inps_rate_pct,
            deductible_pension_contributions,
            other_tax_credits,
            regional_rate_pct,
            municipal_rate_pct,
            apply_employee_credit: input.apply_employee_credit,
            trattamento_integrativo_eligible: input.trattamento_integrativo_eligible,
        }
    }

    /// Applies the bracket table to `taxable_income` with marginal
    /// semantics: each bracket taxes only the slice of income falling
    /// inside it, never retroactively.
    ///
    /// Returns the total IRPEF and the per-bracket entries in ascending
    /// order. Every bracket the income intersects produces an entry;
    /// iteration stops once the remaining income is exhausted, so brackets
    /// past that point produce none.
    fn progressive_irpef(
        &self,
        taxable_income: Decimal,
    ) -> (Decimal, Vec<BracketTax>) {
        let mut remaining = floor_at_zero(taxable_income);
        let mut last_cap = Decimal::ZERO;
        let mut per_bracket = Vec::new();
        let mut total = Decimal::ZERO;

        for bracket in self.schedule.brackets() {
            let slice = match bracket.up_to {
                Some(cap) => floor_at_zero(remaining.min(cap - last_cap)),
                None => remaining,
            };
            let amount = slice * bracket.rate;
            total += amount;
            per_bracket.push(BracketTax {
                rate: bracket.rate,
                amount,
                from: last_cap,
                to: bracket.up_to,
            });
            remaining -= slice;
            if let Some(cap) = bracket.up_to {
                last_cap = cap;
            }
            if remaining <= Decimal::ZERO {
                break;
            }
        }

        (total, per_bracket)
    }

    /// Computes the credit group.
    ///
    /// The employee credit requires both the flag and employee status; the
    /// trattamento integrativo is a flat 1,200 EUR when eligible.
    fn credits(
        &self,
        resolved: &ResolvedOrdinaryInput,
    ) -> TaxCredits {
        let employee_credit = if resolved.apply_employee_credit
            && resolved.employment_type == EmploymentType::Employee
        {
            estimate_employee_tax_credit(resolved.gross_income)
        } else {
            Decimal::ZERO
        };

        let trattamento_integrativo = if resolved.trattamento_integrativo_eligible {
            Decimal::from(1_200)
        } else {
            Decimal::ZERO
        };

        let total_credits = employee_credit + trattamento_integrativo + resolved.other_tax_credits;

        TaxCredits {
            employee_credit,
            trattamento_integrativo,
            other_tax_credits: resolved.other_tax_credits,
            total_credits,
        }
    }
}

/// Approximate detrazione per lavoro dipendente as a function of gross
/// annual income.
///
/// Three-segment heuristic: flat 1,955 EUR up to 15,000; `1910 + 1190·t`
/// with `t = (28000 − income) / 13000` up to 28,000; `1910·t` with
/// `t = (50000 − income) / 22000` up to 50,000; zero above. Intended for
/// estimation only. The segments do not join at 15,000 (the band formula
/// approaches 3,100 from above); the discontinuity is part of the
/// documented formula and is kept as-is.
pub fn estimate_employee_tax_credit(annual_income: Decimal) -> Decimal {
    let income = floor_at_zero(annual_income);
    let cap_low = Decimal::from(15_000);
    let cap_mid = Decimal::from(28_000);
    let cap_high = Decimal::from(50_000);

    if income <= cap_low {
        return Decimal::from(1_955);
    }
    if income <= cap_mid {
        let t = (cap_mid - income) / (cap_mid - cap_low);
        return Decimal::from(1_910) + Decimal::from(1_190) * t;
    }
    if income <= cap_high {
        let t = (cap_high - income) / (cap_high - cap_mid);
        return Decimal::from(1_910) * t;
    }
    Decimal::ZERO
}

/// Computes an ordinary-regime breakdown with the standard IRPEF schedule.
///
/// This is the entry point for callers that do not need a custom bracket
/// table. See [`OrdinaryCalculator::calculate`] for the sanitization rules.
pub fn calculate_ordinary(input: &OrdinaryTaxInput) -> OrdinaryTaxBreakdown {
    let schedule = IrpefSchedule::standard();
    OrdinaryCalculator::new(&schedule).calculate(input)
}
