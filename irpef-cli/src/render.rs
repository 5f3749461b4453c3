//! Text rendering of breakdown records.

use std::fmt::{self, Display};

use irpef_core::calculations::common::{format_currency_eur, format_percent};
use irpef_core::{ForfettarioBreakdown, OrdinaryTaxBreakdown, ResolvedInpsPath};
use rust_decimal::Decimal;

fn line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &str,
) -> fmt::Result {
    writeln!(f, "{label:<30}{value:>16}")
}

/// Renders an [`OrdinaryTaxBreakdown`] as an aligned text report.
pub struct OrdinaryReport<'a>(pub &'a OrdinaryTaxBreakdown);

impl Display for OrdinaryReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let b = self.0;

        writeln!(f, "Ordinary regime breakdown")?;
        writeln!(f)?;
        line(f, "Gross income", &format_currency_eur(b.inputs.gross_income))?;
        line(f, "INPS rate", &format_percent(b.inputs.inps_rate_pct))?;
        line(f, "INPS contributions", &format_currency_eur(b.inps_contributions))?;
        line(f, "Taxable income", &format_currency_eur(b.taxable_income))?;
        writeln!(f)?;

        writeln!(f, "IRPEF by bracket")?;
        for bracket in &b.irpef_per_bracket {
            let range = match bracket.to {
                Some(cap) => format!(
                    "{} - {}",
                    format_currency_eur(bracket.from),
                    format_currency_eur(cap)
                ),
                None => format!("over {}", format_currency_eur(bracket.from)),
            };
            let label = format!(
                "  {:>6}  {range}",
                format_percent(bracket.rate * Decimal::ONE_HUNDRED)
            );
            line(f, &label, &format_currency_eur(bracket.amount))?;
        }
        line(f, "IRPEF total", &format_currency_eur(b.irpef))?;
        line(f, "Regional surtax", &format_currency_eur(b.regional_tax))?;
        line(f, "Municipal surtax", &format_currency_eur(b.municipal_tax))?;
        writeln!(f)?;

        line(f, "Employee credit", &format_currency_eur(b.credits.employee_credit))?;
        line(
            f,
            "Trattamento integrativo",
            &format_currency_eur(b.credits.trattamento_integrativo),
        )?;
        line(f, "Other credits", &format_currency_eur(b.credits.other_tax_credits))?;
        line(f, "Total credits", &format_currency_eur(b.credits.total_credits))?;
        writeln!(f)?;

        line(
            f,
            "Gross taxes before credits",
            &format_currency_eur(b.gross_taxes_before_credits),
        )?;
        line(
            f,
            "Total tax after credits",
            &format_currency_eur(b.total_tax_after_credits),
        )?;
        line(f, "Net income", &format_currency_eur(b.net_income))?;
        line(
            f,
            "Effective tax rate",
            &format_percent(b.effective_tax_rate * Decimal::ONE_HUNDRED),
        )
    }
}

/// Renders a [`ForfettarioBreakdown`] as an aligned text report.
pub struct ForfettarioReport<'a>(pub &'a ForfettarioBreakdown);

impl Display for ForfettarioReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let b = self.0;

        writeln!(f, "Forfettario regime breakdown")?;
        writeln!(f)?;
        line(f, "Revenues", &format_currency_eur(b.inputs.revenues))?;
        line(f, "Coefficient", &format_percent(b.inputs.coefficient_pct))?;
        line(f, "Forfait income", &format_currency_eur(b.forfait_income))?;

        let path = match &b.inputs.inps_path {
            ResolvedInpsPath::GestioneSeparata { rate_pct } => {
                format!("Gestione Separata ({})", format_percent(*rate_pct))
            }
            ResolvedInpsPath::IvsArtigianiCommercianti {
                annual_contributions,
                apply_35_reduction,
            } => {
                let reduction = if *apply_35_reduction {
                    ", 35% reduction"
                } else {
                    ""
                };
                format!(
                    "IVS artigiani/commercianti ({}/year{reduction})",
                    format_currency_eur(*annual_contributions)
                )
            }
        };
        line(f, "Contribution path", &path)?;
        line(f, "INPS contributions", &format_currency_eur(b.inps_contributions))?;
        writeln!(f)?;

        line(f, "Taxable base", &format_currency_eur(b.taxable_base))?;
        line(
            f,
            "Substitute tax rate",
            &format_percent(b.imposta_sostitutiva_rate_pct),
        )?;
        line(f, "Substitute tax", &format_currency_eur(b.imposta_sostitutiva))?;
        line(f, "Net income", &format_currency_eur(b.net_income))
    }
}

#[cfg(test)]
mod tests {
    use irpef_core::{
        EmploymentType, ForfettarioInput, InpsPath, OrdinaryTaxInput, calculate_forfettario,
        calculate_ordinary,
    };
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn ordinary_report_includes_key_figures() {
        let input = OrdinaryTaxInput {
            gross_income: dec!(40000),
            employment_type: EmploymentType::Employee,
            inps_rate_pct: None,
            deductible_pension_contributions: dec!(0),
            other_tax_credits: dec!(0),
            regional_rate_pct: dec!(1.73),
            municipal_rate_pct: dec!(0.8),
            apply_employee_credit: true,
            trattamento_integrativo_eligible: false,
        };
        let breakdown = calculate_ordinary(&input);

        let report = OrdinaryReport(&breakdown).to_string();

        assert!(report.contains("3.676 €"), "INPS contributions: {report}");
        assert!(report.contains("36.324 €"), "taxable income: {report}");
        assert!(report.contains("9,19%"), "INPS rate: {report}");
        assert!(report.contains("0 € - 28.000 €"), "first bracket: {report}");
    }

    #[test]
    fn ordinary_report_marks_unbounded_bracket() {
        let input = OrdinaryTaxInput {
            gross_income: dec!(100000),
            employment_type: EmploymentType::SelfEmployed,
            inps_rate_pct: Some(dec!(0)),
            deductible_pension_contributions: dec!(0),
            other_tax_credits: dec!(0),
            regional_rate_pct: dec!(0),
            municipal_rate_pct: dec!(0),
            apply_employee_credit: false,
            trattamento_integrativo_eligible: false,
        };
        let breakdown = calculate_ordinary(&input);

        let report = OrdinaryReport(&breakdown).to_string();

        assert!(report.contains("over 50.000 €"), "{report}");
    }

    #[test]
    fn forfettario_report_names_contribution_path() {
        let input = ForfettarioInput {
            revenues: dec!(50000),
            coefficient_pct: dec!(78),
            inps_path: InpsPath::GestioneSeparata {
                rate_override: None,
            },
            startup_five_pct: false,
        };
        let breakdown = calculate_forfettario(&input);

        let report = ForfettarioReport(&breakdown).to_string();

        assert!(report.contains("Gestione Separata (26,07%)"), "{report}");
        assert!(report.contains("39.000 €"), "forfait income: {report}");
    }
}
