//! Forfettario-regime calculator.
//!
//! Computes the flat-rate regime breakdown: presumptive forfait income
//! (revenues times the activity coefficient), INPS contributions along one
//! of two paths, the substitute tax (imposta sostitutiva) and net income.
//!
//! The two contribution paths differ on purpose. Gestione Separata
//! contributions scale with the presumptive income; IVS
//! artigiani/commercianti contributions are a fixed annual figure — legally
//! a minimum owed regardless of declared forfait income — optionally
//! reduced by 35%.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use irpef_core::{ForfettarioInput, InpsPath, calculate_forfettario};
//!
//! let input = ForfettarioInput {
//!     revenues: dec!(50000),
//!     coefficient_pct: dec!(78),
//!     inps_path: InpsPath::GestioneSeparata {
//!         rate_override: None,
//!     },
//!     startup_five_pct: false,
//! };
//!
//! let breakdown = calculate_forfettario(&input);
//!
//! assert_eq!(breakdown.forfait_income, dec!(39000));
//! // Gestione Separata default 26.07%
//! assert_eq!(breakdown.inps_contributions, dec!(10167.30));
//! assert_eq!(breakdown.taxable_base, dec!(28832.70));
//! assert_eq!(breakdown.imposta_sostitutiva, dec!(4324.905));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{clamp, floor_at_zero};
use crate::models::{
    ForfettarioBreakdown, ForfettarioInput, InpsPath, ResolvedForfettarioInput, ResolvedInpsPath,
};

/// Computes the full forfettario breakdown for `input`.
///
/// Total function: the coefficient is clamped to [0, 100] and negative
/// monetary inputs are floored at zero rather than rejected. Sanitized
/// values are echoed in `breakdown.inputs`.
pub fn calculate_forfettario(input: &ForfettarioInput) -> ForfettarioBreakdown {
    let resolved = resolve(input);

    let forfait_income =
        floor_at_zero(resolved.revenues) * resolved.coefficient_pct / Decimal::ONE_HUNDRED;
    let inps_contributions = contributions(&resolved.inps_path, forfait_income);
    let taxable_base = floor_at_zero(forfait_income - inps_contributions);

    let imposta_sostitutiva_rate_pct = if resolved.startup_five_pct {
        Decimal::from(5)
    } else {
        Decimal::from(15)
    };
    let imposta_sostitutiva = taxable_base * imposta_sostitutiva_rate_pct / Decimal::ONE_HUNDRED;

    // Net income is computed over actual cash received, not the
    // coefficient-reduced presumptive income.
    let net_income = resolved.revenues - inps_contributions - imposta_sostitutiva;

    ForfettarioBreakdown {
        inputs: resolved,
        forfait_income,
        inps_contributions,
        taxable_base,
        imposta_sostitutiva_rate_pct,
        imposta_sostitutiva,
        net_income,
    }
}

/// Applies defaults and the sanitization policy to the raw input.
fn resolve(input: &ForfettarioInput) -> ResolvedForfettarioInput {
    if input.revenues < Decimal::ZERO {
        warn!(
            revenues = %input.revenues,
            "revenues are negative; forfait income will be zero"
        );
    }

    let coefficient_pct = clamp(input.coefficient_pct, Decimal::ZERO, Decimal::ONE_HUNDRED);
    if coefficient_pct != input.coefficient_pct {
        warn!(
            requested = %input.coefficient_pct,
            clamped = %coefficient_pct,
            "revenue coefficient outside [0, 100]; clamped"
        );
    }

    let inps_path = match &input.inps_path {
        InpsPath::GestioneSeparata { rate_override } => ResolvedInpsPath::GestioneSeparata {
            rate_pct: rate_override.unwrap_or(Decimal::new(2607, 2)),
        },
        InpsPath::IvsArtigianiCommercianti {
            annual_contributions,
            apply_35_reduction,
        } => {
            let requested = annual_contributions.unwrap_or(Decimal::from(4_000));
            let annual = floor_at_zero(requested);
            if annual != requested {
                warn!(
                    requested = %requested,
                    "negative IVS contributions floored at zero"
                );
            }
            ResolvedInpsPath::IvsArtigianiCommercianti {
                annual_contributions: annual,
                apply_35_reduction: *apply_35_reduction,
            }
        }
    };

    ResolvedForfettarioInput {
        revenues: input.revenues,
        coefficient_pct,
        inps_path,
        startup_five_pct: input.startup_five_pct,
    }
}

/// Contributions along the resolved path.
///
/// Gestione Separata scales with the forfait income; IVS ignores it.
fn contributions(
    path: &ResolvedInpsPath,
    forfait_income: Decimal,
) -> Decimal {
    match path {
        ResolvedInpsPath::GestioneSeparata { rate_pct } => {
            forfait_income * *rate_pct / Decimal::ONE_HUNDRED
        }
        ResolvedInpsPath::IvsArtigianiCommercianti {
            annual_contributions,
            apply_35_reduction,
        } => {
            if *apply_35_reduction {
                *annual_contributions * Decimal::new(65, 2)
            } else {
                *annual_contributions
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn gs_input() -> ForfettarioInput {
        ForfettarioInput {
            revenues: dec!(50000),
            coefficient_pct: dec!(78),
            inps_path: InpsPath::GestioneSeparata {
                rate_override: None,
            },
            startup_five_pct: false,
        }
    }

    fn ivs_input() -> ForfettarioInput {
        ForfettarioInput {
            revenues: dec!(30000),
            coefficient_pct: dec!(67),
            inps_path: InpsPath::IvsArtigianiCommercianti {
                annual_contributions: Some(dec!(4000)),
                apply_35_reduction: true,
            },
            startup_five_pct: false,
        }
    }

    // =========================================================================
    // Gestione Separata path (scenario B)
    // =========================================================================

    #[test]
    fn gs_path_computes_full_breakdown() {
        let breakdown = calculate_forfettario(&gs_input());

        assert_eq!(breakdown.forfait_income, dec!(39000));
        assert_eq!(breakdown.inps_contributions, dec!(10167.30));
        assert_eq!(breakdown.taxable_base, dec!(28832.70));
        assert_eq!(breakdown.imposta_sostitutiva_rate_pct, dec!(15));
        assert_eq!(breakdown.imposta_sostitutiva, dec!(4324.905));
        assert_eq!(
            breakdown.net_income,
            dec!(50000) - dec!(10167.30) - dec!(4324.905)
        );
    }

    #[test]
    fn gs_path_defaults_rate_to_26_07() {
        let breakdown = calculate_forfettario(&gs_input());

        assert_eq!(
            breakdown.inputs.inps_path,
            ResolvedInpsPath::GestioneSeparata {
                rate_pct: dec!(26.07)
            }
        );
    }

    #[test]
    fn gs_path_honors_rate_override() {
        let input = ForfettarioInput {
            inps_path: InpsPath::GestioneSeparata {
                rate_override: Some(dec!(24)),
            },
            ..gs_input()
        };

        let breakdown = calculate_forfettario(&input);

        assert_eq!(breakdown.inps_contributions, dec!(39000) * dec!(0.24));
    }

    // =========================================================================
    // IVS path (scenario C)
    // =========================================================================

    #[test]
    fn ivs_path_ignores_forfait_income() {
        let breakdown = calculate_forfettario(&ivs_input());

        assert_eq!(breakdown.forfait_income, dec!(20100));
        // 4000 × 0.65, independent of the presumptive income.
        assert_eq!(breakdown.inps_contributions, dec!(2600));
    }

    #[test]
    fn ivs_path_without_reduction_uses_full_contributions() {
        let input = ForfettarioInput {
            inps_path: InpsPath::IvsArtigianiCommercianti {
                annual_contributions: Some(dec!(4000)),
                apply_35_reduction: false,
            },
            ..ivs_input()
        };

        let breakdown = calculate_forfettario(&input);

        assert_eq!(breakdown.inps_contributions, dec!(4000));
    }

    #[test]
    fn ivs_path_defaults_contributions_to_4000() {
        let input = ForfettarioInput {
            inps_path: InpsPath::IvsArtigianiCommercianti {
                annual_contributions: None,
                apply_35_reduction: false,
            },
            ..ivs_input()
        };

        let breakdown = calculate_forfettario(&input);

        assert_eq!(breakdown.inps_contributions, dec!(4000));
    }

    #[test]
    fn ivs_contributions_exceeding_forfait_income_floor_taxable_base() {
        let input = ForfettarioInput {
            revenues: dec!(3000),
            coefficient_pct: dec!(67),
            inps_path: InpsPath::IvsArtigianiCommercianti {
                annual_contributions: Some(dec!(4000)),
                apply_35_reduction: false,
            },
            startup_five_pct: false,
        };

        let breakdown = calculate_forfettario(&input);

        // Forfait income 2010 < contributions 4000.
        assert_eq!(breakdown.taxable_base, dec!(0));
        assert_eq!(breakdown.imposta_sostitutiva, dec!(0));
        // Contributions exceed income; net goes negative, no floor.
        assert_eq!(breakdown.net_income, dec!(-1000));
    }

    #[test]
    fn negative_ivs_contributions_are_floored() {
        let input = ForfettarioInput {
            inps_path: InpsPath::IvsArtigianiCommercianti {
                annual_contributions: Some(dec!(-500)),
                apply_35_reduction: false,
            },
            ..ivs_input()
        };

        let breakdown = calculate_forfettario(&input);

        assert_eq!(breakdown.inps_contributions, dec!(0));
    }

    // =========================================================================
    // Substitute tax rate
    // =========================================================================

    #[test]
    fn startup_flag_selects_five_percent_rate() {
        let input = ForfettarioInput {
            startup_five_pct: true,
            ..gs_input()
        };

        let breakdown = calculate_forfettario(&input);

        assert_eq!(breakdown.imposta_sostitutiva_rate_pct, dec!(5));
        assert_eq!(
            breakdown.imposta_sostitutiva,
            breakdown.taxable_base * dec!(0.05)
        );
    }

    // =========================================================================
    // Sanitization
    // =========================================================================

    #[test]
    fn coefficient_is_clamped_to_100() {
        let input = ForfettarioInput {
            coefficient_pct: dec!(140),
            ..gs_input()
        };

        let breakdown = calculate_forfettario(&input);

        assert_eq!(breakdown.inputs.coefficient_pct, dec!(100));
        assert_eq!(breakdown.forfait_income, dec!(50000));
    }

    #[test]
    fn negative_coefficient_is_clamped_to_zero() {
        let input = ForfettarioInput {
            coefficient_pct: dec!(-10),
            ..gs_input()
        };

        let breakdown = calculate_forfettario(&input);

        assert_eq!(breakdown.forfait_income, dec!(0));
        assert_eq!(breakdown.taxable_base, dec!(0));
    }

    #[test]
    fn negative_revenues_produce_zero_forfait_income() {
        let input = ForfettarioInput {
            revenues: dec!(-20000),
            ..gs_input()
        };

        let breakdown = calculate_forfettario(&input);

        assert_eq!(breakdown.forfait_income, dec!(0));
        assert_eq!(breakdown.inps_contributions, dec!(0));
        // Echoed as declared; net income follows the raw figure.
        assert_eq!(breakdown.inputs.revenues, dec!(-20000));
        assert_eq!(breakdown.net_income, dec!(-20000));
    }

    #[test]
    fn zero_revenues_produce_zero_gs_breakdown() {
        let input = ForfettarioInput {
            revenues: dec!(0),
            ..gs_input()
        };

        let breakdown = calculate_forfettario(&input);

        assert_eq!(breakdown.forfait_income, dec!(0));
        assert_eq!(breakdown.inps_contributions, dec!(0));
        assert_eq!(breakdown.imposta_sostitutiva, dec!(0));
        assert_eq!(breakdown.net_income, dec!(0));
    }

    #[test]
    fn calculate_is_idempotent() {
        let input = ivs_input();

        let first = calculate_forfettario(&input);
        let second = calculate_forfettario(&input);

        assert_eq!(first, second);
    }
}
