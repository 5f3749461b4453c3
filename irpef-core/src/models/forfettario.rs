use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// INPS contribution path under the forfettario regime.
///
/// The two paths are deliberately asymmetric: Gestione Separata scales with
/// the presumptive forfait income, while IVS artigiani/commercianti is a
/// fixed annual figure owed regardless of declared income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum InpsPath {
    GestioneSeparata {
        /// Rate override, percentage in [0, 100]. Defaults to 26.07.
        rate_override: Option<Decimal>,
    },
    IvsArtigianiCommercianti {
        /// Annual contributions (minimums plus any excess).
        /// Defaults to 4,000 EUR.
        annual_contributions: Option<Decimal>,
        /// Apply the optional 35% contribution reduction.
        apply_35_reduction: bool,
    },
}

/// [`InpsPath`] with defaults applied and amounts sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum ResolvedInpsPath {
    GestioneSeparata {
        rate_pct: Decimal,
    },
    IvsArtigianiCommercianti {
        annual_contributions: Decimal,
        apply_35_reduction: bool,
    },
}

/// Declared inputs for the forfettario calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForfettarioInput {
    /// Annual revenues (ricavi/compensi).
    pub revenues: Decimal,

    /// Revenue coefficient (coefficiente di redditività) percentage,
    /// e.g. 78. Clamped to [0, 100].
    pub coefficient_pct: Decimal,

    pub inps_path: InpsPath,

    /// Use the 5% startup substitute-tax rate instead of 15%.
    pub startup_five_pct: bool,
}

/// The input record after default resolution and sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedForfettarioInput {
    pub revenues: Decimal,
    pub coefficient_pct: Decimal,
    pub inps_path: ResolvedInpsPath,
    pub startup_five_pct: bool,
}

/// Full forfettario breakdown, recomputed fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForfettarioBreakdown {
    pub inputs: ResolvedForfettarioInput,
    /// Presumptive income: revenues times the coefficient.
    pub forfait_income: Decimal,
    pub inps_contributions: Decimal,
    /// Substitute-tax base: forfait income minus contributions, floored
    /// at zero.
    pub taxable_base: Decimal,
    /// Substitute-tax rate as a percentage (5 or 15).
    pub imposta_sostitutiva_rate_pct: Decimal,
    pub imposta_sostitutiva: Decimal,
    /// Revenues minus contributions and substitute tax. Computed over the
    /// actual cash received, not the presumptive income. Not floored.
    pub net_income: Decimal,
}

/// A common revenue coefficient by activity group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickCoefficient {
    pub label: &'static str,
    /// Percentage in [0, 100].
    pub value_pct: u8,
}

/// Coefficients for the activity groups users ask about most.
pub const QUICK_COEFFICIENTS: [QuickCoefficient; 3] = [
    QuickCoefficient {
        label: "Professions",
        value_pct: 78,
    },
    QuickCoefficient {
        label: "Commerce",
        value_pct: 67,
    },
    QuickCoefficient {
        label: "Accommodation/Food",
        value_pct: 40,
    },
];
