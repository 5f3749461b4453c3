use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment category under the ordinary regime.
///
/// Selects the default INPS contribution rate when the caller does not
/// supply an explicit override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Employee,
    FreelancerGestioneSeparata,
    SelfEmployed,
}

impl EmploymentType {
    /// Default INPS contribution rate for this category, as a percentage.
    ///
    /// Employee share is around 9-10%; 9.19% is the common reference.
    /// Gestione Separata uses the 2025 indicative 26.07%. Self-employed
    /// rates vary by fund, so a conservative 26% is used.
    pub fn default_inps_rate_pct(&self) -> Decimal {
        match self {
            Self::Employee => Decimal::new(919, 2),
            Self::FreelancerGestioneSeparata => Decimal::new(2607, 2),
            Self::SelfEmployed => Decimal::new(26, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::FreelancerGestioneSeparata => "freelancer_gestione_separata",
            Self::SelfEmployed => "self_employed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "employee" => Some(Self::Employee),
            "freelancer_gestione_separata" => Some(Self::FreelancerGestioneSeparata),
            "self_employed" => Some(Self::SelfEmployed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_rate_for_employee() {
        assert_eq!(
            EmploymentType::Employee.default_inps_rate_pct(),
            dec!(9.19)
        );
    }

    #[test]
    fn default_rate_for_gestione_separata() {
        assert_eq!(
            EmploymentType::FreelancerGestioneSeparata.default_inps_rate_pct(),
            dec!(26.07)
        );
    }

    #[test]
    fn default_rate_for_self_employed() {
        assert_eq!(
            EmploymentType::SelfEmployed.default_inps_rate_pct(),
            dec!(26)
        );
    }

    #[test]
    fn parse_round_trips_as_str() {
        for ty in [
            EmploymentType::Employee,
            EmploymentType::FreelancerGestioneSeparata,
            EmploymentType::SelfEmployed,
        ] {
            assert_eq!(EmploymentType::parse(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn parse_rejects_unknown_category() {
        assert_eq!(EmploymentType::parse("contractor"), None);
    }
}
