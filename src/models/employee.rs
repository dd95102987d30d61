//! Employee-facing input models.
//!
//! The engine does not own employee records; it receives compensation
//! figures and the work-hub label from an external directory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly compensation amounts feeding the hourly-rate formula.
///
/// # Example
///
/// ```
/// use timebank_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let comp = CompensationInput {
///     base_salary: Decimal::from_str("4000").unwrap(),
///     danger_pay: Decimal::from_str("400").unwrap(),
///     unhealthy_pay: Decimal::ZERO,
/// };
/// assert_eq!(comp.total(), Decimal::from_str("4400").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInput {
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Monthly danger-pay additive ("periculosidade").
    pub danger_pay: Decimal,
    /// Monthly unhealthy-conditions additive ("insalubridade").
    pub unhealthy_pay: Decimal,
}

impl CompensationInput {
    /// The sum of all monthly amounts, before division by the monthly
    /// hour baseline.
    pub fn total(&self) -> Decimal {
        self.base_salary + self.danger_pay + self.unhealthy_pay
    }
}

/// An employee profile as resolved by the external directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Employee identifier.
    pub id: String,
    /// Work-hub label; translated to a state code via the hub lookup
    /// table. Unknown or blank hubs resolve to no state scope.
    pub work_hub: Option<String>,
    /// Monthly compensation amounts.
    pub compensation: CompensationInput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_total_sums_all_components() {
        let comp = CompensationInput {
            base_salary: dec("3000.00"),
            danger_pay: dec("900.00"),
            unhealthy_pay: dec("600.00"),
        };
        assert_eq!(comp.total(), dec("4500.00"));
    }

    #[test]
    fn test_total_with_zero_additives() {
        let comp = CompensationInput {
            base_salary: dec("2200"),
            danger_pay: Decimal::ZERO,
            unhealthy_pay: Decimal::ZERO,
        };
        assert_eq!(comp.total(), dec("2200"));
    }

    #[test]
    fn test_profile_serialization() {
        let profile = EmployeeProfile {
            id: "emp_001".to_string(),
            work_hub: Some("Brasília".to_string()),
            compensation: CompensationInput {
                base_salary: dec("4400"),
                danger_pay: Decimal::ZERO,
                unhealthy_pay: Decimal::ZERO,
            },
        };

        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: EmployeeProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, profile);
    }
}
