//! Payroll report records.
//!
//! A [`PayrollEntry`] is derived from one employee row on every request and
//! never persisted. Field names on the wire follow the payroll service's
//! established JSON format (`salaire_brut`, `CNSS`, `IRPP`, `salaire_net`).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net pay breakdown for one employee.
///
/// # Example
///
/// ```
/// use payroll_records::models::PayrollEntry;
/// use rust_decimal::Decimal;
///
/// let entry = PayrollEntry {
///     id: 1,
///     full_name: "Ana Li".to_string(),
///     department_id: 1,
///     gross: Decimal::new(1000, 0),
///     cnss: Decimal::new(9180, 2),
///     irpp: Decimal::new(5000, 2),
///     net: Decimal::new(85820, 2),
///     hire_date: None,
/// };
/// let json = serde_json::to_value(&entry).unwrap();
/// assert_eq!(json["salaire_net"], 858.2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// The employee id.
    pub id: i64,
    /// First and last name joined by a space.
    pub full_name: String,
    /// The employee's department id.
    pub department_id: i64,
    /// Gross salary before deductions.
    #[serde(rename = "salaire_brut", with = "rust_decimal::serde::float")]
    pub gross: Decimal,
    /// Social-security deduction.
    #[serde(rename = "CNSS", with = "rust_decimal::serde::float")]
    pub cnss: Decimal,
    /// Income-tax deduction.
    #[serde(rename = "IRPP", with = "rust_decimal::serde::float")]
    pub irpp: Decimal,
    /// Gross minus both deductions.
    #[serde(rename = "salaire_net", with = "rust_decimal::serde::float")]
    pub net: Decimal,
    /// Date of hire, `YYYY-MM-DD` or `null`.
    pub hire_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_entry() -> PayrollEntry {
        PayrollEntry {
            id: 4,
            full_name: "Ana Li".to_string(),
            department_id: 2,
            gross: dec("1000"),
            cnss: dec("91.80"),
            irpp: dec("50.00"),
            net: dec("858.20"),
            hire_date: NaiveDate::from_ymd_opt(2024, 2, 29),
        }
    }

    #[test]
    fn test_serialize_uses_payroll_wire_names() {
        let json = serde_json::to_value(create_test_entry()).unwrap();
        let object = json.as_object().unwrap();

        for key in [
            "id",
            "full_name",
            "department_id",
            "salaire_brut",
            "CNSS",
            "IRPP",
            "salaire_net",
            "hire_date",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert_eq!(object.len(), 8);
    }

    #[test]
    fn test_amounts_serialize_as_numbers() {
        let json = serde_json::to_value(create_test_entry()).unwrap();
        assert_eq!(json["salaire_brut"], 1000.0);
        assert_eq!(json["CNSS"], 91.8);
        assert_eq!(json["IRPP"], 50.0);
        assert_eq!(json["salaire_net"], 858.2);
        assert_eq!(json["hire_date"], "2024-02-29");
    }

    #[test]
    fn test_missing_hire_date_serializes_as_null() {
        let mut entry = create_test_entry();
        entry.hire_date = None;

        let json = serde_json::to_value(entry).unwrap();
        assert!(json["hire_date"].is_null());
    }
}
