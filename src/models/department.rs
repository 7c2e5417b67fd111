//! Department catalog entries.

use serde::{Deserialize, Serialize};

/// A department in the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Department identifier referenced by `Employee::dept_id`.
    pub id: i64,
    /// Display name.
    pub name: String,
}

impl Department {
    /// Creates a catalog entry.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Returns the catalog served when no `departments.yaml` is configured.
pub fn default_departments() -> Vec<Department> {
    vec![
        Department::new(1, "Engineering"),
        Department::new(2, "Human Resources"),
        Department::new(3, "Sales"),
        Department::new(4, "Marketing"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_four_departments_in_id_order() {
        let departments = default_departments();
        let ids: Vec<i64> = departments.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(departments[1].name, "Human Resources");
    }

    #[test]
    fn test_department_serialization() {
        let json = serde_json::to_string(&Department::new(3, "Sales")).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"Sales"}"#);
    }
}
