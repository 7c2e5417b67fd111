//! MySQL employee store backed by a `sqlx` connection pool.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::Connection;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::employees::FieldUpdate;
use crate::error::ServiceResult;
use crate::models::{Employee, NewEmployee};

use super::EmployeeStore;

const SELECT_COLUMNS: &str =
    "SELECT id, first_name, last_name, age, dept_id, base_salary, hire_date FROM employees";

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id INT AUTO_INCREMENT PRIMARY KEY,
        first_name VARCHAR(100) NOT NULL,
        last_name VARCHAR(100) NOT NULL,
        age INT NOT NULL,
        dept_id INT NOT NULL,
        base_salary INT NOT NULL,
        hire_date DATE NULL
    )
"#;

#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: i32,
    first_name: String,
    last_name: String,
    age: i32,
    dept_id: i32,
    base_salary: i32,
    hire_date: Option<NaiveDate>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id.into(),
            first_name: row.first_name,
            last_name: row.last_name,
            age: row.age.into(),
            dept_id: row.dept_id.into(),
            base_salary: row.base_salary.into(),
            hire_date: row.hire_date,
        }
    }
}

/// Builds the single `UPDATE` statement for a set of field changes.
///
/// Column names come from the closed [`FieldUpdate`] set; values are bound
/// as parameters in the same order, followed by the id.
///
/// # Examples
///
/// ```
/// use payroll_records::employees::FieldUpdate;
/// use payroll_records::store::update_statement;
///
/// let sql = update_statement(&[FieldUpdate::Age(31), FieldUpdate::HireDate(None)]);
/// assert_eq!(sql, "UPDATE employees SET age = ?, hire_date = ? WHERE id = ?");
/// ```
pub fn update_statement(changes: &[FieldUpdate]) -> String {
    let assignments: Vec<String> = changes
        .iter()
        .map(|change| format!("{} = ?", change.column()))
        .collect();
    format!(
        "UPDATE employees SET {} WHERE id = ?",
        assignments.join(", ")
    )
}

/// Employee store over a MySQL connection pool.
///
/// The pool connects lazily, so the service starts even while the database
/// is down. Every operation acquires one pooled connection and hands it back
/// when the guard drops, on success and on error alike.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Creates a store whose pool opens connections on first use.
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "Configuring MySQL employee store"
        );

        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(options);

        Self { pool }
    }

    /// Wraps an existing pool.
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates the `employees` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> ServiceResult<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query(CREATE_TABLE).execute(&mut *conn).await?;
        info!("Employee schema ready");
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MySqlStore {
    async fn ping(&self) -> ServiceResult<()> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }

    async fn list(&self, dept_id: Option<i64>) -> ServiceResult<Vec<Employee>> {
        let mut conn = self.pool.acquire().await?;

        let rows = match dept_id {
            Some(dept_id) => {
                sqlx::query_as::<_, EmployeeRow>(&format!("{} WHERE dept_id = ?", SELECT_COLUMNS))
                    .bind(dept_id)
                    .fetch_all(&mut *conn)
                    .await?
            }
            None => {
                sqlx::query_as::<_, EmployeeRow>(SELECT_COLUMNS)
                    .fetch_all(&mut *conn)
                    .await?
            }
        };

        debug!(rows = rows.len(), ?dept_id, "Listed employees");
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn get(&self, id: i64) -> ServiceResult<Option<Employee>> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, EmployeeRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.map(Employee::from))
    }

    async fn insert(&self, record: &NewEmployee) -> ServiceResult<i64> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            "INSERT INTO employees (first_name, last_name, age, dept_id, base_salary, hire_date) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(record.age)
        .bind(record.dept_id)
        .bind(record.base_salary)
        .bind(&record.hire_date)
        .execute(&mut *conn)
        .await?;

        let id = result.last_insert_id() as i64;
        debug!(id, "Inserted employee");
        Ok(id)
    }

    async fn update(&self, id: i64, changes: &[FieldUpdate]) -> ServiceResult<u64> {
        let sql = update_statement(changes);
        let mut query = sqlx::query(&sql);
        for change in changes {
            query = match change {
                FieldUpdate::FirstName(value) | FieldUpdate::LastName(value) => query.bind(value),
                FieldUpdate::Age(value)
                | FieldUpdate::DeptId(value)
                | FieldUpdate::BaseSalary(value) => query.bind(*value),
                FieldUpdate::HireDate(value) => query.bind(value),
            };
        }

        let mut conn = self.pool.acquire().await?;
        let result = query.bind(id).execute(&mut *conn).await?;
        debug!(id, affected = result.rows_affected(), "Updated employee");
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> ServiceResult<u64> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        debug!(id, affected = result.rows_affected(), "Deleted employee");
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_statement_single_column() {
        assert_eq!(
            update_statement(&[FieldUpdate::BaseSalary(1)]),
            "UPDATE employees SET base_salary = ? WHERE id = ?"
        );
    }

    #[test]
    fn test_update_statement_keeps_change_order() {
        let sql = update_statement(&[
            FieldUpdate::LastName("X".to_string()),
            FieldUpdate::FirstName("Y".to_string()),
            FieldUpdate::DeptId(2),
        ]);
        assert_eq!(
            sql,
            "UPDATE employees SET last_name = ?, first_name = ?, dept_id = ? WHERE id = ?"
        );
    }

    #[test]
    fn test_row_conversion_widens_integers() {
        let row = EmployeeRow {
            id: 5,
            first_name: "Ana".to_string(),
            last_name: "Li".to_string(),
            age: 30,
            dept_id: 1,
            base_salary: 1000,
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 2),
        };

        let employee = Employee::from(row);
        assert_eq!(employee.id, 5);
        assert_eq!(employee.base_salary, 1000);
        assert_eq!(employee.hire_date, NaiveDate::from_ymd_opt(2020, 1, 2));
    }

    #[tokio::test]
    async fn test_lazy_pool_does_not_connect_on_construction() {
        let store = MySqlStore::connect_lazy(&DatabaseConfig::default());
        assert_eq!(store.pool.size(), 0);
    }
}
