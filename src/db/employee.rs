use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeUpdate};
use async_trait::async_trait;
use sqlx::PgPool;

/// Single-table access to employee records, keyed by employee ID.
///
/// Each method maps to exactly one SQL statement. Mutations report the number
/// of rows they touched so callers can tell a missing target from a success.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert(&self, employee: &Employee) -> Result<u64, AppError>;
    async fn list(&self) -> Result<Vec<Employee>, AppError>;
    async fn update(&self, employee_id: &str, changes: &EmployeeUpdate) -> Result<u64, AppError>;
    async fn delete(&self, employee_id: &str) -> Result<u64, AppError>;
}

pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeStore { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn insert(&self, employee: &Employee) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees
                (employee_name, employee_id, email, phone_number, department, date_of_joining, role)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&employee.employee_name)
        .bind(&employee.employee_id)
        .bind(&employee.email)
        .bind(&employee.phone_number)
        .bind(&employee.department)
        .bind(&employee.date_of_joining)
        .bind(&employee.role)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT employee_name, employee_id, email, phone_number, department, date_of_joining, role
            FROM employees
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn update(&self, employee_id: &str, changes: &EmployeeUpdate) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE employees SET
                employee_name = $1,
                email = $2,
                phone_number = $3,
                department = $4,
                date_of_joining = $5,
                role = $6
            WHERE employee_id = $7
            "#,
        )
        .bind(&changes.employee_name)
        .bind(&changes.email)
        .bind(&changes.phone_number)
        .bind(&changes.department)
        .bind(&changes.date_of_joining)
        .bind(&changes.role)
        .bind(employee_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, employee_id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
