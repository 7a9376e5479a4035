pub mod employee;
#[cfg(test)]
pub mod memory;

use crate::config::Settings;
use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub use employee::{EmployeeStore, PgEmployeeStore};

/// Builds the bounded connection pool every request borrows from.
pub async fn create_pool(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.database_url)
        .await
}

/// Creates the employees table if it is not there yet.
///
/// `employee_id` is the business key and carries a unique constraint; the
/// surrogate `id` column is never read back.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id BIGSERIAL PRIMARY KEY,
            employee_name TEXT NOT NULL,
            employee_id VARCHAR(10) NOT NULL UNIQUE,
            email TEXT NOT NULL,
            phone_number TEXT NOT NULL,
            department TEXT NOT NULL,
            date_of_joining TEXT NOT NULL,
            role TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("employees table is ready");
    Ok(())
}
