use std::sync::Mutex;

use async_trait::async_trait;

use super::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeUpdate};

/// In-process store used by tests. Keeps insertion order and rejects duplicate
/// employee IDs the way the table's unique constraint does.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    rows: Mutex<Vec<Employee>>,
    broken: bool,
}

impl MemoryEmployeeStore {
    /// A store whose every call fails as if the database were unreachable.
    pub fn broken() -> Self {
        MemoryEmployeeStore {
            broken: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if self.broken {
            return Err(AppError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn insert(&self, employee: &Employee) -> Result<u64, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.employee_id == employee.employee_id) {
            return Err(AppError::Conflict("Employee ID already exists".to_string()));
        }
        rows.push(employee.clone());
        Ok(1)
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update(&self, employee_id: &str, changes: &EmployeeUpdate) -> Result<u64, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let mut touched = 0;
        for row in rows.iter_mut().filter(|row| row.employee_id == employee_id) {
            row.apply(changes);
            touched += 1;
        }
        Ok(touched)
    }

    async fn delete(&self, employee_id: &str) -> Result<u64, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.employee_id != employee_id);
        Ok((before - rows.len()) as u64)
    }
}
