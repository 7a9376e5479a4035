use chrono::{Local, NaiveDate};
use log::{debug, error, info, warn};

use super::validation::{validate_form, Field, FormErrors};
use super::{ClientError, EmployeeApi};
use crate::models::employee::{Employee, EmployeeUpdate};

/// User-facing outcome message, the text a UI would pop up as an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated,
}

/// State behind the employee registration form and its record table.
///
/// The cached list is whatever the server returned on the last refresh; it is
/// not authoritative between refreshes. Submissions do not trust it: they ask
/// the server to update first and create only if the record is missing.
pub struct EmployeeForm<A> {
    api: A,
    data: Employee,
    errors: FormErrors,
    employees: Vec<Employee>,
    load_error: Option<String>,
    notice: Option<Notice>,
}

impl<A: EmployeeApi> EmployeeForm<A> {
    pub fn new(api: A) -> Self {
        EmployeeForm {
            api,
            data: Employee::default(),
            errors: FormErrors::default(),
            employees: Vec::new(),
            load_error: None,
            notice: None,
        }
    }

    pub fn data(&self) -> &Employee {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Why the last list refresh failed, if it did.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetches the full record list into the cache. On failure the cache is
    /// left as it was and the error is kept for display.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        match self.api.list().await {
            Ok(employees) => {
                self.employees = employees;
                self.load_error = None;
                Ok(())
            }
            Err(err) => {
                error!("Error fetching employee list: {}", err);
                self.load_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *field.value_mut(&mut self.data) = value.into();
    }

    pub fn validate(&self) -> FormErrors {
        self.validate_on(Local::now().date_naive())
    }

    pub fn validate_on(&self, today: NaiveDate) -> FormErrors {
        validate_form(&self.data, today)
    }

    /// Whether the cache already holds the form's employee ID.
    pub fn is_update(&self) -> bool {
        self.employees
            .iter()
            .any(|employee| employee.employee_id == self.data.employee_id)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_update() {
            "Update"
        } else {
            "Submit"
        }
    }

    pub async fn submit(&mut self) -> Result<SubmitOutcome, ClientError> {
        self.submit_on(Local::now().date_naive()).await
    }

    /// Submits the form as of `today`.
    ///
    /// Nothing is sent while any field is invalid. Once the record is saved the
    /// form is cleared and the list re-fetched; a failed re-fetch is reported
    /// through [`load_error`](Self::load_error) without undoing the save.
    pub async fn submit_on(&mut self, today: NaiveDate) -> Result<SubmitOutcome, ClientError> {
        self.errors = self.validate_on(today);
        if !self.errors.is_empty() {
            debug!("Form submission blocked by validation errors: {:?}", self.errors);
            return Err(ClientError::InvalidForm(self.errors.len()));
        }

        let outcome = match self.save().await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!("Error submitting data: {}", err);
                self.notice = Some(Notice::Failure("Failed to submit employee data.".to_string()));
                return Err(err);
            }
        };

        let message = match outcome {
            SubmitOutcome::Updated => "Employee updated successfully!",
            SubmitOutcome::Created => "Employee data submitted successfully!",
        };
        info!("{} ({})", message, self.data.employee_id);
        self.notice = Some(Notice::Success(message.to_string()));
        self.data = Employee::default();

        if self.load().await.is_err() {
            warn!("Saved employee but could not refresh the list");
        }
        Ok(outcome)
    }

    async fn save(&self) -> Result<SubmitOutcome, ClientError> {
        let changes = EmployeeUpdate::from(&self.data);
        match self.api.update(&self.data.employee_id, &changes).await {
            Ok(()) => Ok(SubmitOutcome::Updated),
            Err(ClientError::NotFound(_)) => {
                self.api.create(&self.data).await?;
                Ok(SubmitOutcome::Created)
            }
            Err(err) => Err(err),
        }
    }

    /// Loads a row into the form for editing. The row stays in the list.
    pub fn edit(&mut self, employee: Employee) {
        self.data = employee;
    }

    pub fn reset(&mut self) {
        self.data = Employee::default();
        self.errors = FormErrors::default();
    }

    /// Deletes a record and drops it from the cache without re-fetching.
    pub async fn delete(&mut self, employee_id: &str) -> Result<(), ClientError> {
        let employee_id = employee_id.trim();
        debug!("Attempting to delete employee with ID: {}", employee_id);

        match self.api.delete(employee_id).await {
            Ok(()) => {
                self.employees
                    .retain(|employee| employee.employee_id != employee_id);
                self.notice = Some(Notice::Success("Employee deleted successfully!".to_string()));
                Ok(())
            }
            Err(err) => {
                error!("Error deleting employee: {}", err);
                self.notice = Some(Notice::Failure("Failed to delete employee.".to_string()));
                Err(err)
            }
        }
    }
}
