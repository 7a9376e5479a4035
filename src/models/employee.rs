use serde::{Deserialize, Serialize};
use validator::Validate;

/// One employee record as it travels over the wire and sits in the table.
///
/// Every attribute is a plain string at the transport boundary. Absent JSON
/// keys decode to empty strings so the required-field check can report them.
#[derive(sqlx::FromRow, Serialize, Deserialize, Validate, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    #[validate(length(min = 1, message = "Employee name is required"))]
    pub employee_name: String,
    /// Fits the `VARCHAR(10)` business-key column.
    #[validate(length(
        min = 1,
        max = 10,
        message = "Employee ID is required and cannot exceed 10 characters"
    ))]
    pub employee_id: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(length(min = 1, message = "Date of joining is required"))]
    pub date_of_joining: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Mutable fields of a record; the employee ID comes from the request path.
#[derive(Serialize, Deserialize, Validate, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeUpdate {
    #[validate(length(min = 1, message = "Employee name is required"))]
    pub employee_name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(length(min = 1, message = "Date of joining is required"))]
    pub date_of_joining: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

impl Employee {
    /// Applies an update, leaving the employee ID untouched.
    pub fn apply(&mut self, changes: &EmployeeUpdate) {
        self.employee_name = changes.employee_name.clone();
        self.email = changes.email.clone();
        self.phone_number = changes.phone_number.clone();
        self.department = changes.department.clone();
        self.date_of_joining = changes.date_of_joining.clone();
        self.role = changes.role.clone();
    }
}

impl From<&Employee> for EmployeeUpdate {
    fn from(employee: &Employee) -> Self {
        EmployeeUpdate {
            employee_name: employee.employee_name.clone(),
            email: employee.email.clone(),
            phone_number: employee.phone_number.clone(),
            department: employee.department.clone(),
            date_of_joining: employee.date_of_joining.clone(),
            role: employee.role.clone(),
        }
    }
}

/// Raw outcome of an insert, returned under `data` on create.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub rows_affected: u64,
}
