use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::{Validate, ValidationError};

use crate::models::employee::Employee;

pub const MAX_EMPLOYEE_ID_LEN: usize = 10;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("phone pattern compiles"));

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    EmployeeName,
    EmployeeId,
    Email,
    PhoneNumber,
    Department,
    DateOfJoining,
    Role,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::EmployeeName,
        Field::EmployeeId,
        Field::Email,
        Field::PhoneNumber,
        Field::Department,
        Field::DateOfJoining,
        Field::Role,
    ];

    /// Wire name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::EmployeeName => "employeeName",
            Field::EmployeeId => "employeeId",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Department => "department",
            Field::DateOfJoining => "dateOfJoining",
            Field::Role => "role",
        }
    }

    fn rust_name(self) -> &'static str {
        match self {
            Field::EmployeeName => "employee_name",
            Field::EmployeeId => "employee_id",
            Field::Email => "email",
            Field::PhoneNumber => "phone_number",
            Field::Department => "department",
            Field::DateOfJoining => "date_of_joining",
            Field::Role => "role",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::EmployeeName => "Employee name",
            Field::EmployeeId => "Employee ID",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone number",
            Field::Department => "Department",
            Field::DateOfJoining => "Date of joining",
            Field::Role => "Role",
        }
    }

    pub fn value(self, employee: &Employee) -> &str {
        match self {
            Field::EmployeeName => &employee.employee_name,
            Field::EmployeeId => &employee.employee_id,
            Field::Email => &employee.email,
            Field::PhoneNumber => &employee.phone_number,
            Field::Department => &employee.department,
            Field::DateOfJoining => &employee.date_of_joining,
            Field::Role => &employee.role,
        }
    }

    pub fn value_mut(self, employee: &mut Employee) -> &mut String {
        match self {
            Field::EmployeeName => &mut employee.employee_name,
            Field::EmployeeId => &mut employee.employee_id,
            Field::Email => &mut employee.email,
            Field::PhoneNumber => &mut employee.phone_number,
            Field::Department => &mut employee.department,
            Field::DateOfJoining => &mut employee.date_of_joining,
            Field::Role => &mut employee.role,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Departments offered by the form's picker. Storage does not restrict them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Hr,
    Engineering,
    Marketing,
}

impl Department {
    pub const ALL: [Department; 3] = [Department::Hr, Department::Engineering, Department::Marketing];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Hr => "HR",
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
        }
    }
}

impl FromStr for Department {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|department| department.as_str() == s)
            .ok_or(FieldError::UnknownDepartment)
    }
}

/// Why a field was rejected. `Missing` is a required-field failure; every
/// other kind is a format failure that only the client checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Missing,
    TooLong,
    InvalidEmail,
    InvalidPhone,
    UnknownDepartment,
    InvalidDate,
    FutureDate,
}

impl FieldError {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "missing" => Some(FieldError::Missing),
            "too_long" => Some(FieldError::TooLong),
            "invalid_email" => Some(FieldError::InvalidEmail),
            "invalid_phone" => Some(FieldError::InvalidPhone),
            "unknown_department" => Some(FieldError::UnknownDepartment),
            "invalid_date" => Some(FieldError::InvalidDate),
            "future_date" => Some(FieldError::FutureDate),
            _ => None,
        }
    }

    pub fn is_format(self) -> bool {
        !matches!(self, FieldError::Missing)
    }

    /// Inline message shown next to `field`.
    pub fn message(self, field: Field) -> String {
        match self {
            FieldError::Missing => format!("{} is required", field.label()),
            FieldError::TooLong => format!(
                "Employee ID cannot exceed {} characters",
                MAX_EMPLOYEE_ID_LEN
            ),
            FieldError::InvalidEmail => "Email is invalid".to_string(),
            FieldError::InvalidPhone => "Phone number must be 10 digits".to_string(),
            FieldError::UnknownDepartment => {
                let names: Vec<_> = Department::ALL.iter().map(|d| d.as_str()).collect();
                format!("Department must be one of {}", names.join(", "))
            }
            FieldError::InvalidDate => "Date of joining must be a valid date".to_string(),
            FieldError::FutureDate => "Date of joining cannot be in the future".to_string(),
        }
    }
}

/// Validation errors keyed by field. Empty means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|err| err.message(field))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }

    /// Records `err` for `field`. A missing value outranks any format error.
    fn insert(&mut self, field: Field, err: FieldError) {
        let slot = self.0.entry(field).or_insert(err);
        if err == FieldError::Missing {
            *slot = err;
        }
    }
}

/// Snapshot of the form as the client-side rules see it.
///
/// Each failing rule reports a code that [`FieldError::from_code`] maps back to
/// a field error. The joining-date check needs `today`, so it runs at struct
/// level.
#[derive(Debug, Validate)]
#[validate(schema(function = "joined_not_in_future", skip_on_field_errors = false))]
struct FormInput {
    #[validate(custom = "not_blank")]
    employee_name: String,
    #[validate(custom = "not_blank", length(max = 10, code = "too_long"))]
    employee_id: String,
    #[validate(custom = "not_blank", regex(path = "EMAIL", code = "invalid_email"))]
    email: String,
    #[validate(custom = "not_blank", regex(path = "PHONE", code = "invalid_phone"))]
    phone_number: String,
    #[validate(custom = "known_department")]
    department: String,
    #[validate(custom = "joining_date")]
    date_of_joining: String,
    #[validate(custom = "not_blank")]
    role: String,
    today: NaiveDate,
}

impl FormInput {
    fn new(data: &Employee, today: NaiveDate) -> Self {
        FormInput {
            employee_name: data.employee_name.clone(),
            employee_id: data.employee_id.clone(),
            email: data.email.clone(),
            phone_number: data.phone_number.clone(),
            department: data.department.clone(),
            date_of_joining: data.date_of_joining.clone(),
            role: data.role.clone(),
            today,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("missing"));
    }
    Ok(())
}

fn known_department(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    value
        .parse::<Department>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("unknown_department"))
}

fn joining_date(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    parse_date(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("invalid_date"))
}

fn joined_not_in_future(form: &FormInput) -> Result<(), ValidationError> {
    match parse_date(&form.date_of_joining) {
        Some(joined) if joined > form.today => Err(ValidationError::new("future_date")),
        _ => Ok(()),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn field_for(key: &str) -> Option<Field> {
    Field::ALL
        .into_iter()
        .find(|field| field.rust_name() == key)
}

/// Checks every field of `data`, treating `today` as the latest acceptable
/// joining date.
pub fn validate_form(data: &Employee, today: NaiveDate) -> FormErrors {
    let mut errors = FormErrors::default();

    let Err(failures) = FormInput::new(data, today).validate() else {
        return errors;
    };

    for (key, field_errors) in failures.field_errors() {
        for failure in field_errors {
            let Some(err) = FieldError::from_code(&failure.code) else {
                continue;
            };
            let field = match err {
                FieldError::FutureDate => Field::DateOfJoining,
                _ => match field_for(key) {
                    Some(field) => field,
                    None => continue,
                },
            };
            errors.insert(field, err);
        }
    }

    errors
}
