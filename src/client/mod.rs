//! Client side of the employee records manager.
//!
//! [`EmployeeForm`] holds what a form UI renders: the field values being
//! edited, per-field validation errors, and a cached copy of the record list.
//! It talks to the API through [`EmployeeApi`], implemented over HTTP by
//! [`HttpEmployeeApi`].

pub mod api;
pub mod error;
pub mod form;
pub mod validation;

pub use api::{EmployeeApi, HttpEmployeeApi};
pub use error::ClientError;
pub use form::{EmployeeForm, Notice, SubmitOutcome};
pub use validation::{validate_form, Department, Field, FieldError, FormErrors};
