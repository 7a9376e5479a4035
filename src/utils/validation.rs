use crate::errors::AppError;
use validator::{Validate, ValidationErrors};

/// Runs the derived field rules and folds every failure into one 400.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(map_validation_error)
}

fn map_validation_error(err: ValidationErrors) -> AppError {
    let mut details = err
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect::<Vec<_>>();
    details.sort();

    AppError::BadRequest(format!("All fields are required: {}", details.join("; ")))
}
