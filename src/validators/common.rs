//! Common validation utilities and helpers.

use validator::ValidationErrors;

use crate::constants::CODE_VALIDATION_FAILED;
use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// # Example
/// ```ignore
/// query.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError {
        code: CODE_VALIDATION_FAILED.to_string(),
        errors,
    }
}
