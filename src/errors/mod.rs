use actix_web::{HttpResponse, ResponseError};
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::constants::{
    CODE_PAGE_SEGMENT_MISSING, ERR_MISSING_PAGE_SEGMENT, ERR_PARSE_CATALOG, ERR_READ_CATALOG,
    ERR_VALIDATION_FAILED,
};
use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    InternalServerError { code: String, message: String },
    ValidationError { code: String, errors: Vec<String> },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
            ApiError::ValidationError { code, errors } => {
                write!(f, "Validation Error [{}]: {:?}", code, errors)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InternalServerError { code, message } => {
                HttpResponse::InternalServerError().json(ErrorResponse::new(code, message))
            }
            ApiError::ValidationError { code, errors } => HttpResponse::BadRequest().json(
                ErrorResponse::new(code, ERR_VALIDATION_FAILED).with_errors(errors.clone()),
            ),
        }
    }
}

/// Raised when a route template cannot be rewritten to another page.
///
/// Reaching this means a paged route was registered without the page segment
/// the rewriter needs, which is a wiring bug rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginateError {
    MissingPageSegment { template: String, keyword: String },
}

impl fmt::Display for PaginateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginateError::MissingPageSegment { template, keyword } => write!(
                f,
                "{}: '{}' has no '{}/{{page}}' segment",
                ERR_MISSING_PAGE_SEGMENT, template, keyword
            ),
        }
    }
}

impl std::error::Error for PaginateError {}

impl From<PaginateError> for ApiError {
    fn from(err: PaginateError) -> Self {
        ApiError::InternalServerError {
            code: CODE_PAGE_SEGMENT_MISSING.to_string(),
            message: err.to_string(),
        }
    }
}

/// Errors raised while loading translation catalogs.
#[derive(Debug)]
pub enum TranslationError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::Read { path, source } => {
                write!(f, "{} {}: {}", ERR_READ_CATALOG, path.display(), source)
            }
            TranslationError::Parse { path, source } => {
                write!(f, "{} {}: {}", ERR_PARSE_CATALOG, path.display(), source)
            }
        }
    }
}

impl std::error::Error for TranslationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslationError::Read { source, .. } => Some(source),
            TranslationError::Parse { source, .. } => Some(source),
        }
    }
}
