//! Query parameters accepted by paginated listings.

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Query string of a paginated listing. The page itself comes from the path.
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Items per page (default: 10, max: 100)
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: Option<u64>,
}
