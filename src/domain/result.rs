use serde::Serialize;
use std::fmt;

/// Status reported by a successful operation
pub const STATUS_OK: u16 = 200;

/// Status reported by any failed operation
pub const STATUS_FAILURE: u16 = 500;

/// Uniform outcome of a data-access operation
///
/// # Invariants
/// - `status` is 500 if and only if `errors` is non-empty
/// - `data` is present only when `status` is 200
///
/// # Example
/// ```
/// use teams_api::domain::ApiResult;
///
/// let ok = ApiResult::ok(vec![1, 2, 3]);
/// assert_eq!(ok.status, 200);
/// assert!(ok.errors.is_empty());
///
/// let failed: ApiResult<Vec<i32>> = ApiResult::failure("No teams found");
/// assert_eq!(failed.status, 500);
/// assert_eq!(failed.errors, vec!["No teams found".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResult<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub errors: Vec<String>,
    pub status: u16,
}

impl<T> ApiResult<T> {
    /// Creates a successful envelope around `data`
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
            status: STATUS_OK,
        }
    }

    /// Creates a failed envelope with a single error message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: vec![message.into()],
            status: STATUS_FAILURE,
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for ApiResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}
