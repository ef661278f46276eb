//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::CategoryNotFound
            | Self::DishNotFound
            | Self::SetmealNotFound
            | Self::EmployeeNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict (duplicates and referential-integrity guards)
            Self::AlreadyExists
            | Self::CategoryNameExists
            | Self::CategoryHasDishes
            | Self::CategoryHasSetmeals
            | Self::DishNameExists
            | Self::DishOnSale
            | Self::DishInSetmeal
            | Self::SetmealNameExists
            | Self::SetmealOnSale
            | Self::SetmealHasDisabledDish
            | Self::EmployeeUsernameExists => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::AccountNotFound
            | Self::AccountDisabled
            | Self::PasswordMismatch
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
