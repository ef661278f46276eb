//! Unified error codes for the admin backend
//!
//! Error codes are shared between the server and its API clients and are
//! organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Category errors
//! - 4xxx: Dish errors
//! - 5xxx: Set-meal errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// No account exists for the given username
    AccountNotFound = 1002,
    /// Account is disabled
    AccountDisabled = 1003,
    /// Password comparison failed
    PasswordMismatch = 1004,
    /// Token has expired
    TokenExpired = 1005,
    /// Token is invalid
    TokenInvalid = 1006,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 3xxx: Category ====================
    /// Category not found
    CategoryNotFound = 3001,
    /// Category name already exists
    CategoryNameExists = 3002,
    /// Category is referenced by dishes
    CategoryHasDishes = 3003,
    /// Category is referenced by set-meals
    CategoryHasSetmeals = 3004,

    // ==================== 4xxx: Dish ====================
    /// Dish not found
    DishNotFound = 4001,
    /// Dish name already exists
    DishNameExists = 4002,
    /// Dish is on sale
    DishOnSale = 4003,
    /// Dish is bundled into a set-meal
    DishInSetmeal = 4004,

    // ==================== 5xxx: Set-meal ====================
    /// Set-meal not found
    SetmealNotFound = 5001,
    /// Set-meal name already exists
    SetmealNameExists = 5002,
    /// Set-meal is on sale
    SetmealOnSale = 5003,
    /// Set-meal bundles a disabled dish
    SetmealHasDisabledDish = 5004,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee username already exists
    EmployeeUsernameExists = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::AccountNotFound => "Account not found",
            ErrorCode::AccountDisabled => "Account is disabled",
            ErrorCode::PasswordMismatch => "Password mismatch",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // Category
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::CategoryNameExists => "Category name already exists",
            ErrorCode::CategoryHasDishes => "Category is referenced by dishes and cannot be deleted",
            ErrorCode::CategoryHasSetmeals => {
                "Category is referenced by set-meals and cannot be deleted"
            }

            // Dish
            ErrorCode::DishNotFound => "Dish not found",
            ErrorCode::DishNameExists => "Dish name already exists",
            ErrorCode::DishOnSale => "Dish is on sale and cannot be deleted",
            ErrorCode::DishInSetmeal => "Dish is bundled into a set-meal and cannot be deleted",

            // Set-meal
            ErrorCode::SetmealNotFound => "Set-meal not found",
            ErrorCode::SetmealNameExists => "Set-meal name already exists",
            ErrorCode::SetmealOnSale => "Set-meal is on sale and cannot be deleted",
            ErrorCode::SetmealHasDisabledDish => {
                "Set-meal bundles a disabled dish and cannot be enabled"
            }

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeUsernameExists => "Employee username already exists",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::AccountNotFound),
            1003 => Ok(ErrorCode::AccountDisabled),
            1004 => Ok(ErrorCode::PasswordMismatch),
            1005 => Ok(ErrorCode::TokenExpired),
            1006 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),

            // Category
            3001 => Ok(ErrorCode::CategoryNotFound),
            3002 => Ok(ErrorCode::CategoryNameExists),
            3003 => Ok(ErrorCode::CategoryHasDishes),
            3004 => Ok(ErrorCode::CategoryHasSetmeals),

            // Dish
            4001 => Ok(ErrorCode::DishNotFound),
            4002 => Ok(ErrorCode::DishNameExists),
            4003 => Ok(ErrorCode::DishOnSale),
            4004 => Ok(ErrorCode::DishInSetmeal),

            // Set-meal
            5001 => Ok(ErrorCode::SetmealNotFound),
            5002 => Ok(ErrorCode::SetmealNameExists),
            5003 => Ok(ErrorCode::SetmealOnSale),
            5004 => Ok(ErrorCode::SetmealHasDisabledDish),

            // Employee
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::EmployeeUsernameExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
