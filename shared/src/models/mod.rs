//! Data models
//!
//! Shared between the admin server and its frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY), timestamps are UTC
//! milliseconds.

pub mod category;
pub mod dish;
pub mod employee;
pub mod setmeal;

// Re-exports
pub use category::*;
pub use dish::*;
pub use employee::*;
pub use setmeal::*;

/// Entity status values, shared by every vertical
pub mod status {
    /// Disabled / off sale
    pub const DISABLED: i32 = 0;
    /// Enabled / on sale
    pub const ENABLED: i32 = 1;

    /// Whether `value` is a valid status
    pub fn is_valid(value: i32) -> bool {
        value == DISABLED || value == ENABLED
    }
}

/// Category kind values (the `type` field on the wire)
pub mod kind {
    /// Category groups dishes
    pub const DISH: i32 = 1;
    /// Category groups set-meals
    pub const SETMEAL: i32 = 2;
}
