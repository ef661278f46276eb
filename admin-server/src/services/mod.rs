//! Domain Services
//!
//! One module per business entity. Services apply the business rules —
//! status defaults, audit-field stamping, duplicate checks, referential
//! integrity — and orchestrate the repositories. The acting employee's id
//! is always an explicit parameter; there is no ambient identity state.

pub mod category;
pub mod dish;
pub mod employee;
pub mod setmeal;
