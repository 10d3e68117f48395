//! Shared domain primitives for the Dogule backend.
//!
//! Holds the id/timestamp aliases, the domain error type with its stable
//! error codes, pagination helpers and validation rules that need no
//! database or HTTP dependencies.

pub mod codes;
pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
