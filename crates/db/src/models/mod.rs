//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates
//! - A filter struct for list queries
//!
//! Rows are snake_case in Postgres and camelCase on the wire; the same
//! structs double as GraphQL objects/inputs and OpenAPI schemas.

pub mod finanz;
pub mod hund;
pub mod kalender;
pub mod kommunikation;
pub mod kunde;
pub mod kurs;
pub mod refresh_token;
pub mod user;
