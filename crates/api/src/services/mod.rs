//! Feature services between the transport layer (REST handlers, GraphQL
//! resolvers) and the repositories.
//!
//! Services validate input, fill defaults, translate missing rows into
//! `NOT_FOUND` and wrap repository failures in per-operation codes. They
//! take `&PgPool` so both transports share them unchanged.

pub mod dashboard;
pub mod finanzen;
pub mod hunde;
pub mod kalender;
pub mod kommunikation;
pub mod kunden;
pub mod kurse;

use dogule_core::codes::EntityCodes;
use dogule_core::error::CoreError;
use dogule_core::types::DbId;
use validator::Validate;

/// Run `validator` rules, reporting failures as the entity's invalid-payload code.
pub(crate) fn validate(codes: EntityCodes, input: &impl Validate) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|e| CoreError::from_validation(codes.invalid_payload, &e))
}

pub(crate) fn not_found(codes: EntityCodes, id: DbId) -> CoreError {
    CoreError::NotFound {
        code: codes.not_found,
        entity: codes.entity,
        id,
    }
}
