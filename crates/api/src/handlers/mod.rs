//! HTTP handlers. Each one parses the request, delegates to a service and
//! shapes the response; business rules live in [`crate::services`].

pub mod auth;
pub mod dashboard;
pub mod docs;
pub mod finanzen;
pub mod health;
pub mod hunde;
pub mod kalender;
pub mod kommunikation;
pub mod kunden;
pub mod kurse;

use axum::extract::{FromRequestParts, Path, Query};

use crate::error::AppError;

/// `Path` extractor whose rejection is the standard error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `Query` extractor whose rejection is the standard error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
