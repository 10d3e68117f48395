pub mod auth;
pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod limits;
pub mod middleware;
pub mod openapi;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
