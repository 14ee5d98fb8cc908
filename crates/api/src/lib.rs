//! HTTP surface for the inspection scope tracker.
//!
//! Thin axum handlers over `scopetrack-db` repositories and
//! `scopetrack-core` domain logic. All endpoints live under `/api`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
