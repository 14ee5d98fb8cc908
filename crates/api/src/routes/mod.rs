//! Route definitions, one module per resource, composed in
//! [`crate::router`].

pub mod analytics;
pub mod dashboard;
pub mod health;
pub mod lookups;
pub mod notifications;
pub mod reports;
pub mod scope;
pub mod tasks;
