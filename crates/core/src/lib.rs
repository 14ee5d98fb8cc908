//! Pure domain logic for the inspection scope tracker.
//!
//! Everything in this crate is synchronous and I/O-free: the task status
//! lifecycle, the overdue predicate, pagination math, aggregation math
//! (completion rates and orderings), the per-site predictive estimator, and
//! scope-row normalization. Persistence lives in `scopetrack-db`, the HTTP
//! surface in `scopetrack-api`.

pub mod analytics;
pub mod error;
pub mod forecast;
pub mod ingest;
pub mod paging;
pub mod status;
pub mod types;
