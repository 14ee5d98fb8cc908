//! Read-only access to the lookup tables backing selection inputs.

use sqlx::PgPool;

use crate::models::lookup::{Inspector, Method, Site, StatusType};

/// Lists active reference rows. Lookup data is seeded by migration and
/// never written through the API.
pub struct LookupRepo;

impl LookupRepo {
    /// Active inspectors, alphabetical.
    pub async fn list_inspectors(pool: &PgPool) -> Result<Vec<Inspector>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, name, active FROM inspectors \
             WHERE active = true \
             ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Active sites, by site code.
    pub async fn list_sites(pool: &PgPool) -> Result<Vec<Site>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, site_code, site_name, active FROM sites \
             WHERE active = true \
             ORDER BY site_code ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Active inspection methods, by method name.
    pub async fn list_methods(pool: &PgPool) -> Result<Vec<Method>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, method_name, description, category, active FROM methods \
             WHERE active = true \
             ORDER BY method_name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Active status types with display metadata.
    pub async fn list_status_types(pool: &PgPool) -> Result<Vec<StatusType>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, status_name, description, color_code, active FROM status_types \
             WHERE active = true \
             ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
