//! The global site options store: a single table of admin-configured
//! name/value pairs, the moral equivalent of a CMS options page.

use crate::Result;
use sqlx::{Pool, Sqlite};

/// Option name for the Google Maps API key. A missing or empty value
/// suppresses map rendering entirely.
pub const GOOGLE_MAPS_API: &str = "google_maps_api";

/// Fetch a global option. An empty stored value is reported as `None`.
pub async fn get(name: &str, pool: &Pool<Sqlite>) -> Result<Option<String>> {
    let value: Option<String> =
        sqlx::query_scalar("SELECT optvalue FROM gp_options WHERE optname = ?")
            .bind(name)
            .fetch_optional(pool)
            .await?
            .flatten();
    Ok(value.filter(|v| !v.is_empty()))
}

/// Set (or replace) a global option.
pub async fn set(name: &str, value: &str, pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::query(
        r#"INSERT INTO gp_options (optname, optvalue) VALUES (?, ?)
           ON CONFLICT (optname) DO UPDATE SET optvalue = excluded.optvalue"#,
    )
    .bind(name)
    .bind(value)
    .execute(pool)
    .await?;
    Ok(())
}
