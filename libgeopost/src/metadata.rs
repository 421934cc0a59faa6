//! Per-post key/value metadata. A missing row is a normal empty result,
//! never an error; callers treat absence as "this post doesn't carry that
//! piece of metadata".

use crate::Result;
use serde::Deserialize;
use sqlx::{Pool, Sqlite};
use tracing::debug;

/// Look up a single metadata value for a post.
pub async fn value(postid: i64, key: &str, pool: &Pool<Sqlite>) -> Result<Option<String>> {
    Ok(sqlx::query_scalar(
        "SELECT metavalue FROM gp_postmeta WHERE postid = ? AND metakey = ?",
    )
    .bind(postid)
    .bind(key)
    .fetch_optional(pool)
    .await?
    .flatten())
}

/// Store (or replace) a single metadata value for a post.
pub async fn set_value(postid: i64, key: &str, value: &str, pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::query(
        r#"INSERT INTO gp_postmeta (postid, metakey, metavalue) VALUES (?, ?, ?)
           ON CONFLICT (postid, metakey) DO UPDATE SET metavalue = excluded.metavalue"#,
    )
    .bind(postid)
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;
    Ok(())
}

/// The structured coordinate blob stored under the primary geo metadata
/// key. Stored as a serialized JSON object; any of the keys may be missing.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct GeoCoordinates {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
    #[serde(default)]
    pub address: String,
}

impl GeoCoordinates {
    /// Deserialize a raw metadata value. A blob that doesn't parse as the
    /// expected shape is treated the same as an absent field.
    pub fn from_meta(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(coords) => Some(coords),
            Err(e) => {
                debug!("discarding malformed coordinate metadata: {e}");
                None
            }
        }
    }
}
