//! Geo-metadata resolution. Every render of a single-post page asks this
//! module for a map location; the resolver walks an ordered chain of
//! metadata schemes and either produces a complete record or reports
//! absence so the caller can skip the map entirely.

use crate::format::autop;
use crate::metadata::{self, GeoCoordinates};
use crate::post::Post;
use crate::Result;
use serde::Serialize;
use sqlx::{Pool, Sqlite};
use tracing::debug;

/// Primary scheme: a serialized coordinate blob plus two auxiliary text
/// fields written by the current editing tools.
pub const META_COORDINATES: &str = "geo_coordinates";
pub const META_LOCATION: &str = "geo_location";
pub const META_DESCRIPTION: &str = "geo_description";

/// Legacy scheme: flat fields left behind by a superseded plugin. Only
/// consulted when the primary coordinate blob is absent.
pub const META_LEGACY_LATITUDE: &str = "latitude";
pub const META_LEGACY_LONGITUDE: &str = "longitude";
pub const META_LEGACY_TITLE: &str = "title";

/// A resolved map location for one post. Built fresh on every request and
/// never persisted.
#[derive(Debug, PartialEq, Serialize)]
pub struct LocationRecord {
    pub latitude: String,
    pub longitude: String,
    pub label: String,
    /// Marker popup body, already paragraph-formatted.
    pub description: String,
}

impl LocationRecord {
    /// Resolve a location for the given post, or `None` if the post
    /// carries no usable coordinates under any scheme. Missing fields are
    /// handled by the fallback chain and are never errors.
    pub async fn resolve(post: &Post, pool: &Pool<Sqlite>) -> Result<Option<LocationRecord>> {
        let primary = metadata::value(post.id, META_COORDINATES, pool)
            .await?
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| GeoCoordinates::from_meta(&raw));

        // A well-formed coordinate blob is authoritative: if its
        // coordinates are empty we report absence rather than falling
        // through to stale legacy fields.
        match primary {
            Some(coords) => Self::from_primary(post, coords, pool).await,
            None => Self::from_legacy(post, pool).await,
        }
    }

    async fn from_primary(
        post: &Post,
        coords: GeoCoordinates,
        pool: &Pool<Sqlite>,
    ) -> Result<Option<LocationRecord>> {
        if coords.lat.is_empty() || coords.lng.is_empty() {
            debug!(postid = post.id, "coordinate blob has empty coordinates");
            return Ok(None);
        }

        // Label precedence: the auxiliary location-name field, then the
        // post's own title (guaranteed non-empty). The blob's `address` is
        // never displayed.
        let name = metadata::value(post.id, META_LOCATION, pool).await?;
        let label = first_non_empty([name.as_deref()])
            .unwrap_or(&post.title)
            .to_string();

        let description = metadata::value(post.id, META_DESCRIPTION, pool).await?;
        let description = autop(first_non_empty([description.as_deref()]).unwrap_or(&label));

        Ok(Some(LocationRecord {
            latitude: coords.lat,
            longitude: coords.lng,
            label,
            description,
        }))
    }

    async fn from_legacy(post: &Post, pool: &Pool<Sqlite>) -> Result<Option<LocationRecord>> {
        let latitude = metadata::value(post.id, META_LEGACY_LATITUDE, pool)
            .await?
            .unwrap_or_default();
        let longitude = metadata::value(post.id, META_LEGACY_LONGITUDE, pool)
            .await?
            .unwrap_or_default();
        if latitude.is_empty() || longitude.is_empty() {
            return Ok(None);
        }
        debug!(postid = post.id, "resolved coordinates from legacy fields");

        let title = metadata::value(post.id, META_LEGACY_TITLE, pool).await?;
        let label = first_non_empty([title.as_deref()])
            .unwrap_or(&post.title)
            .to_string();
        let description = autop(&label);

        Ok(Some(LocationRecord {
            latitude,
            longitude,
            label,
            description,
        }))
    }
}

/// Pick the first candidate that is present and non-empty.
fn first_non_empty<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
}
