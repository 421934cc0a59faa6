//! The render-time gate for the map widget. A widget is only produced for
//! a single-post view, and only when an API key is configured and the
//! post's geo metadata resolves; in every other case the page simply
//! renders without a map.

use crate::config::MapConfig;
use crate::error::Error;
use crate::state::SharedState;
use anyhow::anyhow;
use libgeopost::{location::LocationRecord, options, post::Post, settings::WidgetSettings};
use serde::Serialize;
use tracing::debug;

const MAPS_SCRIPT_BASE: &str = "https://maps.googleapis.com/maps/api/js";

/// Everything the post template needs to emit the map widget: the
/// admin-configured presentation settings, the provider script URL and the
/// resolved marker location.
#[derive(Debug, Serialize)]
pub(crate) struct MapWidget {
    pub title: String,
    pub height: i64,
    pub script_url: String,
    pub location: LocationRecord,
}

impl MapWidget {
    pub(crate) async fn gather(post: &Post, state: &SharedState) -> Result<Option<Self>, Error> {
        let Some(api_key) = options::get(options::GOOGLE_MAPS_API, &state.dbpool).await? else {
            debug!("no maps API key configured, suppressing map widget");
            return Ok(None);
        };
        let Some(location) = LocationRecord::resolve(post, &state.dbpool).await? else {
            debug!(postid = post.id, "no location resolved for post");
            return Ok(None);
        };
        let settings = WidgetSettings::load(&state.dbpool).await?;
        Ok(Some(Self {
            title: settings.title,
            height: settings.height,
            script_url: script_url(&api_key, &state.config.map)?,
            location,
        }))
    }
}

/// Build the provider script URL by appending `key`, `language` and `ver`
/// query parameters to the provider's base endpoint.
fn script_url(api_key: &str, map: &MapConfig) -> Result<String, Error> {
    let mut params = vec![("key", api_key)];
    if let Some(ref language) = map.language {
        params.push(("language", language));
    }
    params.push(("ver", &map.version));
    let query = serde_urlencoded::to_string(params)
        .map_err(|e| anyhow!("Unable to encode script url parameters: {e}"))?;
    Ok(format!("{MAPS_SCRIPT_BASE}?{query}"))
}
