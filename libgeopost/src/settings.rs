//! Admin-configured presentation settings for the map widget, persisted in
//! the global options store.

use crate::options;
use crate::Result;
use serde::Serialize;
use sqlx::{Pool, Sqlite};

pub const DEFAULT_TITLE: &str = "Google Maps";
pub const DEFAULT_HEIGHT: i64 = 350;
pub const MIN_HEIGHT: i64 = 100;
pub const MAX_HEIGHT: i64 = 900;

const OPT_TITLE: &str = "widget_title";
const OPT_HEIGHT: &str = "widget_height";

#[derive(Debug, PartialEq, Serialize)]
pub struct WidgetSettings {
    /// Heading shown above the map.
    pub title: String,
    /// Map container height in pixels, clamped to [MIN_HEIGHT, MAX_HEIGHT].
    pub height: i64,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            height: DEFAULT_HEIGHT,
        }
    }
}

impl WidgetSettings {
    pub fn clamp_height(height: i64) -> i64 {
        height.clamp(MIN_HEIGHT, MAX_HEIGHT)
    }

    /// Load the stored settings, falling back to defaults for anything the
    /// admin never configured. Stored heights are re-clamped on read so a
    /// hand-edited database can't push the widget out of range.
    pub async fn load(pool: &Pool<Sqlite>) -> Result<Self> {
        let defaults = Self::default();
        let title = options::get(OPT_TITLE, pool)
            .await?
            .unwrap_or(defaults.title);
        let height = options::get(OPT_HEIGHT, pool)
            .await?
            .and_then(|v| v.parse().ok())
            .map(Self::clamp_height)
            .unwrap_or(defaults.height);
        Ok(Self { title, height })
    }

    pub async fn save(&self, pool: &Pool<Sqlite>) -> Result<()> {
        options::set(OPT_TITLE, &self.title, pool).await?;
        options::set(
            OPT_HEIGHT,
            &Self::clamp_height(self.height).to_string(),
            pool,
        )
        .await?;
        Ok(())
    }
}
