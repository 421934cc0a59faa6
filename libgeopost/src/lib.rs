//! This is a library that provides the storage objects and geo-metadata
//! resolution logic for the GeoPost content site. Posts, per-post metadata
//! and global site options live in a sqlite database; the main consumer is
//! the web frontend, which asks this library to resolve a map location for
//! a post before rendering a marker widget.

use serde::{Deserialize, Deserializer};
use std::str::FromStr;

pub mod error;
pub mod format;
pub mod location;
pub mod metadata;
pub mod options;
pub mod post;
pub mod settings;

pub use error::Error;
pub use error::Result;

pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s)
            .map_err(serde::de::Error::custom)
            .map(Some),
    }
}
