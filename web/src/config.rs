use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct ListenConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
}

const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";
fn default_listen() -> ListenConfig {
    ListenConfig {
        host: DEFAULT_HOST.to_string(),
        port: DEFAULT_HTTP_PORT,
    }
}

// This handles the case where the `listen` block is PRESENT, but a field may be missing.
fn deserialize_listen_with_default_port<'de, D>(deserializer: D) -> Result<ListenConfig, D::Error>
where
    D: Deserializer<'de>,
{
    // Define a helper struct that mirrors ListenConfig but with an optional port or host.
    #[derive(Deserialize)]
    struct PartialListenConfig {
        host: Option<String>,
        port: Option<u16>,
    }

    let partial_config = PartialListenConfig::deserialize(deserializer)?;

    Ok(ListenConfig {
        host: partial_config
            .host
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: partial_config.port.unwrap_or(DEFAULT_HTTP_PORT),
    })
}

/// Settings for the external mapping provider script.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct MapConfig {
    /// Optional locale passed to the provider script (`language` query
    /// parameter). Omitted from the script URL when unset.
    #[serde(default)]
    pub(crate) language: Option<String>,
    /// Provider release channel (`ver` query parameter).
    #[serde(default = "default_map_version")]
    pub(crate) version: String,
}

fn default_map_version() -> String {
    "weekly".to_string()
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            language: None,
            version: default_map_version(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EnvConfig {
    #[serde(default = "default_listen")]
    #[serde(deserialize_with = "deserialize_listen_with_default_port")]
    pub(crate) listen: ListenConfig,
    pub(crate) database: String,
    #[serde(default)]
    pub(crate) map: MapConfig,
}
