use crate::{db, template_engine, EnvConfig, TemplateEngine};
use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::trace;

#[derive(Debug)]
pub struct SharedState {
    pub dbpool: SqlitePool,
    pub tmpl: TemplateEngine,
    pub config: EnvConfig,
}

impl SharedState {
    pub async fn new(env: EnvConfig, tmpl: TemplateEngine) -> Result<Self> {
        trace!("Creating shared app state");
        Ok(Self {
            dbpool: db::pool(&env.database)
                .await
                .with_context(|| format!("Unable to open database {}", &env.database))?,
            tmpl,
            config: env,
        })
    }

    #[cfg(test)]
    pub fn test(pool: SqlitePool) -> Self {
        use crate::config::{ListenConfig, MapConfig};

        let tmpl = template_engine(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"));
        Self {
            dbpool: pool,
            tmpl,
            config: EnvConfig {
                listen: ListenConfig {
                    host: "127.0.0.1".to_string(),
                    port: 8080,
                },
                database: "test-database.sqlite".to_string(),
                map: MapConfig::default(),
            },
        }
    }
}

pub type AppState = Arc<SharedState>;
