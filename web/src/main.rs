use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{FromRequestParts, MatchedPath, rejection::MatchedPathRejection},
    http::request::Parts,
    RequestPartsExt,
};
use axum_template::engine::Engine;
use clap::Parser;
use minijinja::Environment;
use state::SharedState;
use std::{collections::HashMap, net::SocketAddr, path::{Path, PathBuf}, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, info};
use tracing_subscriber::filter::EnvFilter;

mod config;
mod db;
mod error;
mod html;
mod state;
mod util;
mod widget;

pub(crate) use config::EnvConfig;
pub(crate) use state::AppState;

pub(crate) type TemplateEngine = Engine<Environment<'static>>;

// Because minijinja loads an entire folder, we need to remove the `/` prefix
// and add a `.html` suffix. We can implement our own custom key extractor
// that transforms the key, so that e.g. `/post/{id}` renders `post_id.html`.
pub(crate) struct CustomKey(pub String);

impl<S> FromRequestParts<S> for CustomKey
where
    S: Send + Sync,
{
    type Rejection = MatchedPathRejection;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let mut key = parts
            .extract::<MatchedPath>()
            .await?
            .as_str()
            .trim_matches('/')
            // `{` and `}` aren't valid in file names everywhere
            .replace(['{', '}'], "")
            .replace('/', "_");

        if key.is_empty() {
            key = "_INDEX".to_string();
        }
        key.push_str(".html");
        Ok(CustomKey(key))
    }
}

pub(crate) fn template_engine<P: AsRef<Path>>(templates: P) -> TemplateEngine {
    let mut jinja = Environment::new();
    jinja.set_loader(minijinja::path_loader(templates));
    jinja.add_filter("autop", util::autop_filter);
    Engine::from(jinja)
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, default_value = "geopost.yaml")]
    pub config: PathBuf,
    #[arg(short, long, default_value = "dev")]
    pub env: String,
    #[arg(short, long, default_value = "web/templates")]
    pub templates: PathBuf,
    #[arg(short, long, default_value = "web/static")]
    pub assets: PathBuf,
}

fn app(state: AppState, assets: PathBuf) -> Router {
    Router::new()
        .merge(html::router())
        .nest_service("/static", ServeDir::new(assets))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("GEOPOST_LOG"))
        .init();
    let args = Cli::parse();

    let cfgfile = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config file {}", args.config.display()))?;
    let mut environments: HashMap<String, EnvConfig> =
        serde_yaml::from_str(&cfgfile).with_context(|| "Failed to parse config file")?;
    let env = environments.remove(&args.env).with_context(|| {
        format!(
            "Config file doesn't define an environment named '{}'",
            args.env
        )
    })?;
    debug!("using database '{}'", env.database);

    let listen = env.listen.clone();
    let shared_state = Arc::new(SharedState::new(env, template_engine(&args.templates)).await?);
    sqlx::migrate!("../db/migrations")
        .run(&shared_state.dbpool)
        .await?;

    let app = app(shared_state, args.assets);

    let addr: SocketAddr = format!("{}:{}", listen.host, listen.port).parse()?;
    info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_app(pool: sqlx::SqlitePool) -> Result<(Router, AppState)> {
    let state = Arc::new(SharedState::test(pool));
    let app = app(
        state.clone(),
        concat!(env!("CARGO_MANIFEST_DIR"), "/static").into(),
    );
    Ok((app, state))
}
