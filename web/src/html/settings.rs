use crate::{error::Error, state::AppState, CustomKey};
use axum::{extract::State, response::IntoResponse, routing::get, Form, Router};
use axum_template::RenderHtml;
use libgeopost::{empty_string_as_none, options, settings::WidgetSettings};
use minijinja::context;
use serde::Deserialize;
use tracing::info;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/settings", get(show_form).post(update))
}

async fn show_form(
    CustomKey(key): CustomKey,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let settings = WidgetSettings::load(&state.dbpool).await?;
    let api_key = options::get(options::GOOGLE_MAPS_API, &state.dbpool)
        .await?
        .unwrap_or_default();
    Ok(RenderHtml(
        key,
        state.tmpl.clone(),
        context!(settings => settings, api_key => api_key, saved => false),
    ))
}

#[derive(Debug, Deserialize)]
struct SettingsParams {
    title: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    height: Option<i64>,
    google_maps_api: Option<String>,
}

async fn update(
    CustomKey(key): CustomKey,
    State(state): State<AppState>,
    Form(params): Form<SettingsParams>,
) -> Result<impl IntoResponse, Error> {
    let stored = WidgetSettings::load(&state.dbpool).await?;
    let settings = WidgetSettings {
        title: params
            .title
            .map(|t| t.trim().to_string())
            .unwrap_or(stored.title),
        // an empty height submission keeps the previous value
        height: params.height.unwrap_or(stored.height),
    };
    settings.save(&state.dbpool).await?;

    if let Some(api_key) = params.google_maps_api.as_deref() {
        options::set(options::GOOGLE_MAPS_API, api_key.trim(), &state.dbpool).await?;
    }
    info!("updated map widget settings");

    // re-load so the form shows the clamped values that were persisted
    let settings = WidgetSettings::load(&state.dbpool).await?;
    let api_key = options::get(options::GOOGLE_MAPS_API, &state.dbpool)
        .await?
        .unwrap_or_default();
    Ok(RenderHtml(
        key,
        state.tmpl.clone(),
        context!(settings => settings, api_key => api_key, saved => true),
    ))
}
