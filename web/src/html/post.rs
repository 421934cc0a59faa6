use crate::{error::Error, state::AppState, widget::MapWidget, CustomKey};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use axum_template::RenderHtml;
use libgeopost::post::Post;
use minijinja::context;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(show_post))
}

async fn show_post(
    CustomKey(key): CustomKey,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let post = Post::fetch(id, &state.dbpool).await.map_err(|e| match e {
        libgeopost::Error::DatabaseRowNotFound(_) => {
            Error::NotFound(format!("Unable to find post '{id}'"))
        }
        _ => e.into(),
    })?;
    let widget = MapWidget::gather(&post, &state).await?;
    Ok(RenderHtml(
        key,
        state.tmpl.clone(),
        context!(post => post, widget => widget),
    ))
}
