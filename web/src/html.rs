use crate::{error, state::AppState, CustomKey};
use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_template::RenderHtml;
use libgeopost::post::Post;
use minijinja::context;

mod post;
mod settings;
#[cfg(test)]
mod tests;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .nest("/post/", post::router())
        .merge(settings::router())
        .route("/", get(root))
}

async fn root(
    CustomKey(key): CustomKey,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, error::Error> {
    let posts = Post::fetch_all(&state.dbpool).await?;
    Ok(RenderHtml(key, state.tmpl.clone(), context!(posts => posts)))
}
