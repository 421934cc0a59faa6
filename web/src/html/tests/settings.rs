use super::*;
use axum::http::header::CONTENT_TYPE;
use test_log::test;
use libgeopost::{options, settings::WidgetSettings};

#[test(sqlx::test(migrations = "../db/migrations/"))]
async fn test_show_form_defaults(pool: Pool<Sqlite>) {
    let (mut app, _state) = test_app(pool).await.expect("failed to create test app");

    let req = Request::builder()
        .uri("/settings")
        .method("GET")
        .body(Body::empty())
        .expect("Failed to build request");
    let response = app
        .as_service()
        .call(req)
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    assert!(body.contains(r#"value="Google Maps""#));
    assert!(body.contains(r#"value="350""#));
    assert!(!body.contains("Settings saved"));
}

#[test(sqlx::test(migrations = "../db/migrations/"))]
async fn test_update_clamps_height(pool: Pool<Sqlite>) {
    let (mut app, state) = test_app(pool).await.expect("failed to create test app");

    let form = serde_urlencoded::to_string([
        ("title", "Visit us"),
        ("height", "5000"),
        ("google_maps_api", "abc123"),
    ])
    .expect("failed to serialize form");
    let req = Request::builder()
        .uri("/settings")
        .method("POST")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .expect("Failed to build request");
    let response = app
        .as_service()
        .call(req)
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("Settings saved"));
    // the re-rendered form shows the clamped value
    assert!(body.contains(r#"value="900""#));

    let stored = WidgetSettings::load(&state.dbpool)
        .await
        .expect("Failed to load settings");
    assert_eq!(stored.title, "Visit us");
    assert_eq!(stored.height, 900);
    assert_eq!(
        options::get(options::GOOGLE_MAPS_API, &state.dbpool)
            .await
            .expect("Failed to read option")
            .as_deref(),
        Some("abc123")
    );
}

#[test(sqlx::test(migrations = "../db/migrations/"))]
async fn test_update_clamps_low_height(pool: Pool<Sqlite>) {
    let (mut app, state) = test_app(pool).await.expect("failed to create test app");

    let form = serde_urlencoded::to_string([("title", "Map"), ("height", "50")])
        .expect("failed to serialize form");
    let req = Request::builder()
        .uri("/settings")
        .method("POST")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .expect("Failed to build request");
    let response = app
        .as_service()
        .call(req)
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let stored = WidgetSettings::load(&state.dbpool)
        .await
        .expect("Failed to load settings");
    assert_eq!(stored.height, 100);
}

#[test(sqlx::test(
    migrations = "../db/migrations/",
    fixtures(path = "../../../../db/fixtures", scripts("options"))
))]
async fn test_update_empty_fields(pool: Pool<Sqlite>) {
    let (mut app, state) = test_app(pool).await.expect("failed to create test app");

    // an empty height keeps the stored value; an empty API key clears it
    let form = serde_urlencoded::to_string([
        ("title", ""),
        ("height", ""),
        ("google_maps_api", ""),
    ])
    .expect("failed to serialize form");
    let req = Request::builder()
        .uri("/settings")
        .method("POST")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .expect("Failed to build request");
    let response = app
        .as_service()
        .call(req)
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let stored = WidgetSettings::load(&state.dbpool)
        .await
        .expect("Failed to load settings");
    // an emptied title falls back to the default on load
    assert_eq!(stored.title, "Google Maps");
    assert_eq!(stored.height, 420);
    assert_eq!(
        options::get(options::GOOGLE_MAPS_API, &state.dbpool)
            .await
            .expect("Failed to read option"),
        None
    );
}
