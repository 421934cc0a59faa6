use crate::test_app;
use axum::{
    body::{Body, Bytes, HttpBody},
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::{Pool, Sqlite};
use test_log::test;
use tower::Service;

mod settings;

/// collect a response body into a string for content assertions.
/// note that this consumes the body, so it can't be used again
async fn body_string<B>(body: B) -> String
where
    B: HttpBody<Data = Bytes>,
    B::Error: std::fmt::Debug,
{
    let bytes = body
        .collect()
        .await
        .expect("failed to collect body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body was not valid utf8")
}

#[test(sqlx::test(
    migrations = "../db/migrations/",
    fixtures(path = "../../../../db/fixtures", scripts("posts"))
))]
async fn test_index(pool: Pool<Sqlite>) {
    let (mut app, _state) = test_app(pool).await.expect("failed to create test app");

    let req = Request::builder()
        .uri("/")
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
    assert!(body.contains("Eiffel Tower"));
    assert!(body.contains("/post/1"));
    // listing pages never carry widget markup
    assert!(!body.contains("geo-map"));
}
