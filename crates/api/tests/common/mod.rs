#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::TimeZone;
use fyyur_api::config::ServerConfig;
use fyyur_api::router::build_app_router;
use fyyur_api::state::AppState;
use fyyur_core::clock::FixedClock;
use fyyur_core::types::Timestamp;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

/// The instant every test request sees as "now".
pub fn test_now() -> Timestamp {
    chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// with the clock pinned to [`test_now`].
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        clock: Arc::new(FixedClock(test_now())),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(&body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(&body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A complete, valid venue payload.
pub fn venue_body(name: &str, city: &str, state: &str) -> Value {
    serde_json::json!({
        "name": name,
        "genres": ["Jazz", "Reggae", "Swing", "Classical", "Folk"],
        "address": "1015 Folsom Street",
        "city": city,
        "state": state,
        "phone": "123-123-1234",
        "website": "https://www.themusicalhop.com",
        "facebook_link": "https://www.facebook.com/TheMusicalHop",
        "image_link": "https://images.example.com/hop.jpg",
        "seeking_talent": true,
        "seeking_description": "We are on the lookout for a local artist to play every two weeks."
    })
}

/// A complete, valid artist payload.
pub fn artist_body(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "genres": ["Rock n Roll"],
        "city": "San Francisco",
        "state": "CA",
        "phone": "326-123-5000",
        "facebook_link": "https://www.facebook.com/GunsNPetals",
        "image_link": "https://images.example.com/petals.jpg",
        "seeking_venue": true,
        "seeking_description": "Looking for shows to perform at in the San Francisco Bay Area!"
    })
}

/// Create a venue through the API and return its id.
pub async fn create_venue(pool: &PgPool, name: &str, city: &str, state: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let json = body_json(post_json(app, "/api/v1/venues", venue_body(name, city, state)).await).await;
    json["data"]["id"].as_i64().unwrap()
}

/// Create an artist through the API and return their id.
pub async fn create_artist(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let json = body_json(post_json(app, "/api/v1/artists", artist_body(name)).await).await;
    json["data"]["id"].as_i64().unwrap()
}

/// Book a show through the API and return its id.
pub async fn create_show(pool: &PgPool, venue_id: i64, artist_id: i64, start_time: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let body = serde_json::json!({
        "venue_id": venue_id,
        "artist_id": artist_id,
        "start_time": start_time,
    });
    let json = body_json(post_json(app, "/api/v1/shows", body).await).await;
    json["data"]["id"].as_i64().unwrap()
}
