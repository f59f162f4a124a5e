//! Shared helpers for router-level integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use project_records::config::{Config, LoggingConfig, ServerConfig, SiteConfig};
use tower::ServiceExt;

pub const RECIPIENT: &str = "tom@project-records.com";

pub fn config(project_types: &[&str]) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig {
            name: "Project Records LLC".to_string(),
            recipient: RECIPIENT.to_string(),
            soundcloud_url: "https://soundcloud.com/projectrecordsllc".to_string(),
            youtube_url: "https://www.youtube.com/@project-recordsllc".to_string(),
            project_types: project_types.iter().map(|t| t.to_string()).collect(),
        },
        logging: LoggingConfig::default(),
    }
}

pub fn app() -> Router {
    project_records::create_app(&config(&[]))
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(router: &Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();

    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
