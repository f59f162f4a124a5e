use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use project_records_inquiry::Composer;

use crate::config::{Config, SiteConfig};
use crate::template::{NotFoundTemplate, Template};

mod health;
mod index;
mod inquiry;

#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    pub composer: Composer,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            site: Arc::new(config.site.clone()),
            composer: Composer::new(config.site.recipient.to_owned()),
        }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate {
            layout: template.layout(),
        }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/inquiry", post(inquiry::action))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
