use std::{convert::Infallible, sync::Arc};

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use time::OffsetDateTime;

use crate::config::SiteConfig;

/// Values shared by every page: brand, outbound profiles, footer year.
pub struct Layout<'a> {
    pub site: &'a SiteConfig,
    pub year: i32,
    pub is_dev: bool,
}

/// Request-scoped renderer. Extracted in handlers, it owns the site-wide
/// values every page layout needs.
pub struct Template {
    site: Arc<SiteConfig>,
    year: i32,
}

impl Template {
    pub fn new(site: Arc<SiteConfig>) -> Self {
        Self {
            site,
            year: OffsetDateTime::now_utc().year(),
        }
    }

    pub fn layout(&self) -> Layout<'_> {
        Layout {
            site: &self.site,
            year: self.year,
            is_dev: cfg!(debug_assertions),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(state.site.clone()))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate<'a> {
    pub layout: Layout<'a>,
}
