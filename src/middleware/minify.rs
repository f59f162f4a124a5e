use axum::{body::Body, response::Response};

cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use axum::{body::to_bytes, http::header};
        use std::sync::LazyLock;

        // Explicit `<html>`/`<head>` and closing tags are kept
        static PAGE_MINIFY: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_css: true,
            minify_js: true,
            ..Default::default()
        });

        fn is_page(response: &Response<Body>) -> bool {
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.starts_with("text/html"))
        }
    }
}

/// Minify rendered pages (the site page, the 422 form view, the 404 page).
///
/// Only active in release builds. Debug builds serve the askama output as
/// rendered, and embedded `/static` assets always pass through untouched.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    cfg_if::cfg_if! {
        if #[cfg(not(debug_assertions))] {
            if is_page(&response) {
                let (mut parts, body) = response.into_parts();
                let html = to_bytes(body, usize::MAX).await.unwrap_or_default();

                // Length changes once minified
                parts.headers.remove(header::CONTENT_LENGTH);

                return Response::from_parts(parts, Body::from(minify_html::minify(&html, &PAGE_MINIFY)));
            }
        }
    }

    response
}
