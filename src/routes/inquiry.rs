use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use project_records_inquiry::InquiryForm;

use crate::navigation::MenuState;
use crate::routes::{AppState, index::IndexTemplate};
use crate::template::Template;

/// POST /inquiry
///
/// Hands the composed draft to the visitor's mail client with a redirect to
/// the `mailto:` URI. Nothing is sent or stored server side.
pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<InquiryForm>,
) -> impl IntoResponse {
    let form = input.normalized();

    match app.composer.submit(&form, &app.site.project_types) {
        Ok(email) => Redirect::to(&email.mailto_uri()).into_response(),
        Err(err) => {
            tracing::debug!(err = %err, "inquiry rejected");

            let page = IndexTemplate {
                invalid: (&err).into(),
                form,
                ..IndexTemplate::new(template.layout(), MenuState::default())
            };

            (StatusCode::UNPROCESSABLE_ENTITY, template.render(page)).into_response()
        }
    }
}
