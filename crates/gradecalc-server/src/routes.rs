//! HTTP handlers for the grade form.

use axum::extract::rejection::FormRejection;
use axum::extract::{DefaultBodyLimit, Form};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use gradecalc_core::RawForm;
use gradecalc_report::html::{render_form, render_results};

use crate::config::GradecalcConfig;

/// Build the application router.
pub fn router(config: &GradecalcConfig) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

async fn show_form() -> Html<String> {
    Html(render_form(&RawForm::new(), None))
}

/// A POST without a urlencoded body is treated as an empty form, so it is
/// answered with the form page rather than a bare rejection.
async fn submit_form(fields: Result<Form<Vec<(String, String)>>, FormRejection>) -> Response {
    let form = match fields {
        Ok(Form(pairs)) => RawForm::from_pairs(pairs),
        Err(FormRejection::InvalidFormContentType(_)) => RawForm::new(),
        Err(rejection) => return rejection.into_response(),
    };

    match gradecalc_core::grade_form(&form) {
        Ok(report) => Html(render_results(&report)).into_response(),
        Err(e) => {
            tracing::debug!(field = %e.field, "rejected submission: {e}");
            Html(render_form(&form, Some(&e.to_string()))).into_response()
        }
    }
}
