use axum::{
    extract::{rejection::FormRejection, Extension, Form},
    response::{Html, IntoResponse, Json},
};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::registration::{RawSubmission, Relay, ResultDescriptor};

const REGISTRATION_PAGE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/index.html"
));

// axum handler for the registration page
pub async fn page() -> impl IntoResponse {
    Html(REGISTRATION_PAGE)
}

#[utoipa::path(
    post,
    path= "/",
    request_body(content = RawSubmission, content_type = "application/x-www-form-urlencoded"),
    responses (
        (status = 200, description = "Outcome of the registration, success or a generic error", body = ResultDescriptor),
    ),
    tag= "register"
)]
// axum handler for form submission
#[instrument(skip_all)]
pub async fn register(
    Extension(relay): Extension<Arc<Relay>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Json<ResultDescriptor> {
    // Decoded as pairs so a repeated key keeps its first value instead of failing.
    let raw: RawSubmission = match form {
        Ok(Form(pairs)) => pairs.into_iter().collect(),
        Err(rejection) => {
            debug!("Failed to decode form: {}", rejection);
            RawSubmission::default()
        }
    };

    Json(relay.submit(raw).await)
}
