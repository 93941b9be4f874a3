use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use cross_origin_protection::{CheckError, RequestContext, Verdict};

use super::AppState;

pub async fn cross_origin_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let verdict = state.checker.check(&RequestContext::from_request(&request));

    match verdict {
        Ok(Verdict::Allowed) => next.run(request).await,
        Ok(Verdict::Denied(reason)) => text_response(StatusCode::FORBIDDEN, reason.message()),
        Err(err) => middleware_error_response(err),
    }
}

fn middleware_error_response(err: CheckError) -> Response {
    tracing::error!(error = %err, "cross-origin check failed");
    text_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "cross-origin protection is misconfigured",
    )
}

fn text_response(status: StatusCode, message: &'static str) -> Response {
    let mut response = Response::new(Body::from(message));
    *response.status_mut() = status;
    response
}
