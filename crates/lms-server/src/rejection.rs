use axum::body::to_bytes;
use axum::response::{IntoResponse, Response};
use http::{HeaderMap, StatusCode, header};
use lms_core::{ApiError, ErrorKind, Failure};

/// Largest framework rejection body kept as the envelope message
const REJECTION_BODY_LIMIT: usize = 16 * 1024;

/// Any matched path hit with a method it does not serve
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::not_found("Route not found")
}

/// Wrap error responses the framework produced into envelopes
///
/// Extractor rejections (`Path`, `Query`, body limits) and other error
/// responses built outside the error boundary arrive here as plain text or
/// with no body. Statuses the taxonomy names keep their kind with the
/// rejection text as message; everything else becomes the generic failure.
pub async fn envelope_rejections(response: Response) -> Response {
    if !is_unshaped_error(&response) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let text = match to_bytes(body, REJECTION_BODY_LIMIT).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_owned(),
        Err(e) => {
            tracing::debug!(error = %e, "discarding unreadable rejection body");
            String::new()
        }
    };

    let mut rendered = classify(parts.status, text).into_response();
    carry_headers(parts.headers, rendered.headers_mut());
    rendered
}

fn is_unshaped_error(response: &Response) -> bool {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return false;
    }

    !response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

fn classify(status: StatusCode, text: String) -> Failure {
    let kind = match status {
        StatusCode::BAD_REQUEST => ErrorKind::BadRequest,
        StatusCode::UNAUTHORIZED => ErrorKind::Unauthorized,
        StatusCode::FORBIDDEN => ErrorKind::Forbidden,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::METHOD_NOT_ALLOWED => return ApiError::not_found("Route not found").into(),
        StatusCode::CONFLICT => ErrorKind::Conflict,
        _ => return Failure::unclassified(format!("{status} rejection: {text}")),
    };

    ApiError::new(kind, text).into()
}

/// Keep headers such as `allow` or `www-authenticate`; the body headers
/// belong to the envelope
fn carry_headers(from: HeaderMap, to: &mut HeaderMap) {
    let mut current = None;
    for (name, value) in from {
        if let Some(name) = name {
            current = Some(name);
        }
        let Some(ref name) = current else {
            continue;
        };
        if *name == header::CONTENT_TYPE || *name == header::CONTENT_LENGTH {
            continue;
        }
        if !to.contains_key(name) {
            to.append(name.clone(), value);
        }
    }
}
