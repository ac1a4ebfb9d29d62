use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Header clients use to correlate their requests with our logs.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Log method, path and correlation id of every request, and echo the
/// correlation id back on the response.
pub async fn request_logging(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let correlation_id = correlation_id(req.headers());

    match &correlation_id {
        Some(id) => tracing::info!(%method, %path, correlation_id = %id, "request"),
        None => tracing::info!(%method, %path, "request without X-Correlation-Id header"),
    }

    let mut response = next.run(req).await;

    tracing::debug!(%method, %path, status = response.status().as_u16(), "response");

    if let Some(id) = correlation_id {
        if let Ok(value) = HeaderValue::from_str(&id) {
            response.headers_mut().insert(CORRELATION_ID_HEADER, value);
        }
    }

    response
}

fn correlation_id(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(CORRELATION_ID_HEADER)?.to_str().ok()?.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.to_owned())
}
