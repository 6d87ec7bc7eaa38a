use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Audit logging middleware.
///
/// Logs every API request as a structured event with a per-request id.
/// Query strings and bodies carry client identifiers and are not logged.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        "api_request"
    );

    response
}
