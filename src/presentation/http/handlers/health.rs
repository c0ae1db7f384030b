//! Health Check Handler

/// Readiness probe. Always `200 OK` with a plain-text body.
pub async fn healthz() -> &'static str {
    "OK"
}
