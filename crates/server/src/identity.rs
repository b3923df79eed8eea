use axum::{extract::Request, middleware::Next, response::Response};

/// Header an upstream gateway uses to forward the identity it resolved.
pub const IDENTITY_HEADER: &str = "x-authenticated-user";

/// Caller identity resolved outside this service and passed through on
/// [`IDENTITY_HEADER`]. The service never authenticates; handlers only read
/// the value when it is present.
#[derive(Clone, Debug)]
pub struct CallerIdentity(pub String);

/// Middleware: stash the forwarded identity, if any, as a request extension.
/// Requests without one proceed untouched.
pub async fn resolve_caller_identity(mut req: Request, next: Next) -> Response {
    let identity = req
        .headers()
        .get(IDENTITY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| CallerIdentity(s.to_string()));

    if let Some(identity) = identity {
        req.extensions_mut().insert(identity);
    }
    next.run(req).await
}
