use std::time::Duration;

use axum::{
    extract::{Extension, Query, State},
    http::Version,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::debug;

use crate::identity::CallerIdentity;
use crate::routes::ServerState;

/// Response header echoing the HTTP version the connection negotiated.
pub const PROTOCOL_HEADER: &str = "x-protocol";

#[derive(Deserialize, Debug)]
pub struct SlowParams {
    pub sleep: Option<u64>,
}

/// `GET /slow?sleep={ms}` — test-harness endpoint.
///
/// Responds 200 with the forwarded caller identity in the body (empty when
/// anonymous) and the negotiated protocol in `X-Protocol`. When `sleep` is
/// given, the shared latch opens the instant the handler parks, so a test
/// waiting on it knows the request is in flight without polling.
///
/// Cancellation while parked (client gone, forced shutdown) drops this
/// future mid-sleep; no locks are held and the store is never touched, so
/// that is a clean exit rather than a fault.
pub async fn slow_request(
    State(state): State<ServerState>,
    version: Version,
    identity: Option<Extension<CallerIdentity>>,
    Query(params): Query<SlowParams>,
) -> Response {
    let body = identity.map(|Extension(CallerIdentity(name))| name).unwrap_or_default();
    let protocol = format!("{version:?}");

    if let Some(ms) = params.sleep {
        state.slow_latch.open();
        debug!(ms, "slow request parked");
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    ([(PROTOCOL_HEADER, protocol)], body).into_response()
}
