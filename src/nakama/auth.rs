//! Identity resolution against the Nakama account API.
//!
//! An account exported from the relay server may already exist in Nakama
//! keyed by a custom ID equal to its platform identifier, or not exist at
//! all. Either way the result is a single identity keyed by device ID with
//! no custom-ID linkage left behind.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use super::endpoints::Endpoints;
use super::error::NakamaError;
use super::responses::SessionTokenResponse;
use super::session::{self, Session};

/// Which reconciliation path an account went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityPath {
    /// A custom-ID identity already existed and was relinked by device ID.
    CustomRelinked,
    /// No prior identity; a new one was created via device authentication.
    DeviceCreated,
}

/// Interpretation of the initial custom-ID authenticate attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CustomAuthOutcome {
    /// The custom identity exists and the body carries a session token.
    Exists,
    /// Clean rejection: no such identity, fall through to the device path.
    Missing,
    /// A genuine server failure, not an absence signal.
    Failed,
}

/// Nakama rejects an absent custom identity with 401/404 (403 on some
/// gateway setups); anything else is a real failure.
fn classify_custom_auth(status: StatusCode) -> CustomAuthOutcome {
    match status {
        StatusCode::OK => CustomAuthOutcome::Exists,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
            CustomAuthOutcome::Missing
        }
        _ => CustomAuthOutcome::Failed,
    }
}

fn id_body(external_id: &str) -> Value {
    json!({ "id": external_id })
}

/// Establish an authenticated session for `external_id`, normalizing any
/// pre-existing custom-ID identity into a device-ID identity.
///
/// 1. Authenticate by custom ID with creation disabled.
/// 2. On 200, link the device ID to the existing identity (must succeed).
/// 3. Otherwise authenticate by device ID with creation enabled.
/// 4. On either path, unlink the custom ID (result ignored).
pub async fn resolve_session(
    client: &Client,
    endpoints: &Endpoints,
    server_key: &str,
    external_id: &str,
) -> Result<(Session, IdentityPath), NakamaError> {
    let body = id_body(external_id);

    let response = session::post_with_server_key(
        client,
        &endpoints.authenticate_custom(),
        server_key,
        &body,
    )
    .await?;
    let status = response.status();

    let (session, path) = match classify_custom_auth(status) {
        CustomAuthOutcome::Exists => {
            tracing::debug!(id = %external_id, "Custom identity exists, linking device ID");
            let token: SessionTokenResponse = response.json().await?;
            let session = Session::new(client.clone(), token.token);

            // The migrated identity must be reachable by device ID, so a
            // rejected link aborts the record.
            let response = session.post(&endpoints.link_device(), &body).await?;
            if response.status() != StatusCode::OK {
                return Err(NakamaError::from_response(response).await);
            }
            (session, IdentityPath::CustomRelinked)
        }
        CustomAuthOutcome::Missing => {
            tracing::debug!(
                id = %external_id,
                %status,
                "No custom identity, authenticating by device ID"
            );
            let response = session::post_with_server_key(
                client,
                &endpoints.authenticate_device(external_id),
                server_key,
                &body,
            )
            .await?;
            if response.status() != StatusCode::OK {
                return Err(NakamaError::from_response(response).await);
            }
            let token: SessionTokenResponse = response.json().await?;
            (
                Session::new(client.clone(), token.token),
                IdentityPath::DeviceCreated,
            )
        }
        CustomAuthOutcome::Failed => {
            return Err(NakamaError::from_response(response).await);
        }
    };

    unlink_custom(&session, endpoints, &body).await?;
    Ok((session, path))
}

/// Drop any residual custom-ID linkage. Idempotent: a non-200 means no
/// linkage existed, so only transport errors are surfaced.
async fn unlink_custom(
    session: &Session,
    endpoints: &Endpoints,
    body: &Value,
) -> Result<(), NakamaError> {
    let response = session.post(&endpoints.unlink_custom(), body).await?;
    let status = response.status();
    if status != StatusCode::OK {
        tracing::debug!(%status, "No custom linkage to remove");
    }
    Ok(())
}
