//! Profile upload into Nakama key-value storage.
//!
//! Three sequential writes per record: the display name on the account, the
//! auth secrets (create-only), and the client/server profile blobs
//! (unconditional overwrite).

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::json;

use super::endpoints::Endpoints;
use super::error::NakamaError;
use super::session::Session;
use crate::account::AccountRecord;

/// One object in a `/v2/storage` write batch. `value` is the payload
/// serialized to a JSON string, which is how Nakama stores it.
#[derive(Debug, Serialize)]
pub struct StorageObject {
    pub collection: &'static str,
    pub key: &'static str,
    pub value: String,
    /// `Some("*")` writes only if the object does not exist yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct StorageWrite {
    objects: Vec<StorageObject>,
}

/// Outcome of the auth-secrets write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretsOutcome {
    /// No secrets object existed; one was created.
    Created,
    /// An object already existed and was left untouched.
    AlreadyPresent,
}

/// The secrets write uses version `"*"`, so the server rejects it whenever
/// an object already exists. Existing secrets are never overwritten.
fn classify_secrets_write(status: StatusCode) -> SecretsOutcome {
    if status == StatusCode::OK {
        SecretsOutcome::Created
    } else {
        SecretsOutcome::AlreadyPresent
    }
}

fn auth_secrets_object(account: &AccountRecord) -> Result<StorageObject, serde_json::Error> {
    let value = serde_json::to_string(&json!({
        "AccountLockHash": account.account_lock_hash,
        "AccountLockSalt": account.account_lock_salt,
    }))?;
    Ok(StorageObject {
        collection: "relayConfig",
        key: "authSecrets",
        value,
        version: Some("*"),
    })
}

fn profile_objects(account: &AccountRecord) -> Result<Vec<StorageObject>, serde_json::Error> {
    Ok(vec![
        StorageObject {
            collection: "profile",
            key: "client",
            value: serde_json::to_string(&account.profile.client)?,
            version: None,
        },
        StorageObject {
            collection: "profile",
            key: "server",
            value: serde_json::to_string(&account.profile.server)?,
            version: None,
        },
    ])
}

/// Upload the account's display name, auth secrets, and profile blobs using
/// an authenticated session.
pub async fn upload_profile(
    session: &Session,
    endpoints: &Endpoints,
    account: &AccountRecord,
) -> Result<SecretsOutcome, NakamaError> {
    let response = session
        .put(
            &endpoints.account(),
            &json!({ "display_name": account.display_name() }),
        )
        .await?;
    if response.status() != StatusCode::OK {
        return Err(NakamaError::from_response(response).await);
    }

    let secrets = StorageWrite {
        objects: vec![auth_secrets_object(account)?],
    };
    let response = session
        .put(&endpoints.storage(), &serde_json::to_value(&secrets)?)
        .await?;
    let outcome = classify_secrets_write(response.status());
    if outcome == SecretsOutcome::AlreadyPresent {
        tracing::debug!(id = %account.xplatform_id(), "Auth secrets already present, keeping them");
    }

    let profiles = StorageWrite {
        objects: profile_objects(account)?,
    };
    let response = session
        .put(&endpoints.storage(), &serde_json::to_value(&profiles)?)
        .await?;
    if response.status() != StatusCode::OK {
        return Err(NakamaError::from_response(response).await);
    }

    Ok(outcome)
}
