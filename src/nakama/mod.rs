//! Nakama API client: identity resolution and profile upload.
//!
//! Mirrors the importer's two responsibilities. `auth` normalizes a relay
//! account's platform identifier into a device-ID identity and returns an
//! authenticated session; `storage` uses that session to write the display
//! name, auth secrets, and profile blobs.

pub mod auth;
pub mod endpoints;
pub mod error;
pub mod responses;
pub mod session;
pub mod storage;

use reqwest::Client;

use crate::account::AccountRecord;

pub use auth::IdentityPath;
pub use endpoints::Endpoints;
pub use error::NakamaError;
pub use storage::SecretsOutcome;

/// What happened while migrating one account record.
#[derive(Debug, Clone, Copy)]
pub struct MigrationOutcome {
    pub identity: IdentityPath,
    pub secrets: SecretsOutcome,
}

/// Migrate a single account: resolve a device-ID identity, then upload the
/// display name, auth secrets, and profile blobs on the resulting session.
///
/// Any fatal condition aborts the record immediately; a partially migrated
/// identity may remain on the server (no rollback).
pub async fn migrate_account(
    client: &Client,
    endpoints: &Endpoints,
    server_key: &str,
    account: &AccountRecord,
) -> Result<MigrationOutcome, NakamaError> {
    let (session, identity) =
        auth::resolve_session(client, endpoints, server_key, account.xplatform_id()).await?;
    let secrets = storage::upload_profile(&session, endpoints, account).await?;
    Ok(MigrationOutcome { identity, secrets })
}
