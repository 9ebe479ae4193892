use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while loading an exported account file.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("account file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("account record is missing profile.client.{0}")]
    MissingField(&'static str),

    #[error("account record has an empty xplatformid")]
    EmptyPlatformId,
}

/// One exported relay account, read from a single input file.
///
/// The client and server profiles are opaque to the importer and are
/// re-serialized verbatim into Nakama storage; only `xplatformid` and
/// `displayname` are inspected. Lock hash/salt may be absent from older
/// exports and serialize as null.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRecord {
    pub profile: Profile,
    #[serde(default)]
    pub account_lock_hash: Option<String>,
    #[serde(default)]
    pub account_lock_salt: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub client: Map<String, Value>,
    pub server: Map<String, Value>,
}

impl AccountRecord {
    /// Parse a record from raw file contents and check the fields the
    /// migration reads. The platform identifier must be present and
    /// non-empty before any network call is attempted.
    pub fn from_json(contents: &str) -> Result<Self, AccountError> {
        let record: Self = serde_json::from_str(contents)?;

        match record.client_str("xplatformid") {
            None => return Err(AccountError::MissingField("xplatformid")),
            Some("") => return Err(AccountError::EmptyPlatformId),
            Some(_) => {}
        }
        if record.client_str("displayname").is_none() {
            return Err(AccountError::MissingField("displayname"));
        }

        Ok(record)
    }

    /// External platform identifier, unique per player. Non-empty for any
    /// record produced by `from_json`.
    pub fn xplatform_id(&self) -> &str {
        self.client_str("xplatformid").unwrap_or_default()
    }

    /// Display name to install on the destination account.
    pub fn display_name(&self) -> &str {
        self.client_str("displayname").unwrap_or_default()
    }

    fn client_str(&self, key: &str) -> Option<&str> {
        self.profile.client.get(key).and_then(Value::as_str)
    }
}
