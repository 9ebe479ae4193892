use serde::Deserialize;

/// Body of a successful `/v2/account/authenticate/*` call.
///
/// Nakama returns more fields (refresh token, created flag); only the bearer
/// token is read here.
#[derive(Debug, Deserialize)]
pub struct SessionTokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_extracted() {
        let json = r#"{"token": "abc.def.ghi"}"#;
        let resp: SessionTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "abc.def.ghi");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let json = r#"{"token": "t", "refresh_token": "r", "created": true}"#;
        let resp: SessionTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "t");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let json = r#"{"refresh_token": "r"}"#;
        assert!(serde_json::from_str::<SessionTokenResponse>(json).is_err());
    }
}
