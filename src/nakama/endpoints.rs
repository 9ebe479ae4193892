/// URL construction for the Nakama HTTP API calls the importer makes.
///
/// The base URI is validated and normalized (no trailing slash) by
/// `Config::from_cli` before it reaches this type.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Authenticate against an existing custom-ID identity without creating
    /// one when it is absent.
    pub fn authenticate_custom(&self) -> String {
        format!("{}/v2/account/authenticate/custom?create=false", self.base)
    }

    /// Authenticate by device ID, creating the identity when absent and
    /// assigning the given username.
    pub fn authenticate_device(&self, username: &str) -> String {
        let mut url = format!(
            "{}/v2/account/authenticate/device?create=true&username=",
            self.base
        );
        url.extend(url::form_urlencoded::byte_serialize(username.as_bytes()));
        url
    }

    pub fn link_device(&self) -> String {
        format!("{}/v2/account/link/device", self.base)
    }

    pub fn unlink_custom(&self) -> String {
        format!("{}/v2/account/unlink/custom", self.base)
    }

    pub fn account(&self) -> String {
        format!("{}/v2/account", self.base)
    }

    pub fn storage(&self) -> String {
        format!("{}/v2/storage", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://127.0.0.1:7350")
    }

    #[test]
    fn test_authenticate_custom_disables_creation() {
        assert_eq!(
            endpoints().authenticate_custom(),
            "http://127.0.0.1:7350/v2/account/authenticate/custom?create=false"
        );
    }

    #[test]
    fn test_authenticate_device_sets_username() {
        assert_eq!(
            endpoints().authenticate_device("OVR-ORG-123"),
            "http://127.0.0.1:7350/v2/account/authenticate/device?create=true&username=OVR-ORG-123"
        );
    }

    #[test]
    fn test_authenticate_device_encodes_username() {
        let url = endpoints().authenticate_device("a b+c");
        assert_eq!(
            url,
            "http://127.0.0.1:7350/v2/account/authenticate/device?create=true&username=a+b%2Bc"
        );
    }

    #[test]
    fn test_account_and_storage_paths() {
        assert_eq!(endpoints().account(), "http://127.0.0.1:7350/v2/account");
        assert_eq!(endpoints().storage(), "http://127.0.0.1:7350/v2/storage");
    }

    #[test]
    fn test_link_and_unlink_paths() {
        assert_eq!(
            endpoints().link_device(),
            "http://127.0.0.1:7350/v2/account/link/device"
        );
        assert_eq!(
            endpoints().unlink_custom(),
            "http://127.0.0.1:7350/v2/account/unlink/custom"
        );
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let e = Endpoints::new("http://host:7350/");
        assert_eq!(e.account(), "http://host:7350/v2/account");
    }
}
