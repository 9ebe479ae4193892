use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use url::Url;

use crate::types::LogLevel;

/// Validated application configuration.
pub struct Config {
    pub account_files: Vec<PathBuf>,
    /// Normalized base URI of the destination server (no trailing slash).
    pub nakama_uri: String,
    pub server_key: String,
    pub timeout: Duration,
    pub log_level: LogLevel,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("account_files", &self.account_files)
            .field("nakama_uri", &self.nakama_uri)
            .field("server_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_cli(cli: crate::cli::Cli) -> anyhow::Result<Self> {
        let url = Url::parse(&cli.nakama_uri)
            .with_context(|| format!("Cannot parse '{}' as a URI", cli.nakama_uri))?;
        match url.scheme() {
            "http" | "https" => {}
            other => anyhow::bail!(
                "Unsupported scheme '{}' in '{}': expected http or https",
                other,
                cli.nakama_uri
            ),
        }
        if url.host_str().is_none() {
            anyhow::bail!("URI '{}' has no host", cli.nakama_uri);
        }

        Ok(Self {
            account_files: cli.account_files,
            nakama_uri: cli.nakama_uri.trim_end_matches('/').to_string(),
            server_key: cli.server_key,
            timeout: Duration::from_secs(cli.timeout),
            log_level: cli.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn make_cli(args: &[&str]) -> crate::cli::Cli {
        let mut argv = vec!["nakama-account-import"];
        argv.extend_from_slice(args);
        crate::cli::Cli::try_parse_from(argv).unwrap()
    }

    fn base_args(uri: &str) -> Vec<String> {
        vec![
            "-n".to_string(),
            uri.to_string(),
            "-k".to_string(),
            "defaultkey".to_string(),
            "acct.json".to_string(),
        ]
    }

    fn config_for(uri: &str) -> anyhow::Result<Config> {
        let args = base_args(uri);
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        Config::from_cli(make_cli(&refs))
    }

    #[test]
    fn test_valid_uri_accepted() {
        let config = config_for("http://127.0.0.1:7350").unwrap();
        assert_eq!(config.nakama_uri, "http://127.0.0.1:7350");
        assert_eq!(config.server_key, "defaultkey");
        assert_eq!(config.account_files, vec![PathBuf::from("acct.json")]);
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let config = config_for("https://nakama.example.com/").unwrap();
        assert_eq!(config.nakama_uri, "https://nakama.example.com");
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        assert!(config_for("ftp://host:7350").is_err());
    }

    #[test]
    fn test_bare_host_rejected() {
        assert!(config_for("localhost:7350").is_err());
    }

    #[test]
    fn test_default_timeout() {
        let config = config_for("http://host:7350").unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_timeout_flag() {
        let cli = make_cli(&[
            "-n",
            "http://host:7350",
            "-k",
            "key",
            "--timeout",
            "5",
            "acct.json",
        ]);
        let config = Config::from_cli(cli).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_debug_redacts_server_key() {
        let config = config_for("http://host:7350").unwrap();
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("defaultkey"));
    }

    #[test]
    fn test_account_files_required() {
        assert!(crate::cli::Cli::try_parse_from([
            "nakama-account-import",
            "-n",
            "http://host:7350",
            "-k",
            "key",
        ])
        .is_err());
    }
}
