use std::path::PathBuf;

use clap::Parser;

use crate::types::LogLevel;

#[derive(Parser, Debug)]
#[command(
    name = "nakama-account-import",
    about = "Migrate relay-server account files into a Nakama backend"
)]
pub struct Cli {
    /// Account record files to migrate (JSON, one account per file)
    #[arg(required = true, value_name = "ACCOUNTFILE")]
    pub account_files: Vec<PathBuf>,

    /// Base URI of the Nakama server, e.g. http://127.0.0.1:7350
    #[arg(short = 'n', long)]
    pub nakama_uri: String,

    /// Server key used as the basic-auth credential for the authenticate
    /// calls.
    /// WARNING: passing via --server-key is visible in process listings.
    /// Prefer the NAKAMA_SERVER_KEY environment variable instead.
    #[arg(short = 'k', long, env = "NAKAMA_SERVER_KEY")]
    pub server_key: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
