//! Server configuration.
//!
//! Every setting can be given as a flag or through its `LEXICON_*`
//! environment variable. Values that do not parse stop the server at startup.

use clap::builder::BoolishValueParser;
use clap::Parser;
use std::path::PathBuf;

/// Read-only API and reader bundle for a lexicon corpus.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "backend")]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "LEXICON_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "LEXICON_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite file holding the corpus. It is only ever opened read-only.
    #[arg(long, env = "LEXICON_DB", default_value = "lexicon.sqlite")]
    pub database: PathBuf,

    /// Open the reader in the default browser once the server is up
    #[arg(long, env = "LEXICON_OPEN_BROWSER", value_parser = BoolishValueParser::new())]
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
