use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Runtime configuration for the server.
#[derive(Debug, Clone, Parser)]
#[command(name = "rivet")]
#[command(about = "Minimal HTTP/1.1 server on raw TCP sockets")]
pub struct Config {
    /// Directory served by the /files/ routes. File routes answer 404 when unset.
    #[arg(long, env = "SERVE_DIR")]
    pub directory: Option<PathBuf>,

    /// Address the listener binds to
    #[arg(long, default_value = "localhost:4221", env = "LISTEN")]
    pub listen: String,

    /// Per-connection read deadline in seconds (no deadline when unset)
    #[arg(long = "read-timeout", env = "READ_TIMEOUT")]
    pub read_timeout_secs: Option<u64>,

    /// Largest request body accepted, in bytes
    #[arg(long = "max-body-size", default_value_t = 8 * 1024 * 1024, env = "MAX_BODY_SIZE")]
    pub max_body_size: usize,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs.map(Duration::from_secs)
    }
}
