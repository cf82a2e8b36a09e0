use clap::Parser;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for the search front-end.
///
/// Every field can come from a CLI flag or from the environment (a `.env`
/// file is honoured). The value is handed explicitly to whatever needs it.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "HTML front-end that proxies queries to a search back-end", long_about = None)]
pub struct Config {
    /// Address the front-end listens on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:5000")]
    pub bind_addr: SocketAddr,

    /// Host of the search back-end
    #[arg(long, env = "BACKEND_HOST", default_value = "localhost")]
    pub backend_host: String,

    /// Port of the search back-end
    #[arg(long, env = "BACKEND_PORT", default_value_t = 8080)]
    pub backend_port: u16,

    /// Give up on the back-end after this many milliseconds
    #[arg(long, env = "BACKEND_TIMEOUT_MS", default_value_t = 10_000)]
    pub backend_timeout_ms: u64,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}

impl Config {
    /// Load `.env` (if present) and parse flags and environment.
    pub fn load() -> Self {
        dotenv().ok();
        Self::parse()
    }

    pub fn backend_search_url(&self) -> String {
        format!("http://{}:{}/search", self.backend_host, self.backend_port)
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_millis(self.backend_timeout_ms)
    }
}

#[test]
fn test_config_defaults_and_overrides() {
    let config = Config::parse_from(["searchfront"]);
    assert_eq!(config.backend_search_url(), "http://localhost:8080/search");
    assert_eq!(config.backend_timeout(), Duration::from_secs(10));

    let config = Config::parse_from([
        "searchfront",
        "--backend-host",
        "10.0.0.7",
        "--backend-port",
        "9200",
        "--backend-timeout-ms",
        "250",
    ]);
    assert_eq!(config.backend_search_url(), "http://10.0.0.7:9200/search");
    assert_eq!(config.backend_timeout(), Duration::from_millis(250));
}
