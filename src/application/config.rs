use std::net::{IpAddr, SocketAddr};

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "firefox-flag",
    version,
    about = "Serves a page load payload reporting whether the requesting browser is Firefox"
)]
pub struct Args {
    #[arg(long, env = "FIREFOX_FLAG_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    #[arg(long, env = "FIREFOX_FLAG_PORT", default_value_t = 8080)]
    pub port: u16,

    #[arg(long, env = "FIREFOX_FLAG_RUNTIME_VERSION", default_value = env!("CARGO_PKG_VERSION"))]
    pub runtime_version: String,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "FIREFOX_FLAG_JSON_LOGS", default_value_t = false)]
    pub json_logs: bool,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub host: IpAddr,
    pub port: u16,
    pub runtime_version: String,
    pub log_filter: String,
    pub json_logs: bool,
}

impl RuntimeConfig {
    pub fn from_args(args: Args) -> Result<Self, String> {
        if args.port == 0 {
            return Err("port must be greater than 0".to_owned());
        }

        let runtime_version = args.runtime_version.trim();
        if runtime_version.is_empty() {
            return Err("runtime_version must not be empty".to_owned());
        }

        Ok(Self {
            host: args.host,
            port: args.port,
            runtime_version: runtime_version.to_owned(),
            log_filter: args.log_filter,
            json_logs: args.json_logs,
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    #[must_use]
    pub fn for_test(host: IpAddr, port: u16) -> Self {
        Self {
            host,
            port,
            runtime_version: "test".to_owned(),
            log_filter: "warn".to_owned(),
            json_logs: false,
        }
    }
}
