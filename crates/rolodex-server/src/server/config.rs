//! Command-line and environment configuration.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Raw arguments, each with an environment fallback so the binary works
/// both from a shell and a container manifest.
#[derive(Parser, Clone, Debug)]
#[command(name = "rolodex-server", version, about = "REST server for client records")]
pub struct CliArgs {
    /// Address to bind the HTTP listener on.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP listener on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Path to the JSON snapshot file backing the store. When absent the
    /// store is purely in-memory and records do not survive restarts.
    #[arg(long, env = "DATA_PATH")]
    pub data_path: Option<PathBuf>,
}

/// Validated runtime configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub data_path: Option<PathBuf>,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let host: IpAddr = args
            .host
            .parse()
            .map_err(|err| anyhow::anyhow!("invalid host `{}`: {err}", args.host))?;
        Ok(Self {
            bind_addr: SocketAddr::new(host, args.port),
            data_path: args.data_path,
        })
    }
}
