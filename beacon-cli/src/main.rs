use anyhow::{Context, Result};
use beacon_server::{BeaconServer, ServerConfig};
use clap::Parser;
use colored::*;
use std::net::IpAddr;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Rendezvous and signaling relay for one-to-many WebRTC broadcasts.
#[derive(Parser, Debug)]
#[command(name = "beacon", author, version, about, long_about = None)]
struct Args {
    /// Address to bind the HTTP/WebSocket listener to
    #[arg(long, default_value = "0.0.0.0", env = "BEACON_BIND")]
    bind: IpAddr,

    /// Listening port
    #[arg(short, long, default_value_t = 4000, env = "BEACON_PORT")]
    port: u16,

    /// Capacity of the room hub command queue
    #[arg(long, default_value_t = 256, env = "BEACON_COMMAND_BUFFER")]
    command_buffer: usize,

    /// Seconds between WebSocket pings to each client
    #[arg(long, default_value_t = 30, env = "BEACON_HEARTBEAT_SECS")]
    heartbeat_secs: u64,

    /// Seconds a single socket write may block before the client is dropped
    #[arg(long, default_value_t = 10, env = "BEACON_WRITE_TIMEOUT_SECS")]
    write_timeout_secs: u64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info", env = "BEACON_LOG")]
    log_level: String,
}

impl Args {
    fn server_config(&self) -> Result<ServerConfig> {
        let config = ServerConfig {
            bind: self.bind,
            port: self.port,
            command_buffer: self.command_buffer,
            heartbeat_interval: Duration::from_secs(self.heartbeat_secs),
            write_timeout: Duration::from_secs(self.write_timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.server_config()?;
    println!(
        "{} {}",
        "📡 Beacon relay".green().bold(),
        format!("ws://{}/ws", config.socket_addr()).cyan()
    );

    info!("Initializing signaling server with {:?}", config);
    BeaconServer::new(config)?
        .run()
        .await
        .context("Signaling server failed")?;

    Ok(())
}
