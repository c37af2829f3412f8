//! worklog - minimal worklog API server
//!
//! Serves the worklog HTTP API: POST /entries to record a titled entry,
//! GET /entries to read them back. Configuration comes from flags and the
//! environment (`.env` honored via dotenvy).

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;
use worklog_server::db::create_pool;
use worklog_server::http::{run_server, ServerConfig};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "worklog",
    author,
    version,
    about = "HTTP API for worklog entries backed by PostgreSQL"
)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 3030)]
    port: u16,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Origin allowed to make cross-origin requests with credentials
    #[arg(long, default_value = "http://localhost:3000")]
    cors_origin: String,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init_tracing(cli.debug)?;

    let pool = create_pool(&cli.database_url)
        .await
        .context("failed to connect to database")?;
    tracing::info!("Database pool ready");

    let config = ServerConfig {
        bind_addr: SocketAddr::new(cli.host, cli.port),
        allowed_origin: cli.cors_origin,
    };

    run_server(pool, config)
        .await
        .context("server exited with error")?;

    Ok(())
}
