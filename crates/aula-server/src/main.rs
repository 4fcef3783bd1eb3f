use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use clap::Parser;
use sea_orm::{ConnectOptions, Database};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod app;
mod auth;
mod db;
mod opt;
mod routes;
mod session;

use crate::opt::{Cli, Commands, Run};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(run) => serve(run).await,
    }
}

async fn serve(opt: Run) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut options = ConnectOptions::new(&opt.database_url);
    if let Some(min) = opt.db.db_min_connections {
        options.min_connections(min);
    }
    if let Some(max) = opt.db.db_max_connections {
        options.max_connections(max);
    }

    let conn = Database::connect(options).await?;
    db::migrate(&conn)
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn std::error::Error, "failed to run migrations"))?;

    let app = app::create_app(conn);

    let addr = SocketAddr::from((opt.host.unwrap_or(DEFAULT_HOST), opt.port.unwrap_or(DEFAULT_PORT)));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
