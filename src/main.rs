use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod config;
mod gateways;

use config::Config;

#[derive(Parser)]
#[command(version, about = "Address book with geocoding and distance queries")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }
    run(cfg).await
}

async fn run(cfg: Config) -> Result<()> {
    let Config {
        db,
        geocoding,
        webserver,
    } = cfg;

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        db.conn_sqlite,
        db.conn_pool_size
    );
    let connections =
        addrbook_db_sqlite::Connections::init(&db.conn_sqlite, db.conn_pool_size.into())?;
    addrbook_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let geo_gw = gateways::geocoding_gateway(&geocoding);

    addrbook_webserver::run(
        connections,
        webserver.enable_cors,
        geo_gw,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}
