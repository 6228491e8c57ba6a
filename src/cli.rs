use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(version, about = "Points of interest web service")]
pub struct Args {
    /// Configuration file [default: poidb.toml]
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,
}

impl Args {
    /// Command line arguments take precedence over
    /// the configuration file and the environment.
    pub fn apply_to(&self, cfg: &mut Config) {
        if let Some(db_url) = &self.db_url {
            cfg.db.conn_sqlite = db_url.clone();
        }
        if self.enable_cors {
            cfg.webserver.enable_cors = true;
        }
    }
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    dotenvy::dotenv().ok();

    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    args.apply_to(&mut cfg);

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections =
        poidb_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    poidb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    poidb_webserver::run(
        connections,
        cfg.webserver.enable_cors,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}
