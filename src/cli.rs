use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::{HostConfig, ServeOverrides};
use commands::serve;

#[derive(Parser)]
#[command(name = "txdash")]
#[command(about = "Transactions dashboard host: serves the browser bundle and its runtime settings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    ///
    /// Values not given here fall back to txdash.toml, then TXDASH_* variables,
    /// then built-in defaults.
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Directory holding the built frontend (index.html, wasm, js)
        #[arg(short, long, env = "TXDASH_DIST_DIR")]
        dist_dir: Option<PathBuf>,

        /// Base URL of the transactions API the browser should call
        ///
        /// Example: http://localhost:5000/api
        #[arg(short, long, env = "TXDASH_API_BASE_URL")]
        api_base_url: Option<String>,

        /// Records per table page
        #[arg(short, long, env = "TXDASH_PAGE_SIZE")]
        page_size: Option<u32>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, dist_dir, api_base_url, page_size } => {
                let config = HostConfig::load()?.with_overrides(ServeOverrides {
                    bind_address,
                    dist_dir,
                    api_base_url,
                    page_size,
                });
                serve(config).await?;
            }
        }
        Ok(())
    }
}
