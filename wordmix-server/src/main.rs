//! wordmix-server - Word puzzle service
//!
//! Serves random words and scrambled copies of their letters to the game
//! client. The word list is loaded once at startup; the process exits
//! before binding its port if the list is unreachable, malformed, or leaves
//! no eligible words after filtering.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordmix_common::config::{ConfigOverrides, ServiceConfig, TomlConfig};

/// Command-line arguments for wordmix-server
#[derive(Parser, Debug)]
#[command(name = "wordmix-server")]
#[command(about = "Random word and anagram service for word-guessing games")]
#[command(version)]
struct Args {
    /// Port to listen on (required with --bucket)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Verbose logging, including word list statistics
    #[arg(short, long)]
    debug: bool,

    /// Config file (defaults to the platform config dir)
    #[arg(short, long, env = "WORDMIX_CONFIG")]
    config: Option<PathBuf>,

    /// Read the word list from a local CSV file
    #[arg(long, env = "WORDS_FILE")]
    words_file: Option<PathBuf>,

    /// Read the word list from this storage bucket
    #[arg(long, env = "BUCKET_NAME")]
    bucket: Option<String>,

    /// Object name of the word list inside the bucket
    #[arg(long, env = "OBJECT_NAME")]
    object: Option<String>,

    /// Object storage endpoint
    #[arg(long, env = "STORAGE_URL")]
    storage_url: Option<String>,

    /// Directory with the game client files
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

impl Args {
    /// DEBUG in the environment enables debug mode whatever its value
    fn debug_enabled(&self) -> bool {
        self.debug || std::env::var_os("DEBUG").is_some()
    }

    fn into_overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            port: self.port,
            debug: self.debug_enabled(),
            static_dir: self.static_dir,
            words_file: self.words_file,
            bucket: self.bucket,
            object: self.object,
            storage_url: self.storage_url,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug_enabled() {
        "wordmix_server=debug,wordmix_common=debug,tower_http=debug"
    } else {
        "wordmix_server=info,wordmix_common=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting wordmix-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config_path = args.config.clone();
    let file_config = TomlConfig::load(config_path.as_deref()).map_err(|e| {
        error!("{}", e);
        e
    })?;

    let config = ServiceConfig::resolve(args.into_overrides(), file_config).map_err(|e| {
        error!("{}", e);
        e
    })?;

    if let Err(e) = wordmix_server::startup::run(config).await {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
