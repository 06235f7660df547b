//! clipbox: single-item online clipboard over a hosted key-value store

use anyhow::Result;
use clap::{Parser, Subcommand};
use clipbox::{
    config::{Config, LogFormat},
    content::{detect_content, format_json},
    http::HttpServer,
    storage::build_store,
};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "clipbox")]
#[command(about = "Single-item online clipboard with content-type detection")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "clipbox.toml")]
    config: PathBuf,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the clipbox HTTP server
    Serve {
        /// Listen address override
        #[arg(short, long)]
        listen: Option<String>,
    },

    /// Write a starter configuration file
    Init {
        /// Output directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Classify a file (or stdin) the way the server would
    Detect {
        /// Path to read; stdin when omitted
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        let mut config = Config::default();
        config.storage.apply_env();
        config
    };

    setup_logging(&config, cli.verbose)?;

    match cli.command {
        Commands::Serve { listen } => serve(config, listen).await,
        Commands::Init { path } => init_config(path),
        Commands::Detect { file } => detect(file),
    }
}

fn setup_logging(config: &Config, verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => config.logging.level.into(),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    match config.logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_max_level(level)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init(),
    }
    Ok(())
}

async fn serve(mut config: Config, listen: Option<String>) -> Result<()> {
    if let Some(addr) = listen {
        config.http.listen_addr = addr;
    }
    config.validate()?;

    info!("Starting clipbox...");
    info!("Storage backend: {:?}", config.storage.backend);
    info!(
        "Content ceiling: {} bytes, key: {}",
        config.storage.max_content_bytes, config.storage.key
    );

    let store = build_store(&config.storage)?;
    let server = HttpServer::new(config.http.clone(), store);

    let (shutdown_tx, shutdown_rx) = tokio::sync::broadcast::channel(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl-C, shutting down");
            let _ = shutdown_tx.send(());
        }
    });

    server.run(shutdown_rx).await
}

fn init_config(path: PathBuf) -> Result<()> {
    let config = Config::default();
    let config_path = path.join("clipbox.toml");

    let toml_content = format!(
        r#"# clipbox configuration

[http]
listen_addr = "{}"
cors_enabled = false

[storage]
# "edge-config" reads via the EDGE_CONFIG connection string and writes via
# the management API (VERCEL_TOKEN); "memory" keeps the record in process.
backend = "edge-config"
key = "{}"
max_content_bytes = {}
timeout_secs = {}

[logging]
format = "text"
level = "info"
"#,
        config.http.listen_addr,
        config.storage.key,
        config.storage.max_content_bytes,
        config.storage.timeout_secs,
    );

    std::fs::write(&config_path, toml_content)?;
    println!("Created configuration file: {}", config_path.display());

    Ok(())
}

fn detect(file: Option<PathBuf>) -> Result<()> {
    let content = match file {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let detection = detect_content(&content);
    println!("type:     {}", detection.kind);
    println!(
        "language: {}",
        detection.language.unwrap_or("(none)")
    );
    println!("json:     {}", detection.is_valid_json);

    if detection.is_valid_json {
        println!("\n{}", format_json(&content));
    }

    Ok(())
}
