use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bozor_api::RestApi;
use bozor_core::Catalog;

/// In-memory catalog engine for a multi-domain classifieds marketplace
#[derive(Parser, Debug)]
#[command(name = "bozor")]
#[command(about = "Catalog query/filter/compare engine", long_about = None)]
struct Args {
    /// JSON file with seed listings (array of listing records)
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting bozor v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP API port: {}", args.http_port);

    let catalog = Arc::new(Catalog::new());

    if let Some(seed_path) = &args.seed {
        let json = std::fs::read_to_string(seed_path)?;
        let count = catalog.load_json(&json)?;
        info!("Seeded {} listings from {:?}", count, seed_path);
    }

    let catalog_http = catalog.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(catalog_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("bozor started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
