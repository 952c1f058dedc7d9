//! # hostbookd — hostbook daemon
//!
//! Composition root that wires all adapters together and serves or renders
//! the machine inventory page.
//!
//! ## Responsibilities
//! - Parse the command line and configuration (config file, env vars)
//! - Initialize `tracing` logging
//! - Pick the content source (TOML file or the built-in catalog)
//! - Construct application services, injecting adapters via port traits
//! - `serve`: bind to a TCP port and serve until SIGTERM/SIGINT
//! - `render`: write the HTML page once to a file or stdout
//! - `check`: validate the content and print a summary
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;

use std::error::Error;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use hostbook_adapter_content_toml::TomlPageSource;
use hostbook_adapter_http_axum::state::AppState;
use hostbook_adapter_http_axum::{HtmlPageRenderer, html_renderer};
use hostbook_app::ports::PageSource;
use hostbook_app::services::inventory_service::InventoryService;
use hostbook_app::static_source::StaticPageSource;

use crate::cli::{CommandLine, Commands};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = CommandLine::parse_args();
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config.logging.filter);

    let command = cli.command();
    match &config.content.path {
        Some(path) => {
            let source = TomlPageSource::new(path);
            tracing::info!(path = %source.path().display(), "using content file");
            run(command, &config, source).await
        }
        None => {
            tracing::info!("using built-in inventory");
            run(command, &config, StaticPageSource::default()).await
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?} ({err}), falling back to info");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run<S>(command: Commands, config: &Config, source: S) -> Result<(), Box<dyn Error>>
where
    S: PageSource + Send + Sync + 'static,
{
    let inventory = InventoryService::new(source);
    let renderer = html_renderer(config.site.clone());

    match command {
        Commands::Serve => serve(config, inventory, renderer).await,
        Commands::Render { output } => {
            let page = inventory.current_page().await?;
            let html = renderer.render(&page)?;
            write_output(output.as_deref(), &html).await
        }
        Commands::Check => {
            let page = inventory.current_page().await?;
            println!(
                "{}: {} machines in {} blocks",
                page.title,
                page.machine_count(),
                page.blocks.len()
            );
            Ok(())
        }
    }
}

async fn serve<S>(
    config: &Config,
    inventory: InventoryService<S>,
    renderer: HtmlPageRenderer,
) -> Result<(), Box<dyn Error>>
where
    S: PageSource + Send + Sync + 'static,
{
    // Fail fast on broken content instead of on the first request.
    let page = inventory.current_page().await?;
    tracing::info!(title = %page.title, machines = page.machine_count(), "content loaded");

    let state = AppState::new(inventory, renderer);
    let app = hostbook_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "hostbookd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("hostbookd stopped");
    Ok(())
}

async fn write_output(output: Option<&Path>, html: &str) -> Result<(), Box<dyn Error>> {
    use tokio::io::AsyncWriteExt;

    match output {
        Some(path) => {
            tokio::fs::write(path, html).await?;
            tracing::info!(path = %path.display(), bytes = html.len(), "page written");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(html.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
