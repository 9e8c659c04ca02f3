//! Bible Coach CLI and HTTP entry point.
//!
//! Binary name: `bcoach`
//!
//! Parses CLI arguments, loads configuration, sets up tracing, then runs
//! the requested command or starts the HTTP server.

mod cli;
mod http;
mod state;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::generate;

use biblecoach_infra::config::{read_config, settle_config};
use biblecoach_infra::filesystem::resolve_data_dir;
use biblecoach_observe::tracing_setup::{default_filter, init_tracing, shutdown_tracing};
use biblecoach_types::config::CoachConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or logging
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "bcoach", &mut std::io::stdout());
        return Ok(());
    }

    // Read config before tracing exists so `logging.otel` can be honoured;
    // problems with the file are reported once the subscriber is up.
    let data_dir = resolve_data_dir();
    let loaded = read_config(&data_dir).await;
    let config_otel = matches!(&loaded, Ok(Some(config)) if config.logging.otel);
    let flag_otel = matches!(cli.command, Commands::Serve { otel: true, .. });

    init_tracing(
        default_filter(cli.verbose, cli.quiet),
        config_otel || flag_otel,
    )
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let config = settle_config(loaded, &data_dir);
    let result = run(cli, config, data_dir).await;

    shutdown_tracing();
    result
}

async fn run(cli: Cli, mut config: CoachConfig, data_dir: PathBuf) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve {
            host,
            port,
            web_dir,
            otel: _,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(web_dir) = web_dir {
                config.server.web_dir = web_dir;
            }

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let state = AppState::new(config, data_dir);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} Bible Coach listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }
            tracing::info!(%addr, data_dir = %state.data_dir.display(), "server started");

            let router = http::router::build_router(state);
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Ask { file } => {
            let state = AppState::new(config, data_dir);
            cli::ask::ask(&state, file.as_deref(), cli.json)?;
        }

        Commands::Stage { file } => {
            let state = AppState::new(config, data_dir);
            cli::ask::stage(&state, file.as_deref(), cli.json)?;
        }

        Commands::Chat => {
            let state = AppState::new(config, data_dir);
            cli::chat::run_chat_loop(&state).await?;
        }

        Commands::Highlights { text } => {
            cli::highlights::highlights(text, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled in main"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
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
