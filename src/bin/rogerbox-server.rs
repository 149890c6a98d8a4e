// ABOUTME: RogerBox HTTP server binary serving suggestions, courses, progress and checkout
// ABOUTME: Refuses to start when the catalog cannot serve every recommendable course
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

//! # RogerBox Server Binary
//!
//! Loads configuration from the environment, checks the catalog, wires the
//! Wompi client when keys are present and serves the HTTP API until SIGINT
//! or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use rogerbox::{
    catalog::CourseCatalog,
    config::ServerConfig,
    logging::{self, AppLogger},
    resources::ServerResources,
    routes,
    services::CheckoutService,
};
use rogerbox_payments::{initialize_shared_client, WompiClient};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "rogerbox-server")]
#[command(about = "RogerBox - fitness course marketplace API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Where async payment rails send the buyer after paying
    #[arg(long, env = "WOMPI_REDIRECT_URL")]
    redirect_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting RogerBox server");
    AppLogger::log_config_summary(&config.summary());

    initialize_shared_client(
        config.http_client.timeout_secs,
        config.http_client.connect_timeout_secs,
    );

    let catalog = CourseCatalog::standard();
    catalog
        .verify_recommendations()
        .context("Course catalog check failed")?;
    let catalog = Arc::new(catalog);
    info!(courses = catalog.len(), "Course catalog loaded");

    let port = config.http_port;
    let mut resources = ServerResources::new(config.clone(), Arc::clone(&catalog));

    if config.wompi.is_configured() {
        let gateway = WompiClient::new(config.wompi.clone())
            .context("Failed to build the Wompi client")?;
        let mut checkout = CheckoutService::new(Arc::new(gateway), catalog);
        if let Some(redirect_url) = args.redirect_url {
            checkout = checkout.with_redirect_url(redirect_url);
        }
        resources = resources.with_checkout(Arc::new(checkout));
        info!(environment = %config.wompi.environment, "Payment gateway ready");
    } else {
        warn!("Wompi keys are not set; payment routes will answer 503");
    }

    let app = routes::router(Arc::new(resources));
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("RogerBox server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => warn!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}
