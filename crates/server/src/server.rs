// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deckhand server entry point.
use anyhow::{Result, anyhow};
use log::{error, info};
use std::{future::Future, io};
use tokio::{net::TcpListener, signal};

use crate::{http, service::DeckService, store::DeckStore};

/// Networking config.
#[derive(Debug)]
pub struct Config {
    /// The server listening address.
    pub address: String,
    /// The server listening port.
    pub port: u16,
}

/// Server entry point.
pub async fn run(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.address, config.port);
    info!("Starting server listening on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow!("Tcp listener bind error: {e}"))?;

    serve(listener, shutdown_on(signal::ctrl_c())).await
}

/// Completes when `signal` fires.
///
/// If the signal handler cannot be installed the server keeps running and the
/// returned future never completes.
async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Received shutdown signal..."),
        Err(e) => {
            error!("Cannot listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}

/// Serves requests on `listener` until `shutdown` completes.
///
/// Each server gets its own empty deck store.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let service = DeckService::new(DeckStore::new());

    axum::serve(listener, http::router(service))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow!("Server error: {e}"))?;

    info!("Server stopped");
    Ok(())
}
