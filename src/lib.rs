//! IPC Dashboard is a web app for exploring Ecuador's Consumer Price Index
//! (Índice de Precios al Consumidor).
//!
//! This library loads a monthly IPC dataset, derives the year-over-year
//! inflation once over the full series, and serves HTML pages with an
//! interactive chart. The selection controls and chart clicks are answered
//! with HTML partials for HTMX to swap in.
//!
//! The data pipeline in [ipc] is free of I/O and can be used on its own.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod dashboard;
mod dataset;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
pub mod ipc;
mod logging;
mod navigation;
mod not_found;
mod routing;
#[cfg(test)]
mod test_utils;
mod timezone;

pub use app_state::AppState;
pub use dataset::{DatasetOptions, load_dataset};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
