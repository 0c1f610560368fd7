//! HTTP front end: one read-only listing page.

pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::store::EventStore;
use crate::view::html::PageMeta;
use routes::{events_handler, localized_events_handler};
pub use state::{AppState, Clock, FixedClock, SystemClock};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/events", get(events_handler))
        .route("/{locale}/events", get(localized_events_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on an already bound listener until shutdown is requested.
pub async fn serve(listener: TcpListener, state: AppState) -> AppResult<()> {
    let address = listener
        .local_addr()
        .map_err(|e| AppError::Server(format!("listener has no address: {e}")))?;
    info!("Server running on http://{address}/events");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    info!("Server shut down");
    Ok(())
}

pub async fn start_server(address: &str, state: AppState) -> AppResult<()> {
    info!("Binding to {address}");
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Server(format!("cannot bind {address}: {e}")))?;

    serve(listener, state).await
}

/// Convenience for callers that only have a store and page settings.
pub fn system_state(store: Arc<dyn EventStore>, page: PageMeta) -> AppState {
    AppState::new(store, Arc::new(SystemClock), page)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
