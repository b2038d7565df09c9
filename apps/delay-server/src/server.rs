use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("http server exited with error")]
    Serve(#[source] std::io::Error),
}

pub fn attach_http_layers(router: Router) -> Router {
    router.layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve `router` until the server stops.
pub async fn serve(router: Router, addr: SocketAddr) -> Result<(), Error> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;
    serve_on(listener, router).await
}

pub async fn serve_on(listener: TcpListener, router: Router) -> Result<(), Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "delay server listening");
    }
    axum::serve(listener, attach_http_layers(router))
        .await
        .map_err(Error::Serve)
}
