//! gRPC server lifecycle: bind, serve and drain on cancellation.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;

use crate::api::grpc::GradeServiceImpl;
use crate::config::ServerConfig;
use crate::domain::GradesService;

/// Bind the configured address and serve until `cancel` fires.
///
/// After cancellation in-flight calls get `shutdown_timeout` to finish.
///
/// # Errors
///
/// Returns an error if the address is invalid, cannot be bound, or the
/// transport fails.
pub async fn serve(
    config: &ServerConfig,
    service: Arc<GradesService>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind gRPC listener on {addr}"))?;

    let shutdown_timeout = config.shutdown_timeout();
    let server = serve_with_listener(listener, service, config.stream_buffer, cancel.clone());
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result,
        () = cancel.cancelled() => {}
    }

    drain(server, shutdown_timeout).await
}

async fn drain<F>(server: F, timeout: Duration) -> anyhow::Result<()>
where
    F: Future<Output = anyhow::Result<()>>,
{
    if let Ok(result) = tokio::time::timeout(timeout, server).await {
        result
    } else {
        tracing::warn!(
            timeout_secs = timeout.as_secs(),
            "gRPC server did not drain in time"
        );
        Ok(())
    }
}

/// Serve the grade service on an already bound listener.
///
/// Tests bind `127.0.0.1:0` and hand the listener in to learn the port first.
///
/// # Errors
///
/// Returns an error if the local address cannot be read or the transport fails.
pub async fn serve_with_listener(
    listener: TcpListener,
    service: Arc<GradesService>,
    stream_buffer: usize,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let local_addr: SocketAddr = listener.local_addr()?;
    tracing::info!(%local_addr, "grades gRPC server listening");

    let svc = GradeServiceImpl::new(service)
        .with_stream_buffer(stream_buffer)
        .into_server();

    Server::builder()
        .add_service(svc)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async move {
            cancel.cancelled().await;
            tracing::info!("grades gRPC server shutting down");
        })
        .await
        .context("grades gRPC server failed")?;

    tracing::info!("grades gRPC server stopped");
    Ok(())
}
