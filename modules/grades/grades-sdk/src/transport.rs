//! gRPC client transport configuration and connection utilities.
//!
//! Builds a tonic `Channel` with connect/RPC timeouts and HTTP/2 keepalive,
//! and retries the initial connection with a linear backoff.

use std::time::Duration;

use anyhow::Context;
use tonic::transport::{Channel, Endpoint};
use tracing::Instrument;

fn duration_to_u64_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Transport settings for a grades client.
#[derive(Debug, Clone)]
pub struct GrpcClientConfig {
    /// Timeout for establishing the initial connection.
    pub connect_timeout: Duration,

    /// Timeout for individual RPC calls.
    pub rpc_timeout: Duration,

    /// Connection attempts after the first one.
    pub max_retries: u32,

    /// Backoff unit, multiplied by the attempt number.
    pub base_backoff: Duration,

    /// Upper bound for the backoff between attempts.
    pub max_backoff: Duration,

    /// Service name used in log fields.
    pub service_name: &'static str,
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            rpc_timeout: Duration::from_secs(30),
            max_retries: 3,
            base_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(5),
            service_name: "grades",
        }
    }
}

impl GrpcClientConfig {
    #[must_use]
    pub fn new(service_name: &'static str) -> Self {
        Self {
            service_name,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_rpc_timeout(mut self, timeout: Duration) -> Self {
        self.rpc_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Backoff before the given (1-based) retry attempt.
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        (self.base_backoff * attempt).min(self.max_backoff)
    }
}

fn build_endpoint(uri: String, cfg: &GrpcClientConfig) -> Result<Endpoint, tonic::transport::Error> {
    let endpoint = Endpoint::from_shared(uri)?
        .connect_timeout(cfg.connect_timeout)
        .timeout(cfg.rpc_timeout)
        .tcp_keepalive(Some(Duration::from_secs(30)))
        .http2_keep_alive_interval(Duration::from_secs(30))
        .keep_alive_timeout(Duration::from_secs(10))
        .keep_alive_while_idle(true);

    Ok(endpoint)
}

/// Open a channel once, without retries.
///
/// # Errors
///
/// Returns an error if the URI is invalid or the connection fails.
pub async fn connect_channel(uri: impl Into<String>, cfg: &GrpcClientConfig) -> anyhow::Result<Channel> {
    let uri = uri.into();
    let span = tracing::debug_span!("grpc_connect", service = cfg.service_name, uri = %uri);

    async move {
        let channel = build_endpoint(uri, cfg)?.connect().await?;
        tracing::debug!(service = cfg.service_name, "gRPC client connected");
        Ok(channel)
    }
    .instrument(span)
    .await
}

/// Open a channel, retrying up to `cfg.max_retries` times.
///
/// # Errors
///
/// Returns the last connection error once all attempts are exhausted.
pub async fn connect_with_retry(
    uri: impl Into<String>,
    cfg: &GrpcClientConfig,
) -> anyhow::Result<Channel> {
    let uri = uri.into();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        match connect_channel(uri.as_str(), cfg).await {
            Ok(channel) => {
                if attempt > 1 {
                    tracing::info!(
                        service = cfg.service_name,
                        attempt,
                        "gRPC connection established after retries"
                    );
                }
                return Ok(channel);
            }
            Err(e) if attempt <= cfg.max_retries => {
                let backoff = cfg.backoff_for(attempt);
                tracing::warn!(
                    service = cfg.service_name,
                    attempt,
                    max_retries = cfg.max_retries,
                    error = %e,
                    backoff_ms = duration_to_u64_ms(backoff),
                    "gRPC connection failed, retrying"
                );
                tokio::time::sleep(backoff).await;
            }
            Err(e) => {
                return Err(e).context(format!(
                    "failed to connect to {} after {attempt} attempts",
                    cfg.service_name
                ));
            }
        }
    }
}
