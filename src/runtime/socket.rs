//! Blocking transport to the runtime daemon, one connection per request.
//! Requests go through hyper on a current-thread tokio runtime.

use super::{http, Transport};
use crate::utils::{InventoryError, Result};
use hyper::body::Bytes;
use hyper_util::rt::TokioIo;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tokio::net::{TcpStream, UnixStream};
use tracing::{debug, warn};

pub const DEFAULT_DOCKER_HOST: &str = "unix:///var/run/docker.sock";

/// Where the daemon listens, in `DOCKER_HOST` notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Unix(PathBuf),
    Tcp(String),
}

impl FromStr for Endpoint {
    type Err = InventoryError;

    fn from_str(host: &str) -> Result<Self> {
        let host = host.trim();
        if let Some(path) = host.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(InventoryError::Endpoint(host.to_string()));
            }
            return Ok(Endpoint::Unix(PathBuf::from(path)));
        }
        if host.starts_with('/') {
            return Ok(Endpoint::Unix(PathBuf::from(host)));
        }
        let addr = host
            .strip_prefix("tcp://")
            .or_else(|| host.strip_prefix("http://"))
            .map(|a| a.trim_end_matches('/'))
            .filter(|a| !a.is_empty() && !a.contains('/'))
            .ok_or_else(|| InventoryError::Endpoint(host.to_string()))?;
        Ok(Endpoint::Tcp(addr.to_string()))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Unix(path) => write!(f, "unix://{}", path.display()),
            Endpoint::Tcp(addr) => write!(f, "tcp://{}", addr),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SocketTransport {
    endpoint: Endpoint,
    timeout: Option<Duration>,
    body_limit: usize,
}

impl SocketTransport {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            timeout: None,
            body_limit: http::MAX_BODY_BYTES,
        }
    }

    /// Deadline per request, connect included. A request that times out
    /// yields no document; the rest of the batch still runs.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Largest body accepted before the request counts as failed.
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit = bytes;
        self
    }

    async fn send_one(&self, raw: &str) -> Result<Value> {
        let exchange = self.round_trip(raw);
        let body = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, exchange)
                .await
                .map_err(|_| InventoryError::Timeout(limit))??,
            None => exchange.await?,
        };

        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(InventoryError::Response("empty body".to_string()));
        }
        Ok(serde_json::from_slice(&body)?)
    }

    async fn round_trip(&self, raw: &str) -> Result<Bytes> {
        let request = http::build_request(raw)?;
        match &self.endpoint {
            Endpoint::Unix(path) => {
                let stream = UnixStream::connect(path).await?;
                http::fetch(TokioIo::new(stream), request, self.body_limit).await
            }
            Endpoint::Tcp(addr) => {
                let stream = TcpStream::connect(addr.as_str()).await?;
                http::fetch(TokioIo::new(stream), request, self.body_limit).await
            }
        }
    }
}

impl Transport for SocketTransport {
    fn exchange(&self, requests: &[String]) -> Vec<Option<Value>> {
        // The collector stays blocking; one runtime drives a whole batch.
        let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
            Ok(rt) => rt,
            Err(e) => {
                warn!(error = %e, "cannot start runtime for requests");
                return vec![None; requests.len()];
            }
        };

        requests
            .iter()
            .map(|raw| {
                let target = raw.lines().next().unwrap_or("").trim();
                match runtime.block_on(self.send_one(raw)) {
                    Ok(Value::Null) => {
                        debug!(request = target, "runtime answered null");
                        None
                    }
                    Ok(doc) => Some(doc),
                    Err(e) => {
                        warn!(request = target, endpoint = %self.endpoint, error = %e, "runtime request failed");
                        None
                    }
                }
            })
            .collect()
    }
}
