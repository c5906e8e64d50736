//! HTTP/1.1 exchange with the daemon, one request per connection.

use crate::utils::{InventoryError, Result};
use http_body_util::{BodyExt, Empty, Limited};
use hyper::body::Bytes;
use hyper::header::{HeaderName, HeaderValue, CONNECTION, HOST};
use hyper::rt::{Read, Write};
use hyper::{Method, Request};
use tracing::debug;

/// Upper bound on a response body; inspect documents are a few KiB.
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

// ── Request ─────────────────────────────────────────────────────────────────

/// Turns a raw request (request line, optional headers, blank line) into a
/// hyper request. Adds `Host` when missing and forces `Connection: close`.
pub fn build_request(raw: &str) -> Result<Request<Empty<Bytes>>> {
    let mut head = raw.lines().take_while(|l| !l.trim().is_empty());

    let request_line = head
        .next()
        .ok_or_else(|| InventoryError::Request("empty request".to_string()))?;
    let bad_line = || InventoryError::Request(format!("bad request line: {}", request_line));

    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(target), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(bad_line());
    };
    if !version.starts_with("HTTP/1.") || !target.starts_with('/') {
        return Err(bad_line());
    }
    let method = Method::from_bytes(method.as_bytes()).map_err(|_| bad_line())?;

    let mut builder = Request::builder().method(method).uri(target);
    let mut has_host = false;
    for line in head {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| InventoryError::Request(format!("bad header: {}", line)))?;
        let name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|e| InventoryError::Request(format!("bad header name {:?}: {}", name, e)))?;
        if name == CONNECTION {
            continue;
        }
        has_host |= name == HOST;
        let value = HeaderValue::from_str(value.trim())
            .map_err(|e| InventoryError::Request(format!("bad header value for {}: {}", name, e)))?;
        builder = builder.header(name, value);
    }
    if !has_host {
        builder = builder.header(HOST, "localhost");
    }

    builder
        .header(CONNECTION, "close")
        .body(Empty::new())
        .map_err(|e| InventoryError::Request(e.to_string()))
}

// ── Exchange ────────────────────────────────────────────────────────────────

/// Sends `request` over `io` and collects at most `limit` body bytes.
/// Non-2xx statuses become `InventoryError::Status`, carrying the daemon's
/// error message if any.
pub async fn fetch<I>(io: I, request: Request<Empty<Bytes>>, limit: usize) -> Result<Bytes>
where
    I: Read + Write + Unpin + Send + 'static,
{
    let (mut sender, conn) = hyper::client::conn::http1::Builder::new()
        .title_case_headers(true)
        .handshake(io)
        .await?;

    tokio::spawn(async move {
        if let Err(e) = conn.await {
            debug!(error = %e, "runtime connection closed");
        }
    });

    let response = sender.send_request(request).await?;
    let status = response.status();
    let body = Limited::new(response.into_body(), limit)
        .collect()
        .await
        .map_err(|e| InventoryError::Response(format!("reading body: {}", e)))?
        .to_bytes();

    if !status.is_success() {
        return Err(InventoryError::Status {
            status: status.as_u16(),
            reason: error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string()),
        });
    }

    Ok(body)
}

/// Docker error bodies look like `{"message":"No such container: x"}`.
fn error_message(body: &[u8]) -> Option<String> {
    let v: serde_json::Value = serde_json::from_slice(body).ok()?;
    v.get("message")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_host_and_close() {
        let req = build_request("GET /containers/abc/json HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(*req.method(), Method::GET);
        assert_eq!(req.uri().path(), "/containers/abc/json");
        assert_eq!(req.headers()[HOST], "localhost");
        assert_eq!(req.headers()[CONNECTION], "close");
    }

    #[test]
    fn keeps_caller_headers() {
        let req = build_request(
            "GET /containers/json?all=1 HTTP/1.1\r\nHost: docker\r\nConnection: keep-alive\r\nAccept: */*\r\n\r\n",
        )
        .unwrap();
        assert_eq!(req.uri().query(), Some("all=1"));
        assert_eq!(req.headers()[HOST], "docker");
        assert_eq!(req.headers()["accept"], "*/*");
        assert_eq!(req.headers().get_all(CONNECTION).iter().count(), 1);
        assert_eq!(req.headers()[CONNECTION], "close");
    }

    #[test]
    fn rejects_garbage() {
        for bad in [
            "",
            "\r\n\r\n",
            "GET\r\n\r\n",
            "GET /a HTTP/1.1 extra\r\n\r\n",
            "GET a HTTP/1.1\r\n\r\n",
            "GET /a SPDY/3\r\n\r\n",
            "GET /a HTTP/1.1\r\nno-colon\r\n\r\n",
        ] {
            assert!(build_request(bad).is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn daemon_error_message() {
        assert_eq!(
            error_message(br#"{"message":"No such container: nope"}"#).as_deref(),
            Some("No such container: nope")
        );
        assert_eq!(error_message(b"page not found"), None);
    }
}
