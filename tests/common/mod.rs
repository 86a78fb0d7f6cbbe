//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// One request captured by the mock endpoint.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// First line of the request, e.g. `POST /api/... HTTP/1.1`.
    pub request_line: String,
    /// Request body bytes as a string.
    pub body: String,
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        400 => "400 Bad Request",
        401 => "401 Unauthorized",
        429 => "429 Too Many Requests",
        500 => "500 Internal Server Error",
        _ => "200 OK",
    }
}

/// Start a mock channel endpoint that answers every request with `status`
/// and forwards each captured request over the returned channel.
#[allow(dead_code)]
pub async fn start_mock_endpoint(
    addr: SocketAddr,
    status: u16,
) -> mpsc::UnboundedReceiver<CapturedRequest> {
    let listener = TcpListener::bind(addr).await.unwrap();
    let (capture_tx, capture_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let capture_tx = capture_tx.clone();
                    tokio::spawn(async move {
                        let mut buf = Vec::new();
                        let mut chunk = [0u8; 4096];

                        // Read headers, then the Content-Length body.
                        let (headers_end, content_length) = loop {
                            match socket.read(&mut chunk).await {
                                Ok(0) => return,
                                Ok(n) => buf.extend_from_slice(&chunk[..n]),
                                Err(_) => return,
                            }
                            if let Some(pos) = find_headers_end(&buf) {
                                let head = String::from_utf8_lossy(&buf[..pos]);
                                let len = head
                                    .lines()
                                    .find_map(|l| {
                                        let (name, value) = l.split_once(':')?;
                                        if name.eq_ignore_ascii_case("content-length") {
                                            value.trim().parse::<usize>().ok()
                                        } else {
                                            None
                                        }
                                    })
                                    .unwrap_or(0);
                                break (pos + 4, len);
                            }
                        };

                        while buf.len() < headers_end + content_length {
                            match socket.read(&mut chunk).await {
                                Ok(0) => break,
                                Ok(n) => buf.extend_from_slice(&chunk[..n]),
                                Err(_) => break,
                            }
                        }

                        let head = String::from_utf8_lossy(&buf[..headers_end]).to_string();
                        let request_line = head.lines().next().unwrap_or("").to_string();
                        let body = String::from_utf8_lossy(
                            &buf[headers_end..(headers_end + content_length).min(buf.len())],
                        )
                        .to_string();

                        let _ = capture_tx.send(CapturedRequest { request_line, body });

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok",
                            status_text(status)
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    capture_rx
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Per-test scratch file path under the system temp dir.
#[allow(dead_code)]
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("msgdrip-it-{}-{}", std::process::id(), name))
}
