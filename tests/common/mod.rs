//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a programmable mock control backend.
///
/// The handler receives the request path (including query string) and
/// returns a status code plus a JSON body. Binds an ephemeral port and
/// returns the bound address.
pub async fn start_mock_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let path = read_request_path(&mut socket).await;
                        let (status, body) = f(path).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Read the request head and extract the path from the request line.
async fn read_request_path(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    let head = String::from_utf8_lossy(&buf);
    head.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string()
}

/// Registry body with one entry per (name, port, enabled) triple.
#[allow(dead_code)]
pub fn registry_body(services: &[(&str, Option<&str>, bool)]) -> String {
    let entries: Vec<serde_json::Value> = services
        .iter()
        .map(|(name, port, enabled)| {
            serde_json::json!({
                "name": name,
                "mcp_url": port.map(|p| format!("http://localhost:{}/mcp", p)),
                "mcp_host_inferred": port.map(|_| "localhost"),
                "mcp_port": port,
                "enabled": enabled,
            })
        })
        .collect();
    serde_json::to_string(&entries).unwrap()
}

/// Dashboard config pointed at a mock backend.
#[allow(dead_code)]
pub fn test_config(addr: SocketAddr) -> mcp_dashboard::DashboardConfig {
    let mut config = mcp_dashboard::DashboardConfig::default();
    config.backend.base_url = format!("http://{}", addr);
    config
}
