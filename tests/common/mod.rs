//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use pingalyser::config::PingalyserConfig;
use pingalyser::http::HttpServer;
use pingalyser::lifecycle::Shutdown;
use pingalyser::ping::HttpPingSource;

/// Canned reply served by the mock downstream.
#[derive(Clone)]
pub struct Reply {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: String,
}

impl Reply {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: Some("application/json"),
            body: body.to_string(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            body: String::new(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: Some("text/plain"),
            body: body.to_string(),
        }
    }
}

/// Request lines (`GET /path HTTP/1.1`) seen by a mock downstream.
pub type Seen = Arc<Mutex<Vec<String>>>;

/// Start a mock downstream on an ephemeral port that answers every request with `reply`.
pub async fn start_downstream(reply: Reply) -> (SocketAddr, Seen) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));

    let seen_by_task = seen.clone();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            let reply = reply.clone();
            let seen = seen_by_task.clone();
            tokio::spawn(async move {
                respond(socket, reply, seen).await;
            });
        }
    });

    (addr, seen)
}

async fn respond(mut socket: TcpStream, reply: Reply, seen: Seen) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&request);
    if let Some(line) = request.lines().next() {
        seen.lock().unwrap().push(line.to_string());
    }

    let status_text = match reply.status {
        200 => "200 OK",
        204 => "204 No Content",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    };

    let mut response = format!("HTTP/1.1 {}\r\nConnection: close\r\n", status_text);
    if let Some(content_type) = reply.content_type {
        response.push_str(&format!("Content-Type: {}\r\n", content_type));
    }
    if reply.status != 204 {
        response.push_str(&format!("Content-Length: {}\r\n", reply.body.len()));
    }
    response.push_str("\r\n");
    response.push_str(&reply.body);

    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Start pingalyser on an ephemeral port, pointed at `target_uri`.
pub async fn start_pingalyser(target_uri: &str) -> (SocketAddr, Shutdown) {
    let mut config = PingalyserConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.pingalyser.target_uri = target_uri.to_string();

    let source = Arc::new(HttpPingSource::new(client()));
    let server = HttpServer::with_source(config, source).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Client that never reuses connections or goes through a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
