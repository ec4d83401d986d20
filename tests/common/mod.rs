//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A canned route for the mock backend.
pub struct MockRoute {
    pub method: &'static str,
    /// Matched as a prefix of the request target (path plus query).
    pub target_prefix: String,
    pub status: u16,
    pub body: String,
}

impl MockRoute {
    pub fn get(prefix: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            method: "GET",
            target_prefix: prefix.into(),
            status,
            body: body.into(),
        }
    }

    pub fn post(prefix: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            method: "POST",
            target_prefix: prefix.into(),
            status,
            body: body.into(),
        }
    }
}

/// Start a mock HTTP backend serving canned JSON routes.
///
/// Returns the bound address and a log of "METHOD target" lines, one per
/// request received. Unmatched requests get a 404 with a `detail` body.
pub async fn start_mock_api(routes: Vec<MockRoute>) -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let log = Arc::new(Mutex::new(Vec::new()));
    let log_handle = log.clone();
    let routes = Arc::new(routes);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let routes = routes.clone();
                    let log = log_handle.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 16384];
                        let mut read = 0usize;

                        // Read up to the end of headers.
                        let header_end = loop {
                            if let Some(pos) = find_subslice(&buf[..read], b"\r\n\r\n") {
                                break pos + 4;
                            }
                            if read == buf.len() {
                                return;
                            }
                            match socket.read(&mut buf[read..]).await {
                                Ok(0) => return,
                                Ok(n) => read += n,
                                Err(_) => return,
                            }
                        };

                        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
                        let request_line = head.lines().next().unwrap_or("").to_string();
                        let mut parts = request_line.split_whitespace();
                        let method = parts.next().unwrap_or("").to_string();
                        let target = parts.next().unwrap_or("").to_string();

                        // Drain the body so the close is clean.
                        let content_length = head
                            .lines()
                            .find_map(|line| {
                                let (name, value) = line.split_once(':')?;
                                if name.eq_ignore_ascii_case("content-length") {
                                    value.trim().parse::<usize>().ok()
                                } else {
                                    None
                                }
                            })
                            .unwrap_or(0);
                        while read < (header_end + content_length).min(buf.len()) {
                            match socket.read(&mut buf[read..]).await {
                                Ok(0) => break,
                                Ok(n) => read += n,
                                Err(_) => return,
                            }
                        }

                        log.lock().unwrap().push(format!("{} {}", method, target));

                        let (status, body) = routes
                            .iter()
                            .find(|r| r.method == method && target.starts_with(&r.target_prefix))
                            .map(|r| (r.status, r.body.clone()))
                            .unwrap_or((404, r#"{"detail": "Not found"}"#.to_string()));

                        let status_text = match status {
                            200 => "200 OK",
                            400 => "400 Bad Request",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, log)
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Article JSON in the backend's wire shape.
#[allow(dead_code)]
pub fn article_json(id: &str, minted_by: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "title": format!("Article {id}"),
        "content": "Full body of the article.",
        "authors": "A. Writer",
        "published_date": "2024-09-23T10:00:00Z",
        "url": format!("https://news.example.com/{id}"),
        "source": "news.example.com",
        "keywords": ["ledger", "news"],
        "dag_address": "DAG1submitter",
        "minted_by": minted_by,
    })
}

/// Feed envelope JSON as returned by `GET /news/`.
#[allow(dead_code)]
pub fn feed_json(items: Vec<serde_json::Value>, total: u64, page: u32, pages: u32) -> String {
    serde_json::json!({
        "items": items,
        "total": total,
        "page": page,
        "pages": pages,
    })
    .to_string()
}
