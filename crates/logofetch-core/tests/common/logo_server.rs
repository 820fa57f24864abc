//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves canned GET responses by path (unknown paths get 404), counts
//! requests per path and keeps the `User-Agent` each request carried.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Response {
    status: u16,
    body: Vec<u8>,
}

type Hits = Arc<Mutex<HashMap<String, usize>>>;
type Agents = Arc<Mutex<HashMap<String, Vec<String>>>>;

pub struct LogoServer {
    base: String,
    routes: Arc<Mutex<HashMap<String, Response>>>,
    hits: Hits,
    agents: Agents,
}

impl LogoServer {
    /// Starts a server in a background thread. It runs until the process exits.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes: Arc<Mutex<HashMap<String, Response>>> = Arc::default();
        let hits: Hits = Arc::default();
        let agents: Agents = Arc::default();
        let (r, h, a) = (Arc::clone(&routes), Arc::clone(&hits), Arc::clone(&agents));
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let r = Arc::clone(&r);
                let h = Arc::clone(&h);
                let a = Arc::clone(&a);
                thread::spawn(move || handle(stream, &r, &h, &a));
            }
        });
        Self {
            base: format!("http://127.0.0.1:{}", port),
            routes,
            hits,
            agents,
        }
    }

    /// Serves `body` with 200 at `path` (e.g. "/teams.csv").
    pub fn serve(&self, path: &str, body: impl Into<Vec<u8>>) -> &Self {
        self.serve_status(path, 200, body)
    }

    pub fn serve_status(&self, path: &str, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.routes.lock().unwrap().insert(
            path.to_string(),
            Response {
                status,
                body: body.into(),
            },
        );
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }

    /// `User-Agent` values received for `path`, in arrival order (empty string if absent).
    pub fn user_agents(&self, path: &str) -> Vec<String> {
        self.agents
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_default()
    }
}

fn handle(
    mut stream: TcpStream,
    routes: &Mutex<HashMap<String, Response>>,
    hits: &Mutex<HashMap<String, usize>>,
    agents: &Mutex<HashMap<String, Vec<String>>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&request);
    let mut lines = request.lines();
    let mut parts = lines.next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/").to_string();
    let user_agent = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("user-agent"))
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default();

    *hits.lock().unwrap().entry(path.clone()).or_insert(0) += 1;
    agents
        .lock()
        .unwrap()
        .entry(path.clone())
        .or_default()
        .push(user_agent);

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(
            b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }

    let response = routes.lock().unwrap().get(&path).cloned().unwrap_or(Response {
        status: 404,
        body: b"not found".to_vec(),
    });
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason(response.status),
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
