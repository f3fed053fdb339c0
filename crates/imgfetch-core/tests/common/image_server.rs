//! Minimal HTTP/1.1 server serving fixed routes for integration tests.
//!
//! Each route maps a request path to a status, body, and optional response
//! delay. The server records a `start <path>` event when a request arrives
//! and an `end <path>` event once its delay has elapsed and the response is
//! about to be written, so tests can assert request ordering across batches.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay: Duration,
}

impl Route {
    pub fn ok(body: &[u8]) -> Self {
        Self {
            status: 200,
            body: body.to_vec(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub struct ImageServer {
    base_url: String,
    events: Arc<Mutex<Vec<String>>>,
}

impl ImageServer {
    /// Absolute URL for a route path (e.g. `/cat.png`).
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Event log so far: `start <path>` / `end <path>` in arrival order.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    /// Number of requests the server has received.
    pub fn request_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| e.starts_with("start "))
            .count()
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(routes: HashMap<String, Route>) -> ImageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_bg = Arc::clone(&events);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let events = Arc::clone(&events_bg);
            thread::spawn(move || handle(stream, &routes, &events));
        }
    });
    ImageServer {
        base_url: format!("http://127.0.0.1:{}", port),
        events,
    }
}

fn handle(
    mut stream: TcpStream,
    routes: &HashMap<String, Route>,
    events: &Arc<Mutex<Vec<String>>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = match parse_path(request) {
        Some(p) => p,
        None => return,
    };
    events.lock().unwrap().push(format!("start {path}"));

    let route = routes
        .get(&path)
        .cloned()
        .unwrap_or_else(|| Route::status(404));
    if !route.delay.is_zero() {
        thread::sleep(route.delay);
    }

    // Log `end` before writing: the client cannot observe completion (and
    // thus start the next batch) until the response bytes follow this event.
    events.lock().unwrap().push(format!("end {path}"));

    let reason = match route.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        reason,
        route.body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(&route.body);
}

/// Path from the request line (`GET /x.png HTTP/1.1`), query stripped.
fn parse_path(request: &str) -> Option<String> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    if !method.eq_ignore_ascii_case("GET") {
        return None;
    }
    let target = parts.next()?;
    let path = target.split('?').next().unwrap_or(target);
    Some(path.to_string())
}
