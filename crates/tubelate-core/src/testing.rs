//! Local HTTP doubles for exercising the API clients without network access.
//!
//! `MockServer` accepts one connection per canned response, in order, and
//! records every request it reads. If a queued response is not requested
//! within the accept timeout the server stops, so [`MockServer::finish`]
//! returns the shorter list instead of blocking.

use std::io::{self, BufRead, BufReader, ErrorKind, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub const DEFAULT_ACCEPT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    /// Overrides the advertised `Content-Length`, for truncated bodies.
    pub content_length: Option<usize>,
}

impl MockResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_length: None,
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn with_content_length(mut self, length: usize) -> Self {
        self.content_length = Some(length);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string, exactly as sent.
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let query = self.target.split_once('?').map(|(_, q)| q).unwrap_or("");
        url::form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }
}

pub struct MockServer {
    base_url: String,
    handle: JoinHandle<Vec<RecordedRequest>>,
}

impl MockServer {
    pub fn start(responses: Vec<MockResponse>) -> io::Result<Self> {
        Self::start_with_accept_timeout(responses, DEFAULT_ACCEPT_TIMEOUT)
    }

    pub fn start_with_accept_timeout(
        responses: Vec<MockResponse>,
        accept_timeout: Duration,
    ) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let handle = thread::spawn(move || {
            let mut recorded = Vec::with_capacity(responses.len());
            for response in responses {
                let Ok(stream) = accept_before(&listener, Instant::now() + accept_timeout)
                else {
                    break;
                };
                match serve(stream, &response) {
                    Ok(request) => recorded.push(request),
                    Err(_) => break,
                }
            }
            recorded
        });
        Ok(Self { base_url, handle })
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    pub fn finish(self) -> Vec<RecordedRequest> {
        self.handle.join().unwrap_or_default()
    }
}

/// A base URL nothing listens on, for provoking connection failures.
pub fn unreachable_url() -> io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

fn accept_before(listener: &TcpListener, deadline: Instant) -> io::Result<TcpStream> {
    loop {
        match listener.accept() {
            Ok((stream, _)) => {
                stream.set_nonblocking(false)?;
                return Ok(stream);
            }
            Err(err) if err.kind() == ErrorKind::WouldBlock => {
                if Instant::now() >= deadline {
                    return Err(io::Error::new(ErrorKind::TimedOut, "no client connected"));
                }
                thread::sleep(Duration::from_millis(10));
            }
            Err(err) => return Err(err),
        }
    }
}

fn serve(stream: TcpStream, response: &MockResponse) -> io::Result<RecordedRequest> {
    stream.set_read_timeout(Some(Duration::from_secs(5)))?;
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    let mut request = RecordedRequest {
        method,
        target,
        headers,
        body: String::new(),
    };
    let length = request
        .header("content-length")
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; length];
    reader.read_exact(&mut body)?;
    request.body = String::from_utf8_lossy(&body).into_owned();

    let reason = reqwest::StatusCode::from_u16(response.status)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Unknown");
    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        response.content_length.unwrap_or(response.body.len()),
        response.body
    )?;
    stream.flush()?;
    Ok(request)
}
