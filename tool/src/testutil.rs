//! Local HTTP fixture server for unit tests.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

pub struct Canned {
    status: u16,
    reason: &'static str,
    extra_headers: Vec<String>,
    body: String,
}

impl Canned {
    pub fn ok(body: &str) -> Self {
        Self::status(200, "OK", body)
    }

    pub fn status(status: u16, reason: &'static str, body: &str) -> Self {
        Self {
            status,
            reason,
            extra_headers: Vec::new(),
            body: body.to_string(),
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: 302,
            reason: "Found",
            extra_headers: vec![format!("Location: {location}")],
            body: String::new(),
        }
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: text/plain; charset=UTF-8\r\nContent-Length: {}\r\nConnection: close\r\n",
            self.status,
            self.reason,
            self.body.len()
        );
        for header in &self.extra_headers {
            head.push_str(header);
            head.push_str("\r\n");
        }
        head.push_str("\r\n");
        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(self.body.as_bytes());
        bytes
    }
}

#[derive(Debug)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

pub struct FixtureServer {
    pub base_url: String,
    handle: JoinHandle<Vec<CapturedRequest>>,
}

impl FixtureServer {
    /// Waits until every canned response has been served.
    pub fn finish(self) -> Vec<CapturedRequest> {
        self.handle.join().expect("fixture server thread")
    }
}

/// Answers one connection per canned response, in order.
pub fn serve(responses: Vec<Canned>) -> FixtureServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind http fixture");
    let addr = listener.local_addr().expect("local addr");
    let handle = thread::spawn(move || {
        let mut captured = Vec::new();
        for canned in responses {
            let (mut stream, _) = listener.accept().expect("accept");
            captured.push(read_request(&mut stream));
            stream.write_all(&canned.to_bytes()).expect("write response");
            stream.flush().expect("flush response");
        }
        captured
    });
    FixtureServer {
        base_url: format!("http://{addr}"),
        handle,
    }
}

fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut buf).expect("read request");
        assert!(n > 0, "connection closed before headers");
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };
    let head = String::from_utf8_lossy(&data[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let body_start = header_end + 4;
    while data.len() < body_start + content_length {
        let n = stream.read(&mut buf).expect("read body");
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }
    let end = data.len().min(body_start + content_length);
    CapturedRequest {
        request_line,
        headers,
        body: String::from_utf8_lossy(&data[body_start..end]).into_owned(),
    }
}
