//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use lookup_bots::{BotError, Message, ReplySink};

/// Serve exactly one HTTP response, returning the base URL and a handle that
/// yields the request line the server received.
pub fn serve_once(status: &str, content_type: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let base = format!("http://{}", listener.local_addr().expect("local addr"));

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("read request line");

        // Drain headers
        let mut line = String::new();
        loop {
            line.clear();
            let n = reader.read_line(&mut line).expect("read header");
            if n == 0 || line == "\r\n" {
                break;
            }
        }

        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush response");
        request_line.trim_end().to_string()
    });

    (base, handle)
}

/// A base URL nobody is listening on
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Reply sink that keeps every reply in memory
#[derive(Default)]
pub struct RecordingSink {
    replies: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }
}

impl ReplySink for RecordingSink {
    fn send_reply(&self, _message: &Message, text: &str) -> Result<(), BotError> {
        self.replies.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// In-memory log writer for `tracing_subscriber::fmt().with_writer(..)`
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with logs captured, returning its result and the log text
pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let capture = LogCapture::default();
    let writer = capture.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture.contents())
}
