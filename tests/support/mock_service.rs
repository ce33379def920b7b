//! Loopback stand-in for the prediction service.
//!
//! Answers `/predict`, `/classify` and `/random-predict` with metrics computed
//! by the local text statistics, so assertions can use exact counts.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use botlens::detection::text_stats::TextStats;
use serde_json::{Value, json};

pub const RANDOM_SAMPLE_TEXT: &str = "Morning run done, legs are jelly. Coffee time!";

/// How the server answers the next requests.
#[derive(Clone, Debug, PartialEq)]
pub enum MockMode {
    Healthy,
    Status(u16),
    Garbage,
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

pub struct MockService {
    base_url: String,
    mode: Arc<Mutex<MockMode>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn start(mode: MockMode) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");
        let mode = Arc::new(Mutex::new(mode));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let server_mode = Arc::clone(&mode);
        let server_requests = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else {
                    continue;
                };
                let mode = server_mode.lock().unwrap().clone();
                handle(stream, &mode, &server_requests);
            }
        });
        Self {
            base_url: format!("http://{addr}"),
            mode,
            requests,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_mode(&self, mode: MockMode) {
        *self.mode.lock().unwrap() = mode;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(
    stream: TcpStream,
    mode: &MockMode,
    requests: &Mutex<Vec<RecordedRequest>>,
) -> Option<()> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        reader.read_line(&mut header).ok()?;
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;
    let body = String::from_utf8_lossy(&body).into_owned();

    let (status, payload) = match mode {
        MockMode::Status(code) => (*code, json!({ "error": "service unavailable" }).to_string()),
        MockMode::Garbage => (200, "<html>not json</html>".to_string()),
        MockMode::Healthy => route(&method, &path, &body),
    };
    requests
        .lock()
        .unwrap()
        .push(RecordedRequest { method, path, body });
    respond(stream, status, &payload);
    Some(())
}

fn route(method: &str, path: &str, body: &str) -> (u16, String) {
    match (method, path) {
        ("POST", "/predict" | "/classify") => {
            let text = serde_json::from_str::<Value>(body)
                .ok()
                .and_then(|value| value.get("text")?.as_str().map(str::to_string));
            match text {
                Some(text) if !text.trim().is_empty() => (200, prediction_for(&text).to_string()),
                _ => (400, json!({ "error": "No input text provided" }).to_string()),
            }
        }
        ("GET", "/random-predict") => {
            let mut payload = prediction_for(RANDOM_SAMPLE_TEXT);
            payload["text"] = json!(RANDOM_SAMPLE_TEXT);
            payload["actual_origin"] = json!("human");
            (200, payload.to_string())
        }
        _ => (404, json!({ "error": "not found" }).to_string()),
    }
}

/// Crude scoring: promotional markers push towards "Bot".
fn prediction_for(text: &str) -> Value {
    let stats = TextStats::from_text(text);
    let markers = stats.hashtag_count + stats.link_count + stats.exclamation_count;
    let (label, confidence) = if markers >= 3 {
        ("Bot", 92.5)
    } else {
        ("Human", 81.25)
    };
    let mut metrics = serde_json::to_value(stats.to_metrics()).expect("metrics serialize");
    metrics["sentiment_polarity"] = json!(0.1);
    json!({
        "prediction": label,
        "confidence": confidence,
        "metrics": metrics,
    })
}

fn respond(mut stream: TcpStream, status: u16, body: &str) {
    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
