//! Shared test utilities for chatpick
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpListener, TcpStream};
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex, mpsc};
    use std::time::{Duration, Instant};

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::ai::{AiRequest, AiResponse, AiState};
    use crate::app::App;
    use crate::config::{Config, ConfigStore};
    use crate::lexicon::Lexicon;

    /// Helper to run async tests with a tokio runtime
    pub fn run_async<F: std::future::Future>(f: F) -> F::Output {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");
        rt.block_on(f)
    }

    /// Config with credentials pointing at `base_url`
    pub fn test_config(base_url: &str) -> Config {
        Config {
            api_key: "sk-test".to_string(),
            base_url: base_url.to_string(),
            model: "test-model".to_string(),
            enable_clipboard_monitor: false,
            clipboard_backend: crate::config::ClipboardBackend::Osc52,
            ..Config::default()
        }
    }

    /// App over an in-memory config that is never written to disk
    ///
    /// The config path sits below a regular file, so any save fails instead
    /// of touching the user's files.
    pub fn test_app() -> App {
        test_app_with_config(test_config("http://127.0.0.1:9/v1"))
    }

    pub fn test_app_with_config(config: Config) -> App {
        let store =
            ConfigStore::with_config(PathBuf::from("/dev/null/chatpick/config.json"), config);
        App::new(store, Lexicon::builtin())
    }

    /// Connect `app` to in-test channels instead of a worker thread
    ///
    /// Returns the receiving end of dispatched requests and the sender used
    /// to inject worker responses.
    pub fn connect_channels(
        app: &mut App,
    ) -> (UnboundedReceiver<AiRequest>, mpsc::Sender<AiResponse>) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.connect_worker(AiState::connect(request_tx, response_rx));
        (request_rx, response_tx)
    }

    /// Render `app` into a `width` x `height` test terminal, one string per row
    pub fn render_lines(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Chat-completions response body with a single choice
    pub fn completion_body(content: &str) -> String {
        serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })
        .to_string()
    }

    /// One HTTP request captured by `StubServer`
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub request_line: String,
        pub headers: Vec<(String, String)>,
        pub body: String,
    }

    impl RecordedRequest {
        /// Header value by case-insensitive name
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }
    }

    /// Minimal HTTP/1.1 server answering every request with a fixed response
    pub struct StubServer {
        addr: SocketAddr,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl StubServer {
        pub fn respond_with(status: u16, body: impl Into<String>) -> Self {
            Self::respond_after(Duration::ZERO, status, body)
        }

        /// Like `respond_with`, but waits `delay` after reading each request
        pub fn respond_after(delay: Duration, status: u16, body: impl Into<String>) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
            let addr = listener.local_addr().expect("stub server addr");
            let requests = Arc::new(Mutex::new(Vec::new()));
            let body = body.into();

            let recorded = Arc::clone(&requests);
            std::thread::spawn(move || {
                for stream in listener.incoming() {
                    let Ok(stream) = stream else { continue };
                    let recorded = Arc::clone(&recorded);
                    let body = body.clone();
                    std::thread::spawn(move || serve(stream, &recorded, delay, status, &body));
                }
            });

            Self { addr, requests }
        }

        /// Base URL including the `/v1` prefix
        pub fn base_url(&self) -> String {
            format!("http://{}/v1", self.addr)
        }

        /// Base URL of a port nothing listens on
        pub fn unused_base_url() -> String {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind free port");
            let addr = listener.local_addr().expect("free port addr");
            drop(listener);
            format!("http://{}/v1", addr)
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().expect("stub lock").clone()
        }

        /// Wait until at least `count` requests arrived
        pub fn wait_for_requests(&self, count: usize, timeout: Duration) -> Vec<RecordedRequest> {
            let deadline = Instant::now() + timeout;
            loop {
                let requests = self.requests();
                if requests.len() >= count || Instant::now() >= deadline {
                    return requests;
                }
                std::thread::sleep(Duration::from_millis(10));
            }
        }
    }

    fn serve(
        mut stream: TcpStream,
        recorded: &Mutex<Vec<RecordedRequest>>,
        delay: Duration,
        status: u16,
        body: &str,
    ) {
        let Some(request) = read_request(&mut stream) else {
            return;
        };
        recorded.lock().expect("stub lock").push(request);

        if !delay.is_zero() {
            std::thread::sleep(delay);
        }

        let reason = if status < 400 { "OK" } else { "Error" };
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    }

    fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let n = stream.read(&mut chunk).ok()?;
            if n == 0 {
                return None;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let mut lines = head.split("\r\n").filter(|l| !l.is_empty());
        let request_line = lines.next()?.to_string();
        let headers: Vec<(String, String)> = lines
            .filter_map(|l| l.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();

        let content_length = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.parse::<usize>().ok())
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).ok()?;
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let body_end = buf.len().min(header_end + content_length);
        Some(RecordedRequest {
            request_line,
            headers,
            body: String::from_utf8_lossy(&buf[header_end..body_end]).to_string(),
        })
    }
}
