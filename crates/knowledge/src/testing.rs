//! In-memory doubles for the search backend, chat client and sleeper, plus a
//! one-shot local HTTP server for exercising the real search client.

use crate::rag::retry::Sleeper;
use crate::search::DocumentSearch;
use crate::types::{Document, SearchPage};
use infohub_llm::{ChatClient, ChatRequest, ChatResponse, LlmError, LlmUsage};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub fn doc(uuid: &str, name: &str, description: &str) -> Document {
    Document {
        name: name.to_string(),
        description: description.to_string(),
        doc_type: "განმარტება".to_string(),
        base_type: String::new(),
        url: format!("https://infohub.rs.ge/ka/workspace/document/{}", uuid),
        uuid: uuid.to_string(),
        date: String::new(),
        relevance_score: None,
    }
}

/// Search backend answering from a fixed query → page table.
#[derive(Default)]
pub struct MockSearch {
    pages: HashMap<String, SearchPage>,
    queries: Mutex<Vec<String>>,
}

impl MockSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, query: &str, page: SearchPage) -> Self {
        self.pages.insert(query.to_string(), page);
        self
    }

    /// Queries searched so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DocumentSearch for MockSearch {
    async fn search(&self, query: &str, take: usize) -> SearchPage {
        self.queries.lock().unwrap().push(query.to_string());
        let mut page = self.pages.get(query).cloned().unwrap_or_default();
        page.documents.truncate(take);
        page
    }
}

/// Chat client replaying scripted outcomes; the last one repeats forever.
pub struct ScriptedChat {
    script: Mutex<VecDeque<Result<String, LlmError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedChat {
    pub fn new(script: Vec<Result<String, LlmError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn answering(answer: &str) -> Self {
        Self::new(vec![Ok(answer.to_string())])
    }

    pub fn failing(error: LlmError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ChatClient for ScriptedChat {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());

        let mut script = self.script.lock().unwrap();
        let outcome = if script.len() > 1 {
            script.pop_front()
        } else {
            script.front().cloned()
        };

        match outcome {
            Some(Ok(content)) => Ok(ChatResponse {
                content,
                model: request.model.clone(),
                usage: LlmUsage::default(),
            }),
            Some(Err(e)) => Err(e),
            None => Err(LlmError::unclassified("script exhausted")),
        }
    }
}

/// Sleeper that records requested durations without waiting.
#[derive(Default)]
pub struct RecordingSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn durations(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}

/// Answer the next request on a local port with a canned response.
///
/// Returns the base URL (`http://127.0.0.1:<port>`).
pub async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{}", addr)
}

/// Consume request head and body so the client sees a clean response.
async fn read_request(socket: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                return;
            }
        }
    }
}
