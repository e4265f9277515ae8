use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::transport::{ApiRequest, ApiResponse, HttpTransport, TransportError};

/// In-memory HttpTransport for tests.
///
/// Answers requests from a queue of canned responses, in order, and records
/// every request it receives. An empty queue answers with a transport error.
#[derive(Clone, Debug, Default)]
pub struct RecordingTransport {
    responses: Arc<Mutex<VecDeque<Result<ApiResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and a JSON `body`.
    pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push(Ok(ApiResponse::new(status, body.to_string())))
    }

    /// Queue a response with a raw text body.
    pub fn respond_text(&self, status: u16, body: &str) -> &Self {
        self.push(Ok(ApiResponse::new(status, body)))
    }

    /// Queue a failure that never reaches the server.
    pub fn fail(&self, message: &str) -> &Self {
        self.push(Err(TransportError(message.to_string())))
    }

    fn push(&self, response: Result<ApiResponse, TransportError>) -> &Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
        self
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl HttpTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no response queued".to_string())))
    }
}
