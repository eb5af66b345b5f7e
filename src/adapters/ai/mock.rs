//! Mock text generator for testing.
//!
//! Configurable to return specific replies or inject errors, with call
//! tracking so tests can verify which prompts were sent.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{GenerationError, TextGenerator};

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(GenerationError),
}

/// Mock generation engine.
///
/// Responses are consumed in order; once exhausted a default reply is
/// returned so tests do not have to configure every call.
#[derive(Debug, Clone, Default)]
pub struct MockTextGenerator {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Success(content.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GenerationError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Number of generate calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All prompts sent so far.
    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Success(content)) => Ok(content),
            Some(MockResponse::Error(err)) => Err(err),
            None => Ok("Mock reply".to_string()),
        }
    }
}
