use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::provider::{ChatCall, ChatProvider, ProviderError, ResponseEnvelope};

/// Scripted provider for tests.
///
/// Responses are served in push order; every incoming call is recorded along
/// with its token budget so tests can assert on retry behavior and on calls
/// that must never happen.
#[derive(Clone, Default)]
pub struct MockChatProvider {
    inner: Arc<MockInner>,
}

#[derive(Default)]
struct MockInner {
    script: Mutex<VecDeque<Result<ResponseEnvelope, ProviderError>>>,
    calls: Mutex<Vec<ChatCall>>,
}

impl MockChatProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an envelope to serve on the next call.
    pub fn push(&self, envelope: ResponseEnvelope) {
        self.inner
            .script
            .lock()
            .expect("mock script lock")
            .push_back(Ok(envelope));
    }

    /// Queues a transport failure.
    pub fn push_error(&self, message: &str) {
        self.inner
            .script
            .lock()
            .expect("mock script lock")
            .push_back(Err(ProviderError::Unavailable(message.to_string())));
    }

    /// Queues a content envelope carrying the given JSON text.
    pub fn push_json(&self, json: &str) {
        self.push(ResponseEnvelope::content(json));
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.inner.calls.lock().expect("mock call log lock").len()
    }

    /// Snapshot of every recorded call, in arrival order.
    pub fn calls(&self) -> Vec<ChatCall> {
        self.inner
            .calls
            .lock()
            .expect("mock call log lock")
            .clone()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, call: ChatCall) -> Result<ResponseEnvelope, ProviderError> {
        self.inner
            .calls
            .lock()
            .expect("mock call log lock")
            .push(call);

        self.inner
            .script
            .lock()
            .expect("mock script lock")
            .pop_front()
            .unwrap_or_else(|| {
                Err(ProviderError::Unavailable(
                    "mock script exhausted".to_string(),
                ))
            })
    }
}
