//! Model endpoint boundary.
//!
//! Everything upstream of this module talks to the model through
//! [`ChatProvider`]: one non-streaming chat request carrying a system
//! instruction, a user input, a named strict JSON-schema response contract,
//! and a max-output-token budget. The response comes back as a
//! [`ResponseEnvelope`] so callers never probe provider-specific fields.

pub mod error;
pub mod openai;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::ProviderError;
pub use openai::OpenAiProvider;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockChatProvider;

use async_trait::async_trait;
use serde_json::Value;

/// One outbound structured chat request.
#[derive(Debug, Clone)]
pub struct ChatCall {
    /// Identifier for the response contract (surfaced in diagnostics).
    pub name: String,
    /// Optional human-readable contract description.
    pub description: Option<String>,
    /// JSON-schema document the response must conform to.
    pub schema: Value,
    /// System-level policy text.
    pub instructions: String,
    /// User-level content.
    pub input: String,
    /// Maximum output token budget for this attempt.
    pub max_output_tokens: u32,
}

/// Why the model stopped producing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishKind {
    /// Natural stop.
    Complete,
    /// Output was cut off by the token budget.
    Truncated,
    /// Output was suppressed by the provider's content filter.
    ContentFilter,
    /// Anything else (tool-call stops, provider extensions).
    Other,
}

impl std::fmt::Display for FinishKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FinishKind::Complete => "stop",
            FinishKind::Truncated => "length",
            FinishKind::ContentFilter => "content_filter",
            FinishKind::Other => "other",
        };
        write!(f, "{}", label)
    }
}

/// Where the textual payload of a response lives.
///
/// Exactly one location holds the payload when one is present; modeling this
/// as a variant keeps a future third location a type-checked change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePayload {
    /// Direct message content.
    Content(String),
    /// Argument string of the first function tool call.
    ToolCallArguments(String),
    /// No payload in either location.
    Absent,
}

impl ResponsePayload {
    /// Returns the payload text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            ResponsePayload::Content(text) | ResponsePayload::ToolCallArguments(text) => Some(text),
            ResponsePayload::Absent => None,
        }
    }

    /// Consumes the slot, returning the payload text if any.
    pub fn into_text(self) -> Option<String> {
        match self {
            ResponsePayload::Content(text) | ResponsePayload::ToolCallArguments(text) => Some(text),
            ResponsePayload::Absent => None,
        }
    }
}

/// Provider response reduced to the fields the extraction layer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    /// Finish indicator for the first choice.
    pub finish: FinishKind,
    /// Refusal message, if the model declined to answer.
    pub refusal: Option<String>,
    /// Payload location and text.
    pub payload: ResponsePayload,
    /// Whether the message carried any tool calls (diagnostics only).
    pub has_tool_calls: bool,
}

impl ResponseEnvelope {
    /// Envelope with direct content and a natural stop.
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            finish: FinishKind::Complete,
            refusal: None,
            payload: ResponsePayload::Content(text.into()),
            has_tool_calls: false,
        }
    }

    /// Envelope whose payload sits in a function tool call's arguments.
    pub fn tool_call_arguments(args: impl Into<String>) -> Self {
        Self {
            finish: FinishKind::Other,
            refusal: None,
            payload: ResponsePayload::ToolCallArguments(args.into()),
            has_tool_calls: true,
        }
    }

    /// Envelope with no payload and the given finish indicator.
    pub fn empty(finish: FinishKind) -> Self {
        Self {
            finish,
            refusal: None,
            payload: ResponsePayload::Absent,
            has_tool_calls: false,
        }
    }

    /// Envelope carrying a refusal message.
    pub fn refusal(message: impl Into<String>) -> Self {
        Self {
            finish: FinishKind::Complete,
            refusal: Some(message.into()),
            payload: ResponsePayload::Absent,
            has_tool_calls: false,
        }
    }
}

/// A model endpoint that can execute one structured chat request.
///
/// Implementations are stateless per call; concurrent calls must not
/// interfere with each other.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Executes one non-streaming chat request.
    async fn complete(&self, call: ChatCall) -> Result<ResponseEnvelope, ProviderError>;
}
