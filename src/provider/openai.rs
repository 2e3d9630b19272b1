//! OpenAI-backed [`ChatProvider`] implementation.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionMessageToolCalls, CreateChatCompletionRequest, CreateChatCompletionResponse,
    FinishReason,
};
use async_trait::async_trait;

use crate::config::Config;
use crate::provider::{
    ChatCall, ChatProvider, FinishKind, ProviderError, ResponseEnvelope, ResponsePayload,
};

/// Reasoning effort requested for every structured call. These calls want a
/// short schema-shaped answer, not a deliberation transcript.
const REASONING_EFFORT: &str = "minimal";

/// Chat-completions client for an OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiProvider {
    /// Creates a provider for the given credential, optional base URL
    /// override, and model.
    pub fn new(api_key: &str, api_base: Option<&str>, model: &str) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base) = api_base {
            config = config.with_api_base(base);
        }

        Self {
            client: Client::with_config(config),
            model: model.to_string(),
        }
    }

    /// Creates a provider from server configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_key, config.api_base.as_deref(), &config.model)
    }

    fn build_request(&self, call: &ChatCall) -> Result<CreateChatCompletionRequest, ProviderError> {
        let request_value = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": call.instructions },
                { "role": "user", "content": call.input },
            ],
            "stream": false,
            "reasoning_effort": REASONING_EFFORT,
            "max_completion_tokens": call.max_output_tokens,
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": call.name,
                    "description": call.description,
                    "schema": call.schema,
                    "strict": true,
                },
            },
        });

        serde_json::from_value(request_value).map_err(|e| ProviderError::RequestBuild(e.to_string()))
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn complete(&self, call: ChatCall) -> Result<ResponseEnvelope, ProviderError> {
        let request = self.build_request(&call)?;

        tracing::debug!(
            name = %call.name,
            model = %self.model,
            max_output_tokens = call.max_output_tokens,
            "Sending structured chat request"
        );

        let response = self.client.chat().create(request).await?;
        envelope_from_response(response)
    }
}

fn envelope_from_response(
    response: CreateChatCompletionResponse,
) -> Result<ResponseEnvelope, ProviderError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(ProviderError::NoChoices)?;

    let finish = choice
        .finish_reason
        .map(finish_kind_from_reason)
        .unwrap_or(FinishKind::Other);

    let message = choice.message;
    let refusal = message.refusal.filter(|r| !r.trim().is_empty());
    let has_tool_calls = message
        .tool_calls
        .as_ref()
        .is_some_and(|calls| !calls.is_empty());

    let content = message.content.unwrap_or_default();
    let payload = if !content.is_empty() {
        ResponsePayload::Content(content)
    } else if let Some(args) = first_function_call_arguments(message.tool_calls.as_deref()) {
        ResponsePayload::ToolCallArguments(args)
    } else {
        ResponsePayload::Absent
    };

    Ok(ResponseEnvelope {
        finish,
        refusal,
        payload,
        has_tool_calls,
    })
}

fn finish_kind_from_reason(reason: FinishReason) -> FinishKind {
    match reason {
        FinishReason::Stop => FinishKind::Complete,
        FinishReason::Length => FinishKind::Truncated,
        FinishReason::ContentFilter => FinishKind::ContentFilter,
        _ => FinishKind::Other,
    }
}

/// Pulls the argument string out of the first tool call, provided it is a
/// function call with non-empty arguments. Later tool calls are ignored.
fn first_function_call_arguments(
    calls: Option<&[ChatCompletionMessageToolCalls]>,
) -> Option<String> {
    match calls?.first()? {
        ChatCompletionMessageToolCalls::Function(call) => {
            let args = call.function.arguments.clone();
            (!args.is_empty()).then_some(args)
        }
        ChatCompletionMessageToolCalls::Custom(_) => None,
    }
}
