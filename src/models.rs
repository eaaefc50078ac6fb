use serde::{Deserialize, Serialize};

pub const DEFAULT_NUM_VARIATIONS: i64 = 3;

// Body of POST /api/generate-copy
#[derive(Deserialize, Debug, Default, Clone)]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub num_variations: Option<i64>,
}

impl GenerationRequest {
    pub fn num_variations(&self) -> i64 {
        self.num_variations.unwrap_or(DEFAULT_NUM_VARIATIONS)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerationResponse {
    pub variations: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

// One role-tagged message sent to the completion provider
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompletionMessage {
    pub role: Role,
    pub content: String,
}

impl CompletionMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

// OpenAI chat completion request format
#[derive(Serialize, Debug, Clone)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [CompletionMessage],
    pub temperature: f32,
    pub n: u32,
}

// OpenAI chat completion response format, only the fields we read
#[derive(Deserialize, Debug, Clone)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

// Error envelope returned by the provider on non-2xx replies
#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorDetail,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorDetail {
    pub message: String,
}
