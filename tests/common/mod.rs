#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use copy_gateway::models::CompletionMessage;
use copy_gateway::provider::{CompletionProvider, ProviderError};
use copy_gateway::startup::build_router;
use copy_gateway::state::AppState;
use http_body_util::BodyExt;
use reqwest::StatusCode as ProviderStatus;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub enum Reply {
    Text(String),
    Unauthorized(String),
    NoChoices,
}

/// Provider double that records every call and answers with a fixed reply.
pub struct StubProvider {
    reply: Reply,
    pub calls: Mutex<Vec<Vec<CompletionMessage>>>,
}

impl StubProvider {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self { reply, calls: Mutex::new(Vec::new()) })
    }

    pub fn text(text: &str) -> Arc<Self> {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Vec<CompletionMessage> {
        self.calls.lock().unwrap().last().cloned().expect("provider was never called")
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, messages: &[CompletionMessage]) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Unauthorized(message) => Err(ProviderError::Api {
                status: ProviderStatus::UNAUTHORIZED,
                message: message.clone(),
            }),
            Reply::NoChoices => Err(ProviderError::NoChoices),
        }
    }
}

pub fn app(provider: Arc<StubProvider>, static_dir: &Path) -> Router {
    build_router(Arc::new(AppState::new(provider)), static_dir)
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
