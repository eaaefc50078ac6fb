use axum::{Json, body::Bytes, extract::State};
use serde::de::Error as _;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use crate::error::AppError;
use crate::metrics::{PROVIDER_ERRORS, REQUEST_LATENCY, REQUEST_TOTAL, VALIDATION_ERRORS, VARIATIONS_RETURNED};
use crate::models::{GenerationRequest, GenerationResponse};
use crate::prompt::{build_messages, split_variations};
use crate::state::AppState;

// Empty body and JSON null both read as an empty object, any other
// non-object is rejected so arrays never fill fields by position
fn parse_request(body: &[u8]) -> Result<GenerationRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GenerationRequest::default());
    }
    match serde_json::from_slice::<Value>(body)? {
        Value::Null => Ok(GenerationRequest::default()),
        value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
        _ => Err(AppError::InvalidBody(serde_json::Error::custom(
            "request body must be a JSON object",
        ))),
    }
}

pub async fn generate_copy_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<GenerationResponse>, AppError> {
    REQUEST_TOTAL.inc();

    let request = parse_request(&body).inspect_err(|e| {
        VALIDATION_ERRORS.inc();
        tracing::debug!(error = %e, "rejecting unreadable body");
    })?;

    let prompt = request.prompt.as_deref().map(str::trim).unwrap_or_default();
    if prompt.is_empty() {
        VALIDATION_ERRORS.inc();
        tracing::debug!("rejecting request without prompt");
        return Err(AppError::Validation);
    }

    let num_variations = request.num_variations();
    let messages = build_messages(prompt, num_variations);

    let start_time = Instant::now();
    let result = state.provider.complete(&messages).await;
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    let text = result.map_err(|e| {
        PROVIDER_ERRORS.inc();
        tracing::warn!(error = %e, "completion provider call failed");
        AppError::from(e)
    })?;

    let variations = split_variations(&text);
    VARIATIONS_RETURNED.inc_by(variations.len() as f64);
    tracing::info!(requested = num_variations, returned = variations.len(), "generated copy");

    Ok(Json(GenerationResponse { variations }))
}
