use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::ProxyError,
    models::{ChatRequest, FlowRequest},
    reply::AgentReply,
    AppState,
};

pub async fn health_check() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Forwards one chat message to the agent-flow API and relays the reply.
///
/// The body is taken as raw bytes rather than through the `Json` extractor so
/// that an unparseable request lands in the same generic 500 envelope as every
/// other failure instead of an extractor rejection. On success the upstream
/// bytes are returned verbatim; the proxy only checks that they parse as JSON.
pub async fn chat_proxy(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let request: ChatRequest = serde_json::from_slice(&body)?;
    let flow_request = FlowRequest::new(request.message);

    // The deadline covers the whole upstream exchange, headers and body;
    // dropping the future on elapse aborts the in-flight call.
    let call = async {
        let response = state
            .client
            .post(&state.config.flow_url)
            .bearer_auth(&state.config.api_token)
            .json(&flow_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus(status));
        }

        Ok(response.text().await?)
    };

    let text = match tokio::time::timeout(state.config.upstream_timeout, call).await {
        Ok(result) => result?,
        Err(_) => return Err(ProxyError::Timeout),
    };
    let value: Value = serde_json::from_str(&text)?;
    tracing::debug!(reply = AgentReply::from_value(&value).text(), "agent reply");

    Ok(([(header::CONTENT_TYPE, "application/json")], text).into_response())
}
