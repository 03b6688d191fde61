use serde::Deserialize;
use serde_json::Value;

pub const REPLY_FALLBACK: &str = "Sorry, I couldn't process your request.";

#[derive(Debug, Deserialize)]
struct FlowResponse {
    outputs: Vec<RunOutput>,
}

#[derive(Debug, Deserialize)]
struct RunOutput {
    outputs: Vec<ComponentOutput>,
}

#[derive(Debug, Deserialize)]
struct ComponentOutput {
    outputs: ComponentResults,
}

#[derive(Debug, Deserialize)]
struct ComponentResults {
    message: MessageEnvelope,
}

#[derive(Debug, Deserialize)]
struct MessageEnvelope {
    message: MessageBody,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    text: String,
}

/// The generated text buried in a flow run response, or `Unrecognized` when
/// the document does not have the expected shape.
#[derive(Debug, PartialEq)]
pub enum AgentReply {
    Text(String),
    Unrecognized,
}

impl AgentReply {
    pub fn from_value(value: &Value) -> Self {
        let response = match FlowResponse::deserialize(value) {
            Ok(response) => response,
            Err(_) => return AgentReply::Unrecognized,
        };

        response
            .outputs
            .into_iter()
            .next()
            .and_then(|run| run.outputs.into_iter().next())
            .map(|component| component.outputs.message.message.text)
            .filter(|text| !text.is_empty())
            .map_or(AgentReply::Unrecognized, AgentReply::Text)
    }

    pub fn text(&self) -> &str {
        match self {
            AgentReply::Text(text) => text,
            AgentReply::Unrecognized => REPLY_FALLBACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_text_from_nested_run_output() {
        let value = json!({
            "outputs": [{
                "outputs": [{
                    "outputs": {
                        "message": { "message": { "text": "hi there" } }
                    }
                }]
            }]
        });

        assert_eq!(
            AgentReply::from_value(&value),
            AgentReply::Text("hi there".to_string())
        );
    }

    #[test]
    fn falls_back_on_unexpected_shape() {
        let value = json!({ "detail": "flow not found" });

        let reply = AgentReply::from_value(&value);
        assert_eq!(reply, AgentReply::Unrecognized);
        assert_eq!(reply.text(), REPLY_FALLBACK);
    }

    #[test]
    fn falls_back_on_empty_outputs() {
        let value = json!({ "outputs": [] });

        assert_eq!(AgentReply::from_value(&value), AgentReply::Unrecognized);
    }

    #[test]
    fn falls_back_on_empty_text() {
        let value = json!({
            "outputs": [{
                "outputs": [{
                    "outputs": {
                        "message": { "message": { "text": "" } }
                    }
                }]
            }]
        });

        assert_eq!(AgentReply::from_value(&value), AgentReply::Unrecognized);
    }
}
