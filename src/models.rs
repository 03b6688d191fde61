use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct FlowRequest {
    pub input_value: String,
    pub output_type: &'static str,
    pub input_type: &'static str,
    pub tweaks: Map<String, Value>,
}

impl FlowRequest {
    pub fn new(message: String) -> Self {
        Self {
            input_value: message,
            output_type: "chat",
            input_type: "chat",
            // Reserved for per-component overrides; always sent empty.
            tweaks: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flow_request_serializes_with_fixed_fields() {
        let request = FlowRequest::new("hello".to_string());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "input_value": "hello",
                "output_type": "chat",
                "input_type": "chat",
                "tweaks": {}
            })
        );
    }
}
