use serde::{Deserialize, Serialize};

/// Error body returned by the donation API on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ErrorMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
    Other(serde_json::Value),
}

impl ErrorMessage {
    /// Flattens the message into one line, joining lists with ", ".
    pub fn joined(&self) -> String {
        match self {
            ErrorMessage::Single(message) => message.clone(),
            ErrorMessage::Many(messages) => messages.join(", "),
            ErrorMessage::Other(value) => value.to_string(),
        }
    }
}

impl ApiErrorBody {
    pub fn detail(&self) -> Option<String> {
        let detail = self.message.as_ref()?.joined();
        (!detail.is_empty()).then_some(detail)
    }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
