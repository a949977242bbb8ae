use ferrous_mdns_domain::Message;
use serde::Serialize;

/// One output line: either the decoded message or why it was dropped.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> Report<'a> {
    pub fn decoded(line: usize, message: &'a Message) -> Self {
        Self {
            line,
            message: Some(message),
            error: None,
        }
    }

    pub fn failed(line: usize, error: impl ToString) -> Self {
        Self {
            line,
            message: None,
            error: Some(error.to_string()),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
