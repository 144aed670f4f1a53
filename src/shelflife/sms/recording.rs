use super::MessageSender;
use crate::error::{InventoryError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub to: String,
    pub body: String,
}

/// In-memory sender for tests and dry runs.
/// Does NOT deliver anything.
#[derive(Debug, Default)]
pub struct RecordingSender {
    pub sent: Vec<SentMessage>,
    fail_when_body_contains: Vec<String>,
    fail_all: bool,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send fails.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Sends whose body contains `needle` fail; others succeed.
    pub fn fail_on(mut self, needle: impl Into<String>) -> Self {
        self.fail_when_body_contains.push(needle.into());
        self
    }

    pub fn bodies(&self) -> Vec<&str> {
        self.sent.iter().map(|m| m.body.as_str()).collect()
    }
}

impl MessageSender for RecordingSender {
    fn send(&mut self, to: &str, body: &str) -> Result<()> {
        if self.fail_all
            || self
                .fail_when_body_contains
                .iter()
                .any(|needle| body.contains(needle.as_str()))
        {
            return Err(InventoryError::Delivery(format!(
                "recording sender rejected message to {}",
                to
            )));
        }
        self.sent.push(SentMessage {
            to: to.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
