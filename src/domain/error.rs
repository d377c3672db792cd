use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Error domain tag carried by every [`ValidationError`] payload.
pub const ERROR_DOMAIN: &str = "rowcheck.table_content";

/// Payload key holding the ordered discrepancy messages.
///
/// Joining this array gives the text for an assertion message.
pub const ERRORS_ARRAY_KEY: &str = "errors";

/// Error kinds a table check can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Table content differs from the expected rows.
    Validation,
}

impl ErrorKind {
    pub const fn code(self) -> i32 {
        match self {
            Self::Validation => 1,
        }
    }
}

/// Every discrepancy found by one table check, in discovery order.
///
/// Only built through [`ValidationError::from_messages`], so a value of this
/// type always carries at least one message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("table content validation failed with {} discrepancies", .messages.len())]
pub struct ValidationError {
    kind: ErrorKind,
    messages: Vec<String>,
}

impl ValidationError {
    /// Returns `None` when there is nothing to report.
    pub fn from_messages(messages: Vec<String>) -> Option<Self> {
        if messages.is_empty() {
            return None;
        }
        Some(Self {
            kind: ErrorKind::Validation,
            messages,
        })
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> i32 {
        self.kind.code()
    }

    pub fn domain(&self) -> &'static str {
        ERROR_DOMAIN
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Keyed payload for test-runner and CLI reporting.
    pub fn to_payload(&self) -> Value {
        json!({
            "domain": ERROR_DOMAIN,
            "kind": self.kind,
            "code": self.code(),
            ERRORS_ARRAY_KEY: self.messages,
        })
    }
}

/// Errors produced while turning fixture values into expected rows.
#[derive(Debug, Error)]
pub enum RowError {
    /// A top-level fixture entry was not an object.
    #[error("expected row {index} must be an object, found {found}")]
    NotAnObject { index: usize, found: &'static str },

    /// A column value cannot be stored in a table cell.
    #[error("expected row {index} column `{column}`: {reason}")]
    InvalidCell {
        index: usize,
        column: String,
        reason: String,
    },
}
