use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordanceErrorKind {
    AmbiguousOperation,
    UnroutableOperation,
    InvalidMethod,
    InvalidConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}{}", handler_suffix(.handler))]
pub struct AffordanceError {
    pub kind: AffordanceErrorKind,
    pub message: String,
    pub handler: Option<String>,
}

impl AffordanceError {
    pub fn new(kind: AffordanceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            handler: None,
        }
    }

    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }
}

fn handler_suffix(handler: &Option<String>) -> String {
    match handler {
        Some(handler) => format!(" (handler={handler})"),
        None => String::new(),
    }
}

pub fn ambiguous_operation(message: impl Into<String>) -> AffordanceError {
    AffordanceError::new(AffordanceErrorKind::AmbiguousOperation, message)
}

pub fn unroutable_operation(message: impl Into<String>) -> AffordanceError {
    AffordanceError::new(AffordanceErrorKind::UnroutableOperation, message)
}

pub fn invalid_method(message: impl Into<String>) -> AffordanceError {
    AffordanceError::new(AffordanceErrorKind::InvalidMethod, message)
}

pub fn invalid_config(message: impl Into<String>) -> AffordanceError {
    AffordanceError::new(AffordanceErrorKind::InvalidConfig, message)
}
