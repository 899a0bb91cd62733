//! Greeting entity and request DTO
//!
//! [`Greeting`] is the persisted record. [`GreetingRequest`] is the body
//! accepted from clients on create and update; it must pass
//! [`GreetingRequest::validate`] before reaching the service layer.

use super::errors::GreetingsError;
use super::ids::GreetingId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum message length, in UTF-16 code units
pub const MAX_MESSAGE_LENGTH: usize = 255;

const BLANK_MESSAGE: &str = "Message cannot be blank";
const OVERSIZED_MESSAGE: &str = "Message cannot exceed 255 characters";

/// A persisted greeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Greeting {
    /// Store-assigned identifier
    pub id: GreetingId,

    /// Greeting text
    pub message: String,

    /// Set once when the row is inserted
    pub created_at: DateTime<Utc>,
}

impl Greeting {
    /// Returns a copy carrying a new message; id and creation time are kept
    pub fn with_message(mut self, message: ValidatedMessage) -> Self {
        self.message = message.into_inner();
        self
    }
}

/// A greeting that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGreeting {
    pub message: String,
}

impl NewGreeting {
    pub fn new(message: ValidatedMessage) -> Self {
        Self {
            message: message.into_inner(),
        }
    }
}

/// Message text that passed field validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMessage(String);

impl ValidatedMessage {
    /// Validates raw message text
    ///
    /// # Errors
    ///
    /// Returns [`GreetingsError::Validation`] when the text is blank or longer
    /// than [`MAX_MESSAGE_LENGTH`] characters.
    pub fn parse(message: impl Into<String>) -> Result<Self, GreetingsError> {
        let message = message.into();
        let errors = check_message(Some(&message));
        if errors.is_empty() {
            Ok(Self(message))
        } else {
            Err(GreetingsError::Validation(errors))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Request body for create and update
///
/// A missing or `null` message deserializes to `None` and is rejected as
/// blank by [`validate`](Self::validate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl GreetingRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Checks the request and yields the message on success
    ///
    /// # Errors
    ///
    /// Returns [`GreetingsError::Validation`] with one entry per violated rule.
    pub fn validate(self) -> Result<ValidatedMessage, GreetingsError> {
        let errors = check_message(self.message.as_deref());
        match self.message {
            Some(message) if errors.is_empty() => Ok(ValidatedMessage(message)),
            _ => Err(GreetingsError::Validation(errors)),
        }
    }
}

fn check_message(message: Option<&str>) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let message = message.unwrap_or_default();

    if message.trim().is_empty() {
        errors.push(FieldError::new("message", BLANK_MESSAGE));
    }
    if message.encode_utf16().count() > MAX_MESSAGE_LENGTH {
        errors.push(FieldError::new("message", OVERSIZED_MESSAGE));
    }

    errors
}
