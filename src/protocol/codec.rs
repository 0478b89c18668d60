//! JSON text framing for the worker boundary.
//!
//! Every frame is a single `{"type": ..., "message": ...}` object. A frame
//! with no transmittable content decodes to `None` instead of an error so
//! heartbeats and blank posts pass through harmlessly.

use crate::protocol::command::Command;
use crate::protocol::errors::CodecError;
use crate::protocol::event::Event;
use crate::protocol::message::Message;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Encoded text of one message, exactly as it is posted across the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireFrame(String);

impl WireFrame {
    #[must_use]
    pub fn empty() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WireFrame {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for WireFrame {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl fmt::Display for WireFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn encode(message: &Message) -> Result<WireFrame, CodecError> {
    to_frame(message)
}

pub fn encode_command(command: &Command) -> Result<WireFrame, CodecError> {
    to_frame(command)
}

pub fn encode_event(event: &Event) -> Result<WireFrame, CodecError> {
    to_frame(event)
}

/// Inverse of [`encode`]. Blank text, `null` and `{}` are empty frames.
pub fn decode(frame: &str) -> Result<Option<Message>, CodecError> {
    let text = frame.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(text).map_err(CodecError::Malformed)?;
    if is_empty_envelope(&value) {
        return Ok(None);
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(CodecError::Malformed)
}

fn to_frame<T: Serialize>(payload: &T) -> Result<WireFrame, CodecError> {
    serde_json::to_string(payload)
        .map(WireFrame)
        .map_err(CodecError::Encode)
}

fn is_empty_envelope(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}
