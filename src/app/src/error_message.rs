//! Normalizes backend error bodies into a single display string
//!
//! Backends answer with several shapes: `{"detail": "..."}`, FastAPI style
//! validation lists `{"detail": [{"msg": ...}]}`, `{"errors": [...]}`, nested
//! objects or plain text. [`ErrorPayload`] classifies a body into one of the
//! recognized shapes and [`extract`] turns it into a message.

use serde_json::{Map, Value};

/// Fields probed for the error detail, in priority order.
const DETAIL_FIELDS: [&str; 5] = ["detail", "message", "error", "msg", "errors"];

/// Fields probed on a nested detail object or list item, in priority order.
const MESSAGE_FIELDS: [&str; 3] = ["msg", "message", "detail"];

const LIST_SEPARATOR: &str = " | ";

/// Recognized error payload shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPayload<'a> {
    /// No payload, or a JSON falsy value (`null`, `false`, `0`, `""`).
    Absent,
    /// An object carrying one of the detail fields.
    Detailed(ErrorDetail<'a>),
    /// Anything else; rendered as-is.
    Bare(&'a Value),
}

/// Shape of the first detail field found on an error object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDetail<'a> {
    List(&'a [Value]),
    Text(&'a str),
    Object(&'a Map<String, Value>),
}

impl<'a> ErrorPayload<'a> {
    pub fn classify(err: Option<&'a Value>) -> Self {
        let Some(err) = err.filter(|v| is_truthy(v)) else {
            return Self::Absent;
        };

        let detail = err.as_object().and_then(|obj| {
            DETAIL_FIELDS
                .iter()
                .find_map(|field| obj.get(*field).filter(|v| !v.is_null()))
        });

        match detail {
            Some(Value::Array(items)) => Self::Detailed(ErrorDetail::List(items)),
            Some(Value::String(text)) => Self::Detailed(ErrorDetail::Text(text)),
            Some(Value::Object(obj)) => Self::Detailed(ErrorDetail::Object(obj)),
            // numbers and booleans in a detail field say nothing on their own
            Some(_) | None => Self::Bare(err),
        }
    }

    pub fn message(&self, fallback: &str) -> String {
        match self {
            Self::Absent => fallback.to_string(),
            Self::Detailed(ErrorDetail::List(items)) => {
                let joined = items
                    .iter()
                    .map(|item| list_item_message(item, fallback))
                    .filter(|msg| !msg.is_empty())
                    .collect::<Vec<_>>()
                    .join(LIST_SEPARATOR);
                if joined.is_empty() {
                    fallback.to_string()
                } else {
                    joined
                }
            }
            Self::Detailed(ErrorDetail::Text(text)) => text.to_string(),
            Self::Detailed(ErrorDetail::Object(obj)) => match first_message_field(obj) {
                Some(value) => display(value, fallback),
                None => stringify(&Value::Object((*obj).clone()), fallback),
            },
            Self::Bare(Value::String(text)) => text.clone(),
            Self::Bare(value) => stringify(value, fallback),
        }
    }
}

/// Turns an arbitrary error payload into a human readable message.
///
/// Never fails: anything that cannot be rendered yields `fallback`.
pub fn extract(err: Option<&Value>, fallback: &str) -> String {
    ErrorPayload::classify(err).message(fallback)
}

fn list_item_message(item: &Value, fallback: &str) -> String {
    if let Some(value) = item.as_object().and_then(first_message_field) {
        return display(value, fallback);
    }
    match item {
        Value::String(text) => text.clone(),
        other => stringify(other, fallback),
    }
}

fn first_message_field(obj: &Map<String, Value>) -> Option<&Value> {
    MESSAGE_FIELDS
        .iter()
        .find_map(|field| obj.get(*field).filter(|v| is_truthy(v)))
}

fn display(value: &Value, fallback: &str) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => stringify(other, fallback),
    }
}

fn stringify(value: &Value, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| fallback.to_string())
}

/// JavaScript truthiness, which decides what the backend considers "set".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
