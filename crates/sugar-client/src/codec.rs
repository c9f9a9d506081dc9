//! Wire codec for the SugarCRM REST protocol.
//!
//! Outbound calls are a form with exactly four fields:
//!
//! | field           | value                                   |
//! |-----------------|-----------------------------------------|
//! | `method`        | RPC name, e.g. `get_entry`              |
//! | `input_type`    | `JSON`                                  |
//! | `response_type` | `JSON`                                  |
//! | `rest_data`     | JSON-serialized ordered argument array  |
//!
//! Replies are JSON in which every entity field is wrapped as
//! `{"name": ..., "value": ...}`. The server also emits HTML-escaped
//! apostrophes (`&#039;`) inside otherwise valid JSON; [`decode`] undoes
//! that before parsing.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Literal value of the `input_type` form field.
pub const INPUT_TYPE: &str = "JSON";

/// Literal value of the `response_type` form field.
pub const RESPONSE_TYPE: &str = "JSON";

const ESCAPED_APOSTROPHE: &str = "&#039;";

/// An encoded REST call, ready to be sent as a form body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestRequest {
    pub method: String,
    pub input_type: &'static str,
    pub response_type: &'static str,
    pub rest_data: String,
}

impl RestRequest {
    /// Serialize the request as an `application/x-www-form-urlencoded` body.
    pub fn to_form(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(self)?)
    }

    /// Parse the argument array back out of `rest_data`.
    pub fn args(&self) -> Result<Vec<Value>> {
        Ok(serde_json::from_str(&self.rest_data)?)
    }
}

/// Encode a method call and its ordered arguments.
pub fn encode(method: &str, args: &[Value]) -> Result<RestRequest> {
    Ok(RestRequest {
        method: method.to_string(),
        input_type: INPUT_TYPE,
        response_type: RESPONSE_TYPE,
        rest_data: serde_json::to_string(args)?,
    })
}

/// Decode a raw reply body.
///
/// `&#039;` is replaced with `'` before parsing. Anything that is still not
/// valid JSON afterwards is an error; there is no partial decode.
pub fn decode(raw: &str) -> Result<Value> {
    let normalized = raw.replace(ESCAPED_APOSTROPHE, "'");
    Ok(serde_json::from_str(&normalized)?)
}

/// Extract `v` from a `{"value": v}` field wrapper.
///
/// Returns `None` when the entry is not a wrapper, which the server uses to
/// signal that no object was found.
pub fn unwrap_field(wrapped: &Value) -> Option<&Value> {
    wrapped.as_object()?.get("value")
}
