//! Saved request/response examples.

use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::request::{Header, Param};

/// A saved example attached to a request: the request as it was sent and,
/// optionally, the response that came back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Example name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
    /// The request snapshot.
    pub request: ExampleRequest,
    /// The response snapshot, if one was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ExampleResponse>,
}

/// Request snapshot inside an example.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleRequest {
    /// Request URL.
    pub url: String,
    /// HTTP method.
    pub method: String,
    /// Query and path parameters.
    #[serde(default)]
    pub params: Vec<Param>,
    /// Request headers.
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Request body.
    #[serde(default)]
    pub body: Body,
}

/// Response snapshot inside an example.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleResponse {
    /// Response headers.
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Status code, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Status text, when recorded.
    #[serde(default)]
    pub status_text: String,
    /// Response body, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<ExampleBody>,
}

/// Body of a recorded example response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleBody {
    /// Content kind hint (e.g. "json", "html").
    #[serde(default)]
    pub kind: String,
    /// The body text.
    pub content: String,
}
