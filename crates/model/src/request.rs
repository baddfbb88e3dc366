//! Request building blocks: headers, params, variables, scripts, settings.

use serde::{Deserialize, Serialize};

/// An HTTP header entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
    /// Whether the header is active.
    pub enabled: bool,
}

impl Header {
    /// Creates an enabled header.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: String::new(),
            enabled: true,
        }
    }
}

/// Whether a parameter lives in the query string or the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// Query string parameter.
    Query,
    /// Path placeholder parameter.
    Path,
}

/// A query or path parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Parameter value.
    pub value: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
    /// Query or path.
    pub kind: ParamKind,
    /// Whether the parameter is active.
    pub enabled: bool,
}

/// A pre-request or post-response variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Var {
    /// Variable name.
    pub name: String,
    /// Variable value.
    pub value: String,
    /// Whether the variable is active.
    pub enabled: bool,
    /// Local variables are runtime-only and never serialized.
    #[serde(default)]
    pub local: bool,
}

impl Var {
    /// Creates an enabled, non-local variable.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            enabled: true,
            local: false,
        }
    }
}

/// Variables grouped by lifecycle phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vars {
    /// Variables set before the request runs.
    #[serde(default)]
    pub pre_request: Vec<Var>,
    /// Variables captured from the response.
    #[serde(default)]
    pub post_response: Vec<Var>,
}

/// Script code attached to a request, folder or collection.
///
/// Empty strings mean "no script"; the emitters skip empty blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripts {
    /// Code run before the request.
    #[serde(default)]
    pub pre_request: String,
    /// Code run after the response.
    #[serde(default)]
    pub post_response: String,
}

/// A response assertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    /// Assertion expression (left-hand side).
    pub name: String,
    /// Expected value expression.
    pub value: String,
    /// Whether the assertion is active.
    pub enabled: bool,
}

/// Per-request settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Whether the URL is percent-encoded before sending.
    pub encode_url: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { encode_url: true }
    }
}
