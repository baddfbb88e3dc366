//! Postman Collection v2.x type definitions.
//!
//! These types parse both v2.0 and v2.1 exports. `#[serde(default)]` is used
//! extensively, and fields whose shape varies between exporter versions
//! (URLs, descriptions, script bodies, auth parameters) are modeled as
//! untagged enums or raw JSON values.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root structure of a Postman Collection v2.x file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanCollection {
    #[serde(default)]
    pub info: PostmanInfo,
    #[serde(default)]
    pub item: Vec<PostmanItem>,
    #[serde(default)]
    pub variable: Vec<PostmanVariable>,
    #[serde(default)]
    pub auth: Option<PostmanAuth>,
    #[serde(default)]
    pub event: Vec<PostmanEvent>,
}

/// Collection metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanInfo {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "_postman_id", default)]
    pub postman_id: Option<String>,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub schema: Option<String>,
}

/// A description, which exporters write either as a plain string or as an
/// object with a `content` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Object {
        #[serde(default)]
        content: String,
    },
    Other(Value),
}

impl Description {
    /// Returns the descriptive text; unknown shapes read as empty.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Object { content } => content,
            Self::Other(_) => "",
        }
    }
}

/// Flattens an optional description into its text.
#[must_use]
pub fn description_text(description: Option<&Description>) -> String {
    description.map(|d| d.text().to_string()).unwrap_or_default()
}

/// Coerces a JSON scalar to text; non-scalar values become empty.
pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

/// An item is either a folder (no `request` payload) or a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<Description>,
    /// Sub-items when this item is a folder.
    #[serde(default)]
    pub item: Option<Vec<Self>>,
    /// Request payload; its absence is what makes an item a folder.
    #[serde(default)]
    pub request: Option<PostmanRequest>,
    /// Saved response examples.
    #[serde(default)]
    pub response: Option<Vec<PostmanResponse>>,
    /// Scripts attached to this item.
    #[serde(default)]
    pub event: Vec<PostmanEvent>,
    /// Item-level auth override (folders only).
    #[serde(default)]
    pub auth: Option<PostmanAuth>,
    #[serde(rename = "protocolProfileBehavior", default)]
    pub protocol_profile_behavior: Option<ProtocolProfileBehavior>,
}

impl PostmanItem {
    /// Returns true if this item is a folder.
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        self.request.is_none()
    }
}

/// Per-request protocol tweaks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProtocolProfileBehavior {
    #[serde(rename = "disableUrlEncoding", default)]
    pub disable_url_encoding: Option<bool>,
}

/// Postman request definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanRequest {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub url: PostmanUrl,
    #[serde(default)]
    pub header: Vec<PostmanHeader>,
    #[serde(default)]
    pub body: Option<PostmanBody>,
    #[serde(default)]
    pub auth: Option<PostmanAuth>,
    #[serde(default)]
    pub description: Option<Description>,
}

/// A URL, which exports write as a plain string or a structured object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostmanUrl {
    #[default]
    Empty,
    Simple(String),
    Structured(PostmanUrlStructured),
}

impl PostmanUrl {
    /// Returns the structured form, if this URL has one.
    #[must_use]
    pub const fn structured(&self) -> Option<&PostmanUrlStructured> {
        match self {
            Self::Structured(url) => Some(url),
            _ => None,
        }
    }
}

/// Structured URL object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanUrlStructured {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub host: Option<OneOrMany>,
    #[serde(default)]
    pub port: Option<PortValue>,
    #[serde(default)]
    pub path: Option<OneOrMany>,
    #[serde(default)]
    pub query: Vec<PostmanQueryParam>,
    /// Path variables for URL templates like `:id`.
    #[serde(default)]
    pub variable: Vec<PostmanPathVariable>,
}

/// Host and path segments arrive as a single string or a segment array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Joins array segments with `sep`, dropping empty segments; a plain
    /// string passes through unchanged.
    #[must_use]
    pub fn join(&self, sep: &str) -> String {
        match self {
            Self::One(value) => value.clone(),
            Self::Many(parts) => parts
                .iter()
                .filter(|part| !part.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join(sep),
        }
    }
}

/// Ports appear as strings in v2.1 exports and numbers in some v2.0 ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortValue {
    Text(String),
    Number(u64),
}

impl PortValue {
    /// True when the port should be rendered (empty strings and 0 are not).
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Number(number) => *number != 0,
        }
    }
}

impl std::fmt::Display for PortValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Query string parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanQueryParam {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub disabled: bool,
}

/// Path variable for URL templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanPathVariable {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub description: Option<Description>,
}

/// Request or response header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanHeader {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub disabled: bool,
}

/// Request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanBody {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub urlencoded: Vec<PostmanFormParam>,
    #[serde(default)]
    pub formdata: Vec<PostmanFormDataParam>,
    /// GraphQL payload; either an object or a JSON-encoded string.
    #[serde(default)]
    pub graphql: Option<Value>,
    #[serde(default)]
    pub options: Option<PostmanBodyOptions>,
}

/// Form URL-encoded parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanFormParam {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub disabled: bool,
}

/// Form-data parameter (supports file uploads).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanFormDataParam {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    /// File source path(s); a string or an array of strings.
    #[serde(default)]
    pub src: Option<Value>,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(rename = "type", default)]
    pub param_type: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// Body options (raw language hint).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanBodyOptions {
    #[serde(default)]
    pub raw: Option<PostmanRawOptions>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanRawOptions {
    #[serde(default)]
    pub language: Option<String>,
}

/// Authentication configuration.
///
/// The per-type parameters live under a key named after `type`; v2.1 writes
/// them as a `{key, value}` array and v2.0 as a flat object, so the payload
/// is kept as raw JSON and folded on access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanAuth {
    #[serde(rename = "type", default)]
    pub auth_type: String,
    #[serde(flatten)]
    pub values: serde_json::Map<String, Value>,
}

impl PostmanAuth {
    /// Parameters for the active auth type as one flat map.
    ///
    /// v2.1 `{key, value}` arrays are folded with the last key winning;
    /// v2.0 objects are used directly.
    #[must_use]
    pub fn params(&self) -> serde_json::Map<String, Value> {
        match self.values.get(&self.auth_type) {
            Some(Value::Array(entries)) => {
                let mut params = serde_json::Map::new();
                for entry in entries {
                    if let Some(key) = entry.get("key").and_then(Value::as_str) {
                        let value = entry.get("value").cloned().unwrap_or(Value::Null);
                        params.insert(key.to_string(), value);
                    }
                }
                params
            }
            Some(Value::Object(params)) => params.clone(),
            _ => serde_json::Map::new(),
        }
    }
}

/// Collection-level variable definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanVariable {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

/// Event carrying a pre-request or test script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanEvent {
    #[serde(default)]
    pub listen: String,
    #[serde(default)]
    pub script: Option<PostmanScript>,
}

/// Script definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanScript {
    #[serde(rename = "type", default)]
    pub script_type: Option<String>,
    #[serde(default)]
    pub exec: Option<ScriptExec>,
}

/// Script source, written as an array of lines or a single string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptExec {
    Lines(Vec<String>),
    Single(String),
}

impl ScriptExec {
    /// Returns the script text with lines joined by `\n`.
    ///
    /// An empty single string counts as no script at all, while an empty
    /// line array yields an empty script.
    #[must_use]
    pub fn to_code(&self) -> Option<String> {
        match self {
            Self::Single(code) if code.is_empty() => None,
            Self::Single(code) => Some(code.clone()),
            Self::Lines(lines) => Some(lines.join("\n")),
        }
    }
}

/// Saved response example attached to a request item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostmanResponse {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "originalRequest", default)]
    pub original_request: Option<PostmanRequest>,
    /// Status text, e.g. "Created".
    #[serde(default)]
    pub status: String,
    /// Numeric status code.
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub header: Option<Vec<PostmanHeader>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(rename = "_postman_previewlanguage", default)]
    pub preview_language: Option<String>,
}

impl PostmanResponse {
    /// Response headers, tolerating the explicit-null form some exporters
    /// write.
    #[must_use]
    pub fn headers(&self) -> &[PostmanHeader] {
        self.header.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_collection() {
        let json = r#"{
            "info": {
                "name": "Test Collection",
                "_postman_id": "abc123",
                "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
            },
            "item": []
        }"#;

        let collection: PostmanCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.info.name, "Test Collection");
        assert!(collection.item.is_empty());
    }

    #[test]
    fn test_item_without_request_is_folder() {
        let json = r#"{"name": "Admin", "item": []}"#;
        let item: PostmanItem = serde_json::from_str(json).unwrap();
        assert!(item.is_folder());

        let json = r#"{"name": "Ping", "request": {"method": "GET", "url": "https://e.c"}}"#;
        let item: PostmanItem = serde_json::from_str(json).unwrap();
        assert!(!item.is_folder());
    }

    #[test]
    fn test_url_shapes() {
        let simple: PostmanUrl = serde_json::from_str(r#""https://e.c/a""#).unwrap();
        assert!(matches!(simple, PostmanUrl::Simple(_)));

        let structured: PostmanUrl = serde_json::from_str(
            r#"{"host": ["api", "example", "com"], "path": "users", "port": 8080}"#,
        )
        .unwrap();
        let url = structured.structured().unwrap();
        assert_eq!(url.host.as_ref().unwrap().join("."), "api.example.com");
        assert_eq!(url.path.as_ref().unwrap().join("/"), "users");
        assert!(url.port.as_ref().unwrap().is_set());
    }

    #[test]
    fn test_description_shapes() {
        let text: Description = serde_json::from_str(r#""plain""#).unwrap();
        assert_eq!(text.text(), "plain");

        let object: Description =
            serde_json::from_str(r#"{"content": "from object", "type": "text/plain"}"#).unwrap();
        assert_eq!(object.text(), "from object");

        let number: Description = serde_json::from_str("5").unwrap();
        assert_eq!(number.text(), "");
    }

    #[test]
    fn test_auth_params_v21_pairs_fold_last_wins() {
        let json = r#"{
            "type": "bearer",
            "bearer": [
                {"key": "token", "value": "first"},
                {"key": "token", "value": "second"}
            ]
        }"#;
        let auth: PostmanAuth = serde_json::from_str(json).unwrap();
        assert_eq!(auth.params()["token"], "second");
    }

    #[test]
    fn test_auth_params_v20_flat_object() {
        let json = r#"{"type": "basic", "basic": {"username": "u", "password": "p"}}"#;
        let auth: PostmanAuth = serde_json::from_str(json).unwrap();
        let params = auth.params();
        assert_eq!(params["username"], "u");
        assert_eq!(params["password"], "p");
    }

    #[test]
    fn test_script_exec_shapes() {
        let lines: ScriptExec = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(lines.to_code().unwrap(), "a\nb");

        let single: ScriptExec = serde_json::from_str(r#""console.log(1);""#).unwrap();
        assert_eq!(single.to_code().unwrap(), "console.log(1);");

        let blank: ScriptExec = serde_json::from_str(r#""""#).unwrap();
        assert!(blank.to_code().is_none());

        let empty: ScriptExec = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.to_code().unwrap(), "");
    }
}
