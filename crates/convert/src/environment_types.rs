//! Serde types for Postman environment exports.

use serde::Deserialize;
use serde_json::Value;

/// Root structure of a Postman environment file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostmanEnvironment {
    /// Environment id, when the export carries one.
    #[serde(default)]
    pub id: Option<String>,
    /// Environment name.
    #[serde(default)]
    pub name: String,
    /// Environment variables.
    #[serde(default)]
    pub values: Vec<PostmanEnvVariable>,
}

/// One variable inside a Postman environment.
///
/// Values are kept as raw JSON because exports mix strings, numbers and
/// booleans; `enabled` is optional because only an explicit `false`
/// disables a variable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostmanEnvVariable {
    /// Variable key.
    #[serde(default)]
    pub key: String,
    /// Variable value.
    #[serde(default)]
    pub value: Option<Value>,
    /// Whether the variable is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Variable type (`default`, `secret`, `any`).
    #[serde(rename = "type", default)]
    pub var_type: Option<String>,
}

impl PostmanEnvVariable {
    /// True when the variable is marked secret.
    #[must_use]
    pub fn is_secret(&self) -> bool {
        self.var_type.as_deref() == Some("secret")
    }
}
