//! Environments and their variables.

use serde::{Deserialize, Serialize};

/// A named set of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Environment name.
    pub name: String,
    /// Variables in source order.
    #[serde(default)]
    pub variables: Vec<EnvironmentVariable>,
}

/// One environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    /// Variable name.
    pub name: String,
    /// Variable value.
    pub value: String,
    /// Whether the variable is active.
    pub enabled: bool,
    /// Secret variables keep their value out of serialized output.
    #[serde(default)]
    pub secret: bool,
}
