//! Postman environment to Bruno environment conversion.

use postbru_model::{Environment, EnvironmentVariable};
use serde_json::Value;

use crate::environment_types::PostmanEnvironment;
use crate::error::{ConvertError, ConvertResult};
use crate::types::scalar_to_string;

/// Converts a parsed Postman environment export into a Bruno environment.
///
/// A document with neither a `name` nor a `values` field is rejected as not
/// being an environment export at all. Variables with neither key nor value
/// are dropped; only an explicit `enabled: false` disables one.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidEnvironment`] when the document has no
/// environment shape, [`ConvertError::Conversion`] when it cannot be read.
pub fn postman_env_to_bruno_env(source: &Value) -> ConvertResult<Environment> {
    let name_blank = source
        .pointer("/name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .is_empty();
    let values_missing = matches!(source.pointer("/values"), None | Some(Value::Null));
    if name_blank && values_missing {
        return Err(ConvertError::InvalidEnvironment);
    }

    let environment: PostmanEnvironment = serde_json::from_value(source.clone())
        .map_err(|err| ConvertError::Conversion(err.to_string()))?;
    Ok(convert_environment(&environment))
}

fn convert_environment(environment: &PostmanEnvironment) -> Environment {
    let name = if environment.name.is_empty() {
        "Untitled Environment".to_string()
    } else {
        environment.name.clone()
    };

    let variables = environment
        .values
        .iter()
        .filter(|variable| !(variable.key.is_empty() && value_is_blank(variable.value.as_ref())))
        .map(|variable| EnvironmentVariable {
            name: variable.key.clone(),
            value: variable
                .value
                .as_ref()
                .map(scalar_to_string)
                .unwrap_or_default(),
            enabled: variable.enabled != Some(false),
            secret: variable.is_secret(),
        })
        .collect();

    Environment { name, variables }
}

fn value_is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}
