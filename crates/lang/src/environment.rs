//! Environment emitter (`environments/*.bru`).

use postbru_model::{Environment, EnvironmentVariable};

use crate::text::{indent, value_string};

/// Serializes an environment to `.bru` text.
///
/// Plain variables live in a `vars` block with their values; secret
/// variables are listed by name only in a `vars:secret` array so their
/// values never reach disk. Disabled entries carry the `~` marker.
#[must_use]
pub fn environment_to_bru(env: &Environment) -> String {
    let plain: Vec<&EnvironmentVariable> = env.variables.iter().filter(|v| !v.secret).collect();
    let secret: Vec<&EnvironmentVariable> = env.variables.iter().filter(|v| v.secret).collect();

    let mut bru = String::from("vars {");
    if !plain.is_empty() {
        let lines: Vec<String> = plain
            .iter()
            .map(|v| {
                let prefix = if v.enabled { "" } else { "~" };
                format!("{prefix}{}: {}", v.name, value_string(&v.value))
            })
            .collect();
        bru.push_str(&format!("\n{}", indent(&lines.join("\n"))));
    }
    bru.push_str("\n}\n");

    if !secret.is_empty() {
        let names: Vec<String> = secret
            .iter()
            .map(|v| {
                let prefix = if v.enabled { "" } else { "~" };
                format!("  {prefix}{}", v.name)
            })
            .collect();
        bru.push_str(&format!("\nvars:secret [\n{}\n]\n", names.join(",\n")));
    }
    bru
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn var(name: &str, value: &str, enabled: bool, secret: bool) -> EnvironmentVariable {
        EnvironmentVariable {
            name: name.into(),
            value: value.into(),
            enabled,
            secret,
        }
    }

    #[test]
    fn test_empty_environment() {
        let env = Environment {
            name: "Local".into(),
            variables: vec![],
        };
        assert_eq!(environment_to_bru(&env), "vars {\n}\n");
    }

    #[test]
    fn test_plain_and_secret_variables() {
        let env = Environment {
            name: "Staging".into(),
            variables: vec![
                var("host", "https://api.example.com", true, false),
                var("legacy", "old", false, false),
                var("token", "hunter2", true, true),
                var("oldToken", "x", false, true),
            ],
        };
        let expected = "\
vars {
  host: https://api.example.com
  ~legacy: old
}

vars:secret [
  token,
  ~oldToken
]
";
        assert_eq!(environment_to_bru(&env), expected);
    }
}
