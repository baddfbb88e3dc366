//! Block builders shared by the request and root emitters.

use postbru_model::{Auth, Var};

use crate::text::{indent, key_string, value_string};

/// A name/value/enabled row inside a partitioned block.
pub(crate) struct Entry<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub enabled: bool,
}

/// Emits a `name { ... }` block with enabled rows first, then disabled rows
/// prefixed `~`. Keys are quoted when needed; values wrap when multiline.
/// Returns the empty string when there are no entries.
pub(crate) fn entry_block(block_name: &str, entries: &[Entry<'_>]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let line = |entry: &Entry<'_>, prefix: &str| {
        format!(
            "{prefix}{}: {}",
            key_string(entry.name),
            value_string(entry.value)
        )
    };
    let enabled: Vec<String> = entries
        .iter()
        .filter(|e| e.enabled)
        .map(|e| line(e, ""))
        .collect();
    let disabled: Vec<String> = entries
        .iter()
        .filter(|e| !e.enabled)
        .map(|e| line(e, "~"))
        .collect();

    let mut bru = format!("{block_name} {{");
    if !enabled.is_empty() {
        bru.push_str(&format!("\n{}", indent(&enabled.join("\n"))));
    }
    if !disabled.is_empty() {
        bru.push_str(&format!("\n{}", indent(&disabled.join("\n"))));
    }
    bru.push_str("\n}\n\n");
    bru
}

/// Emits a variables block. Names are never quoted. When `skip_local` is
/// set, runtime-local variables are filtered out of both partitions; the
/// block itself still appears whenever the raw list is non-empty.
pub(crate) fn vars_block(block_name: &str, vars: &[Var], skip_local: bool) -> String {
    if vars.is_empty() {
        return String::new();
    }
    let keep = |v: &&Var| !(skip_local && v.local);
    let enabled: Vec<String> = vars
        .iter()
        .filter(|v| v.enabled)
        .filter(keep)
        .map(|v| format!("{}: {}", v.name, value_string(&v.value)))
        .collect();
    let disabled: Vec<String> = vars
        .iter()
        .filter(|v| !v.enabled)
        .filter(keep)
        .map(|v| format!("~{}: {}", v.name, value_string(&v.value)))
        .collect();

    let mut bru = format!("{block_name} {{");
    if !enabled.is_empty() {
        bru.push_str(&format!("\n{}", indent(&enabled.join("\n"))));
    }
    if !disabled.is_empty() {
        bru.push_str(&format!("\n{}", indent(&disabled.join("\n"))));
    }
    bru.push_str("\n}\n\n");
    bru
}

/// Emits a `name { ... }` block holding indented freeform text (scripts,
/// tests, docs, raw bodies). Empty content yields no block.
pub(crate) fn text_block(block_name: &str, content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    format!("{block_name} {{\n{}\n}}\n\n", indent(content))
}

/// How an `auth:oauth2` block is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Oauth2Form {
    /// Request files: grant-specific fields before the client credentials.
    PerGrant,
    /// Root files: the condensed grant_type / access_token_url form.
    Condensed,
}

/// Emits the `auth:*` block for the given configuration. `None` and
/// `Inherit` produce no block; the mode still reaches the method block.
pub(crate) fn auth_blocks(auth: &Auth, form: Oauth2Form) -> String {
    let mut bru = String::new();
    match auth {
        Auth::None | Auth::Inherit => {}
        Auth::Awsv4 {
            access_key_id,
            secret_access_key,
            session_token,
            service,
            region,
            profile_name,
        } => {
            bru.push_str("auth:awsv4 {\n");
            bru.push_str(&format!("  accessKeyId: {access_key_id}\n"));
            bru.push_str(&format!("  secretAccessKey: {secret_access_key}\n"));
            bru.push_str(&format!("  sessionToken: {session_token}\n"));
            bru.push_str(&format!("  service: {service}\n"));
            bru.push_str(&format!("  region: {region}\n"));
            bru.push_str(&format!("  profileName: {profile_name}\n"));
            bru.push_str("}\n\n");
        }
        Auth::Basic { username, password } => {
            bru.push_str("auth:basic {\n");
            bru.push_str(&format!("  username: {username}\n"));
            bru.push_str(&format!("  password: {password}\n"));
            bru.push_str("}\n\n");
        }
        Auth::Bearer { token } => {
            bru.push_str(&format!("auth:bearer {{\n  token: {token}\n}}\n\n"));
        }
        Auth::Digest { username, password } => {
            bru.push_str("auth:digest {\n");
            bru.push_str(&format!("  username: {username}\n"));
            bru.push_str(&format!("  password: {password}\n"));
            bru.push_str("}\n\n");
        }
        Auth::ApiKey {
            key,
            value,
            placement,
        } => {
            bru.push_str("auth:apikey {\n");
            bru.push_str(&format!("  key: {key}\n"));
            bru.push_str(&format!("  value: {value}\n"));
            bru.push_str(&format!("  placement: {}\n", placement.as_str()));
            bru.push_str("}\n\n");
        }
        Auth::Oauth2ClientCredentials {
            access_token_url,
            client_id,
            client_secret,
            scope,
        } => {
            bru.push_str("auth:oauth2 {\n");
            bru.push_str("  grant_type: client_credentials\n");
            bru.push_str(&format!("  access_token_url: {access_token_url}\n"));
            push_oauth2_tail(&mut bru, client_id, client_secret, scope);
        }
        Auth::Oauth2AuthorizationCode {
            callback_url,
            authorization_url,
            access_token_url,
            pkce,
            client_id,
            client_secret,
            scope,
        } => {
            bru.push_str("auth:oauth2 {\n");
            bru.push_str("  grant_type: authorization_code\n");
            if form == Oauth2Form::PerGrant {
                bru.push_str(&format!("  callback_url: {callback_url}\n"));
                bru.push_str(&format!("  authorization_url: {authorization_url}\n"));
                bru.push_str(&format!("  access_token_url: {access_token_url}\n"));
                bru.push_str(&format!("  pkce: {pkce}\n"));
            } else {
                bru.push_str(&format!("  access_token_url: {access_token_url}\n"));
            }
            push_oauth2_tail(&mut bru, client_id, client_secret, scope);
        }
        Auth::Oauth2Password {
            access_token_url,
            username,
            password,
            client_id,
            client_secret,
            scope,
        } => {
            bru.push_str("auth:oauth2 {\n");
            bru.push_str("  grant_type: password\n");
            bru.push_str(&format!("  access_token_url: {access_token_url}\n"));
            if form == Oauth2Form::PerGrant {
                bru.push_str(&format!("  username: {username}\n"));
                bru.push_str(&format!("  password: {password}\n"));
            }
            push_oauth2_tail(&mut bru, client_id, client_secret, scope);
        }
    }
    bru
}

fn push_oauth2_tail(bru: &mut String, client_id: &str, client_secret: &str, scope: &str) {
    bru.push_str(&format!("  client_id: {client_id}\n"));
    bru.push_str(&format!("  client_secret: {client_secret}\n"));
    bru.push_str(&format!("  scope: {scope}\n"));
    bru.push_str("}\n\n");
}
