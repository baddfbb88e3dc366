//! Request file emitter.

use postbru_model::{Assertion, Body, MultipartValue, Param, ParamKind, RequestItem};

use crate::blocks::{Entry, Oauth2Form, auth_blocks, entry_block, text_block, vars_block};
use crate::example::example_to_bru;
use crate::text::{indent, key_string, strip_trailing_newline, url_string, value_string};

/// Methods with a dedicated shorthand block; anything else goes through
/// `http { method: ... }`.
const STANDARD_METHODS: [&str; 9] = [
    "get", "post", "put", "patch", "delete", "head", "options", "trace", "connect",
];

/// Serializes a request to `.bru` text.
///
/// Blocks appear in fixed order: meta, method, params:query, params:path,
/// headers, auth, body, vars, assert, scripts, tests, settings, docs and
/// examples. The output ends with exactly one newline.
#[must_use]
pub fn request_to_bru(item: &RequestItem) -> String {
    let mut bru = String::new();

    bru.push_str("meta {\n");
    bru.push_str(&format!("  name: {}\n", item.name));
    bru.push_str("  type: http\n");
    bru.push_str(&format!("  seq: {}\n", item.seq));
    bru.push_str("}\n\n");

    let method = item.method.to_lowercase();
    if STANDARD_METHODS.contains(&method.as_str()) {
        bru.push_str(&format!("{method} {{"));
    } else {
        bru.push_str(&format!("http {{\n  method: {method}"));
    }
    bru.push_str(&format!("\n  url: {}", url_string(&item.url)));
    bru.push_str(&format!("\n  body: {}", item.body.mode()));
    bru.push_str(&format!("\n  auth: {}", item.auth.mode()));
    bru.push_str("\n}\n\n");

    let query: Vec<Entry<'_>> = item
        .params
        .iter()
        .filter(|p| p.kind == ParamKind::Query)
        .map(|p| Entry {
            name: &p.name,
            value: &p.value,
            enabled: p.enabled,
        })
        .collect();
    bru.push_str(&entry_block("params:query", &query));
    bru.push_str(&path_params_block(&item.params));

    let headers: Vec<Entry<'_>> = item
        .headers
        .iter()
        .map(|h| Entry {
            name: &h.name,
            value: &h.value,
            enabled: h.enabled,
        })
        .collect();
    bru.push_str(&entry_block("headers", &headers));

    bru.push_str(&auth_blocks(&item.auth, Oauth2Form::PerGrant));
    bru.push_str(&body_blocks(&item.body));

    bru.push_str(&vars_block("vars:pre-request", &item.vars.pre_request, true));
    bru.push_str(&vars_block(
        "vars:post-response",
        &item.vars.post_response,
        true,
    ));
    bru.push_str(&assert_block(&item.assertions));

    bru.push_str(&text_block("script:pre-request", &item.script.pre_request));
    bru.push_str(&text_block(
        "script:post-response",
        &item.script.post_response,
    ));
    bru.push_str(&text_block("tests", &item.tests));

    bru.push_str("settings {\n");
    bru.push_str(&format!("  encodeUrl: {}\n", item.settings.encode_url));
    bru.push_str("}\n\n");

    bru.push_str(&text_block("docs", &item.docs));

    for example in &item.examples {
        bru.push_str(&format!(
            "example {{\n{}\n}}\n\n",
            indent(&example_to_bru(example))
        ));
    }

    strip_trailing_newline(&bru).to_string()
}

/// Path parameters keep source order and raw names; there is no disabled
/// state for them.
fn path_params_block(params: &[Param]) -> String {
    let lines: Vec<String> = params
        .iter()
        .filter(|p| p.kind == ParamKind::Path)
        .map(|p| format!("{}: {}", p.name, value_string(&p.value)))
        .collect();
    if lines.is_empty() {
        return String::new();
    }
    format!("params:path {{\n{}\n}}\n\n", indent(&lines.join("\n")))
}

fn body_blocks(body: &Body) -> String {
    let mut bru = String::new();
    match body {
        Body::None => {}
        Body::Json { content } => bru.push_str(&text_block("body:json", content)),
        Body::Text { content } => bru.push_str(&text_block("body:text", content)),
        Body::Xml { content } => bru.push_str(&text_block("body:xml", content)),
        Body::FormUrlEncoded { fields } => {
            let entries: Vec<Entry<'_>> = fields
                .iter()
                .map(|f| Entry {
                    name: &f.name,
                    value: &f.value,
                    enabled: f.enabled,
                })
                .collect();
            bru.push_str(&entry_block("body:form-urlencoded", &entries));
        }
        Body::MultipartForm { fields } => {
            if !fields.is_empty() {
                let lines: Vec<String> = fields
                    .iter()
                    .map(|f| {
                        let prefix = if f.enabled { "" } else { "~" };
                        match &f.value {
                            MultipartValue::Files(files) => format!(
                                "{prefix}{}: @file({})",
                                key_string(&f.name),
                                files.join("|")
                            ),
                            MultipartValue::Text(value) => format!(
                                "{prefix}{}: {}",
                                key_string(&f.name),
                                value_string(value)
                            ),
                        }
                    })
                    .collect();
                bru.push_str(&format!(
                    "body:multipart-form {{\n{}\n}}\n\n",
                    indent(&lines.join("\n"))
                ));
            }
        }
        Body::Graphql { query, variables } => {
            if !query.is_empty() {
                bru.push_str(&text_block("body:graphql", query));
                if !variables.is_empty() {
                    bru.push_str(&text_block("body:graphql:vars", variables));
                }
            }
        }
    }
    bru
}

/// Enabled assertions keep their raw name; disabled ones are quoted like
/// ordinary keys behind the `~` marker.
fn assert_block(assertions: &[Assertion]) -> String {
    if assertions.is_empty() {
        return String::new();
    }
    let enabled: Vec<String> = assertions
        .iter()
        .filter(|a| a.enabled)
        .map(|a| format!("{}: {}", a.name, value_string(&a.value)))
        .collect();
    let disabled: Vec<String> = assertions
        .iter()
        .filter(|a| !a.enabled)
        .map(|a| format!("~{}: {}", key_string(&a.name), value_string(&a.value)))
        .collect();

    let mut bru = String::from("assert {");
    if !enabled.is_empty() {
        bru.push_str(&format!("\n{}", indent(&enabled.join("\n"))));
    }
    if !disabled.is_empty() {
        bru.push_str(&format!("\n{}", indent(&disabled.join("\n"))));
    }
    bru.push_str("\n}\n\n");
    bru
}
