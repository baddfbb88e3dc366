//! Example emitter.
//!
//! Examples nest inside a request file, so this emitter uses inline
//! sub-blocks (`params:query: { ... }`) at a four-space inner indent
//! instead of top-level blocks, and returns text without a trailing
//! newline; the request emitter wraps and indents it.

use postbru_model::{Body, Example, MultipartValue, Param, ParamKind};

use crate::text::{indent_spaces, key_string, strip_trailing_newline};

/// Serializes one saved example.
#[must_use]
pub fn example_to_bru(example: &Example) -> String {
    let mut bru = String::new();

    if !example.name.is_empty() {
        bru.push_str(&format!("name: {}\n", example.name));
    }
    if !example.description.is_empty() {
        bru.push_str(&format!("description: {}\n", example.description));
    }

    bru.push_str("\nrequest: {\n");
    bru.push_str(&format!("  url: {}\n", example.request.url));
    bru.push_str(&format!("  method: {}\n", example.request.method));
    bru.push_str(&format!("  mode: {}\n", example.request.body.mode()));

    bru.push_str(&param_sub_block(
        "params:query",
        &example.request.params,
        ParamKind::Query,
    ));
    bru.push_str(&param_sub_block(
        "params:path",
        &example.request.params,
        ParamKind::Path,
    ));

    if !example.request.headers.is_empty() {
        let lines: Vec<String> = example
            .request
            .headers
            .iter()
            .map(|h| {
                let prefix = if h.enabled { "" } else { "~" };
                format!("{prefix}{}: {}", key_string(&h.name), h.value)
            })
            .collect();
        bru.push_str(&format!(
            "  headers: {{\n{}\n  }}\n\n",
            indent_spaces(&lines.join("\n"), 4)
        ));
    }

    bru.push_str(&body_sub_blocks(&example.request.body));

    if bru.ends_with("\n\n") {
        bru.pop();
    }
    bru.push_str("}\n\n");

    if let Some(response) = &example.response {
        bru.push_str("response: {\n");

        if !response.headers.is_empty() {
            let lines: Vec<String> = response
                .headers
                .iter()
                .map(|h| format!("{}: {}", key_string(&h.name), h.value))
                .collect();
            bru.push_str(&format!(
                "  headers: {{\n{}\n  }}\n\n",
                indent_spaces(&lines.join("\n"), 4)
            ));
        }

        if response.status_code.is_some() || !response.status_text.is_empty() {
            bru.push_str("  status: {\n");
            if let Some(code) = response.status_code {
                bru.push_str(&format!("    code: {code}\n"));
            }
            if !response.status_text.is_empty() {
                bru.push_str(&format!("    text: {}\n", response.status_text));
            }
            bru.push_str("  }\n\n");
        }

        if let Some(body) = &response.body {
            bru.push_str("  body: {\n");
            if !body.kind.is_empty() {
                bru.push_str(&format!("    type: {}\n", body.kind));
            }
            bru.push_str(&format!(
                "    content: '''\n{}\n    '''\n",
                indent_spaces(&body.content, 6)
            ));
            bru.push_str("  }\n\n");
        }

        bru.truncate(strip_trailing_newline(&bru).len());
        bru.push('}');
    }

    loop {
        let stripped = strip_trailing_newline(&bru);
        if stripped.len() == bru.len() {
            break;
        }
        bru.truncate(stripped.len());
    }
    bru
}

/// Example params keep source order; disabled entries carry an inline `~`
/// marker rather than being partitioned to the bottom.
fn param_sub_block(block_name: &str, params: &[Param], kind: ParamKind) -> String {
    let lines: Vec<String> = params
        .iter()
        .filter(|p| p.kind == kind)
        .map(|p| {
            let prefix = if p.enabled { "" } else { "~" };
            format!("{prefix}{}: {}", key_string(&p.name), p.value)
        })
        .collect();
    if lines.is_empty() {
        return String::new();
    }
    format!(
        "  {block_name}: {{\n{}\n  }}\n\n",
        indent_spaces(&lines.join("\n"), 4)
    )
}

fn body_sub_blocks(body: &Body) -> String {
    let mut bru = String::new();
    match body {
        // The raw graphql payload has no example sub-block form.
        Body::None | Body::Graphql { .. } => {}
        Body::Json { content } => bru.push_str(&raw_sub_block("body:json", content)),
        Body::Text { content } => bru.push_str(&raw_sub_block("body:text", content)),
        Body::Xml { content } => bru.push_str(&raw_sub_block("body:xml", content)),
        Body::FormUrlEncoded { fields } => {
            if !fields.is_empty() {
                bru.push_str("  body:form-urlencoded: {\n");
                let enabled: Vec<String> = fields
                    .iter()
                    .filter(|f| f.enabled)
                    .map(|f| format!("{}: {}", key_string(&f.name), f.value))
                    .collect();
                let disabled: Vec<String> = fields
                    .iter()
                    .filter(|f| !f.enabled)
                    .map(|f| format!("~{}: {}", key_string(&f.name), f.value))
                    .collect();
                if !enabled.is_empty() {
                    bru.push_str(&format!("{}\n", indent_spaces(&enabled.join("\n"), 4)));
                }
                if !disabled.is_empty() {
                    bru.push_str(&format!("{}\n", indent_spaces(&disabled.join("\n"), 4)));
                }
                bru.push_str("  }\n\n");
            }
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
                            MultipartValue::Text(value) => {
                                format!("{prefix}{}: {value}", key_string(&f.name))
                            }
                        }
                    })
                    .collect();
                bru.push_str(&format!(
                    "  body:multipart-form: {{\n{}\n  }}\n\n",
                    indent_spaces(&lines.join("\n"), 4)
                ));
            }
        }
    }
    bru
}

fn raw_sub_block(block_name: &str, content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    format!(
        "  {block_name}: {{\n{}\n  }}\n\n",
        indent_spaces(content, 4)
    )
}
