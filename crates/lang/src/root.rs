//! Collection and folder root emitters (`collection.bru`, `folder.bru`).

use postbru_model::Root;

use crate::blocks::{Entry, Oauth2Form, auth_blocks, entry_block, text_block, vars_block};

/// Serializes collection-level metadata to `collection.bru` text.
#[must_use]
pub fn collection_to_bru(root: &Root) -> String {
    root_to_bru(root)
}

/// Serializes folder-level metadata to `folder.bru` text.
#[must_use]
pub fn folder_to_bru(root: &Root) -> String {
    root_to_bru(root)
}

/// Root files share one layout: meta, headers, auth, vars:pre-request,
/// scripts, tests, docs. There is no post-response vars block and no
/// settings block at this level, and `auth:oauth2` uses the condensed form.
fn root_to_bru(root: &Root) -> String {
    let mut bru = String::new();

    bru.push_str("meta {\n");
    bru.push_str(&format!("  name: {}\n", root.name));
    bru.push_str("}\n\n");

    let headers: Vec<Entry<'_>> = root
        .headers
        .iter()
        .map(|h| Entry {
            name: &h.name,
            value: &h.value,
            enabled: h.enabled,
        })
        .collect();
    bru.push_str(&entry_block("headers", &headers));

    bru.push_str(&auth_blocks(&root.auth, Oauth2Form::Condensed));

    bru.push_str(&vars_block(
        "vars:pre-request",
        &root.vars.pre_request,
        false,
    ));

    bru.push_str(&text_block("script:pre-request", &root.script.pre_request));
    bru.push_str(&text_block(
        "script:post-response",
        &root.script.post_response,
    ));
    bru.push_str(&text_block("tests", &root.tests));
    bru.push_str(&text_block("docs", &root.docs));

    if bru.ends_with("\n\n") {
        bru.pop();
    }
    bru
}
