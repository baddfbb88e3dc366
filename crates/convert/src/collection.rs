//! Postman collection to Bruno collection conversion.

use std::collections::HashSet;
use std::sync::LazyLock;

use postbru_model::{
    Auth, Collection, Example, ExampleBody, ExampleRequest, ExampleResponse, Folder, Header,
    IdProvider, Item, Param, ParamKind, RequestItem, Root, Scripts, Settings, Var, Vars,
};
use regex::Regex;
use serde_json::Value;

use crate::auth::convert_auth;
use crate::body::{convert_body, search_language_by_header};
use crate::error::{ConvertError, ConvertResult};
use crate::script;
use crate::types::{
    PostmanCollection, PostmanEvent, PostmanHeader, PostmanItem, PostmanResponse, PostmanUrl,
    PostmanVariable, ScriptExec, description_text, scalar_to_string,
};
use crate::url::construct_url;

/// Schema URLs accepted as Postman Collection v2.x.
const V2_SCHEMAS: [&str; 4] = [
    "https://schema.getpostman.com/json/collection/v2.0.0/collection.json",
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json",
    "https://schema.postman.com/json/collection/v2.0.0/collection.json",
    "https://schema.postman.com/json/collection/v2.1.0/collection.json",
];

#[allow(clippy::expect_used)]
static VARIABLE_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-zA-Z0-9_]").expect("valid regex"));

/// Converts a parsed Postman Collection v2.x document into a Bruno
/// collection.
///
/// The `info.schema` URL is validated first; anything other than the four
/// known v2.x URLs is rejected. Item ids come from `ids`, one per folder
/// and request plus one for the collection itself, assigned in tree order.
///
/// # Errors
///
/// Returns [`ConvertError::UnsupportedSchema`] for unknown schema URLs and
/// [`ConvertError::Conversion`] when the document cannot be read as a
/// collection.
pub fn postman_to_bruno(source: &Value, ids: &dyn IdProvider) -> ConvertResult<Collection> {
    let schema = source
        .pointer("/info/schema")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if !V2_SCHEMAS.contains(&schema) {
        return Err(ConvertError::UnsupportedSchema);
    }

    let collection: PostmanCollection = serde_json::from_value(source.clone())
        .map_err(|err| ConvertError::Conversion(err.to_string()))?;
    Ok(convert_collection(&collection, ids))
}

fn convert_collection(collection: &PostmanCollection, ids: &dyn IdProvider) -> Collection {
    let name = if collection.info.name.is_empty() {
        "Untitled Collection".to_string()
    } else {
        collection.info.name.clone()
    };

    Collection {
        id: ids.next_id(),
        name: name.clone(),
        version: "1".to_string(),
        items: convert_items(&collection.item, ids),
        environments: Vec::new(),
        root: Root {
            name,
            docs: description_text(collection.info.description.as_ref()),
            headers: Vec::new(),
            auth: convert_auth(collection.auth.as_ref(), Auth::None),
            script: scripts_from_events(&collection.event),
            tests: String::new(),
            vars: Vars {
                pre_request: collection_variables(&collection.variable),
                post_response: Vec::new(),
            },
        },
    }
}

/// Converts one level of the item tree.
///
/// Sequence numbers follow the source position, so skipping an invalid
/// request leaves a gap. Duplicate sibling names get `_1`, `_2`, ...
/// suffixes, folders and requests counted separately.
fn convert_items(items: &[PostmanItem], ids: &dyn IdProvider) -> Vec<Item> {
    let mut converted = Vec::new();
    let mut folder_names = HashSet::new();
    let mut request_names = HashSet::new();

    for (index, item) in items.iter().enumerate() {
        if item.is_folder() {
            let base = if item.name.is_empty() {
                "Untitled Folder"
            } else {
                item.name.as_str()
            };
            let name = unique_name(base, &folder_names);
            let id = ids.next_id();
            let children = item
                .item
                .as_deref()
                .map(|sub_items| convert_items(sub_items, ids))
                .unwrap_or_default();

            converted.push(Item::Folder(Folder {
                id,
                name: name.clone(),
                seq: index + 1,
                items: children,
                root: Root {
                    name: name.clone(),
                    docs: description_text(item.description.as_ref()),
                    headers: Vec::new(),
                    auth: convert_auth(item.auth.as_ref(), Auth::Inherit),
                    script: scripts_from_events(&item.event),
                    tests: String::new(),
                    vars: Vars::default(),
                },
            }));
            folder_names.insert(name);
        } else if let Some(request) = &item.request {
            let method = request.method.clone().unwrap_or_default().to_uppercase();
            if method.trim().is_empty() {
                tracing::warn!(item = %item.name, "skipping request with missing or invalid method");
                continue;
            }

            let base = if item.name.is_empty() {
                "Untitled Request"
            } else {
                item.name.as_str()
            };
            let name = unique_name(base, &request_names);

            let mut params = query_params(&request.url);
            params.extend(path_params(&request.url));

            converted.push(Item::Request(RequestItem {
                id: ids.next_id(),
                name: name.clone(),
                seq: index + 1,
                method,
                url: construct_url(&request.url),
                params,
                headers: convert_headers(&request.header),
                auth: convert_auth(request.auth.as_ref(), Auth::Inherit),
                body: convert_body(request.body.as_ref(), &request.header),
                script: scripts_from_events(&item.event),
                vars: Vars::default(),
                assertions: Vec::new(),
                tests: String::new(),
                docs: description_text(request.description.as_ref()),
                settings: Settings {
                    encode_url: item
                        .protocol_profile_behavior
                        .as_ref()
                        .and_then(|behavior| behavior.disable_url_encoding)
                        != Some(true),
                },
                examples: item
                    .response
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .map(convert_example)
                    .collect(),
            }));
            request_names.insert(name);
        }
    }

    converted
}

fn unique_name(base: &str, taken: &HashSet<String>) -> String {
    let mut name = base.to_string();
    let mut count = 1;
    while taken.contains(&name) {
        name = format!("{base}_{count}");
        count += 1;
    }
    name
}

/// Folds events into scripts; the last event per listen type wins, and an
/// event with an empty exec array clears the script.
fn scripts_from_events(events: &[PostmanEvent]) -> Scripts {
    let mut scripts = Scripts::default();
    for event in events {
        let Some(code) = event
            .script
            .as_ref()
            .and_then(|script| script.exec.as_ref())
            .and_then(ScriptExec::to_code)
        else {
            continue;
        };
        let translated = if code.is_empty() {
            String::new()
        } else {
            script::translate(&code)
        };
        match event.listen.as_str() {
            "prerequest" => scripts.pre_request = translated,
            "test" => scripts.post_response = translated,
            _ => {}
        }
    }
    scripts
}

/// Collection variables become pre-request vars; names are sanitized to
/// `[A-Za-z0-9_]` and entries with neither key nor value are dropped.
fn collection_variables(variables: &[PostmanVariable]) -> Vec<Var> {
    variables
        .iter()
        .filter(|variable| !(variable.key.is_none() && variable.value.is_none()))
        .map(|variable| {
            let name = VARIABLE_NAME_CHARS
                .replace_all(variable.key.as_deref().unwrap_or_default(), "_")
                .into_owned();
            let value = variable
                .value
                .as_ref()
                .map(scalar_to_string)
                .unwrap_or_default();
            Var::new(name, value)
        })
        .collect()
}

fn convert_headers(headers: &[PostmanHeader]) -> Vec<Header> {
    headers
        .iter()
        .map(|header| Header {
            name: header.key.clone(),
            value: header.value.clone(),
            description: description_text(header.description.as_ref()),
            enabled: !header.disabled,
        })
        .collect()
}

fn query_params(url: &PostmanUrl) -> Vec<Param> {
    url.structured()
        .map(|url| {
            url.query
                .iter()
                .map(|param| Param {
                    name: param.key.clone().unwrap_or_default(),
                    value: param.value.clone().unwrap_or_default(),
                    description: description_text(param.description.as_ref()),
                    kind: ParamKind::Query,
                    enabled: !param.disabled,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Path parameters skip entries without a key; a missing value reads as
/// empty rather than dropping the entry.
fn path_params(url: &PostmanUrl) -> Vec<Param> {
    url.structured()
        .map(|url| {
            url.variable
                .iter()
                .filter_map(|variable| {
                    let key = variable.key.as_deref().filter(|key| !key.is_empty())?;
                    Some(Param {
                        name: key.to_string(),
                        value: variable.value.clone().unwrap_or_default(),
                        description: description_text(variable.description.as_ref()),
                        kind: ParamKind::Path,
                        enabled: true,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Turns a saved response into an example: the original request is rebuilt
/// with the same URL, header and body rules as live requests, and the body
/// kind falls back to content-type sniffing when the export carries no
/// preview language.
fn convert_example(response: &PostmanResponse) -> Example {
    let request = response
        .original_request
        .as_ref()
        .map(|original| ExampleRequest {
            url: construct_url(&original.url),
            method: original.method.clone().unwrap_or_default().to_uppercase(),
            params: query_params(&original.url),
            headers: convert_headers(&original.header),
            body: convert_body(original.body.as_ref(), &original.header),
        })
        .unwrap_or_default();

    let body = response
        .body
        .as_deref()
        .filter(|content| !content.is_empty())
        .map(|content| ExampleBody {
            kind: response
                .preview_language
                .clone()
                .filter(|language| !language.is_empty())
                .or_else(|| {
                    search_language_by_header(response.headers()).map(str::to_string)
                })
                .unwrap_or_default(),
            content: content.to_string(),
        });

    Example {
        name: response.name.clone(),
        description: String::new(),
        request,
        response: Some(ExampleResponse {
            headers: convert_headers(response.headers()),
            status_code: response.code,
            status_text: response.status.clone(),
            body,
        }),
    }
}
