//! Request body conversion.

use std::sync::LazyLock;

use postbru_model::{Body, FormField, MultipartField, MultipartValue};
use regex::Regex;
use serde_json::Value;

use crate::types::{PostmanBody, PostmanFormDataParam, PostmanHeader, description_text};

#[allow(clippy::expect_used)]
static JSON_CONTENT_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-]+/([\w\-]+\+)?json").expect("valid regex"));

#[allow(clippy::expect_used)]
static XML_CONTENT_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-]+/([\w\-]+\+)?xml").expect("valid regex"));

/// Maps a Postman body onto a Bruno body.
///
/// Raw bodies take their language from `options.raw.language` when present,
/// otherwise from the request's `Content-Type` header; anything that is not
/// json or xml lands in the text variant. Unknown or missing modes produce
/// `Body::None`.
#[must_use]
pub fn convert_body(body: Option<&PostmanBody>, headers: &[PostmanHeader]) -> Body {
    let Some(body) = body else {
        return Body::None;
    };

    match body.mode.as_deref().unwrap_or_default() {
        "formdata" => Body::MultipartForm {
            fields: body.formdata.iter().map(multipart_field).collect(),
        },
        "urlencoded" => Body::FormUrlEncoded {
            fields: body
                .urlencoded
                .iter()
                .map(|param| FormField {
                    name: param.key.clone(),
                    value: param.value.clone().unwrap_or_default(),
                    description: description_text(param.description.as_ref()),
                    enabled: !param.disabled,
                })
                .collect(),
        },
        "raw" => {
            let content = body.raw.clone().unwrap_or_default();
            let language = body
                .options
                .as_ref()
                .and_then(|options| options.raw.as_ref())
                .and_then(|raw| raw.language.as_deref())
                .filter(|language| !language.is_empty())
                .or_else(|| search_language_by_header(headers));
            match language {
                Some("json") => Body::Json { content },
                Some("xml") => Body::Xml { content },
                _ => Body::Text { content },
            }
        }
        "graphql" => {
            let (query, variables) = parse_graphql(body.graphql.as_ref());
            Body::Graphql { query, variables }
        }
        _ => Body::None,
    }
}

/// Sniffs `json` or `xml` from `Content-Type` headers.
///
/// Every enabled header is inspected in order and the last match wins;
/// suffix types such as `application/vnd.api+json` count.
pub(crate) fn search_language_by_header(headers: &[PostmanHeader]) -> Option<&'static str> {
    let mut language = None;
    for header in headers {
        if header.key.eq_ignore_ascii_case("content-type") && !header.disabled {
            if JSON_CONTENT_TYPE.is_match(&header.value) {
                language = Some("json");
            } else if XML_CONTENT_TYPE.is_match(&header.value) {
                language = Some("xml");
            }
        }
    }
    language
}

fn multipart_field(param: &PostmanFormDataParam) -> MultipartField {
    let value = if param.param_type.as_deref() == Some("file") {
        let files = match &param.src {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| entry.as_str().unwrap_or_default().to_string())
                .collect(),
            Some(Value::String(path)) => vec![path.clone()],
            _ => Vec::new(),
        };
        MultipartValue::Files(files)
    } else {
        MultipartValue::Text(param.value.clone().unwrap_or_default())
    };

    MultipartField {
        name: param.key.clone(),
        value,
        description: description_text(param.description.as_ref()),
        enabled: !param.disabled,
    }
}

/// Splits a GraphQL payload into query and variables text.
///
/// Accepts both the object form and a JSON-encoded string; malformed
/// payloads yield empty fields. Object-valued variables are re-encoded as
/// compact JSON.
fn parse_graphql(source: Option<&Value>) -> (String, String) {
    let Some(source) = source else {
        return (String::new(), String::new());
    };
    let graphql: Value = match source {
        Value::String(encoded) => match serde_json::from_str(encoded) {
            Ok(value) => value,
            Err(_) => return (String::new(), String::new()),
        },
        other => other.clone(),
    };

    let query = graphql
        .get("query")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let variables = match graphql.get("variables") {
        Some(Value::String(text)) => text.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => serde_json::to_string(other).unwrap_or_default(),
    };
    (query, variables)
}
