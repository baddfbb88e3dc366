//! URL assembly from Postman's structured form.

use crate::types::{PostmanUrl, PostmanUrlStructured};

/// Produces the display URL for a request.
///
/// A non-empty `raw` string wins, minus any `#fragment`. Otherwise the URL
/// is assembled from protocol (default `http`), host, port, path and query
/// parts. Query entries without a key are dropped from the query string.
#[must_use]
pub fn construct_url(url: &PostmanUrl) -> String {
    match url {
        PostmanUrl::Empty => String::new(),
        PostmanUrl::Simple(raw) => raw.clone(),
        PostmanUrl::Structured(parts) => assemble(parts),
    }
}

fn assemble(url: &PostmanUrlStructured) -> String {
    if let Some(raw) = url.raw.as_deref().filter(|raw| !raw.is_empty()) {
        return raw.split('#').next().unwrap_or_default().to_string();
    }

    let protocol = url.protocol.as_deref().unwrap_or("http");
    let host = url.host.as_ref().map(|h| h.join(".")).unwrap_or_default();
    let path = url.path.as_ref().map(|p| p.join("/")).unwrap_or_default();
    let port = url
        .port
        .as_ref()
        .filter(|port| port.is_set())
        .map(|port| format!(":{port}"))
        .unwrap_or_default();
    let query = if url.query.is_empty() {
        String::new()
    } else {
        let entries: Vec<String> = url
            .query
            .iter()
            .filter_map(|param| {
                let key = param.key.as_deref().filter(|key| !key.is_empty())?;
                Some(format!("{key}={}", param.value.as_deref().unwrap_or_default()))
            })
            .collect();
        format!("?{}", entries.join("&"))
    };
    let path = if path.is_empty() {
        String::new()
    } else {
        format!("/{path}")
    };

    format!("{protocol}://{host}{port}{path}{query}")
}
