//! Authentication modes for requests, folders and the collection root.

use serde::{Deserialize, Serialize};

/// Authentication configuration attached to a request or a root block.
///
/// The variant is the single source of truth for the auth mode; payload
/// fields exist only on the variants that use them, so a populated payload
/// can never disagree with the discriminant. String values may contain
/// `{{variables}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Auth {
    /// No authentication.
    #[default]
    None,

    /// Inherit authentication from the enclosing folder or collection.
    Inherit,

    /// HTTP Basic authentication.
    Basic {
        /// Username for basic auth.
        username: String,
        /// Password for basic auth.
        password: String,
    },

    /// Bearer token authentication.
    Bearer {
        /// The bearer token value.
        token: String,
    },

    /// AWS Signature Version 4.
    Awsv4 {
        /// AWS access key ID.
        access_key_id: String,
        /// AWS secret access key.
        secret_access_key: String,
        /// Optional session token for temporary credentials.
        session_token: String,
        /// AWS service name (e.g. "execute-api").
        service: String,
        /// AWS region.
        region: String,
        /// Named credentials profile.
        profile_name: String,
    },

    /// API key sent in a header or query parameter.
    ApiKey {
        /// Header or query parameter name.
        key: String,
        /// The API key value.
        value: String,
        /// Where the key is sent.
        placement: ApiKeyPlacement,
    },

    /// HTTP Digest authentication.
    Digest {
        /// Username for digest auth.
        username: String,
        /// Password for digest auth.
        password: String,
    },

    /// `OAuth2` Client Credentials grant.
    Oauth2ClientCredentials {
        /// Token endpoint URL.
        access_token_url: String,
        /// Client ID.
        client_id: String,
        /// Client secret.
        client_secret: String,
        /// OAuth scopes (space-separated).
        scope: String,
    },

    /// `OAuth2` Authorization Code grant.
    Oauth2AuthorizationCode {
        /// Redirect URI for the callback.
        callback_url: String,
        /// Authorization endpoint URL.
        authorization_url: String,
        /// Token endpoint URL.
        access_token_url: String,
        /// Whether PKCE is used.
        pkce: bool,
        /// Client ID.
        client_id: String,
        /// Client secret.
        client_secret: String,
        /// OAuth scopes (space-separated).
        scope: String,
    },

    /// `OAuth2` Resource Owner Password grant.
    Oauth2Password {
        /// Token endpoint URL.
        access_token_url: String,
        /// Resource owner username.
        username: String,
        /// Resource owner password.
        password: String,
        /// Client ID.
        client_id: String,
        /// Client secret.
        client_secret: String,
        /// OAuth scopes (space-separated).
        scope: String,
    },
}

impl Auth {
    /// Creates a basic authentication.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates a bearer token authentication.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Returns the `.bru` auth mode keyword for this configuration.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Inherit => "inherit",
            Self::Basic { .. } => "basic",
            Self::Bearer { .. } => "bearer",
            Self::Awsv4 { .. } => "awsv4",
            Self::ApiKey { .. } => "apikey",
            Self::Digest { .. } => "digest",
            Self::Oauth2ClientCredentials { .. }
            | Self::Oauth2AuthorizationCode { .. }
            | Self::Oauth2Password { .. } => "oauth2",
        }
    }
}

/// Location for API key authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyPlacement {
    /// Send the key in an HTTP header.
    Header,
    /// Send the key in the query string.
    QueryParams,
}

impl ApiKeyPlacement {
    /// Returns the `.bru` keyword for this placement.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::QueryParams => "queryparams",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(Auth::default(), Auth::None);
        assert_eq!(Auth::default().mode(), "none");
    }

    #[test]
    fn test_auth_basic() {
        let auth = Auth::basic("user", "pass");
        assert_eq!(auth.mode(), "basic");
        match auth {
            Auth::Basic { username, password } => {
                assert_eq!(username, "user");
                assert_eq!(password, "pass");
            }
            _ => panic!("Expected Basic auth"),
        }
    }

    #[test]
    fn test_oauth2_modes_share_keyword() {
        let auth = Auth::Oauth2ClientCredentials {
            access_token_url: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            scope: String::new(),
        };
        assert_eq!(auth.mode(), "oauth2");
    }

    #[test]
    fn test_serde_discriminant() {
        let auth = Auth::bearer("tok");
        let json = serde_json::to_value(&auth).unwrap();
        assert_eq!(json["mode"], "bearer");
        assert_eq!(json["token"], "tok");
    }
}
