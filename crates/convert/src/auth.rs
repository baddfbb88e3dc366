//! Authentication normalization.

use postbru_model::{ApiKeyPlacement, Auth};
use serde_json::{Map, Value};

use crate::types::{PostmanAuth, scalar_to_string};

/// Normalizes a Postman auth block into a Bruno auth configuration.
///
/// An absent block keeps `fallback` (collections start at `None`, folders
/// and requests at `Inherit`); `noauth` and unrecognized types collapse to
/// `None`. OAuth2 grants are mapped onto the three supported variants, with
/// unknown grants treated as client credentials.
#[must_use]
pub fn convert_auth(auth: Option<&PostmanAuth>, fallback: Auth) -> Auth {
    let Some(auth) = auth else {
        return fallback;
    };
    if auth.auth_type == "noauth" {
        return Auth::None;
    }

    let params = auth.params();
    let value = |key: &str| param_string(&params, key);

    match auth.auth_type.as_str() {
        "basic" => Auth::Basic {
            username: value("username"),
            password: value("password"),
        },
        "bearer" => Auth::Bearer {
            token: value("token"),
        },
        "awsv4" => Auth::Awsv4 {
            access_key_id: value("accessKey"),
            secret_access_key: value("secretKey"),
            session_token: value("sessionToken"),
            service: value("service"),
            region: value("region"),
            profile_name: String::new(),
        },
        "apikey" => Auth::ApiKey {
            key: value("key"),
            value: value("value"),
            placement: ApiKeyPlacement::Header,
        },
        "digest" => Auth::Digest {
            username: value("username"),
            password: value("password"),
        },
        "oauth2" => convert_oauth2(&params),
        _ => Auth::None,
    }
}

fn convert_oauth2(params: &Map<String, Value>) -> Auth {
    let value = |key: &str| param_string(params, key);
    let source_grant = value("grant_type");
    let grant_type = match source_grant.as_str() {
        "authorization_code" | "authorization_code_with_pkce" => "authorization_code",
        "password_credentials" => "password",
        _ => "client_credentials",
    };

    match grant_type {
        "authorization_code" => Auth::Oauth2AuthorizationCode {
            callback_url: value("redirect_uri"),
            authorization_url: value("authUrl"),
            access_token_url: value("accessTokenUrl"),
            pkce: source_grant == "authorization_code_with_pkce",
            client_id: value("clientId"),
            client_secret: value("clientSecret"),
            scope: value("scope"),
        },
        "password" => Auth::Oauth2Password {
            access_token_url: value("accessTokenUrl"),
            username: value("username"),
            password: value("password"),
            client_id: value("clientId"),
            client_secret: value("clientSecret"),
            scope: value("scope"),
        },
        _ => Auth::Oauth2ClientCredentials {
            access_token_url: value("accessTokenUrl"),
            client_id: value("clientId"),
            client_secret: value("clientSecret"),
            scope: value("scope"),
        },
    }
}

fn param_string(params: &Map<String, Value>, key: &str) -> String {
    params.get(key).map(scalar_to_string).unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> PostmanAuth {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_absent_auth_keeps_fallback() {
        assert_eq!(convert_auth(None, Auth::Inherit), Auth::Inherit);
        assert_eq!(convert_auth(None, Auth::None), Auth::None);
    }

    #[test]
    fn test_noauth_becomes_none() {
        let auth = parse(r#"{"type": "noauth"}"#);
        assert_eq!(convert_auth(Some(&auth), Auth::Inherit), Auth::None);
    }

    #[test]
    fn test_unknown_type_becomes_none() {
        let auth = parse(r#"{"type": "hawk", "hawk": [{"key": "authId", "value": "x"}]}"#);
        assert_eq!(convert_auth(Some(&auth), Auth::Inherit), Auth::None);
    }

    #[test]
    fn test_basic_from_v21_pairs() {
        let auth = parse(
            r#"{"type": "basic", "basic": [
                {"key": "username", "value": "ada"},
                {"key": "password", "value": "s3cret"}
            ]}"#,
        );
        assert_eq!(
            convert_auth(Some(&auth), Auth::Inherit),
            Auth::basic("ada", "s3cret")
        );
    }

    #[test]
    fn test_bearer_from_v20_flat_object() {
        let auth = parse(r#"{"type": "bearer", "bearer": {"token": "tok"}}"#);
        assert_eq!(convert_auth(Some(&auth), Auth::Inherit), Auth::bearer("tok"));
    }

    #[test]
    fn test_awsv4_key_mapping() {
        let auth = parse(
            r#"{"type": "awsv4", "awsv4": [
                {"key": "accessKey", "value": "AKIA"},
                {"key": "secretKey", "value": "shh"},
                {"key": "region", "value": "eu-west-1"},
                {"key": "service", "value": "execute-api"}
            ]}"#,
        );
        let Auth::Awsv4 {
            access_key_id,
            secret_access_key,
            region,
            service,
            session_token,
            profile_name,
        } = convert_auth(Some(&auth), Auth::Inherit)
        else {
            panic!("expected awsv4");
        };
        assert_eq!(access_key_id, "AKIA");
        assert_eq!(secret_access_key, "shh");
        assert_eq!(region, "eu-west-1");
        assert_eq!(service, "execute-api");
        assert_eq!(session_token, "");
        assert_eq!(profile_name, "");
    }

    #[test]
    fn test_apikey_defaults_to_header_placement() {
        let auth = parse(
            r#"{"type": "apikey", "apikey": [
                {"key": "key", "value": "X-Api-Key"},
                {"key": "value", "value": 42}
            ]}"#,
        );
        assert_eq!(
            convert_auth(Some(&auth), Auth::Inherit),
            Auth::ApiKey {
                key: "X-Api-Key".into(),
                value: "42".into(),
                placement: ApiKeyPlacement::Header,
            }
        );
    }

    #[test]
    fn test_oauth2_pkce_grant_maps_to_authorization_code() {
        let auth = parse(
            r#"{"type": "oauth2", "oauth2": [
                {"key": "grant_type", "value": "authorization_code_with_pkce"},
                {"key": "authUrl", "value": "https://auth.example.com/authorize"},
                {"key": "redirect_uri", "value": "https://app.example.com/cb"},
                {"key": "accessTokenUrl", "value": "https://auth.example.com/token"},
                {"key": "clientId", "value": "cid"}
            ]}"#,
        );
        let Auth::Oauth2AuthorizationCode {
            pkce,
            authorization_url,
            callback_url,
            ..
        } = convert_auth(Some(&auth), Auth::Inherit)
        else {
            panic!("expected authorization code");
        };
        assert!(pkce);
        assert_eq!(authorization_url, "https://auth.example.com/authorize");
        assert_eq!(callback_url, "https://app.example.com/cb");
    }

    #[test]
    fn test_oauth2_unknown_grant_falls_back_to_client_credentials() {
        let auth = parse(
            r#"{"type": "oauth2", "oauth2": [
                {"key": "grant_type", "value": "implicit"},
                {"key": "accessTokenUrl", "value": "https://auth.example.com/token"}
            ]}"#,
        );
        let Auth::Oauth2ClientCredentials {
            access_token_url, ..
        } = convert_auth(Some(&auth), Auth::Inherit)
        else {
            panic!("expected client credentials");
        };
        assert_eq!(access_token_url, "https://auth.example.com/token");
    }

    #[test]
    fn test_oauth2_password_grant() {
        let auth = parse(
            r#"{"type": "oauth2", "oauth2": [
                {"key": "grant_type", "value": "password_credentials"},
                {"key": "username", "value": "ada"},
                {"key": "password", "value": "pw"},
                {"key": "accessTokenUrl", "value": "https://auth.example.com/token"}
            ]}"#,
        );
        let Auth::Oauth2Password {
            username, password, ..
        } = convert_auth(Some(&auth), Auth::Inherit)
        else {
            panic!("expected password grant");
        };
        assert_eq!(username, "ada");
        assert_eq!(password, "pw");
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let auth = parse(
            r#"{"type": "bearer", "bearer": [
                {"key": "token", "value": "old"},
                {"key": "token", "value": "new"}
            ]}"#,
        );
        assert_eq!(convert_auth(Some(&auth), Auth::Inherit), Auth::bearer("new"));
    }
}
