//! Emitter integration tests: whole `.bru` files compared byte for byte.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use postbru_lang::{collection_to_bru, environment_to_bru, folder_to_bru, request_to_bru};
use postbru_model::{
    Assertion, Auth, Body, Example, ExampleBody, ExampleRequest, ExampleResponse, FormField,
    Header, MultipartField, MultipartValue, Param, ParamKind, RequestItem, Root, Scripts, Settings,
    Var, Vars,
};
use pretty_assertions::assert_eq;

fn bare_request(name: &str, method: &str, url: &str) -> RequestItem {
    RequestItem {
        name: name.into(),
        seq: 1,
        method: method.into(),
        url: url.into(),
        auth: Auth::Inherit,
        ..RequestItem::default()
    }
}

fn query_param(name: &str, value: &str, enabled: bool) -> Param {
    Param {
        name: name.into(),
        value: value.into(),
        description: String::new(),
        kind: ParamKind::Query,
        enabled,
    }
}

#[test]
fn test_bare_get_request() {
    let item = bare_request("Ping", "GET", "https://example.com/ping");
    let expected = "\
meta {
  name: Ping
  type: http
  seq: 1
}

get {
  url: https://example.com/ping
  body: none
  auth: inherit
}

settings {
  encodeUrl: true
}
";
    assert_eq!(request_to_bru(&item), expected);
}

#[test]
fn test_nonstandard_method_uses_http_block() {
    let item = bare_request("Props", "PROPFIND", "https://example.com/dav");
    let bru = request_to_bru(&item);
    assert!(bru.contains("http {\n  method: propfind\n  url: https://example.com/dav"));
    assert!(!bru.contains("propfind {"));
}

#[test]
fn test_full_request_block_order_and_partitioning() {
    let item = RequestItem {
        name: "Create User".into(),
        seq: 3,
        method: "POST".into(),
        url: "https://api.example.com/users/:id".into(),
        params: vec![
            query_param("verbose", "true", true),
            query_param("dry run", "1", false),
            Param {
                name: "id".into(),
                value: "42".into(),
                description: String::new(),
                kind: ParamKind::Path,
                enabled: true,
            },
        ],
        headers: vec![
            Header::new("Content-Type", "application/json"),
            Header {
                name: "X-Trace".into(),
                value: "off".into(),
                description: String::new(),
                enabled: false,
            },
        ],
        auth: Auth::basic("user", "pass"),
        body: Body::Json {
            content: "{\n  \"name\": \"Ada\"\n}".into(),
        },
        script: Scripts {
            pre_request: "const t = Date.now();".into(),
            post_response: String::new(),
        },
        vars: Vars {
            pre_request: vec![
                Var::new("token", "{{seed}}"),
                Var {
                    name: "legacy".into(),
                    value: "old".into(),
                    enabled: false,
                    local: false,
                },
            ],
            post_response: vec![Var::new("userId", "res.body.id")],
        },
        assertions: vec![
            Assertion {
                name: "res.status".into(),
                value: "201".into(),
                enabled: true,
            },
            Assertion {
                name: "res.body.id".into(),
                value: "42".into(),
                enabled: false,
            },
        ],
        tests: "test(\"created\", function() {\n  expect(res.getStatus()).to.equal(201);\n});"
            .into(),
        docs: "Creates a user.".into(),
        settings: Settings { encode_url: false },
        ..RequestItem::default()
    };

    let expected = "\
meta {
  name: Create User
  type: http
  seq: 3
}

post {
  url: https://api.example.com/users/:id
  body: json
  auth: basic
}

params:query {
  verbose: true
  ~\"dry run\": 1
}

params:path {
  id: 42
}

headers {
  Content-Type: application/json
  ~X-Trace: off
}

auth:basic {
  username: user
  password: pass
}

body:json {
  {
    \"name\": \"Ada\"
  }
}

vars:pre-request {
  token: {{seed}}
  ~legacy: old
}

vars:post-response {
  userId: res.body.id
}

assert {
  res.status: 201
  ~res.body.id: 42
}

script:pre-request {
  const t = Date.now();
}

tests {
  test(\"created\", function() {
    expect(res.getStatus()).to.equal(201);
  });
}

settings {
  encodeUrl: false
}

docs {
  Creates a user.
}
";
    assert_eq!(request_to_bru(&item), expected);
}

#[test]
fn test_multipart_form_body() {
    let mut item = bare_request("Upload", "POST", "https://example.com/upload");
    item.body = Body::MultipartForm {
        fields: vec![
            MultipartField {
                name: "avatar".into(),
                value: MultipartValue::Files(vec!["img/a.png".into(), "img/b.png".into()]),
                description: String::new(),
                enabled: true,
            },
            MultipartField {
                name: "note".into(),
                value: MultipartValue::Text("hello".into()),
                description: String::new(),
                enabled: false,
            },
            MultipartField {
                name: "empty file".into(),
                value: MultipartValue::Files(vec![]),
                description: String::new(),
                enabled: true,
            },
        ],
    };

    let bru = request_to_bru(&item);
    assert!(bru.contains("  body: multipartForm\n"));
    let expected_block = "\
body:multipart-form {
  avatar: @file(img/a.png|img/b.png)
  ~note: hello
  \"empty file\": @file()
}
";
    assert!(bru.contains(expected_block), "missing block in:\n{bru}");
}

#[test]
fn test_form_urlencoded_body_partitions_disabled() {
    let mut item = bare_request("Login", "POST", "https://example.com/login");
    item.body = Body::FormUrlEncoded {
        fields: vec![
            FormField {
                name: "debug".into(),
                value: "1".into(),
                description: String::new(),
                enabled: false,
            },
            FormField {
                name: "user".into(),
                value: "ada".into(),
                description: String::new(),
                enabled: true,
            },
        ],
    };

    let bru = request_to_bru(&item);
    let expected_block = "\
body:form-urlencoded {
  user: ada
  ~debug: 1
}
";
    assert!(bru.contains(expected_block), "missing block in:\n{bru}");
}

#[test]
fn test_graphql_body_blocks() {
    let mut item = bare_request("Stars", "POST", "https://example.com/graphql");
    item.body = Body::Graphql {
        query: "query {\n  user(id: 1) {\n    name\n  }\n}".into(),
        variables: "{\n  \"id\": 1\n}".into(),
    };

    let bru = request_to_bru(&item);
    assert!(bru.contains("  body: graphql\n"));
    assert!(bru.contains(
        "body:graphql {\n  query {\n    user(id: 1) {\n      name\n    }\n  }\n}\n"
    ));
    assert!(bru.contains("body:graphql:vars {\n  {\n    \"id\": 1\n  }\n}\n"));
}

#[test]
fn test_graphql_variables_skipped_without_query() {
    let mut item = bare_request("Empty", "POST", "https://example.com/graphql");
    item.body = Body::Graphql {
        query: String::new(),
        variables: "{}".into(),
    };

    let bru = request_to_bru(&item);
    assert!(bru.contains("  body: graphql\n"));
    assert!(!bru.contains("body:graphql {"));
    assert!(!bru.contains("body:graphql:vars"));
}

#[test]
fn test_multiline_header_value_wraps() {
    let mut item = bare_request("Multi", "GET", "https://example.com");
    item.headers = vec![Header::new("X-Multi", "line1\nline2")];

    let bru = request_to_bru(&item);
    let expected_block = "\
headers {
  X-Multi: '''
    line1
    line2
  '''
}
";
    assert!(bru.contains(expected_block), "missing block in:\n{bru}");
}

#[test]
fn test_emission_is_deterministic() {
    let mut item = bare_request("Same", "GET", "https://example.com");
    item.headers = vec![Header::new("Accept", "application/json")];
    assert_eq!(request_to_bru(&item), request_to_bru(&item));

    let root = Root {
        name: "API".into(),
        ..Root::default()
    };
    assert_eq!(collection_to_bru(&root), collection_to_bru(&root));
}

#[test]
fn test_collection_root_with_condensed_oauth2() {
    let root = Root {
        name: "My API".into(),
        docs: String::new(),
        headers: vec![Header::new("x-api-version", "2")],
        auth: Auth::Oauth2ClientCredentials {
            access_token_url: "https://auth.example.com/token".into(),
            client_id: "cid".into(),
            client_secret: "sec".into(),
            scope: "read".into(),
        },
        script: Scripts {
            pre_request: "bru.setVar(\"x\", 1);".into(),
            post_response: String::new(),
        },
        tests: String::new(),
        vars: Vars {
            pre_request: vec![Var::new("base", "https://api.example.com")],
            post_response: vec![],
        },
    };

    let expected = "\
meta {
  name: My API
}

headers {
  x-api-version: 2
}

auth:oauth2 {
  grant_type: client_credentials
  access_token_url: https://auth.example.com/token
  client_id: cid
  client_secret: sec
  scope: read
}

vars:pre-request {
  base: https://api.example.com
}

script:pre-request {
  bru.setVar(\"x\", 1);
}
";
    assert_eq!(collection_to_bru(&root), expected);
}

#[test]
fn test_folder_root_minimal() {
    let root = Root {
        name: "Admin".into(),
        auth: Auth::Inherit,
        ..Root::default()
    };
    assert_eq!(folder_to_bru(&root), "meta {\n  name: Admin\n}\n");
}

#[test]
fn test_request_auth_oauth2_authorization_code_expanded() {
    let mut item = bare_request("Authed", "GET", "https://example.com");
    item.auth = Auth::Oauth2AuthorizationCode {
        callback_url: "https://app.example.com/cb".into(),
        authorization_url: "https://auth.example.com/authorize".into(),
        access_token_url: "https://auth.example.com/token".into(),
        pkce: true,
        client_id: "cid".into(),
        client_secret: "sec".into(),
        scope: "openid".into(),
    };

    let bru = request_to_bru(&item);
    let expected_block = "\
auth:oauth2 {
  grant_type: authorization_code
  callback_url: https://app.example.com/cb
  authorization_url: https://auth.example.com/authorize
  access_token_url: https://auth.example.com/token
  pkce: true
  client_id: cid
  client_secret: sec
  scope: openid
}
";
    assert!(bru.contains(expected_block), "missing block in:\n{bru}");
    assert!(bru.contains("  auth: oauth2\n"));
}

#[test]
fn test_example_block_nested_in_request() {
    let mut item = bare_request("Ping", "GET", "https://e.c");
    item.examples = vec![Example {
        name: String::new(),
        description: String::new(),
        request: ExampleRequest {
            url: "https://e.c".into(),
            method: "GET".into(),
            params: vec![],
            headers: vec![],
            body: Body::None,
        },
        response: None,
    }];

    let bru = request_to_bru(&item);
    let expected_block = "example {\n  \n  request: {\n    url: https://e.c\n    method: GET\n    mode: none\n  }\n}\n";
    assert!(bru.contains(expected_block), "missing block in:\n{bru}");
}

#[test]
fn test_example_with_response() {
    let example = Example {
        name: "Created".into(),
        description: String::new(),
        request: ExampleRequest {
            url: "https://api.example.com/users".into(),
            method: "POST".into(),
            params: vec![query_param("verbose", "true", true)],
            headers: vec![Header::new("Content-Type", "application/json")],
            body: Body::Json {
                content: "{\"name\":\"Ada\"}".into(),
            },
        },
        response: Some(ExampleResponse {
            headers: vec![Header::new("Content-Type", "application/json")],
            status_code: Some(201),
            status_text: "Created".into(),
            body: Some(ExampleBody {
                kind: "json".into(),
                content: "{\n  \"id\": 42\n}".into(),
            }),
        }),
    };

    let expected = "\
name: Created

request: {
  url: https://api.example.com/users
  method: POST
  mode: json
  params:query: {
    verbose: true
  }

  headers: {
    Content-Type: application/json
  }

  body:json: {
    {\"name\":\"Ada\"}
  }
}

response: {
  headers: {
    Content-Type: application/json
  }

  status: {
    code: 201
    text: Created
  }

  body: {
    type: json
    content: '''
      {
        \"id\": 42
      }
    '''
  }
}";
    assert_eq!(postbru_lang::example_to_bru(&example), expected);
}

#[test]
fn test_environment_round_shape() {
    let env = postbru_model::Environment {
        name: "Prod".into(),
        variables: vec![postbru_model::EnvironmentVariable {
            name: "host".into(),
            value: "https://api.example.com".into(),
            enabled: true,
            secret: false,
        }],
    };
    assert_eq!(
        environment_to_bru(&env),
        "vars {\n  host: https://api.example.com\n}\n"
    );
}
