//! Integration tests for the REST API client functionality.
//!
//! These tests verify request routing, header injection, error handling, and
//! direct JSON binding against a mock GitLab server.

use gitlab_graphql::clients::rest::{RestClient, RestError};
use gitlab_graphql::clients::HttpError;
use gitlab_graphql::{AccessToken, GitlabConfig, Session};
use serde::Deserialize;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
struct Member {
    name: String,
    username: String,
}

/// Builds a client for `base_uri`; must run on a blocking thread.
fn create_client(base_uri: &str) -> RestClient {
    let config = GitlabConfig::builder()
        .rest_url(format!("{base_uri}/api/v4"))
        .build()
        .unwrap();
    let session = Session::new(AccessToken::new("rest-token").unwrap(), "Bearer");
    RestClient::new(&session, Some(&config))
}

// ============================================================================
// RestClient Construction Tests
// ============================================================================

#[test]
fn test_rest_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_get_binds_list_and_sends_auth_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/group%2Fproject/users"))
        .and(header("Authorization", "Bearer rest-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"id":1,"name":"Ada","username":"ada"},{"id":2,"name":"Bob","username":"bob"}]"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let members = tokio::task::spawn_blocking(move || {
        let mut members: Vec<Member> = Vec::new();
        create_client(&uri)
            .get("/projects/group%2Fproject/users/", &mut members)
            .map(|()| members)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "Ada");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v4/projects/7/members"))
        .and(header("Content-Type", "application/json"))
        .and(body_string(r#"{"user_id":3,"access_level":30}"#))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_string(r#"{"id":3,"name":"Cy","username":"cy"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let member = tokio::task::spawn_blocking(move || {
        let mut member = Member::default();
        create_client(&uri)
            .post(
                "projects/7/members",
                &serde_json::json!({ "user_id": 3, "access_level": 30 }),
                &mut member,
            )
            .map(|()| member)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(member.username, "cy");
}

// ============================================================================
// Error Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"message":"404 Project Not Found"}"#),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = tokio::task::spawn_blocking(move || {
        create_client(&uri).get("projects/missing%2Fproject/users", &mut Vec::<Member>::new())
    })
    .await
    .unwrap();

    match result {
        Err(RestError::Http(HttpError::Response(error))) => {
            assert_eq!(error.code, 404);
            assert!(error.message.contains("404 Project Not Found"));
        }
        other => panic!("Expected Http error, got: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unexpected_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"not":"a list"}"#))
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = tokio::task::spawn_blocking(move || {
        create_client(&uri).get("user", &mut Vec::<Member>::new())
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(RestError::Decode(_))));
}

#[test]
fn test_empty_path_is_rejected_before_sending() {
    let client = RestClient::with_transport(Unreachable);
    let result = client.get("///", &mut Vec::<Member>::new());

    assert!(matches!(result, Err(RestError::InvalidPath { path }) if path == "///"));
}

struct Unreachable;

impl gitlab_graphql::Transport for Unreachable {
    fn send(
        &self,
        _request: gitlab_graphql::HttpRequest,
    ) -> Result<Vec<u8>, HttpError> {
        panic!("no request should be sent");
    }
}
