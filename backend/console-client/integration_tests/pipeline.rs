use crate::helpers::{Notice, build_client, stored_token, test_config};

use console_client::client::{ConsoleClient, RequestOptions};
use console_client::credential::{CredentialStore, MemoryCredentialStore};

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok_envelope(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data }))
}

// ============================================================================
// Request interceptor
// ============================================================================

/// **VALUE**: Verifies a caller-supplied `token` query parameter never
/// reaches the wire while legitimate parameters do.
///
/// **WHY THIS MATTERS**: This is the pipeline's credential-confusion defense.
/// A `token` smuggled into the query string could shadow header auth on the
/// server or end up in access logs.
///
/// **BUG THIS CATCHES**: Would catch the interceptor being skipped for
/// generic requests, or the strip losing sibling parameters.
#[tokio::test]
async fn given_caller_supplied_token_param_when_sent_then_absent_from_wire() {
    // GIVEN: A server that only answers when `token` is absent
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("keyword", "ann"))
        .and(query_param_is_missing("token"))
        .respond_with(ok_envelope(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store, _notifier) = build_client(&server.uri());

    // WHEN: A request smuggles a token through the query string
    let result = client
        .request_json(
            Method::GET,
            "/api/users?keyword=ann&token=evil",
            None,
            RequestOptions::default(),
        )
        .await;

    // THEN: The server saw the stripped request (mock expectation verifies
    // on drop) and the call succeeded
    assert!(result.is_ok(), "stripped request should succeed: {result:?}");
}

/// **VALUE**: Verifies the stored credential rides every request as a bearer
/// header.
///
/// **WHY THIS MATTERS**: `Authorization: Bearer <stored>` on all outbound
/// calls is the core invariant of the credential lifecycle.
///
/// **BUG THIS CATCHES**: Would catch the interceptor not reading the store,
/// or formatting the header without the Bearer scheme.
#[tokio::test]
async fn given_stored_credential_when_request_sent_then_bearer_header_attached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/7"))
        .and(header("authorization", "Bearer stored-secret-token"))
        .respond_with(ok_envelope(json!({
            "id": 7,
            "email": "a@b.c",
            "name": null,
            "role": null,
            "status": "active",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store, _notifier) = build_client(&server.uri());
    store.set(common::RedactedToken::new(String::from(
        "stored-secret-token",
    )));

    let result = client.user_detail(7).await;

    assert!(result.is_ok(), "authenticated call should succeed");
}

/// **VALUE**: Verifies the absence of a credential produces an
/// unauthenticated request (no Authorization header), not a failure.
///
/// **WHY THIS MATTERS**: Login itself must go out unauthenticated; the
/// interceptor "never fails the request".
///
/// **BUG THIS CATCHES**: Would catch an empty Bearer header being sent, or
/// the pipeline erroring when the store is empty.
#[tokio::test]
async fn given_no_credential_when_request_sent_then_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/statistics"))
        .respond_with(ok_envelope(json!({
            "users": { "total": 0, "active": 0, "inactive": 0, "newToday": 0 },
            "comments": { "total": 0, "pending": 0, "approved": 0, "rejected": 0 },
            "visits": { "total": 0, "today": 0, "yesterday": 0, "average": 0.0 },
            "storage": { "used": 0, "total": 1, "percentage": 0.0 },
            "systemStatus": { "uptime": "1d", "version": "1.0", "lastBackup": "never" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store, _notifier) = build_client(&server.uri());

    client.system_statistics().await.expect("call succeeds");

    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].headers.contains_key("authorization"),
        "no credential means no Authorization header"
    );
    assert!(
        requests[0].headers.contains_key("x-request-id"),
        "correlation id rides every request"
    );
}

// ============================================================================
// Response interceptor - login token capture
// ============================================================================

async fn login_against(body: Value) -> (Option<String>, Vec<Notice>) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let (client, store, notifier) = build_client(&server.uri());
    let params = console_client::services::auth::LoginParams {
        email: String::from("admin@example.com"),
        password: String::from("hunter2hunter2"),
        kind: None,
    };
    client.login(&params).await.expect("login call succeeds");

    (stored_token(&store), notifier.notices())
}

/// **VALUE**: Verifies extraction precedence with all three shapes present.
///
/// **WHY THIS MATTERS**: The documented contract is `data.token` over `token`
/// over `access_token`. Sessions silently break if the wrong one is stored.
///
/// **BUG THIS CATCHES**: Would catch a reordered strategy chain at the full
/// pipeline level (not just the pure function).
#[tokio::test]
async fn given_all_token_shapes_when_login_completes_then_nested_token_stored() {
    let (token, notices) = login_against(json!({
        "data": { "token": "A" },
        "token": "B",
        "access_token": "C"
    }))
    .await;

    assert_eq!(token.as_deref(), Some("A"));
    assert!(
        notices.contains(&Notice::Success(String::from(
            "Authentication token saved"
        ))),
        "persisting a token announces success: {notices:?}"
    );
}

/// **VALUE**: Verifies the top-level `token` fallback at pipeline level.
#[tokio::test]
async fn given_no_nested_shape_when_login_completes_then_top_level_token_stored() {
    let (token, _notices) = login_against(json!({
        "token": "B",
        "access_token": "C"
    }))
    .await;

    assert_eq!(token.as_deref(), Some("B"));
}

/// **VALUE**: Verifies the `access_token` fallback at pipeline level.
#[tokio::test]
async fn given_only_access_token_when_login_completes_then_access_token_stored() {
    let (token, _notices) = login_against(json!({ "access_token": "C" })).await;

    assert_eq!(token.as_deref(), Some("C"));
}

/// **VALUE**: Verifies a tokenless login response leaves the credential
/// unchanged and produces no success toast.
///
/// **WHY THIS MATTERS**: The response observer must never fail the call or
/// invent state; "extraction failure leaves the credential unchanged" is the
/// documented behavior.
///
/// **BUG THIS CATCHES**: Would catch the observer clearing the store or
/// firing the toast unconditionally.
#[tokio::test]
async fn given_tokenless_login_response_when_completed_then_credential_unchanged() {
    let (token, notices) = login_against(json!({
        "code": 200,
        "message": "ok",
        "data": { "user": { "id": 1 } }
    }))
    .await;

    assert_eq!(token, None, "no token, no credential");
    assert!(
        !notices
            .iter()
            .any(|notice| matches!(notice, Notice::Success(_))),
        "no toast without a persisted token"
    );
}

/// **VALUE**: Verifies running the login flow twice yields the same final
/// credential as running it once.
///
/// **WHY THIS MATTERS**: The observer is a pure read of the body plus an
/// overwrite; re-processing a response must be idempotent.
///
/// **BUG THIS CATCHES**: Would catch extraction or storage accumulating
/// state across runs (e.g. appending, wrapping, or re-encoding the token).
#[tokio::test]
async fn given_same_login_response_twice_when_processed_then_credential_identical() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "token": "stable-session-token" }
        })))
        .mount(&server)
        .await;

    let (client, store, _notifier) = build_client(&server.uri());
    let params = console_client::services::auth::LoginParams {
        email: String::from("admin@example.com"),
        password: String::from("hunter2hunter2"),
        kind: None,
    };

    client.login(&params).await.expect("first login");
    let after_first = stored_token(&store);

    client.login(&params).await.expect("second login");
    let after_second = stored_token(&store);

    assert_eq!(after_first.as_deref(), Some("stable-session-token"));
    assert_eq!(after_first, after_second);
}

// ============================================================================
// Failure classification
// ============================================================================

/// **VALUE**: Verifies a `success: false` envelope produces both the coarse
/// catch-all and the showType-specific presentation, in that order.
///
/// **WHY THIS MATTERS**: The response interceptor's generic failure toast and
/// the classifier's dispatch are independent stages; both fire by design.
///
/// **BUG THIS CATCHES**: Would catch one stage swallowing the other, or the
/// business error not reaching the caller as an Err.
#[tokio::test]
async fn given_failed_envelope_when_dispatched_then_catch_all_and_show_type_fire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errorCode": 7,
            "errorMessage": "boom",
            "showType": 1
        })))
        .mount(&server)
        .await;

    let (client, _store, notifier) = build_client(&server.uri());

    let result = client
        .request_json(Method::GET, "/api/users", None, RequestOptions::default())
        .await;

    assert!(result.is_err(), "business failure surfaces as Err");
    assert_eq!(
        notifier.notices(),
        vec![
            Notice::Error(String::from("Request failed!")),
            Notice::Warn(String::from("boom")),
        ]
    );
}

/// **VALUE**: Verifies a REDIRECT showType asks the presenter to navigate to
/// the configured login route.
///
/// **BUG THIS CATCHES**: Would catch REDIRECT regressing to a silent no-op.
#[tokio::test]
async fn given_redirect_show_type_when_dispatched_then_presenter_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errorMessage": "session expired",
            "showType": 9
        })))
        .mount(&server)
        .await;

    let (client, _store, notifier) = build_client(&server.uri());

    let result = client.current_user().await;

    assert!(result.is_err());
    assert!(
        notifier
            .notices()
            .contains(&Notice::Redirect(String::from("/user/login"))),
        "presenter should be told to navigate: {:?}",
        notifier.notices()
    );
}

/// **VALUE**: Verifies a raw HTTP 500 produces exactly one error notification
/// whose text carries the numeric status.
///
/// **WHY THIS MATTERS**: This is the transport-error branch: no envelope, no
/// showType, just a status code the user can report.
///
/// **BUG THIS CATCHES**: Would catch the status being dropped from the text
/// or double notification (catch-all must not fire without an envelope).
#[tokio::test]
async fn given_raw_500_when_dispatched_then_single_error_mentions_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/statistics"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let (client, _store, notifier) = build_client(&server.uri());

    let result = client.system_statistics().await;

    assert!(result.is_err());
    let errors = notifier.errors();
    assert_eq!(errors.len(), 1, "exactly one notification: {errors:?}");
    assert!(
        errors[0].contains("500"),
        "status code must appear in the text: {}",
        errors[0]
    );
}

/// **VALUE**: Verifies the per-call escape hatch: opted-out calls get the
/// error back with zero notifications.
///
/// **WHY THIS MATTERS**: Callers handling their own errors must not trigger
/// duplicate user-facing noise, and the error must reach them unmodified.
///
/// **BUG THIS CATCHES**: Would catch the classifier running despite the
/// opt-out, or the error being remapped on the way out.
#[tokio::test]
async fn given_skip_error_handler_when_call_fails_then_silent_and_error_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let (client, _store, notifier) = build_client(&server.uri());

    let result: Result<Value, _> = client
        .request_json(
            Method::GET,
            "/api/users",
            None,
            RequestOptions {
                skip_error_handler: true,
            },
        )
        .await;

    let error = result.expect_err("failure must propagate");
    assert_eq!(error.status_code(), Some(503));
    assert!(
        notifier.notices().is_empty(),
        "opt-out means no notifications: {:?}",
        notifier.notices()
    );
}

/// **VALUE**: Verifies a transport timeout classifies as sent-but-no-response.
///
/// **WHY THIS MATTERS**: Timeouts are the one failure users hit on flaky
/// networks; they must present as "no response, retry", not as a build error.
///
/// **BUG THIS CATCHES**: Would catch reqwest timeout errors being
/// miscategorized in the From impl.
#[tokio::test]
async fn given_server_slower_than_timeout_when_dispatched_then_no_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ok_envelope(json!({})).set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut config = test_config(&server.uri());
    config.timeout_secs = 1;
    let store = Arc::new(MemoryCredentialStore::new());
    let notifier = Arc::new(crate::helpers::RecordingNotifier::default());
    let client =
        ConsoleClient::new(&config, store, notifier.clone()).expect("client builds");

    let result: Result<Value, _> = client
        .request_json(Method::GET, "/api/users", None, RequestOptions::default())
        .await;

    let error = result.expect_err("timeout must fail the call");
    assert_eq!(error.category(), "timeout");
    let errors = notifier.errors();
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0].contains("no response"),
        "timeout presents as no-response: {}",
        errors[0]
    );
}
