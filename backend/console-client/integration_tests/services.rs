use crate::helpers::{build_client, stored_token};

use console_client::credential::CredentialStore;
use console_client::services::comments::{CommentListParams, CommentStatus, ReviewDecision};
use console_client::services::users::{UserDraft, UserListParams, UserStatus};

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok_envelope(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data }))
}

fn sample_user(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "email": format!("user{id}@example.com"),
        "name": "Ann",
        "role": "editor",
        "status": "active",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    })
}

/// **VALUE**: Verifies the user list decodes items and pagination metadata,
/// and that query parameters serialize camelCase on the wire.
///
/// **WHY THIS MATTERS**: The backend expects `pageSize`/`sortBy`; a
/// snake_case regression silently disables filtering and paging.
///
/// **BUG THIS CATCHES**: Would catch serde rename drift on params or the
/// meta struct.
#[tokio::test]
async fn given_user_list_request_when_sent_then_camel_case_params_and_decoded_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "10"))
        .and(query_param("keyword", "ann"))
        .and(query_param("orderBy", "desc"))
        .respond_with(ok_envelope(json!({
            "items": [sample_user(1), sample_user(2)],
            "meta": { "total": 2, "page": 2, "pageSize": 10, "totalPages": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store, _notifier) = build_client(&server.uri());

    let params = UserListParams {
        page: Some(2),
        page_size: Some(10),
        keyword: Some(String::from("ann")),
        order_by: Some(console_client::services::SortOrder::Desc),
        ..UserListParams::default()
    };
    let result = client.user_list(&params).await.expect("list decodes");

    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].email, "user1@example.com");
    assert_eq!(result.items[0].status, Some(UserStatus::Active));
    assert_eq!(result.meta.total, 2);
    assert_eq!(result.meta.page_size, 10);
}

/// **VALUE**: Verifies create_user posts exactly the draft fields and decodes
/// the created record.
///
/// **BUG THIS CATCHES**: Would catch None fields serializing as explicit
/// nulls (the backend treats present-null and absent differently).
#[tokio::test]
async fn given_user_draft_when_created_then_only_set_fields_posted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(body_json(json!({
            "email": "new@example.com",
            "name": "New User"
        })))
        .respond_with(ok_envelope(sample_user(3)))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store, _notifier) = build_client(&server.uri());

    let draft = UserDraft {
        email: Some(String::from("new@example.com")),
        name: Some(String::from("New User")),
        ..UserDraft::default()
    };
    let created = client.create_user(&draft).await.expect("create decodes");

    assert_eq!(created.id, 3);
}

/// **VALUE**: Verifies batch delete sends `{"ids": [...]}` as a DELETE body.
///
/// **WHY THIS MATTERS**: DELETE-with-body is unusual enough that transport
/// layers sometimes drop it; the backend contract requires it.
///
/// **BUG THIS CATCHES**: Would catch the ids going out as query params or
/// not at all.
#[tokio::test]
async fn given_ids_when_batch_deleting_users_then_delete_carries_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/batch"))
        .and(body_json(json!({ "ids": [1, 2, 3] })))
        .respond_with(ok_envelope(json!({ "deleted": 3 })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store, _notifier) = build_client(&server.uri());

    let result = client.batch_delete_users(&[1, 2, 3]).await;

    assert!(result.is_ok(), "batch delete should succeed: {result:?}");
}

/// **VALUE**: Verifies the status toggle hits the status subresource with the
/// lowercase wire value.
///
/// **BUG THIS CATCHES**: Would catch enum serialization drifting from the
/// `active`/`inactive` contract.
#[tokio::test]
async fn given_status_when_toggling_user_then_put_to_status_subresource() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/users/9/status"))
        .and(body_json(json!({ "status": "inactive" })))
        .respond_with(ok_envelope(json!({ "updated": true })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store, _notifier) = build_client(&server.uri());

    client
        .update_user_status(9, UserStatus::Inactive)
        .await
        .expect("toggle succeeds");
}

/// **VALUE**: Verifies comment review posts the moderation decision to the
/// review subresource.
///
/// **BUG THIS CATCHES**: Would catch the decision enum or path template
/// breaking the moderation flow.
#[tokio::test]
async fn given_decision_when_reviewing_comment_then_posted_to_review_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/comments/5/review"))
        .and(body_json(json!({ "status": "approved" })))
        .respond_with(ok_envelope(json!({ "reviewed": true })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store, _notifier) = build_client(&server.uri());

    client
        .review_comment(5, ReviewDecision::Approved)
        .await
        .expect("review succeeds");
}

/// **VALUE**: Verifies the comment list decodes statuses and filters by the
/// status query parameter.
///
/// **BUG THIS CATCHES**: Would catch the pending/approved/rejected mapping
/// drifting between the enum and the wire.
#[tokio::test]
async fn given_status_filter_when_listing_comments_then_decoded_with_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/comments"))
        .and(query_param("status", "pending"))
        .respond_with(ok_envelope(json!({
            "items": [{
                "id": 11,
                "content": "first!",
                "status": "pending",
                "user_id": 1,
                "user_name": "Ann",
                "user_email": null,
                "parent_id": null,
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }],
            "meta": { "total": 1, "page": 1, "pageSize": 20, "totalPages": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store, _notifier) = build_client(&server.uri());

    let params = CommentListParams {
        status: Some(CommentStatus::Pending),
        ..CommentListParams::default()
    };
    let result = client.comment_list(&params).await.expect("list decodes");

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].status, CommentStatus::Pending);
    assert_eq!(result.items[0].parent_id, None);
}

/// **VALUE**: Verifies logout destroys the stored credential after the
/// server acknowledges.
///
/// **WHY THIS MATTERS**: "Destroyed only by explicit logout" is half the
/// credential lifecycle; a surviving token keeps the session alive forever.
///
/// **BUG THIS CATCHES**: Would catch logout clearing before the call (losing
/// auth on the logout request itself) or not clearing at all.
#[tokio::test]
async fn given_active_session_when_logout_succeeds_then_credential_destroyed() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/auth/logout"))
        .and(wiremock::matchers::header(
            "authorization",
            "Bearer session-token-xyz",
        ))
        .respond_with(ok_envelope(json!({ "bye": true })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store, _notifier) = build_client(&server.uri());
    store.set(common::RedactedToken::new(String::from("session-token-xyz")));

    client.logout().await.expect("logout succeeds");

    assert_eq!(stored_token(&store), None, "credential destroyed");
}

/// **VALUE**: Verifies recent activities decode, including the reserved-word
/// `type` field.
///
/// **BUG THIS CATCHES**: Would catch the serde rename for `type` being lost,
/// which fails every activity row.
#[tokio::test]
async fn given_activity_rows_when_fetched_then_type_field_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/statistics/activities"))
        .and(query_param("limit", "5"))
        .respond_with(ok_envelope(json!([{
            "id": 1,
            "type": "login",
            "user": "ann",
            "action": "signed in",
            "target": null,
            "time": "2024-01-01T00:00:00Z",
            "ip": "10.0.0.1"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store, _notifier) = build_client(&server.uri());

    let params = console_client::services::statistics::ActivityParams {
        limit: Some(5),
        offset: None,
    };
    let activities = client
        .recent_activities(&params)
        .await
        .expect("activities decode");

    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].kind, "login");
    assert_eq!(activities[0].ip.as_deref(), Some("10.0.0.1"));
}
