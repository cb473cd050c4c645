//! Integration tests for the CLI client using wiremock mock server

use rolo_cli::{AuthSession, Client, ContactForm, ContactList, SessionStore};

use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path, query_param},
};

fn temp_session_store(temp: &TempDir) -> SessionStore {
    SessionStore::new(temp.path().join("session.json"))
}

fn contact_json(id: &str, user_id: &str, name: &str, email: &str, phone: &str) -> serde_json::Value {
    json!({
        "id": id,
        "userId": user_id,
        "name": name,
        "email": email,
        "phone": phone,
        "createdAt": "2026-08-01T00:00:00Z",
        "updatedAt": "2026-08-01T00:00:00Z"
    })
}

// =============================================================================
// Auth / session
// =============================================================================

#[tokio::test]
async fn test_login_success_caches_and_persists_identity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .and(body_string_contains("login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "username": "alice"
        })))
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = Client::new(&mock_server.uri());
    let mut session = AuthSession::load(temp_session_store(&temp));

    assert!(session.login(&client, "alice", "pw1").await);
    assert_eq!(session.current().unwrap().id, "u1");
    assert_eq!(session.current().unwrap().username, "alice");

    // A fresh session object initialized from the same file restores the
    // identity (the page-reload case).
    let reloaded = AuthSession::load(temp_session_store(&temp));
    assert_eq!(reloaded.current().unwrap().id, "u1");
}

#[tokio::test]
async fn test_login_failure_returns_false_and_caches_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "code": "UNAUTHORIZED", "message": "Invalid password" }
        })))
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = Client::new(&mock_server.uri());
    let mut session = AuthSession::load(temp_session_store(&temp));

    assert!(!session.login(&client, "alice", "wrong").await);
    assert!(session.current().is_none());
    assert!(AuthSession::load(temp_session_store(&temp)).current().is_none());
}

#[tokio::test]
async fn test_signup_success_starts_a_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .and(body_string_contains("signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "username": "alice"
        })))
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = Client::new(&mock_server.uri());
    let mut session = AuthSession::load(temp_session_store(&temp));

    assert!(session.signup(&client, "alice", "pw1").await);
    assert_eq!(session.current().unwrap().username, "alice");
}

#[tokio::test]
async fn test_logout_clears_memory_and_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "username": "alice"
        })))
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = Client::new(&mock_server.uri());
    let mut session = AuthSession::load(temp_session_store(&temp));
    session.login(&client, "alice", "pw1").await;

    session.logout();

    assert!(session.current().is_none());
    assert!(AuthSession::load(temp_session_store(&temp)).current().is_none());
}

// =============================================================================
// Client
// =============================================================================

#[tokio::test]
async fn test_list_contacts_parses_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .and(query_param("userId", "u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            contact_json("c1", "u1", "Bob", "b@x.com", "1"),
            contact_json("c2", "u1", "Carol", "c@x.com", "2"),
        ])))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let contacts = client.list_contacts("u1").await.unwrap();

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].id, "c1");
    assert_eq!(contacts[0].name, "Bob");
    assert_eq!(contacts[1].user_id, "u1");
}

#[tokio::test]
async fn test_delete_contact_not_found_surfaces_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/contacts/c9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": "NOT_FOUND", "message": "Contact not found" }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.delete_contact("c9").await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("NOT_FOUND"));
}

// =============================================================================
// Contact list view state
// =============================================================================

#[tokio::test]
async fn test_submit_without_edit_target_creates_and_appends() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(contact_json("c1", "u1", "Bob", "b@x.com", "1")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let mut list = ContactList::new();
    list.refresh(&client, "u1").await;

    let form = ContactForm {
        name: "Bob".to_string(),
        email: "b@x.com".to_string(),
        phone: "1".to_string(),
    };
    let created = list.submit(&client, "u1", &form).await;

    assert_eq!(created.unwrap().id, "c1");
    assert_eq!(list.contacts().len(), 1);
    assert_eq!(list.contacts()[0].name, "Bob");
}

#[tokio::test]
async fn test_submit_with_edit_target_updates_in_place() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            contact_json("c1", "u1", "Bob", "b@x.com", "1"),
            contact_json("c2", "u1", "Carol", "c@x.com", "2"),
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/contacts/c1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(contact_json("c1", "u1", "Robert", "b@x.com", "1")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let mut list = ContactList::new();
    list.refresh(&client, "u1").await;

    assert!(list.begin_edit("c1"));

    let form = ContactForm {
        name: "Robert".to_string(),
        email: "b@x.com".to_string(),
        phone: "1".to_string(),
    };
    let updated = list.submit(&client, "u1", &form).await;

    assert_eq!(updated.unwrap().name, "Robert");
    // Patched in place: same length, same position, edit mode ended
    assert_eq!(list.contacts().len(), 2);
    assert_eq!(list.contacts()[0].name, "Robert");
    assert_eq!(list.contacts()[1].name, "Carol");
    assert_eq!(list.editing(), None);
}

#[tokio::test]
async fn test_failed_update_keeps_edit_mode_and_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([contact_json("c1", "u1", "Bob", "b@x.com", "1")])),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/contacts/c1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": "INTERNAL_ERROR", "message": "Internal server error" }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let mut list = ContactList::new();
    list.refresh(&client, "u1").await;
    list.begin_edit("c1");

    let form = ContactForm {
        name: "Robert".to_string(),
        email: "b@x.com".to_string(),
        phone: "1".to_string(),
    };
    let result = list.submit(&client, "u1", &form).await;

    assert!(result.is_none());
    assert_eq!(list.contacts()[0].name, "Bob");
    assert_eq!(list.editing(), Some("c1"));
}

#[tokio::test]
async fn test_remove_patches_list_only_on_server_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            contact_json("c1", "u1", "Bob", "b@x.com", "1"),
            contact_json("c2", "u1", "Carol", "c@x.com", "2"),
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/contacts/c1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Contact deleted successfully" })),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/contacts/c2"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": "NOT_FOUND", "message": "Contact not found" }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let mut list = ContactList::new();
    list.refresh(&client, "u1").await;

    // Confirmed success removes locally
    assert!(list.remove(&client, "c1").await);
    assert_eq!(list.contacts().len(), 1);

    // Server failure leaves the local list untouched
    assert!(!list.remove(&client, "c2").await);
    assert_eq!(list.contacts().len(), 1);
    assert_eq!(list.contacts()[0].id, "c2");
}

#[tokio::test]
async fn test_refresh_failure_degrades_to_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": "INTERNAL_ERROR", "message": "Internal server error" }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let mut list = ContactList::new();
    list.refresh(&client, "u1").await;

    assert!(list.contacts().is_empty());
}
