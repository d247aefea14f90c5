use anyhow::Result;
use loandesk_web::{
    app_lib::{
        ApiClient,
        config::AppConfig,
        navigation::RecordingNavigator,
        storage::{MemoryStorage, Storage},
    },
    features::auth::{
        SessionStore,
        session::{LOGIN_PATH, SESSION_STORAGE_KEY},
        types::User,
    },
};
use serde_json::json;
use std::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &MockServer) -> Result<ApiClient> {
    let config = AppConfig {
        api_base_url: format!("{}/api", server.uri()),
        ..AppConfig::default()
    };
    Ok(ApiClient::new(&config)?)
}

#[tokio::test]
async fn login_caches_user_in_memory_and_storage() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let user = json!({
        "id": 7,
        "username": "amara12",
        "email": "amara@example.com",
        "is_admin": false,
        "customer_id": 12
    });
    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .and(body_json(json!({ "username": "amara12", "password": "s3cret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login successful",
            "user": user
        })))
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(
        client_for(&server)?,
        storage.clone(),
        RecordingNavigator::new(),
    );
    assert!(!store.is_authenticated());

    let outcome = store.login("amara12", "s3cret").await;
    assert!(outcome.is_success());

    let expected: User = serde_json::from_value(user)?;
    assert!(store.is_authenticated());
    assert!(!store.is_admin());
    assert_eq!(store.current_user(), Some(&expected));

    let cached = storage
        .get(SESSION_STORAGE_KEY)?
        .ok_or_else(|| anyhow::anyhow!("user was not persisted"))?;
    assert_eq!(serde_json::from_str::<User>(&cached)?, expected);
    Ok(())
}

#[tokio::test]
async fn failed_login_surfaces_server_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(
        client_for(&server)?,
        storage.clone(),
        RecordingNavigator::new(),
    );
    let outcome = store.login("amara12", "wrong").await;

    assert_eq!(outcome.error(), Some("Invalid credentials"));
    assert!(!store.is_authenticated());
    assert!(storage.is_empty());
    Ok(())
}

#[tokio::test]
async fn logout_clears_session_and_redirects() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Logout successful" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::with_entry(
        SESSION_STORAGE_KEY,
        r#"{"id":7,"username":"amara12","is_admin":true}"#,
    );
    let navigator = RecordingNavigator::new();
    let mut store = SessionStore::new(client_for(&server)?, storage.clone(), navigator.clone());
    assert!(store.is_admin());

    store.logout().await;

    assert!(!store.is_authenticated());
    assert!(storage.is_empty());
    assert_eq!(navigator.visited(), vec![LOGIN_PATH.to_string()]);
    Ok(())
}

#[tokio::test]
async fn failed_logout_keeps_session() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let storage = MemoryStorage::with_entry(SESSION_STORAGE_KEY, r#"{"username":"amara12"}"#);
    let navigator = RecordingNavigator::new();
    let mut store = SessionStore::new(client_for(&server)?, storage.clone(), navigator.clone());

    store.logout().await;

    assert!(store.is_authenticated());
    assert!(!storage.is_empty());
    assert!(navigator.visited().is_empty());
    Ok(())
}

#[tokio::test]
async fn cached_session_restores_without_network() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let storage = MemoryStorage::with_entry(
        SESSION_STORAGE_KEY,
        r#"{"id":7,"username":"amara12","email":"amara@example.com","is_admin":false}"#,
    );
    let store = SessionStore::new(client_for(&server)?, storage, RecordingNavigator::new());

    assert!(store.is_authenticated());
    assert_eq!(
        store.current_user().map(|user| user.username.as_str()),
        Some("amara12")
    );
    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn login_cookie_is_sent_on_later_requests() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "sessionid=abc123; Path=/")
                .set_body_json(json!({
                    "message": "Login successful",
                    "user": { "id": 7, "username": "amara12", "is_admin": false }
                })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers/me/"))
        .and(header("cookie", "sessionid=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "first_name": "Amara",
            "surname": "Okafor",
            "status": "approved"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut store = SessionStore::new(
        client_for(&server)?,
        MemoryStorage::new(),
        RecordingNavigator::new(),
    );
    assert!(store.login("amara12", "s3cret").await.is_success());

    let customer = store.api().get_current_customer().await?;
    assert_eq!(customer.display_name(), "Amara Okafor");
    server.verify().await;
    Ok(())
}
