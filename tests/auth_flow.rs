mod common;

use axum::http::{header, StatusCode};
use common::{body_text, location, session_cookie, TestApp};
use quill::store::UserStore;

#[tokio::test]
async fn hello_returns_greeting() {
    let app = TestApp::new().await;
    let response = app.get("/hello", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Hello, World! My name is Los🐍");
}

#[tokio::test]
async fn register_form_renders() {
    let app = TestApp::new().await;
    let response = app.get("/auth/register", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<form method=\"post\" action=\"/auth/register\">"));
}

#[tokio::test]
async fn empty_username_is_required_whatever_the_password() {
    let app = TestApp::new().await;
    for form in ["username=&password=", "username=&password=secret1", "password=secret1"] {
        let response = app.post_form("/auth/register", form, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Username is required."));
    }
}

#[tokio::test]
async fn empty_password_is_required() {
    let app = TestApp::new().await;
    let response = app.register("alice", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Password is required."));

    let mut conn = app.conn().await;
    assert_eq!(UserStore::count_by_username(&mut conn, "alice").await.unwrap(), 0);
}

#[tokio::test]
async fn duplicate_registration_keeps_one_row() {
    let app = TestApp::new().await;
    let first = app.register("alice", "secret1").await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&first), "/auth/login");

    let second = app.register("alice", "secret2").await;
    assert_eq!(second.status(), StatusCode::OK);
    assert!(body_text(second).await.contains("User alice is already registered."));

    let mut conn = app.conn().await;
    assert_eq!(UserStore::count_by_username(&mut conn, "alice").await.unwrap(), 1);
    let stored = UserStore::find_by_username(&mut conn, "alice").await.unwrap().unwrap();
    assert_ne!(stored.password, "secret1");
}

#[tokio::test]
async fn login_accepts_only_the_registered_password() {
    let app = TestApp::new().await;
    app.register("alice", "secret1").await;

    let wrong = app
        .post_form("/auth/login", "username=alice&password=wrong", None)
        .await;
    assert_eq!(wrong.status(), StatusCode::OK);
    assert!(session_cookie(&wrong).is_none());
    assert!(body_text(wrong).await.contains("Incorrect password."));

    let unknown = app
        .post_form("/auth/login", "username=bob&password=secret1", None)
        .await;
    assert!(body_text(unknown).await.contains("Incorrect username."));

    let ok = app
        .post_form("/auth/login", "username=alice&password=secret1", None)
        .await;
    assert_eq!(ok.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&ok), "/");
    let cookie = session_cookie(&ok).expect("session cookie");

    let index = body_text(app.get("/", Some(&cookie)).await).await;
    assert!(index.contains("<span>alice</span>"));
    assert!(index.contains("Log Out"));
}

#[tokio::test]
async fn logout_clears_the_session() {
    let app = TestApp::new().await;
    app.register("alice", "secret1").await;
    let cookie = app.login("alice", "secret1").await;

    let response = app.get("/auth/logout", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let removal = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(removal.starts_with("session=;"));
    assert!(removal.contains("Max-Age=0"));

    // The browser now sends the emptied cookie.
    let index = app.get("/", Some("session=")).await;
    assert_eq!(index.status(), StatusCode::OK);
    let body = body_text(index).await;
    assert!(body.contains("Log In"));
    assert!(!body.contains("<span>alice</span>"));
}

#[tokio::test]
async fn deleted_user_with_old_cookie_is_anonymous() {
    let app = TestApp::new().await;
    app.register("alice", "secret1").await;
    let cookie = app.login("alice", "secret1").await;

    let mut conn = app.conn().await;
    sqlx::query("DELETE FROM user WHERE username = ?")
        .bind("alice")
        .execute(&mut conn)
        .await
        .unwrap();

    let index = app.get("/", Some(&cookie)).await;
    assert_eq!(index.status(), StatusCode::OK);
    assert!(body_text(index).await.contains("Log In"));

    let gated = app.get("/create", Some(&cookie)).await;
    assert_eq!(gated.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&gated), "/auth/login");
}

#[tokio::test]
async fn tampered_cookie_is_ignored() {
    let app = TestApp::new().await;
    app.register("alice", "secret1").await;
    let cookie = app.login("alice", "secret1").await;
    let mut forged = cookie.clone();
    forged.push('x');

    let index = app.get("/", Some(&forged)).await;
    assert_eq!(index.status(), StatusCode::OK);
    assert!(body_text(index).await.contains("Log In"));
}

#[tokio::test]
async fn login_cookie_lasts_for_the_browser_session() {
    let app = TestApp::new().await;
    app.register("alice", "secret1").await;
    let response = app
        .post_form("/auth/login", "username=alice&password=secret1", None)
        .await;
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(!set_cookie.contains("Max-Age"));
    assert!(!set_cookie.contains("Expires"));
}

#[tokio::test]
async fn cookie_sent_before_login_does_not_become_the_new_session() {
    let app = TestApp::new().await;
    app.register("alice", "secret1").await;
    app.register("mallory", "secret2").await;
    let planted = app.login("mallory", "secret2").await;

    let response = app
        .post_form("/auth/login", "username=alice&password=secret1", Some(&planted))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let fresh = session_cookie(&response).expect("session cookie");
    assert_ne!(fresh, planted);

    let replayed = body_text(app.get("/", Some(&planted)).await).await;
    assert!(!replayed.contains("<span>alice</span>"));
    let current = body_text(app.get("/", Some(&fresh)).await).await;
    assert!(current.contains("<span>alice</span>"));
}

#[tokio::test]
async fn password_past_bcrypt_limit_is_refused() {
    let app = TestApp::new().await;
    let prefix = "a".repeat(72);

    let response = app.register("alice", &format!("{prefix}original")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Password must be at most 72 bytes."));

    assert_eq!(app.register("bob", &prefix).await.status(), StatusCode::SEE_OTHER);
    let other = app
        .post_form(
            "/auth/login",
            &format!("username=bob&password={prefix}different"),
            None,
        )
        .await;
    assert_eq!(other.status(), StatusCode::OK);
    assert!(session_cookie(&other).is_none());
    assert!(body_text(other).await.contains("Incorrect password."));
}
