#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use quill::{app, init_db_command, AppState, Settings};
use sqlx::sqlite::SqliteConnection;
use std::collections::HashMap;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    _dir: TempDir,
    pub state: AppState,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let mapping = HashMap::from([
            ("secret_key".to_string(), "test".to_string()),
            ("bcrypt_cost".to_string(), "4".to_string()),
        ]);
        let settings = Settings::load(dir.path(), Some(&mapping)).expect("settings");
        settings.ensure_instance_path().expect("instance path");
        let state = AppState::new(settings);
        init_db_command(&state.db).await.expect("init db");
        let router = app(state.clone());
        TestApp {
            _dir: dir,
            state,
            router,
        }
    }

    pub async fn conn(&self) -> SqliteConnection {
        self.state.db.connect().await.expect("connect")
    }

    pub async fn send(&self, req: Request<Body>) -> Response {
        self.router.clone().oneshot(req).await.expect("infallible")
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response {
        let mut req = Request::get(path);
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        self.send(req.body(Body::empty()).expect("request")).await
    }

    pub async fn post_form(&self, path: &str, form: &str, cookie: Option<&str>) -> Response {
        let mut req = Request::post(path).header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        self.send(req.body(Body::from(form.to_string())).expect("request")).await
    }

    pub async fn register(&self, username: &str, password: &str) -> Response {
        self.post_form(
            "/auth/register",
            &format!("username={}&password={}", username, password),
            None,
        )
        .await
    }

    /// Log in and return the `name=value` session cookie.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post_form(
                "/auth/login",
                &format!("username={}&password={}", username, password),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        session_cookie(&response).expect("session cookie")
    }
}

pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}
