//! Server-rendered HTML pages. Every interpolated value goes through `escape`.

pub mod auth;
pub mod blog;

use crate::routes::{INDEX_PATH, LOGIN_PATH, LOGOUT_PATH, REGISTER_PATH};
use crate::store::User;
use axum::http::StatusCode;
use axum::response::Html;
use std::fmt::Write;

pub const SITE_NAME: &str = "Quill";

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Page shell: navigation for `user`, the header, an optional flash message, then `content`.
/// `header` and `content` must already be escaped.
pub fn layout(
    title: &str,
    user: Option<&User>,
    header: &str,
    flash: Option<&str>,
    content: &str,
) -> Html<String> {
    let mut page = String::new();
    let _ = write!(
        page,
        "<!doctype html>\n<title>{} - {}</title>\n<nav>\n  <h1><a href=\"{}\">{}</a></h1>\n  <ul>\n",
        escape(title),
        SITE_NAME,
        INDEX_PATH,
        SITE_NAME
    );
    match user {
        Some(user) => {
            let _ = write!(
                page,
                "    <li><span>{}</span>\n    <li><a href=\"{}\">Log Out</a>\n",
                escape(&user.username),
                LOGOUT_PATH
            );
        }
        None => {
            let _ = write!(
                page,
                "    <li><a href=\"{}\">Register</a>\n    <li><a href=\"{}\">Log In</a>\n",
                REGISTER_PATH, LOGIN_PATH
            );
        }
    }
    let _ = write!(
        page,
        "  </ul>\n</nav>\n<section class=\"content\">\n  <header>{}</header>\n",
        header
    );
    if let Some(message) = flash {
        let _ = writeln!(page, "  <div class=\"flash\">{}</div>", escape(message));
    }
    let _ = write!(page, "{}\n</section>\n", content);
    Html(page)
}

pub fn error_page(status: StatusCode, message: Option<&str>) -> Html<String> {
    let reason = status.canonical_reason().unwrap_or("Error");
    let mut page = format!(
        "<!doctype html>\n<title>{} {}</title>\n<h1>{}</h1>\n",
        status.as_u16(),
        reason,
        reason
    );
    if let Some(message) = message {
        let _ = writeln!(page, "<p>{}</p>", escape(message));
    }
    Html(page)
}
