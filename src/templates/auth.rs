//! Register and login forms.

use super::{escape, layout};
use crate::routes::{LOGIN_PATH, REGISTER_PATH};
use crate::store::User;
use axum::response::Html;

fn credentials_form(action: &str, username: &str, submit: &str) -> String {
    format!(
        concat!(
            "  <form method=\"post\" action=\"{}\">\n",
            "    <label for=\"username\">Username</label>\n",
            "    <input name=\"username\" id=\"username\" value=\"{}\" required>\n",
            "    <label for=\"password\">Password</label>\n",
            "    <input type=\"password\" name=\"password\" id=\"password\" required>\n",
            "    <input type=\"submit\" value=\"{}\">\n",
            "  </form>"
        ),
        action,
        escape(username),
        submit
    )
}

pub fn register(user: Option<&User>, username: &str, error: Option<&str>) -> Html<String> {
    layout(
        "Register",
        user,
        "<h1>Register</h1>",
        error,
        &credentials_form(REGISTER_PATH, username, "Register"),
    )
}

pub fn login(user: Option<&User>, username: &str, error: Option<&str>) -> Html<String> {
    layout(
        "Log In",
        user,
        "<h1>Log In</h1>",
        error,
        &credentials_form(LOGIN_PATH, username, "Log In"),
    )
}
