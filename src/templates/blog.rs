//! Post list and the create/update forms.

use super::{escape, layout};
use crate::routes::CREATE_PATH;
use crate::service::PostForm;
use crate::store::{Post, User};
use axum::response::Html;
use std::fmt::Write;

pub fn index(user: Option<&User>, posts: &[Post]) -> Html<String> {
    let mut header = String::from("<h1>Posts</h1>");
    if user.is_some() {
        let _ = write!(header, "<a class=\"action\" href=\"{}\">New</a>", CREATE_PATH);
    }

    let mut content = String::new();
    for (i, post) in posts.iter().enumerate() {
        if i > 0 {
            content.push_str("  <hr>\n");
        }
        let _ = write!(
            content,
            concat!(
                "  <article class=\"post\">\n",
                "    <header>\n",
                "      <div>\n",
                "        <h1>{}</h1>\n",
                "        <div class=\"about\">by {} on {}</div>\n",
                "      </div>\n"
            ),
            escape(&post.title),
            escape(&post.username),
            post.created.format("%Y-%m-%d")
        );
        if user.is_some_and(|u| u.id == post.author_id) {
            let _ = writeln!(
                content,
                "      <a class=\"action\" href=\"/{}/update\">Edit</a>",
                post.id
            );
        }
        let _ = write!(
            content,
            "    </header>\n    <p class=\"body\">{}</p>\n  </article>\n",
            escape(&post.body)
        );
    }
    layout("Posts", user, &header, None, &content)
}

fn post_form(action: &str, form: &PostForm) -> String {
    format!(
        concat!(
            "  <form method=\"post\" action=\"{}\">\n",
            "    <label for=\"title\">Title</label>\n",
            "    <input name=\"title\" id=\"title\" value=\"{}\" required>\n",
            "    <label for=\"body\">Body</label>\n",
            "    <textarea name=\"body\" id=\"body\">{}</textarea>\n",
            "    <input type=\"submit\" value=\"Save\">\n",
            "  </form>"
        ),
        action,
        escape(&form.title),
        escape(&form.body)
    )
}

pub fn create(user: Option<&User>, form: &PostForm, error: Option<&str>) -> Html<String> {
    layout("New Post", user, "<h1>New Post</h1>", error, &post_form(CREATE_PATH, form))
}

pub fn update(user: Option<&User>, post_id: i64, form: &PostForm, error: Option<&str>) -> Html<String> {
    let header = format!("<h1>Edit \"{}\"</h1>", escape(&form.title));
    let mut content = post_form(&format!("/{}/update", post_id), form);
    let _ = write!(
        content,
        concat!(
            "\n  <hr>\n",
            "  <form action=\"/{}/delete\" method=\"post\">\n",
            "    <input class=\"danger\" type=\"submit\" value=\"Delete\" onclick=\"return confirm('Are you sure?');\">\n",
            "  </form>"
        ),
        post_id
    );
    layout("Edit", user, &header, error, &content)
}
