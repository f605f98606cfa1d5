//! Minimal server-rendered pages. A real deployment would hand these over to
//! a template engine; the markup here is deliberately plain and only carries
//! what the handlers and tests need.

use axum::http::StatusCode;
use axum::response::Html;

use crate::domain::comment::Comment;
use crate::domain::post::Post;
use crate::domain::user::Identity;

pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, flash: Option<&str>, body: &str) -> Html<String> {
    let flash_html = match flash {
        Some(message) => format!(
            "<p class=\"flash success\">{}</p>\n",
            escape(message)
        ),
        None => String::new(),
    };
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n{}{}\n</body>\n</html>\n",
        escape(title),
        flash_html,
        body
    ))
}

pub(crate) fn home_page(
    flash: Option<&str>,
    identity: Option<&Identity>,
    posts: &[Post],
) -> Html<String> {
    let mut body = String::from("<h1>Inkwell</h1>\n");
    if let Some(identity) = identity {
        body.push_str(&format!(
            "<p class=\"whoami\">Signed in as {}</p>\n",
            escape(&identity.username)
        ));
    }
    body.push_str("<ul class=\"posts\">\n");
    for post in posts {
        body.push_str(&format!(
            "<li><a href=\"/post/{}\">{}</a></li>\n",
            post.id,
            escape(&post.title)
        ));
    }
    body.push_str("</ul>\n<a href=\"/post/new\">New Post</a>");
    layout("Home", flash, &body)
}

pub(crate) fn post_page(flash: Option<&str>, post: &Post, comments: &[Comment]) -> Html<String> {
    let mut body = format!(
        "<article>\n<h1>{}</h1>\n<p>{}</p>\n</article>\n<section class=\"comments\">\n<ul>\n",
        escape(&post.title),
        escape(&post.content)
    );
    for comment in comments {
        body.push_str(&format!(
            "<li id=\"comment-{}\">{}</li>\n",
            comment.id,
            escape(&comment.content)
        ));
    }
    body.push_str(&format!(
        "</ul>\n</section>\n<a href=\"/post/{}/comments/new\">Add a comment</a>",
        post.id
    ));
    layout(&post.title, flash, &body)
}

fn errors_html(errors: &[(String, String)]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"errors\">\n");
    for (field, message) in errors {
        out.push_str(&format!(
            "<li>{}: {}</li>\n",
            escape(field),
            escape(message)
        ));
    }
    out.push_str("</ul>\n");
    out
}

pub(crate) fn post_form_page(
    legend: &str,
    action: &str,
    title: &str,
    content: &str,
    errors: &[(String, String)],
) -> Html<String> {
    let body = format!(
        "{}<form method=\"post\" action=\"{}\">\n<fieldset><legend>{}</legend>\n\
         <label>Title <input name=\"title\" value=\"{}\"></label>\n\
         <label>Content <textarea name=\"content\">{}</textarea></label>\n\
         <button type=\"submit\">Save</button>\n</fieldset>\n</form>",
        errors_html(errors),
        escape(action),
        escape(legend),
        escape(title),
        escape(content)
    );
    layout(legend, None, &body)
}

pub(crate) fn comment_form_page(
    legend: &str,
    action: &str,
    content: &str,
    errors: &[(String, String)],
) -> Html<String> {
    let body = format!(
        "{}<form method=\"post\" action=\"{}\">\n<fieldset><legend>{}</legend>\n\
         <label>Content <textarea name=\"content\">{}</textarea></label>\n\
         <button type=\"submit\">Save</button>\n</fieldset>\n</form>",
        errors_html(errors),
        escape(action),
        escape(legend),
        escape(content)
    );
    layout(legend, None, &body)
}

pub(crate) fn error_page(status: StatusCode, message: &str) -> (StatusCode, Html<String>) {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<a href=\"/\">Back home</a>",
        status.as_u16(),
        escape(message)
    );
    (status, layout("Error", None, &body))
}
