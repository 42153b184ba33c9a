//! Server-rendered HTML pages.
//!
//! Values are interpolated into the markup verbatim. Nothing here escapes
//! user input; the pages are the reflected and stored XSS targets of the lab.

use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::response::Html;
use serde::Deserialize;

use super::handlers::ApiError;
use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::ports::BlogServicePort;
use crate::domain::comment::models::Comment;
use crate::domain::comment::ports::CommentServicePort;
use crate::inbound::http::router::AppState;

const SITE_TITLE: &str = "XSS Lab";
const WELCOME: &str = "Welcome to the XSS Lab! This is a safe environment to learn about \
    Cross-Site Scripting (XSS) vulnerabilities and how to prevent them.";

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav><a href="/">Home</a> | <a href="/blogs">Blogs</a> | <a href="/login">Login</a> | <a href="/register">Register</a></nav>
{body}
</body>
</html>
"#
    ))
}

fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(message) if !message.is_empty() => format!(r#"<p class="error">{message}</p>"#),
        _ => String::new(),
    }
}

pub async fn landing() -> Html<String> {
    layout(
        SITE_TITLE,
        &format!("<h1>{SITE_TITLE}</h1>\n<p>{WELCOME}</p>"),
    )
}

#[derive(Debug, Default, Deserialize)]
pub struct FormPageQuery {
    error: Option<String>,
    email: Option<String>,
    name: Option<String>,
}

pub async fn login_page(Query(query): Query<FormPageQuery>) -> Html<String> {
    let email = query.email.as_deref().unwrap_or_default();

    layout(
        "Login",
        &format!(
            r#"<h1>Login</h1>
{error}
<form method="post" action="/api/login">
<label>Email <input type="email" name="email" value="{email}"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Login</button>
</form>"#,
            error = error_banner(query.error.as_deref()),
        ),
    )
}

pub async fn register_page(Query(query): Query<FormPageQuery>) -> Html<String> {
    let email = query.email.as_deref().unwrap_or_default();
    let name = query.name.as_deref().unwrap_or_default();

    layout(
        "Register",
        &format!(
            r#"<h1>Register</h1>
{error}
<form method="post" action="/api/register">
<label>Name <input type="text" name="name" value="{name}"></label>
<label>Email <input type="email" name="email" value="{email}"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Register</button>
</form>"#,
            error = error_banner(query.error.as_deref()),
        ),
    )
}

/// Shell page; `blogs.js` fills the list from the JSON API.
pub async fn blogs_page() -> Html<String> {
    layout(
        "Blogs",
        r#"<h1>Blogs</h1>
<div id="blogs"></div>
<div id="pagination"></div>
<script src="/static/blogs.js"></script>"#,
    )
}

pub async fn blog_page(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let blog_id = BlogId::from_string(&blog_id).map_err(BlogError::from)?;

    let blog = state.blog_service.get_blog(blog_id).await?;
    let comments = state.comment_service.list_comments(blog_id).await?;

    Ok(layout(&blog.title, &render_blog(&blog, &comments)))
}

fn render_blog(blog: &Blog, comments: &[Comment]) -> String {
    let comments: String = comments
        .iter()
        .map(|comment| {
            format!(
                "<li><strong>{}</strong> <time>{}</time><p>{}</p></li>\n",
                comment.author_name.as_deref().unwrap_or("anonymous"),
                comment.created_at.format("%Y-%m-%d %H:%M"),
                comment.content,
            )
        })
        .collect();

    format!(
        r#"<article>
<h1>{title}</h1>
<p class="meta">Posted by user {author} on {published}</p>
<div class="content">{content}</div>
</article>
<section>
<h2>Comments</h2>
<ul id="comments">
{comments}</ul>
</section>"#,
        title = blog.title,
        author = blog.author_id,
        published = blog.published_at.format("%Y-%m-%d %H:%M"),
        content = blog.content,
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::comment::models::CommentId;
    use crate::domain::user::models::UserId;

    #[tokio::test]
    async fn test_login_page_reflects_query_verbatim() {
        let query = FormPageQuery {
            error: Some("<script>alert(1)</script>".to_string()),
            email: Some(r#""><img src=x>"#.to_string()),
            name: None,
        };

        let Html(page) = login_page(Query(query)).await;

        assert!(page.contains(r#"<p class="error"><script>alert(1)</script></p>"#));
        assert!(page.contains(r#"value=""><img src=x>""#));
    }

    #[tokio::test]
    async fn test_register_page_without_error() {
        let Html(page) = register_page(Query(FormPageQuery::default())).await;

        assert!(page.contains(r#"action="/api/register""#));
        assert!(!page.contains(r#"class="error""#));
    }

    #[test]
    fn test_render_blog_keeps_markup() {
        let blog = Blog {
            id: BlogId(1),
            title: "<i>title</i>".to_string(),
            content: "<script>steal()</script>".to_string(),
            author_id: UserId(3),
            published_at: Utc::now(),
        };
        let comments = vec![Comment {
            id: CommentId(1),
            blog_id: BlogId(1),
            author_id: UserId(4),
            author_name: Some("<b>eve</b>".to_string()),
            content: "<img src=x onerror=alert(1)>".to_string(),
            created_at: Utc::now(),
        }];

        let html = render_blog(&blog, &comments);

        assert!(html.contains("<h1><i>title</i></h1>"));
        assert!(html.contains("<script>steal()</script>"));
        assert!(html.contains("<strong><b>eve</b></strong>"));
        assert!(html.contains("<p><img src=x onerror=alert(1)></p>"));
    }
}
