use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::count_blogs::count_blogs;
use super::handlers::create_blog::create_blog;
use super::handlers::create_comment::create_comment;
use super::handlers::delete_blog::delete_blog;
use super::handlers::list_blogs::list_blogs;
use super::handlers::list_user_blogs::list_user_blogs;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::search_blogs::search_blogs;
use super::handlers::update_blog::update_blog;
use super::middleware::authorize;
use super::pages;
use crate::domain::blog::service::BlogService;
use crate::domain::comment::service::CommentService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::SqliteBlogRepository;
use crate::outbound::repositories::SqliteCommentRepository;
use crate::outbound::repositories::SqliteUserRepository;

pub type AppUserService = UserService<SqliteUserRepository>;
pub type AppBlogService = BlogService<SqliteBlogRepository>;
pub type AppCommentService = CommentService<SqliteCommentRepository, SqliteBlogRepository>;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<AppUserService>,
    pub blog_service: Arc<AppBlogService>,
    pub comment_service: Arc<AppCommentService>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState, static_dir: &str) -> Router {
    let page_routes = Router::new()
        .route("/", get(pages::landing))
        .route("/login", get(pages::login_page))
        .route("/register", get(pages::register_page))
        .route("/blogs", get(pages::blogs_page))
        .route("/blogs/:id", get(pages::blog_page));

    let public_routes = Router::new()
        .route("/api/login", post(login))
        .route("/api/register", post(register))
        .route("/api/blogs", get(list_blogs))
        .route("/api/blogs/count", get(count_blogs))
        .route("/api/blogs/search", get(search_blogs))
        .route("/api/users/:id/blogs", get(list_user_blogs));

    let protected_routes = Router::new()
        .route("/api/blogs", post(create_blog))
        .route("/api/blogs/:id", put(update_blog))
        .route("/api/blogs/:id", delete(delete_blog))
        .route("/api/comments/:blog_id", post(create_comment))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.authenticator),
            authorize,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(page_routes)
        .merge(public_routes)
        .merge(protected_routes)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
