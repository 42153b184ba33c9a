#![allow(dead_code)]

use std::sync::Arc;

use auth::Authenticator;
use blog_service::domain::blog::service::BlogService;
use blog_service::domain::comment::service::CommentService;
use blog_service::domain::user::service::UserService;
use blog_service::inbound::http::router::create_router;
use blog_service::inbound::http::router::AppState;
use blog_service::outbound::database;
use blog_service::outbound::repositories::SqliteBlogRepository;
use blog_service::outbound::repositories::SqliteCommentRepository;
use blog_service::outbound::repositories::SqliteUserRepository;
use chrono::Duration;
use reqwest::redirect::Policy;
use serde_json::Value;
use sqlx::SqlitePool;

pub const JWT_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const PASSWORD: &str = "correct horse battery";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub api_client: reqwest::Client,
}

/// Registered user with the token handed out at registration
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub token: String,
}

impl TestApp {
    /// Spawn the application against a fresh in-memory database
    pub async fn spawn() -> Self {
        let pool = database::connect_in_memory()
            .await
            .expect("Failed to open in-memory database");
        database::migrate(&pool)
            .await
            .expect("Failed to run migrations");

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let blog_repository = Arc::new(SqliteBlogRepository::new(pool.clone()));
        let comment_repository = Arc::new(SqliteCommentRepository::new(pool.clone()));

        let authenticator = Arc::new(
            Authenticator::new(JWT_SECRET.as_bytes(), Duration::hours(1))
                .expect("Failed to create authenticator"),
        );

        let state = AppState {
            user_service: Arc::new(UserService::new(user_repository)),
            blog_service: Arc::new(BlogService::new(Arc::clone(&blog_repository))),
            comment_service: Arc::new(CommentService::new(comment_repository, blog_repository)),
            authenticator,
        };

        let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static");
        let router = create_router(state, static_dir);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            pool,
            api_client: reqwest::Client::builder()
                .redirect(Policy::none())
                .build()
                .expect("Failed to create reqwest client"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register through the API and return the new user
    pub async fn register(&self, name: &str, email: &str) -> TestUser {
        let response = self
            .post("/api/register")
            .form(&[("name", name), ("email", email), ("password", PASSWORD)])
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        TestUser {
            id: body["data"]["user"]["id"].as_i64().unwrap(),
            email: email.to_string(),
            token: body["data"]["token"].as_str().unwrap().to_string(),
        }
    }

    /// Create a blog post as `user` and return its id
    pub async fn create_blog(&self, user: &TestUser, title: &str, content: &str) -> i64 {
        let response = self
            .post_authenticated("/api/blogs", &user.token)
            .form(&[("title", title), ("content", content)])
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_i64().unwrap()
    }
}
