use std::sync::Arc;

use auth::Authenticator;
use blog_service::config::Config;
use blog_service::domain::blog::service::BlogService;
use blog_service::domain::comment::service::CommentService;
use blog_service::domain::user::service::UserService;
use blog_service::inbound::http::router::create_router;
use blog_service::inbound::http::router::AppState;
use blog_service::outbound::database;
use blog_service::outbound::repositories::SqliteBlogRepository;
use blog_service::outbound::repositories::SqliteCommentRepository;
use blog_service::outbound::repositories::SqliteUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "blog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        static_dir = %config.server.static_dir,
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pool = database::connect(&config.database).await?;
    database::migrate(&pool).await?;

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.token_ttl(),
    )?);

    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let blog_repository = Arc::new(SqliteBlogRepository::new(pool.clone()));
    let comment_repository = Arc::new(SqliteCommentRepository::new(pool));

    let state = AppState {
        user_service: Arc::new(UserService::new(user_repository)),
        blog_service: Arc::new(BlogService::new(Arc::clone(&blog_repository))),
        comment_service: Arc::new(CommentService::new(comment_repository, blog_repository)),
        authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state, &config.server.static_dir)).await?;

    tracing::info!("Server exited");

    Ok(())
}
