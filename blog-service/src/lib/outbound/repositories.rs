pub mod blog;
pub mod comment;
pub mod user;

pub use blog::SqliteBlogRepository;
pub use comment::SqliteCommentRepository;
pub use user::SqliteUserRepository;
