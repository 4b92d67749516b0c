/// Blog Service Library
///
/// A small blogging REST API: posts, groups, comments, and follow
/// relationships with author-based write permissions and JWT authentication.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and request/response types
/// - `services`: Business logic layer (authorship stamping, follow rules)
/// - `db`: Database access layer and repositories
/// - `models`: Data structures for posts, groups, comments, follows
/// - `middleware`: HTTP middleware for authentication and ownership checks
/// - `auth`: JWT validation helpers
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
