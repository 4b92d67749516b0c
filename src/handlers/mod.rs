/// HTTP request handlers for blog-service
pub mod comments;
pub mod follows;
pub mod groups;
pub mod posts;

pub use comments::*;
pub use follows::*;
pub use groups::*;
pub use posts::*;
