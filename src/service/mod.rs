//! Registration, login and post operations on top of the stores.

pub mod auth;
pub mod posts;
pub mod validation;
pub use auth::AuthService;
pub use posts::PostService;
pub use validation::{Credentials, PostForm, RequestValidator};
