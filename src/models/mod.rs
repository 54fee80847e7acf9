pub mod auth;

pub use auth::{Credentials, LoginFailure, LoginResponse};
