pub mod auth;

pub use auth::VerifiedUser;
