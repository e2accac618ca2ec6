pub mod application_repository;

pub use application_repository::*;
