pub mod auth;
pub mod cv;
pub mod job_application;
pub mod library;
pub mod profile;
pub mod snapshot;
