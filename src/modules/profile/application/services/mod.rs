pub mod get_profile_service;

pub use get_profile_service::GetProfileService;
