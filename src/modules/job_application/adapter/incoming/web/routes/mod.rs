pub mod create_application;
pub mod delete_application;
pub mod get_application;
pub mod get_applications;
pub mod patch_application;
