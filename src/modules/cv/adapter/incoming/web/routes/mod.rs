pub mod add_inclusion;
pub mod create_cv;
pub mod delete_cv;
pub mod get_cv;
pub mod get_cvs;
pub mod patch_cv;
pub mod remove_inclusion;
pub mod reorder_inclusion;
