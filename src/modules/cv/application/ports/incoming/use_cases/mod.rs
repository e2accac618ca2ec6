pub mod add_inclusion;
pub mod create_cv;
pub mod delete_cv;
pub mod get_composed_cv;
pub mod get_cvs;
pub mod patch_cv;
pub mod remove_inclusion;
pub mod reorder_inclusion;

pub use add_inclusion::*;
pub use create_cv::*;
pub use delete_cv::*;
pub use get_composed_cv::*;
pub use get_cvs::*;
pub use patch_cv::*;
pub use remove_inclusion::*;
pub use reorder_inclusion::*;
