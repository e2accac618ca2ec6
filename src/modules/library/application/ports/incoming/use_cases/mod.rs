pub mod educations;
pub mod projects;
pub mod skills;
pub mod work_experiences;

pub use educations::*;
pub use projects::*;
pub use skills::*;
pub use work_experiences::*;
