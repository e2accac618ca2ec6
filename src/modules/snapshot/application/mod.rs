pub mod domain;
pub mod ports;
pub mod services;
pub mod snapshot_use_cases;
