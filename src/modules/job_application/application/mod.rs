pub mod application_use_cases;
pub mod ports;
pub mod services;
