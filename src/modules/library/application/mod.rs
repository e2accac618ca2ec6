pub mod library_use_cases;
pub mod ports;
pub mod services;
