//! Application layer - Use cases and orchestration

pub mod check_in;
pub mod manage_config;

pub use check_in::CheckInService;
pub use manage_config::ConfigService;
