//! VS Code launch configuration (launch.json) checks
//!
//! - [`locate`]: find the launch.json to check
//! - [`model`]: typed access to the parsed document
//! - [`checks`]: the individual checks and the suite runner

pub mod checks;
pub mod locate;
pub mod model;

pub use checks::run_suite;
