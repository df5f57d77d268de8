//! Project rules document (RULES.md) checks

pub mod checks;
pub mod locate;
pub mod model;

pub use checks::run_suite;
