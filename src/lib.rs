pub mod analyzer;
pub mod checks;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod registry;
pub mod scanner;

pub use error::{Result, SeoGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ISSUES_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
