//! Helper Utilities
//!
//! Common utilities used across the application.

mod action;
mod fs;
mod logging;

pub use action::*;
pub use fs::*;
pub use logging::*;
