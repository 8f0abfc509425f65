//! Application Layer
//!
//! App initialization, global actions, navigation and the root view.

pub mod application;
pub mod navigation;
pub mod workspace;
