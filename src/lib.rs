//! Kuwait Social AI UI Library
//!
//! The process-wide UI state store (theme, language/direction, sidebar,
//! loading flags, notifications, modal stack, breadcrumb, page title and
//! error messages) and the GPUI shell that hosts it.

pub mod app;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod states;
pub mod theme;
