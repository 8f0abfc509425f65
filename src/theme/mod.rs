//! Theme - Palettes and Typography

pub mod colors;
pub mod typography;
