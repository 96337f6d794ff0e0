//! Utility modules

pub mod clipboard;
pub mod constants;
