//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod evaluate;
pub mod health;

// Re-export all handlers for use in router
pub use evaluate::*;
pub use health::*;
