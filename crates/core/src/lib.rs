//! Core types for planforge
//!
//! This crate contains domain types and the progress math shared across all
//! other crates.

mod activity;
mod constants;
mod plan;
mod progress;

pub use activity::*;
pub use constants::*;
pub use plan::*;
pub use progress::*;
