//! Terminal output formatting
//!
//! Rendering for the CLI front end: tile rows, the recolored keyboard,
//! and score banners.

pub mod display;
pub mod formatters;

pub use display::{print_guess_outcome, print_stats, print_welcome};
