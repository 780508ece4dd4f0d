//! Wordplay
//!
//! A Wordle-style word-guessing game engine with scoring, streaks, and a
//! hint economy. The engine is pure and presentation-agnostic: it takes a
//! target word and guess strings and hands back structured feedback; the
//! bundled CLI is one thin front end over it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordplay::core::{Feedback, Word};
//!
//! let target = Word::new("crane").unwrap();
//! let guess = Word::new("ranch").unwrap();
//!
//! let feedback = Feedback::evaluate(&target, &guess);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game engine: sessions, scoring, façade
pub mod game;

// Word bank and dictionary loading
pub mod words;

// Durable score storage
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
