//! # wordmix Common Library
//!
//! Shared code for the wordmix service including:
//! - Word list parsing, filtering and the in-memory word bank
//! - Letter shuffling for puzzles
//! - Word list sources (embedded, local file, storage bucket)
//! - Configuration loading
//! - Error types

pub mod config;
pub mod error;
pub mod source;
pub mod words;

pub use error::{Error, Result};
pub use source::WordSource;
pub use words::{Puzzle, WordBank};
