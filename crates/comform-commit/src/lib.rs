//! Commit types for Comform.
//!
//! This crate provides the core commit types used throughout Comform:
//! - [`RawCommit`]: A commit as retrieved from Git
//! - [`ParsedMessage`]: A commit message split into summary, body and trailers
//! - [`Trailer`]: A single `key: value` entry from the trailer block

mod message;
mod raw;

pub use message::{ParsedMessage, Trailer};
pub use raw::RawCommit;
