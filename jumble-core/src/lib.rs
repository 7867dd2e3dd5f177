//! Constrained random values and filler text for tests and sample data.
//!
//! This crate provides:
//! - Bounded generators for `i8`, `i16`, `i32`, `i64`, `f32` and `f64`
//!   (random, signed, one-sided and two-sided bounds, fixed digit length)
//! - A lorem-ipsum composer producing punctuated sentences and paragraphs
//! - Random dictionary words, by initial letter or by prefix
//! - Process-wide vocabularies loaded once, from embedded data or JSON files
//!
//! Randomness comes from the thread-local generator of `rand`; every call is
//! independent and safe to make from any thread. Nothing is seeded or
//! reproducible, and nothing is suitable for cryptography.

/// Bounded random value generators, one alias per numeric kind.
pub mod juggler;

/// Lorem-ipsum sentence and paragraph composition.
pub mod lorem;

/// Immutable word lists and the process-wide vocabulary caches.
pub mod vocabulary;

/// Random word selection by initial or prefix.
pub mod words;

/// Crate error type.
pub mod error;

/// Numeric kind traits and uniform sampling primitives.
pub mod random;

/// File helpers.
///
/// Not exposed
pub(crate) mod io;

pub use error::{JumbleError, Result};
