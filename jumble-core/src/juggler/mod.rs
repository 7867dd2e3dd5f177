//! Bounded random value generators, one call surface per numeric kind.
//!
//! Every kind exposes the same operation family:
//! - `random`, `positive`, `negative`
//! - `smaller_than`, `greater_than` (never fail, clipped to the kind)
//! - `positive_smaller_than`, `positive_greater_than`,
//!   `negative_smaller_than`, `negative_greater_than` (fail with
//!   `InvalidBound` when the bound contradicts the sign)
//! - `between` (fails with `InvalidRange` when `min > max`)
//! - `positive_with_length` (fails with `InvalidArgument` for an
//!   unrepresentable digit count)
//!
//! The algorithm is written once per family (integer and floating point)
//! and the six aliases below fix the kind.

/// Signed integer generators: `ByteJuggler`, `ShortJuggler`, `IntJuggler`, `LongJuggler`.
mod integer;

/// Floating-point generators: `FloatJuggler`, `DoubleJuggler`.
mod float;

pub use float::{DoubleJuggler, FloatJuggler, FloatingJuggler};
pub use integer::{ByteJuggler, IntJuggler, IntegerJuggler, LongJuggler, ShortJuggler};
