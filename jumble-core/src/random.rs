//! Uniform random source shared by every generator.
//!
//! All draws go through `rand::rng()`, the thread-local generator, so callers
//! on different threads never contend on a shared state. The helpers here
//! assume their range is already validated and non-empty.

use std::fmt::{Debug, Display};

use num_traits::{Float, PrimInt, Signed};
use rand::Rng;
use rand::distr::uniform::SampleUniform;

mod sealed {
	pub trait Sealed {}

	impl Sealed for i8 {}
	impl Sealed for i16 {}
	impl Sealed for i32 {}
	impl Sealed for i64 {}
	impl Sealed for f32 {}
	impl Sealed for f64 {}
}

/// A fixed-width signed integer kind (`i8`, `i16`, `i32`, `i64`).
pub trait IntegerKind: PrimInt + Signed + SampleUniform + Display + Debug + sealed::Sealed {}

impl IntegerKind for i8 {}
impl IntegerKind for i16 {}
impl IntegerKind for i32 {}
impl IntegerKind for i64 {}

/// A floating-point kind (`f32`, `f64`).
pub trait FloatKind: Float + SampleUniform + Display + Debug + sealed::Sealed {
	/// Smallest representable positive value (the first subnormal).
	const SMALLEST_POSITIVE: Self;

	/// Largest integer the kind represents exactly along with all smaller ones.
	const MAX_EXACT_INTEGER: i64;
}

impl FloatKind for f32 {
	const SMALLEST_POSITIVE: Self = f32::from_bits(1);
	const MAX_EXACT_INTEGER: i64 = 1 << f32::MANTISSA_DIGITS;
}

impl FloatKind for f64 {
	const SMALLEST_POSITIVE: Self = f64::from_bits(1);
	const MAX_EXACT_INTEGER: i64 = 1 << f64::MANTISSA_DIGITS;
}

/// Uniform integer in `[low, high)`. Requires `low < high`.
pub(crate) fn integer_in<T: IntegerKind>(low: T, high: T) -> T {
	rand::rng().random_range(low..high)
}

/// Uniform integer in `[low, high]`. Requires `low <= high`.
pub(crate) fn integer_in_inclusive<T: IntegerKind>(low: T, high: T) -> T {
	rand::rng().random_range(low..=high)
}

/// Uniform float in `[low, high)`. Requires finite bounds with `low < high`.
///
/// When the width of the interval does not fit the kind (both bounds far
/// from zero with opposite signs) the interval is cut at its midpoint and a
/// fair coin picks the half, which keeps the draw uniform over the whole
/// interval instead of biasing it toward either sign.
pub(crate) fn float_in<T: FloatKind>(low: T, high: T) -> T {
	let mut rng = rand::rng();
	let two = T::one() + T::one();
	let middle = low / two + high / two;
	let split = !(high - low).is_finite();

	loop {
		let value = if !split {
			rng.random_range(low..high)
		} else if rng.random_bool(0.5) {
			rng.random_range(low..middle)
		} else {
			rng.random_range(middle..high)
		};

		// Rounding in the scaling step can land on the excluded bound.
		if value < high {
			return value;
		}
	}
}

/// Inclusive bounds of the positive integers written with exactly `length`
/// decimal digits, or `None` when `length` is zero or beyond `i128`.
pub(crate) fn decimal_bounds(length: u32) -> Option<(i128, i128)> {
	let low = 10_i128.checked_pow(length.checked_sub(1)?)?;
	let high = 10_i128.checked_pow(length).map_or(i128::MAX, |bound| bound - 1);
	Some((low, high))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decimal_bounds_cover_exact_digit_counts() {
		assert_eq!(decimal_bounds(0), None);
		assert_eq!(decimal_bounds(1), Some((1, 9)));
		assert_eq!(decimal_bounds(3), Some((100, 999)));
		assert_eq!(decimal_bounds(40), None);
	}

	#[test]
	fn float_in_handles_intervals_wider_than_the_kind() {
		for _ in 0..1_000 {
			let value = float_in(f64::MIN, f64::MAX);
			assert!(value.is_finite());
			assert!(value < f64::MAX);
		}
	}

	#[test]
	fn float_in_reaches_both_signs_of_a_straddling_interval() {
		let draws: Vec<f32> = (0..1_000).map(|_| float_in(f32::MIN, f32::MAX)).collect();
		assert!(draws.iter().any(|v| *v < 0.0));
		assert!(draws.iter().any(|v| *v > 0.0));
	}

	#[test]
	fn smallest_positive_is_a_subnormal() {
		assert!(f32::SMALLEST_POSITIVE > 0.0);
		assert!(f64::SMALLEST_POSITIVE > 0.0);
		assert!(!f64::SMALLEST_POSITIVE.is_normal());
		assert_eq!(f64::SMALLEST_POSITIVE / 2.0, 0.0);
	}

	#[test]
	fn max_exact_integers() {
		assert_eq!(f32::MAX_EXACT_INTEGER, 16_777_216);
		assert_eq!(f64::MAX_EXACT_INTEGER, 9_007_199_254_740_992);
	}
}
