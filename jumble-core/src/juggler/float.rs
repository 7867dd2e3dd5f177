use std::marker::PhantomData;

use num_traits::NumCast;

use crate::error::{JumbleError, Result};
use crate::random::{self, FloatKind};

const POSITIVE: &str = "strictly positive";
const NON_NEGATIVE: &str = "positive";
const NEGATIVE: &str = "strictly negative";

/// Bounded generator for a floating-point kind.
///
/// The kind's range is taken as `[-MAX, MAX)`: infinite bounds are clipped to
/// it and never produced. Upper bounds are exclusive, lower bounds inclusive.
#[derive(Debug)]
pub struct FloatingJuggler<T>(PhantomData<T>);

/// Bounded generator for `f32`.
pub type FloatJuggler = FloatingJuggler<f32>;
/// Bounded generator for `f64`.
pub type DoubleJuggler = FloatingJuggler<f64>;

impl<T: FloatKind> FloatingJuggler<T> {
	/// Any finite value in `[-MAX, MAX)`, equally likely to be negative or positive.
	pub fn random() -> T {
		random::float_in(T::min_value(), T::max_value())
	}

	/// A value in `(0, MAX)`. Zero is excluded.
	pub fn positive() -> T {
		random::float_in(T::SMALLEST_POSITIVE, T::max_value())
	}

	/// A value in `[-MAX, 0)`.
	pub fn negative() -> T {
		random::float_in(T::min_value(), T::zero())
	}

	/// A value in `[-MAX, max)`. `smaller_than(0.0)` is `negative()`.
	///
	/// A NaN bound constrains nothing and yields `random()`.
	pub fn smaller_than(max: T) -> T {
		if max.is_nan() {
			return Self::random();
		}
		if max.is_zero() {
			return Self::negative();
		}
		Self::clipped(T::min_value(), max)
	}

	/// A value in `[min, MAX)`. `greater_than(0.0)` is `positive()`.
	///
	/// A NaN bound constrains nothing and yields `random()`.
	pub fn greater_than(min: T) -> T {
		if min.is_nan() {
			return Self::random();
		}
		if min.is_zero() {
			return Self::positive();
		}
		Self::clipped(min, T::max_value())
	}

	/// A value in `[0, max)`.
	///
	/// # Errors
	/// `InvalidBound` if `max` is not strictly positive.
	pub fn positive_smaller_than(max: T) -> Result<T> {
		if !(max > T::zero()) {
			return Err(JumbleError::invalid_bound(max, POSITIVE));
		}
		Ok(Self::clipped(T::zero(), max))
	}

	/// A value in `[min, MAX)`.
	///
	/// # Errors
	/// `InvalidBound` if `min` is negative or NaN.
	pub fn positive_greater_than(min: T) -> Result<T> {
		if !(min >= T::zero()) {
			return Err(JumbleError::invalid_bound(min, NON_NEGATIVE));
		}
		Ok(Self::greater_than(min))
	}

	/// A value in `[-MAX, max)`.
	///
	/// # Errors
	/// `InvalidBound` if `max` is not strictly negative.
	pub fn negative_smaller_than(max: T) -> Result<T> {
		if !(max < T::zero()) {
			return Err(JumbleError::invalid_bound(max, NEGATIVE));
		}
		Ok(Self::smaller_than(max))
	}

	/// A value in `[min, 0)`.
	///
	/// # Errors
	/// `InvalidBound` if `min` is not strictly negative.
	pub fn negative_greater_than(min: T) -> Result<T> {
		if !(min < T::zero()) {
			return Err(JumbleError::invalid_bound(min, NEGATIVE));
		}
		Ok(Self::clipped(min, T::zero()))
	}

	/// A value in `[min, max)`, or `min` itself when both bounds are equal.
	///
	/// # Errors
	/// `InvalidRange` if `min > max` or either bound is NaN.
	pub fn between(min: T, max: T) -> Result<T> {
		if !(min <= max) {
			return Err(JumbleError::invalid_range(min, max));
		}
		if min == max {
			return Ok(min);
		}
		Ok(Self::clipped(min, max))
	}

	/// A positive integral value written with exactly `length` decimal digits.
	///
	/// The value has no fractional part, so its `Display` rendering is the
	/// digits alone. Lengths are limited to what the kind stores exactly:
	/// 7 digits for `f32`, 15 for `f64`.
	///
	/// # Errors
	/// `InvalidArgument` if `length` is zero or too wide for the kind.
	pub fn positive_with_length(length: u32) -> Result<T> {
		let bounds = random::decimal_bounds(length)
			.and_then(|(low, high)| Some((i64::try_from(low).ok()?, i64::try_from(high).ok()?)))
			.filter(|(_, high)| *high <= T::MAX_EXACT_INTEGER);

		let value = bounds.and_then(|(low, high)| <T as NumCast>::from(random::integer_in_inclusive(low, high)));
		value.ok_or_else(|| {
			JumbleError::invalid_argument(format!(
				"The length given is {length}, but it must be between 1 and the number of exact digits of the kind."
			))
		})
	}

	/// Draws over `[low, high)` after clipping both bounds to the finite range.
	///
	/// An interval left empty by clipping collapses to its lower bound.
	fn clipped(low: T, high: T) -> T {
		let low = low.max(T::min_value()).min(T::max_value());
		let high = high.min(T::max_value()).max(T::min_value());
		if low >= high {
			return low;
		}
		random::float_in(low, high)
	}
}
