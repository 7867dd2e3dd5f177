use std::marker::PhantomData;

use num_traits::NumCast;

use crate::error::{JumbleError, Result};
use crate::random::{self, IntegerKind};

const POSITIVE: &str = "positive";
const NEGATIVE: &str = "negative";

/// Bounded generator for a signed integer kind.
///
/// Upper bounds are exclusive and lower bounds inclusive. Use the per-kind
/// aliases rather than naming the generic type:
///
/// ```
/// use jumble_core::juggler::{IntJuggler, ShortJuggler};
///
/// let dice = IntJuggler::between(1, 7)?;
/// assert!((1..7).contains(&dice));
///
/// let depth = ShortJuggler::negative_greater_than(-100)?;
/// assert!((-100..0).contains(&depth));
/// # Ok::<(), jumble_core::JumbleError>(())
/// ```
#[derive(Debug)]
pub struct IntegerJuggler<T>(PhantomData<T>);

/// Bounded generator for `i8`.
pub type ByteJuggler = IntegerJuggler<i8>;
/// Bounded generator for `i16`.
pub type ShortJuggler = IntegerJuggler<i16>;
/// Bounded generator for `i32`.
pub type IntJuggler = IntegerJuggler<i32>;
/// Bounded generator for `i64`.
pub type LongJuggler = IntegerJuggler<i64>;

impl<T: IntegerKind> IntegerJuggler<T> {
	/// Any value of the kind, `MIN` and `MAX` included.
	pub fn random() -> T {
		random::integer_in_inclusive(T::min_value(), T::max_value())
	}

	/// A value in `[0, MAX)`.
	pub fn positive() -> T {
		random::integer_in(T::zero(), T::max_value())
	}

	/// A value in `[MIN, 0)`.
	pub fn negative() -> T {
		random::integer_in(T::min_value(), T::zero())
	}

	/// A value in `[MIN, max)`.
	///
	/// Nothing lies below `MIN`, so `smaller_than(MIN)` saturates to `MIN`.
	pub fn smaller_than(max: T) -> T {
		if max == T::min_value() {
			return max;
		}
		random::integer_in(T::min_value(), max)
	}

	/// A value in `[min, MAX)`.
	///
	/// `greater_than(MAX)` saturates to `MAX`.
	pub fn greater_than(min: T) -> T {
		if min == T::max_value() {
			return min;
		}
		random::integer_in(min, T::max_value())
	}

	/// A value in `[0, max)`.
	///
	/// # Errors
	/// `InvalidBound` if `max <= 0`, since the range would be empty.
	pub fn positive_smaller_than(max: T) -> Result<T> {
		if max <= T::zero() {
			return Err(JumbleError::invalid_bound(max, POSITIVE));
		}
		Ok(random::integer_in(T::zero(), max))
	}

	/// A value in `[min, MAX)`.
	///
	/// # Errors
	/// `InvalidBound` if `min < 0`.
	pub fn positive_greater_than(min: T) -> Result<T> {
		if min < T::zero() {
			return Err(JumbleError::invalid_bound(min, POSITIVE));
		}
		Ok(Self::greater_than(min))
	}

	/// A value in `[MIN, max)` where `max` is strictly negative.
	///
	/// # Errors
	/// `InvalidBound` if `max >= 0`.
	pub fn negative_smaller_than(max: T) -> Result<T> {
		if max >= T::zero() {
			return Err(JumbleError::invalid_bound(max, NEGATIVE));
		}
		Ok(Self::smaller_than(max))
	}

	/// A value in `[min, 0)`.
	///
	/// # Errors
	/// `InvalidBound` if `min >= 0`, since no negative value is `>= min`.
	pub fn negative_greater_than(min: T) -> Result<T> {
		if min >= T::zero() {
			return Err(JumbleError::invalid_bound(min, NEGATIVE));
		}
		Ok(random::integer_in(min, T::zero()))
	}

	/// A value in `[min, max)`, or `min` itself when both bounds are equal.
	///
	/// Ranges straddling zero are drawn over the signed interval as a whole,
	/// so `between(-3, 100)` is as likely to return `-2` as `57`.
	///
	/// # Errors
	/// `InvalidRange` if `min > max`.
	pub fn between(min: T, max: T) -> Result<T> {
		if min > max {
			return Err(JumbleError::invalid_range(min, max));
		}
		if min == max {
			return Ok(min);
		}
		Ok(random::integer_in(min, max))
	}

	/// A positive value written with exactly `length` decimal digits.
	///
	/// When the kind's maximum itself has `length` digits the draw stops at
	/// that maximum (`ByteJuggler::positive_with_length(3)` is in `[100, 127]`).
	///
	/// # Errors
	/// `InvalidArgument` if `length` is zero or more digits than the kind holds.
	pub fn positive_with_length(length: u32) -> Result<T> {
		let bounds = random::decimal_bounds(length).and_then(|(low, high)| {
			let high = high.min(T::max_value().to_i128()?);
			Some((<T as NumCast>::from(low)?, <T as NumCast>::from(high)?))
		});

		match bounds {
			Some((low, high)) => Ok(random::integer_in_inclusive(low, high)),
			None => Err(JumbleError::invalid_argument(format!(
				"The length given is {length}, but it must be between 1 and the number of digits of {}.",
				T::max_value()
			))),
		}
	}
}
