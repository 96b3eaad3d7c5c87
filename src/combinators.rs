//! Right-biased combinators.
//!
//! [`Either::Right`] is treated as the "success" side: mapping and sequencing operate on it,
//! while a [`Either::Left`] is passed through untouched and short-circuits everything after it.

use crate::Either;

impl<A, B> Either<A, B>
{
	/// Applies `function` to the [`Right`](Either::Right) value.
	pub fn map<C, F>(self, function: F) -> Either<A, C>
	where
		F: FnOnce(B) -> C,
	{
		match self {
			Self::Left(left) => Either::Left(left),
			Self::Right(right) => Either::Right(function(right)),
		}
	}

	/// Applies `function` to the [`Left`](Either::Left) value.
	pub fn map_left<C, F>(self, function: F) -> Either<C, B>
	where
		F: FnOnce(A) -> C,
	{
		match self {
			Self::Left(left) => Either::Left(function(left)),
			Self::Right(right) => Either::Right(right),
		}
	}

	/// Chains a computation that may itself produce a [`Left`](Either::Left).
	///
	/// `function` is not called if `self` is already a `Left`.
	pub fn and_then<C, F>(self, function: F) -> Either<A, C>
	where
		F: FnOnce(B) -> Either<A, C>,
	{
		match self {
			Self::Left(left) => Either::Left(left),
			Self::Right(right) => function(right),
		}
	}
}

/// Wraps `value` as a successful ([`Right`](Either::Right)) result.
pub const fn pure<A, B>(value: B) -> Either<A, B>
{
	Either::Right(value)
}

/// Applies a wrapped function to a wrapped value.
///
/// If either argument is a [`Left`](Either::Left), the first one (in argument order) is
/// returned.
pub fn apply<A, B, C, F>(function: Either<A, F>, value: Either<A, B>) -> Either<A, C>
where
	F: FnOnce(B) -> C,
{
	function.and_then(|function| value.map(function))
}

/// Combines two successful values with `function`.
///
/// If either argument is a [`Left`](Either::Left), the first one (in argument order) is
/// returned.
///
/// # Example
///
/// ```
/// use either::{Either, lift2};
///
/// let sum = |lhs: u32, rhs: u32| lhs + rhs;
///
/// assert_eq!(lift2(sum, Either::<&str, _>::right(1), Either::right(2)), Either::right(3));
/// assert_eq!(lift2(sum, Either::left("first"), Either::left("second")), Either::left("first"));
/// ```
pub fn lift2<A, B, C, D, F>(function: F, first: Either<A, B>, second: Either<A, C>) -> Either<A, D>
where
	F: FnOnce(B, C) -> D,
{
	first.and_then(|first| second.map(|second| function(first, second)))
}
