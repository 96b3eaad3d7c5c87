#![doc = include_str!("../README.md")]

#[macro_use(Display, Error)]
extern crate derive_more as _;

pub use self::{
	combinators::{apply, lift2, pure},
	functions::{either, left, lefts, matcher, right, rights},
	iter::{EitherIterExt, Lefts, Rights},
	side::{InvalidSide, Side},
};
use std::fmt;

mod combinators;
mod functions;
mod iter;
mod side;

#[cfg(feature = "serde")]
pub mod untagged;

#[cfg(feature = "rand")]
mod rand_impls;

/// A value of one of two possible types.
///
/// By convention, [`Left`] holds an error or failure description and [`Right`] holds a success
/// value. The combinators in this crate (e.g. [`map()`] and [`and_then()`]) are biased towards
/// [`Right`] for that reason.
///
/// A value never changes its variant after construction; every operation either consumes it or
/// hands it back unchanged.
///
/// # Serialization
///
/// With the `serde` feature enabled, values are (de)serialized as an object with a tag and a
/// payload:
///
/// ```json
/// { "T": "L", "O": "something went wrong" }
/// { "T": "R", "O": 42 }
/// ```
///
/// See [`untagged`](crate#features) for a representation without the tag.
///
/// [`Left`]: Either::Left
/// [`Right`]: Either::Right
/// [`map()`]: Either::map
/// [`and_then()`]: Either::and_then
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "T", content = "O"))]
pub enum Either<A, B>
{
	/// The first alternative.
	#[cfg_attr(feature = "serde", serde(rename = "L"))]
	Left(A),

	/// The second alternative.
	#[cfg_attr(feature = "serde", serde(rename = "R"))]
	Right(B),
}

impl<A, B> Either<A, B>
{
	/// Creates a new [`Either::Left`].
	pub const fn left(value: A) -> Self
	{
		Self::Left(value)
	}

	/// Creates a new [`Either::Right`].
	pub const fn right(value: B) -> Self
	{
		Self::Right(value)
	}

	/// Returns whether this is a [`Left`](Either::Left).
	pub const fn is_left(&self) -> bool
	{
		matches!(self, Self::Left(_))
	}

	/// Returns whether this is a [`Right`](Either::Right).
	pub const fn is_right(&self) -> bool
	{
		matches!(self, Self::Right(_))
	}

	/// Returns which variant this is.
	pub const fn side(&self) -> Side
	{
		match self {
			Self::Left(_) => Side::Left,
			Self::Right(_) => Side::Right,
		}
	}

	/// Reduces this value to a `C` by applying the function that corresponds to the variant.
	///
	/// Exactly one of the two functions is called, exactly once.
	///
	/// # Example
	///
	/// ```
	/// use either::Either;
	///
	/// let describe = |value: Either<&str, u32>| {
	///     value.fold(|left| format!("foo{left}"), |right| format!("Right value {right}"))
	/// };
	///
	/// assert_eq!(describe(Either::left("bar")), "foobar");
	/// assert_eq!(describe(Either::right(42)), "Right value 42");
	/// ```
	pub fn fold<C, F, G>(self, on_left: F, on_right: G) -> C
	where
		F: FnOnce(A) -> C,
		G: FnOnce(B) -> C,
	{
		match self {
			Self::Left(left) => on_left(left),
			Self::Right(right) => on_right(right),
		}
	}

	/// Calls `on_left` or `on_right` with the value, depending on the variant.
	///
	/// Use [`as_ref()`] first if you want to keep the value around.
	///
	/// [`as_ref()`]: Either::as_ref
	pub fn accept<F, G>(self, on_left: F, on_right: G)
	where
		F: FnOnce(A),
		G: FnOnce(B),
	{
		match self {
			Self::Left(left) => on_left(left),
			Self::Right(right) => on_right(right),
		}
	}

	/// Calls `on_left` or `on_right` with a reference to the value and returns `self`
	/// unchanged.
	///
	/// This is useful for logging in the middle of a chain:
	///
	/// ```
	/// use either::Either;
	///
	/// let value = Either::<&str, u32>::right(42)
	///     .peek(|left| eprintln!("got left {left}"), |right| eprintln!("got right {right}"))
	///     .map(|right| right + 1);
	///
	/// assert_eq!(value, Either::right(43));
	/// ```
	pub fn peek<F, G>(self, on_left: F, on_right: G) -> Self
	where
		F: FnOnce(&A),
		G: FnOnce(&B),
	{
		match &self {
			Self::Left(left) => on_left(left),
			Self::Right(right) => on_right(right),
		}

		self
	}

	/// Converts from `&Either<A, B>` to `Either<&A, &B>`.
	pub const fn as_ref(&self) -> Either<&A, &B>
	{
		match self {
			Self::Left(left) => Either::Left(left),
			Self::Right(right) => Either::Right(right),
		}
	}

	/// Converts from `&mut Either<A, B>` to `Either<&mut A, &mut B>`.
	pub const fn as_mut(&mut self) -> Either<&mut A, &mut B>
	{
		match self {
			Self::Left(left) => Either::Left(left),
			Self::Right(right) => Either::Right(right),
		}
	}

	/// Returns the [`Left`](Either::Left) value, if any.
	pub fn into_left(self) -> Option<A>
	{
		match self {
			Self::Left(left) => Some(left),
			Self::Right(_) => None,
		}
	}

	/// Returns the [`Right`](Either::Right) value, if any.
	pub fn into_right(self) -> Option<B>
	{
		match self {
			Self::Left(_) => None,
			Self::Right(right) => Some(right),
		}
	}

	/// Swaps the two sides.
	pub fn flip(self) -> Either<B, A>
	{
		match self {
			Self::Left(left) => Either::Right(left),
			Self::Right(right) => Either::Left(right),
		}
	}
}

impl<T> Either<T, T>
{
	/// Returns the value, regardless of which side it is on.
	pub fn into_inner(self) -> T
	{
		match self {
			Self::Left(value) | Self::Right(value) => value,
		}
	}
}

impl<A, B> From<Result<B, A>> for Either<A, B>
{
	fn from(result: Result<B, A>) -> Self
	{
		match result {
			Ok(value) => Self::Right(value),
			Err(error) => Self::Left(error),
		}
	}
}

impl<A, B> From<Either<A, B>> for Result<B, A>
{
	fn from(value: Either<A, B>) -> Self
	{
		match value {
			Either::Left(error) => Err(error),
			Either::Right(value) => Ok(value),
		}
	}
}

impl<A, B> fmt::Display for Either<A, B>
where
	A: fmt::Display,
	B: fmt::Display,
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match self {
			Self::Left(left) => write!(fmt, "Left({left})"),
			Self::Right(right) => write!(fmt, "Right({right})"),
		}
	}
}

#[cfg(test)]
mod tests
{
	use {
		super::*,
		std::{
			cell::Cell,
			collections::hash_map::DefaultHasher,
			hash::{Hash, Hasher},
		},
	};

	fn foo(text: &str) -> String
	{
		format!("foo{text}")
	}

	fn right_value(number: u32) -> String
	{
		format!("Right value {number}")
	}

	fn hash_of<T: Hash>(value: &T) -> u64
	{
		let mut hasher = DefaultHasher::new();
		value.hash(&mut hasher);
		hasher.finish()
	}

	#[test]
	fn left_can_be_constructed()
	{
		let value = Either::<&str, u32>::left("Hello, world!");

		assert!(value.is_left());
		assert!(!value.is_right());
		assert_eq!(value.side(), Side::Left);
	}

	#[test]
	fn right_can_be_constructed()
	{
		let value = Either::<&str, u32>::right(42);

		assert!(value.is_right());
		assert!(!value.is_left());
		assert_eq!(value.side(), Side::Right);
	}

	#[test]
	fn left_can_be_matched_by_fold()
	{
		let value = Either::<&str, u32>::left("bar");

		assert_eq!(value.fold(foo, right_value), "foobar");
	}

	#[test]
	fn right_can_be_matched_by_fold()
	{
		let value = Either::<&str, u32>::right(42);

		assert_eq!(value.fold(foo, right_value), "Right value 42");
	}

	#[test]
	fn fold_calls_exactly_one_function()
	{
		let left_calls = Cell::new(0_u32);
		let right_calls = Cell::new(0_u32);
		let on_left = |_: &str| left_calls.set(left_calls.get() + 1);
		let on_right = |_: u32| right_calls.set(right_calls.get() + 1);

		Either::left("bar").fold(on_left, on_right);
		assert_eq!((left_calls.get(), right_calls.get()), (1, 0));

		Either::right(42).fold(on_left, on_right);
		assert_eq!((left_calls.get(), right_calls.get()), (1, 1));
	}

	#[test]
	fn fold_accepts_functions_over_wider_types()
	{
		fn shout(text: impl AsRef<str>) -> String
		{
			format!("foo{}", text.as_ref())
		}

		fn describe(number: impl fmt::Display) -> String
		{
			format!("{number}bar")
		}

		let owned = Either::<String, u8>::left(String::from("bar"));
		let borrowed = Either::<&str, u64>::left("bar");

		assert_eq!(owned.fold(shout, describe), shout(String::from("bar")));
		assert_eq!(borrowed.fold(shout, describe), "foobar");
		assert_eq!(Either::<&str, u64>::right(42).fold(shout, describe), "42bar");
	}

	#[test]
	fn either_is_covariant_over_lifetimes()
	{
		fn first_char<'a>(value: Either<&'a str, &'a str>) -> Option<char>
		{
			value.into_inner().chars().next()
		}

		let local = String::from("local");
		let forever: Either<&'static str, &'static str> = Either::left("static");

		assert_eq!(first_char(forever), Some('s'));
		assert_eq!(first_char(Either::right(local.as_str())), Some('l'));
	}

	#[test]
	fn accept_on_left()
	{
		let mut left_count = 0_u32;

		Either::<&str, u32>::left("foo").accept(
			|left| {
				left_count += 1;
				assert_eq!(left, "foo");
			},
			|_| panic!("unexpected Right"),
		);

		assert_eq!(left_count, 1);
	}

	#[test]
	fn accept_on_right()
	{
		let mut right_count = 0_u32;

		Either::<&str, u32>::right(42).accept(
			|_| panic!("unexpected Left"),
			|right| {
				right_count += 1;
				assert_eq!(right, 42);
			},
		);

		assert_eq!(right_count, 1);
	}

	#[test]
	fn peek_on_left_returns_the_same_value()
	{
		let payload = Box::new(String::from("foo"));
		let address = &raw const *payload;
		let mut left_count = 0_u32;

		let value = Either::<Box<String>, u32>::left(payload).peek(
			|left| {
				left_count += 1;
				assert_eq!(left.as_str(), "foo");
			},
			|_| panic!("unexpected Right"),
		);

		assert_eq!(left_count, 1);
		assert!(matches!(
			value,
			Either::Left(ref left) if std::ptr::eq(&raw const **left, address),
		));
	}

	#[test]
	fn peek_on_right_returns_the_same_value()
	{
		let payload = Box::new(42_u32);
		let address = &raw const *payload;
		let mut right_count = 0_u32;

		let value = Either::<&str, Box<u32>>::right(payload).peek(
			|_| panic!("unexpected Left"),
			|right| {
				right_count += 1;
				assert_eq!(**right, 42);
			},
		);

		assert_eq!(right_count, 1);
		assert!(matches!(
			value,
			Either::Right(ref right) if std::ptr::eq(&raw const **right, address),
		));
	}

	#[test]
	fn as_mut_updates_in_place()
	{
		let mut value = Either::<String, u32>::right(41);

		if let Either::Right(right) = value.as_mut() {
			*right += 1;
		}

		assert_eq!(value, Either::right(42));
		assert_eq!(value.as_ref().into_right(), Some(&42));
	}

	#[test]
	fn into_left_and_into_right()
	{
		assert_eq!(Either::<&str, u32>::left("foo").into_left(), Some("foo"));
		assert_eq!(Either::<&str, u32>::left("foo").into_right(), None);
		assert_eq!(Either::<&str, u32>::right(42).into_left(), None);
		assert_eq!(Either::<&str, u32>::right(42).into_right(), Some(42));
	}

	#[test]
	fn flip_swaps_sides()
	{
		assert_eq!(Either::<&str, u32>::left("foo").flip(), Either::<u32, &str>::right("foo"));
		assert_eq!(Either::<&str, u32>::right(42).flip(), Either::<u32, &str>::left(42));
	}

	#[test]
	fn conversions_from_and_into_result()
	{
		let failed: Either<&str, u32> = Err("nope").into();
		let succeeded: Either<&str, u32> = Ok(42).into();

		assert_eq!(failed, Either::left("nope"));
		assert_eq!(succeeded, Either::right(42));
		assert_eq!(Result::from(failed), Err("nope"));
		assert_eq!(Result::from(succeeded), Ok(42));
	}

	#[test]
	fn equality_depends_on_side_and_value()
	{
		let left = Either::<u32, u32>::left(7);
		let right = Either::<u32, u32>::right(7);

		assert_eq!(left, Either::left(7));
		assert_ne!(left, right);
		assert_ne!(left, Either::left(8));
		assert_eq!(hash_of(&left), hash_of(&Either::<u32, u32>::left(7)));
		assert!(left < right, "every left sorts before every right");
	}

	#[test]
	fn display()
	{
		assert_eq!(Either::<&str, u32>::left("foo").to_string(), "Left(foo)");
		assert_eq!(Either::<&str, u32>::right(42).to_string(), "Right(42)");
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serializes_with_tag_and_payload() -> serde_json::Result<()>
	{
		let left = Either::<String, u32>::left(String::from("hello"));
		let right = Either::<String, u32>::right(42);

		assert_eq!(serde_json::to_string(&left)?, r#"{"T":"L","O":"hello"}"#);
		assert_eq!(serde_json::to_string(&right)?, r#"{"T":"R","O":42}"#);
		assert_eq!(serde_json::from_str::<Either<String, u32>>(r#"{"T":"L","O":"hello"}"#)?, left);
		assert_eq!(serde_json::from_str::<Either<String, u32>>(r#"{"T":"R","O":42}"#)?, right);

		Ok(())
	}

	#[cfg(feature = "serde")]
	#[test]
	fn deserializes_payload_before_tag() -> serde_json::Result<()>
	{
		let value = serde_json::from_str::<Either<String, u32>>(r#"{"O":42,"T":"R"}"#)?;

		assert_eq!(value, Either::right(42));

		Ok(())
	}

	#[cfg(feature = "serde")]
	#[test]
	fn rejects_unknown_tags()
	{
		assert!(serde_json::from_str::<Either<String, u32>>(r#"{"T":"X","O":42}"#).is_err());
		assert!(serde_json::from_str::<Either<String, u32>>(r#"{"T":"R"}"#).is_err());
		assert!(serde_json::from_str::<Either<String, u32>>("42").is_err());
	}
}
