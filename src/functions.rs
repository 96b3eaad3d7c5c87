//! Free-standing versions of the core operations.
//!
//! These mirror the associated functions on [`Either`] and exist mostly for use in iterator
//! chains, where a plain function is often more convenient than a method.

use crate::{Either, EitherIterExt};

/// Creates a new [`Either::Left`].
pub const fn left<A, B>(value: A) -> Either<A, B>
{
	Either::Left(value)
}

/// Creates a new [`Either::Right`].
pub const fn right<A, B>(value: B) -> Either<A, B>
{
	Either::Right(value)
}

/// Applies `on_left` or `on_right` to `value`, depending on its variant.
///
/// This is the same as [`Either::fold()`]; see [`matcher()`] for a version that can be applied
/// to many values.
pub fn either<A, B, C, F, G>(on_left: F, on_right: G, value: Either<A, B>) -> C
where
	F: FnOnce(A) -> C,
	G: FnOnce(B) -> C,
{
	value.fold(on_left, on_right)
}

/// Turns two functions into a single function over [`Either`].
///
/// The returned closure owns both functions and can be called any number of times.
///
/// # Example
///
/// ```
/// use either::{Either, matcher};
///
/// let describe = matcher(
///     |left: &str| format!("foo{left}"),
///     |right: u32| format!("Right value {right}"),
/// );
/// let values = [Either::left("bar"), Either::right(42)];
///
/// assert_eq!(values.map(describe), ["foobar", "Right value 42"]);
/// ```
pub fn matcher<A, B, C, F, G>(on_left: F, on_right: G) -> impl Fn(Either<A, B>) -> C
where
	F: Fn(A) -> C,
	G: Fn(B) -> C,
{
	move |value: Either<A, B>| value.fold(&on_left, &on_right)
}

/// Collects the [`Left`] values of `values`, in order.
///
/// [`Left`]: Either::Left
pub fn lefts<A, B, I>(values: I) -> Vec<A>
where
	I: IntoIterator<Item = Either<A, B>>,
{
	values.into_iter().lefts().collect()
}

/// Collects the [`Right`] values of `values`, in order.
///
/// [`Right`]: Either::Right
pub fn rights<A, B, I>(values: I) -> Vec<B>
where
	I: IntoIterator<Item = Either<A, B>>,
{
	values.into_iter().rights().collect()
}
