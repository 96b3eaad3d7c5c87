//! Iterator adapters over sequences of [`Either`].

use {crate::Either, std::iter::Filter};

/// Extension methods for iterators over [`Either`] values.
///
/// This trait is implemented for every `Iterator<Item = Either<A, B>>`. To use it with borrowed
/// values, map them through [`Either::as_ref()`] first:
///
/// ```
/// use either::{Either, EitherIterExt};
///
/// let values = vec![Either::<&str, u32>::left("a"), Either::right(1)];
///
/// assert_eq!(values.iter().map(Either::as_ref).rights().collect::<Vec<_>>(), [&1]);
/// assert_eq!(values.len(), 2);
/// ```
pub trait EitherIterExt<A, B>: Iterator<Item = Either<A, B>> + Sized
{
	/// Returns an iterator over the [`Left`] values, in order.
	///
	/// [`Left`]: Either::Left
	fn lefts(self) -> Lefts<Self>
	{
		Lefts { filtered: self.filter(Either::is_left as fn(&Either<A, B>) -> bool) }
	}

	/// Returns an iterator over the [`Right`] values, in order.
	///
	/// [`Right`]: Either::Right
	fn rights(self) -> Rights<Self>
	{
		Rights { filtered: self.filter(Either::is_right as fn(&Either<A, B>) -> bool) }
	}

	/// Splits the values into their [`Left`] and [`Right`] halves, keeping the order within each.
	///
	/// [`Left`]: Either::Left
	/// [`Right`]: Either::Right
	fn partition_eithers(self) -> (Vec<A>, Vec<B>)
	{
		let (lower_bound, _) = self.size_hint();
		let mut lefts = Vec::with_capacity(lower_bound);
		let mut rights = Vec::with_capacity(lower_bound);

		for value in self {
			match value {
				Either::Left(left) => lefts.push(left),
				Either::Right(right) => rights.push(right),
			}
		}

		(lefts, rights)
	}
}

impl<A, B, I> EitherIterExt<A, B> for I where I: Iterator<Item = Either<A, B>> {}

/// Iterator returned by [`EitherIterExt::lefts()`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Lefts<I: Iterator>
{
	filtered: Filter<I, fn(&I::Item) -> bool>,
}

/// Iterator returned by [`EitherIterExt::rights()`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Rights<I: Iterator>
{
	filtered: Filter<I, fn(&I::Item) -> bool>,
}

impl<A, B, I> Iterator for Lefts<I>
where
	I: Iterator<Item = Either<A, B>>,
{
	type Item = A;

	fn next(&mut self) -> Option<Self::Item>
	{
		self.filtered.next().map(unwrap_left)
	}

	fn size_hint(&self) -> (usize, Option<usize>)
	{
		self.filtered.size_hint()
	}
}

impl<A, B, I> DoubleEndedIterator for Lefts<I>
where
	I: DoubleEndedIterator<Item = Either<A, B>>,
{
	fn next_back(&mut self) -> Option<Self::Item>
	{
		self.filtered.next_back().map(unwrap_left)
	}
}

impl<A, B, I> Iterator for Rights<I>
where
	I: Iterator<Item = Either<A, B>>,
{
	type Item = B;

	fn next(&mut self) -> Option<Self::Item>
	{
		self.filtered.next().map(unwrap_right)
	}

	fn size_hint(&self) -> (usize, Option<usize>)
	{
		self.filtered.size_hint()
	}
}

impl<A, B, I> DoubleEndedIterator for Rights<I>
where
	I: DoubleEndedIterator<Item = Either<A, B>>,
{
	fn next_back(&mut self) -> Option<Self::Item>
	{
		self.filtered.next_back().map(unwrap_right)
	}
}

/// Unwraps a value that already passed the `is_left` filter.
///
/// Seeing a `Right` here means the filter and this function disagree, which is a bug in this
/// module rather than something callers can recover from.
fn unwrap_left<A, B>(value: Either<A, B>) -> A
{
	value
		.into_left()
		.unwrap_or_else(|| panic!("got a right value after filtering for left values"))
}

/// Unwraps a value that already passed the `is_right` filter.
fn unwrap_right<A, B>(value: Either<A, B>) -> B
{
	value
		.into_right()
		.unwrap_or_else(|| panic!("got a left value after filtering for right values"))
}
