use std::{fmt, str::FromStr};

/// The two sides of an [`Either`].
///
/// [`Either`]: crate::Either
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side
{
	/// [`Either::Left`](crate::Either::Left)
	Left,

	/// [`Either::Right`](crate::Either::Right)
	Right,
}

/// Error type for conversions from strings to [`Side`]
#[derive(Debug, Display, Error)]
#[display("invalid side {_0:?}; expected one of `L`, `left`, `R`, `right`")]
pub struct InvalidSide(#[error(ignore)] String);

impl Side
{
	/// Returns the other side.
	pub const fn opposite(self) -> Self
	{
		match self {
			Self::Left => Self::Right,
			Self::Right => Self::Left,
		}
	}

	/// Returns the single-letter tag used in serialized values.
	pub const fn tag(self) -> &'static str
	{
		match self {
			Self::Left => "L",
			Self::Right => "R",
		}
	}
}

/// Formats as `left` / `right`, or as the short tag (`L` / `R`) with `{:#}`.
impl fmt::Display for Side
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		if fmt.alternate() {
			return fmt.write_str(self.tag());
		}

		fmt.write_str(match self {
			Self::Left => "left",
			Self::Right => "right",
		})
	}
}

impl FromStr for Side
{
	type Err = InvalidSide;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		match value {
			"L" | "left" | "Left" => Ok(Self::Left),
			"R" | "right" | "Right" => Ok(Self::Right),
			_ => Err(InvalidSide(value.to_owned())),
		}
	}
}
