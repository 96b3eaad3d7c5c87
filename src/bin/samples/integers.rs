use either::Either;

/// Number of digits in [`i32::MAX`].
const MAX_LEN: usize = 10;

/// Parses a strictly positive integer that fits into an [`i32`].
#[tracing::instrument(level = "debug", ret)]
pub(crate) fn parse_positive_integer(input: &str) -> Either<String, i32>
{
	if input.is_empty() {
		return Either::left(String::from("cannot parse an empty string"));
	}

	if input.len() > MAX_LEN {
		return Either::left(format!("the string is too long: {input:?}"));
	}

	if !is_positive_integer_literal(input) {
		return Either::left(format!(
			"only positive integers up to {} are allowed: {input:?}",
			i32::MAX,
		));
	}

	let number = input
		.parse::<u64>()
		.unwrap_or_else(|err| panic!("at most {MAX_LEN} digits should always fit a u64: {err}"));

	i32::try_from(number)
		.map_err(|_| format!("the number is too big: {input}"))
		.into()
}

/// Formats `n * n = n²` without overflowing.
pub(crate) fn square(number: i32) -> String
{
	let wide = i64::from(number);

	format!("{number} * {number} = {}", wide * wide)
}

/// `[1-9][0-9]*`
fn is_positive_integer_literal(input: &str) -> bool
{
	let mut bytes = input.bytes();

	bytes.next().is_some_and(|first| matches!(first, b'1'..=b'9'))
		&& bytes.all(|byte| byte.is_ascii_digit())
}
