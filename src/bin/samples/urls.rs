use {either::Either, url::Url};

/// Schemes we know how to handle.
const KNOWN_SCHEMES: &[&str] = &["http", "https", "ftp", "file"];

/// Parses an absolute URL with one of the [known schemes](KNOWN_SCHEMES).
#[tracing::instrument(level = "debug", ret(Display))]
pub(crate) fn parse_url(input: &str) -> Either<String, Url>
{
	let url = match Url::parse(input) {
		Ok(url) => url,
		Err(url::ParseError::RelativeUrlWithoutBase) => {
			return Either::left(format!("cannot parse a relative URL: {input:?}"));
		},
		Err(error) => {
			return Either::left(format!("cannot parse {input:?}: {error}"));
		},
	};

	if !KNOWN_SCHEMES.contains(&url.scheme()) {
		return Either::left(format!("unknown protocol `{}` in {input:?}", url.scheme()));
	}

	Either::right(url)
}
