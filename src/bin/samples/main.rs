//! Small programs demonstrating how `Either` is used in practice.
//!
//! Logging is controlled through `RUST_LOG`; results are written to stdout and failures to
//! stderr.

mod cli;
mod files;
mod integers;
mod urls;

use {
	color_eyre::{
		Section,
		eyre::{self, WrapErr},
	},
	either::{Either, EitherIterExt},
	serde::Serialize,
	std::io::{self, Write},
	tracing::{debug, info, warn},
	tracing_subscriber::EnvFilter,
};

fn main() -> eyre::Result<()>
{
	color_eyre::install()?;

	let env_file = match dotenvy::dotenv() {
		Ok(path) => Some(path),
		Err(error) if error.not_found() => None,
		Err(error) => {
			return Err(error)
				.wrap_err("failed to load `.env` file")
				.suggestion("fix or remove the `.env` file in the current directory");
		},
	};

	tracing_subscriber::fmt()
		.compact()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(io::stderr)
		.init();

	if let Some(path) = env_file {
		debug!(path = %path.display(), "loaded `.env` file");
	}

	let cli::Args { max_inputs, command } = cli::args();
	let mut stdout = io::stdout().lock();
	let mut stderr = io::stderr().lock();

	info!(max_inputs, ?command, "running sample");

	match command {
		cli::Command::ParseInt { inputs } => {
			for input in inputs.iter().take(max_inputs) {
				let line = integers::parse_positive_integer(input)
					.map(integers::square)
					.into_inner();

				writeln!(stdout, "{line}")?;
			}
		},
		cli::Command::ParseUrl { inputs } => {
			for input in inputs.iter().take(max_inputs) {
				urls::parse_url(input).fold(
					|error| writeln!(stderr, "{error}"),
					|url| writeln!(stdout, "{url}"),
				)?;
			}
		},
		cli::Command::FirstLine { paths } => {
			let mut errors = Vec::new();
			let mut lines = Vec::new();

			for path in paths.iter().take(max_inputs) {
				files::check_path(path)
					.and_then(|path| files::read_first_line(&path))
					.peek(
						|error| warn!(path = %path.display(), %error, "no first line"),
						|line| debug!(path = %path.display(), len = line.len(), "read first line"),
					)
					.accept(|error| errors.push(error), |line| lines.push(line));
			}

			for line in &lines {
				writeln!(stdout, "{line}")?;
			}

			for error in &errors {
				writeln!(stderr, "{error}")?;
			}
		},
		cli::Command::Partition { format, inputs } => {
			let parsed = inputs
				.iter()
				.take(max_inputs)
				.map(|input| integers::parse_positive_integer(input))
				.collect::<Vec<_>>();

			partition(&mut stdout, format, parsed).wrap_err("failed to write results")?;
		},
	}

	Ok(())
}

/// Prints the failures and successes among `parsed` in the requested format.
fn partition(
	mut out: impl Write,
	format: cli::Format,
	parsed: Vec<Either<String, i32>>,
) -> eyre::Result<()>
{
	#[derive(Serialize)]
	struct Partitioned
	{
		errors: Vec<String>,
		values: Vec<i32>,
	}

	match format {
		cli::Format::Text => {
			for error in parsed.iter().map(Either::as_ref).lefts() {
				writeln!(out, "error: {error}")?;
			}

			for value in parsed.iter().map(Either::as_ref).rights() {
				writeln!(out, "value: {value}")?;
			}
		},
		cli::Format::Json => {
			let (errors, values) = parsed.into_iter().partition_eithers();

			serde_json::to_writer_pretty(&mut out, &Partitioned { errors, values })?;
			writeln!(out)?;
		},
		cli::Format::Tagged => {
			serde_json::to_writer_pretty(&mut out, &parsed)?;
			writeln!(out)?;
		},
	}

	Ok(())
}
