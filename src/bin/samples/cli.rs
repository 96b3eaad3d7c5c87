use std::path::PathBuf;

pub(crate) fn args() -> Args
{
	<Args as clap::Parser>::parse()
}

/// Small programs built around `Either`.
#[derive(Debug, clap::Parser)]
pub(crate) struct Args
{
	/// Maximum number of inputs to process; extra inputs are ignored
	#[arg(long, env = "EITHER_SAMPLES_MAX_INPUTS", default_value_t = 64)]
	pub(crate) max_inputs: usize,

	#[command(subcommand)]
	pub(crate) command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Command
{
	/// Parse positive 32-bit integers and print their squares
	ParseInt
	{
		#[arg(required = true, allow_hyphen_values = true)]
		inputs: Vec<String>,
	},

	/// Parse absolute URLs
	ParseUrl
	{
		#[arg(required = true)]
		inputs: Vec<String>,
	},

	/// Print the first line of each file
	FirstLine
	{
		#[arg(required = true)]
		paths: Vec<PathBuf>,
	},

	/// Parse integers and print the failures and the successes separately
	Partition
	{
		/// How to print the results
		#[arg(value_enum, long, default_value_t = Format::Text)]
		format: Format,

		#[arg(required = true, allow_hyphen_values = true)]
		inputs: Vec<String>,
	},
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub(crate) enum Format
{
	/// One line per value
	Text,

	/// A JSON object with an `errors` and a `values` array
	Json,

	/// The parsed values as a JSON array, in their tagged representation
	Tagged,
}
