use {
	either::Either,
	std::{
		fs::{self, File},
		io::{self, BufRead, BufReader},
		path::{Path, PathBuf},
	},
};

/// Checks that `path` points to an existing regular file.
#[tracing::instrument(level = "debug", ret)]
pub(crate) fn check_path(path: &Path) -> Either<String, PathBuf>
{
	match fs::metadata(path) {
		Ok(metadata) if metadata.is_file() => Either::right(path.to_owned()),
		Ok(_) => Either::left(format!("path {} doesn't point to a readable file", path.display())),
		Err(error) if error.kind() == io::ErrorKind::NotFound => {
			Either::left(format!("file with path {} doesn't exist", path.display()))
		},
		Err(error) => Either::left(format!("cannot access {}: {error}", path.display())),
	}
}

/// Reads the first line of the file at `path`, without its line terminator.
#[tracing::instrument(level = "debug", ret)]
pub(crate) fn read_first_line(path: &Path) -> Either<String, String>
{
	let file = match File::open(path) {
		Ok(file) => file,
		Err(error) => return Either::left(format!("cannot read {}: {error}", path.display())),
	};

	let mut line = String::new();

	match BufReader::new(file).read_line(&mut line) {
		Ok(0) => Either::left(String::from("file is empty")),
		Ok(_) => Either::right(line.trim_end_matches(['\r', '\n']).to_owned()),
		Err(error) => Either::left(format!("cannot read {}: {error}", path.display())),
	}
}
