use std::{ffi::OsString, path::PathBuf};

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
	/// The string to hash.
	pub input: Option<OsString>,
	#[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
	pub format: OutputFormat,
	/// Also write plain and json logs into this directory.
	#[arg(short, long)]
	pub log_dir: Option<PathBuf>,
}

impl Args {
	/// The raw bytes of the input argument, if one was given.
	pub fn input_bytes(&self) -> Option<Vec<u8>> {
		self.input.as_deref().map(os_str_bytes)
	}
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	#[default]
	Plain,
	Ron,
}

#[cfg(unix)]
fn os_str_bytes(s: &std::ffi::OsStr) -> Vec<u8> {
	use std::os::unix::ffi::OsStrExt as _;

	s.as_bytes().to_vec()
}

#[cfg(not(unix))]
fn os_str_bytes(s: &std::ffi::OsStr) -> Vec<u8> {
	s.to_string_lossy().into_owned().into_bytes()
}
