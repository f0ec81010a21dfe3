mod args;

use std::{fs, path::Path};

use clap::Parser as _;
use color_eyre::Result;
use djb2pack_hash::{PackedHash, compute, djb2, terminated};
use ron::ser::PrettyConfig;
use serde::Serialize;
use tracing::{debug, info, instrument};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
	EnvFilter,
	fmt::{self, format::FmtSpan},
	prelude::*,
};

use self::args::{Args, OutputFormat};

fn main() -> Result<()> {
	let args = Args::parse();

	install_tracing(args.log_dir.as_deref())?;
	color_eyre::install()?;

	let output = run(&args)?;

	println!("{output}");

	Ok(())
}

#[instrument(skip_all, fields(format = ?args.format))]
fn run(args: &Args) -> Result<String> {
	let input = args.input_bytes();

	let packed = compute(input.as_deref())?;

	info!(%packed, "hashed input");

	match args.format {
		OutputFormat::Plain => Ok(format!("djb2_hash: {packed}")),
		OutputFormat::Ron => {
			let input = input.unwrap_or_default();
			let report = Report::new(&input, packed);

			Ok(ron::ser::to_string_pretty(&report, PrettyConfig::new())?)
		}
	}
}

#[derive(Debug, Clone, Copy, Serialize)]
struct Report {
	input_length: usize,
	hash: u64,
	packed: PackedHash,
}

impl Report {
	fn new(input: &[u8], packed: PackedHash) -> Self {
		let hashed = terminated(input);

		debug!(
			"input has {} bytes, {} before the terminator",
			input.len(),
			hashed.len()
		);

		Self {
			input_length: hashed.len(),
			hash: djb2(hashed),
			packed,
		}
	}
}

fn install_tracing(log_dir: Option<&Path>) -> Result<()> {
	let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let fmt_layer = fmt::layer()
		.with_target(false)
		.with_writer(std::io::stderr)
		.with_filter(filter_layer);

	let (file_layer, json_file_layer) = match log_dir {
		Some(log_dir) => {
			fs::create_dir_all(log_dir)?;

			let log_file = fs::OpenOptions::new()
				.create(true)
				.write(true)
				.truncate(true)
				.open(log_dir.join("output.log"))?;

			let json_log_file = fs::OpenOptions::new()
				.create(true)
				.truncate(true)
				.write(true)
				.open(log_dir.join("output.json"))?;

			let file_layer = fmt::layer().with_ansi(false).with_writer(log_file);

			let json_file_layer = fmt::layer()
				.with_ansi(false)
				.json()
				.flatten_event(true)
				.with_span_events(FmtSpan::FULL)
				.with_writer(json_log_file);

			(Some(file_layer), Some(json_file_layer))
		}
		None => (None, None),
	};

	tracing_subscriber::registry()
		.with(json_file_layer)
		.with(file_layer)
		.with(fmt_layer)
		.with(ErrorLayer::default())
		.init();

	Ok(())
}
