use std::io::Read;
use std::path::{Path, PathBuf};

use bentree::bencode::{DecodeOptions, MAX_DEPTH_LIMIT, Result};

/// Where the encoded bytes come from.
#[derive(clap::Args)]
pub struct InputArgs {
	/// Encoded data given directly on the command line.
	#[arg(required_unless_present = "file")]
	pub data: Option<String>,
	/// Read encoded data from a file (`-` for stdin).
	#[arg(long, conflicts_with = "data")]
	pub file: Option<PathBuf>,
}

impl InputArgs {
	/// Load the input bytes, reading at most `limit + 1` bytes from files and stdin.
	pub fn read(&self, limit: usize) -> Result<Vec<u8>> {
		if let Some(data) = &self.data {
			return Ok(data.as_bytes().to_vec());
		}

		let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
		let mut out = Vec::new();
		match self.file.as_deref() {
			Some(path) if path != Path::new("-") => {
				std::fs::File::open(path)?.take(cap).read_to_end(&mut out)?;
				tracing::debug!(path = %path.display(), len = out.len(), "read input file");
			}
			_ => {
				std::io::stdin().lock().take(cap).read_to_end(&mut out)?;
				tracing::debug!(len = out.len(), "read input from stdin");
			}
		}
		Ok(out)
	}
}

/// Decoder limits and strictness switches.
#[derive(clap::Args)]
pub struct DecodeArgs {
	/// Reject trailing bytes and non-canonical encodings.
	#[arg(long)]
	pub strict: bool,
	/// Maximum list/dict nesting depth (at most 1024).
	#[arg(long = "max-depth", value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_DEPTH_LIMIT)))]
	pub max_depth: Option<u32>,
}

impl DecodeArgs {
	/// Build decoder options from the flags.
	pub fn options(&self) -> DecodeOptions {
		let mut opt = if self.strict { DecodeOptions::strict() } else { DecodeOptions::default() };
		if let Some(max_depth) = self.max_depth {
			opt.max_depth = max_depth;
		}
		opt
	}
}
