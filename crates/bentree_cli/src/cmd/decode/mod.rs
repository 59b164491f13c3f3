use bentree::bencode::{BencodeError, DuplicateKeys, JsonOptions, Result, TextPolicy, ValuePath, decode_with, to_json_with};

use crate::cmd::input::{DecodeArgs, InputArgs};
use crate::cmd::util::emit_json;

/// Text policy names accepted on the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TextArg {
	/// Fail on byte strings that are not UTF-8.
	Strict,
	/// Substitute U+FFFD for invalid sequences.
	Lossy,
	/// Print non-text byte strings as arrays of numbers.
	Bytes,
}

impl From<TextArg> for TextPolicy {
	fn from(value: TextArg) -> Self {
		match value {
			TextArg::Strict => Self::Strict,
			TextArg::Lossy => Self::Lossy,
			TextArg::Bytes => Self::ByteArray,
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	#[command(flatten)]
	pub decode: DecodeArgs,
	#[arg(long, value_enum, default_value = "strict")]
	pub text: TextArg,
	#[arg(long = "reject-duplicate-keys")]
	pub reject_duplicate_keys: bool,
	/// Print only the value at a path such as `info.files[0].length`.
	#[arg(long)]
	pub select: Option<String>,
	#[arg(long)]
	pub pretty: bool,
}

/// Decode input, convert it to JSON, and print it.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		decode,
		text,
		reject_duplicate_keys,
		select,
		pretty,
	} = args;

	let decode_options = decode.options();
	let bytes = input.read(decode_options.max_input_len)?;
	let value = decode_with(&bytes, &decode_options)?;

	let target = match &select {
		Some(expr) => {
			let path = ValuePath::parse(expr)?;
			value.select(&path).ok_or_else(|| BencodeError::SelectionNotFound { path: expr.clone() })?
		}
		None => &value,
	};

	let json_options = JsonOptions {
		text: text.into(),
		duplicate_keys: if reject_duplicate_keys {
			DuplicateKeys::Reject
		} else {
			DuplicateKeys::LastWins
		},
	};
	tracing::debug!(text = json_options.text.as_str(), select = select.as_deref(), "converting to json");
	let json = to_json_with(target, &json_options)?;

	emit_json(&json, pretty)
}
