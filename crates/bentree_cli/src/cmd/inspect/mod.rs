use bentree::bencode::{BencodeError, Result, Value, ValueStats, decode_prefix};

use crate::cmd::input::{DecodeArgs, InputArgs};
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	#[command(flatten)]
	pub decode: DecodeArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print size, shape, and top-level key statistics for one encoded value.
pub fn run(args: Args) -> Result<()> {
	let Args { input, decode, json } = args;

	let opt = decode.options();
	let bytes = input.read(opt.max_input_len)?;
	let (value, consumed) = decode_prefix(&bytes, &opt)?;
	let trailing = bytes.len() - consumed;
	if !opt.allow_trailing && trailing > 0 {
		return Err(BencodeError::TrailingBytes { at: consumed, rem: trailing });
	}

	let stats = value.stats();
	let top_keys = top_level_keys(&value);

	if json {
		let payload = InspectJson {
			input_len: bytes.len(),
			consumed,
			trailing,
			kind: value.kind_label(),
			stats: StatsJson::from(stats),
			top_keys,
		};
		return emit_json(&payload, false);
	}

	println!("input_len: {}", bytes.len());
	println!("consumed: {consumed}");
	println!("trailing: {trailing}");
	println!("kind: {}", value.kind_label());
	println!("integers: {}", stats.integers);
	println!("byte_strings: {}", stats.byte_strings);
	println!("lists: {}", stats.lists);
	println!("dicts: {}", stats.dicts);
	println!("dict_entries: {}", stats.dict_entries);
	println!("byte_total: {}", stats.byte_total);
	println!("max_depth: {}", stats.max_depth);
	if !top_keys.is_empty() {
		println!("top_keys: {}", top_keys.join(", "));
	}

	Ok(())
}

fn top_level_keys(value: &Value) -> Vec<String> {
	let Some(entries) = value.as_dict() else {
		return Vec::new();
	};
	entries.iter().map(|entry| String::from_utf8_lossy(&entry.key).into_owned()).collect()
}

#[derive(serde::Serialize)]
struct StatsJson {
	integers: usize,
	byte_strings: usize,
	lists: usize,
	dicts: usize,
	dict_entries: usize,
	byte_total: usize,
	max_depth: u32,
}

impl From<ValueStats> for StatsJson {
	fn from(stats: ValueStats) -> Self {
		Self {
			integers: stats.integers,
			byte_strings: stats.byte_strings,
			lists: stats.lists,
			dicts: stats.dicts,
			dict_entries: stats.dict_entries,
			byte_total: stats.byte_total,
			max_depth: stats.max_depth,
		}
	}
}

#[derive(serde::Serialize)]
struct InspectJson {
	input_len: usize,
	consumed: usize,
	trailing: usize,
	kind: &'static str,
	stats: StatsJson,
	top_keys: Vec<String>,
}
