use serde_json::{Map, Value as JsonValue};

use crate::bencode::decode::MAX_DEPTH_LIMIT;
use crate::bencode::value::Value;
use crate::bencode::{BencodeError, Result};

/// How byte strings that are not valid UTF-8 are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextPolicy {
	/// Fail with `InvalidUtf8`.
	#[default]
	Strict,
	/// Replace invalid sequences with U+FFFD.
	Lossy,
	/// Render non-text values as arrays of byte numbers; keys must still be UTF-8.
	ByteArray,
}

impl TextPolicy {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Strict => "strict",
			Self::Lossy => "lossy",
			Self::ByteArray => "bytes",
		}
	}
}

/// How a field name that repeats inside one dictionary is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateKeys {
	/// Later value overwrites the earlier one; the field keeps its first position.
	#[default]
	LastWins,
	/// Fail with `DuplicateJsonKey`.
	Reject,
}

/// Options for converting decoded values into `serde_json` trees.
#[derive(Debug, Clone, Default)]
pub struct JsonOptions {
	/// Byte-string text policy.
	pub text: TextPolicy,
	/// Duplicate field-name policy.
	pub duplicate_keys: DuplicateKeys,
}

/// Convert a decoded value with default options.
pub fn to_json(value: &Value) -> Result<JsonValue> {
	to_json_with(value, &JsonOptions::default())
}

/// Convert a decoded value into an independent `serde_json` tree.
///
/// Dictionaries become objects in encounter order. Any nested failure aborts
/// the whole conversion. Trees nested deeper than [`MAX_DEPTH_LIMIT`] fail
/// with `DepthExceeded`.
pub fn to_json_with(value: &Value, opt: &JsonOptions) -> Result<JsonValue> {
	let mut path = String::new();
	convert(value, opt, &mut path, 0)
}

fn convert(value: &Value, opt: &JsonOptions, path: &mut String, depth: u32) -> Result<JsonValue> {
	if matches!(value, Value::List(_) | Value::Dict(_)) && depth >= MAX_DEPTH_LIMIT {
		tracing::debug!(path = %path, depth, "conversion nesting limit hit");
		return Err(BencodeError::DepthExceeded { max_depth: MAX_DEPTH_LIMIT });
	}
	match value {
		Value::Integer(v) => Ok(JsonValue::from(*v)),
		Value::Bytes(bytes) => bytes_to_json(bytes, opt.text, path),
		Value::List(items) => {
			let mut out = Vec::with_capacity(items.len());
			for (idx, item) in items.iter().enumerate() {
				let mark = path.len();
				path.push('/');
				path.push_str(&idx.to_string());
				out.push(convert(item, opt, path, depth + 1)?);
				path.truncate(mark);
			}
			Ok(JsonValue::Array(out))
		}
		Value::Dict(entries) => {
			let mut out = Map::new();
			for entry in entries {
				let mark = path.len();
				push_pointer_segment(path, &String::from_utf8_lossy(&entry.key));

				let key = key_to_string(&entry.key, opt.text, path)?;
				if out.contains_key(&key) {
					match opt.duplicate_keys {
						DuplicateKeys::Reject => return Err(BencodeError::DuplicateJsonKey { path: path.clone() }),
						DuplicateKeys::LastWins => tracing::debug!(path = %path, "duplicate dict key overwrites earlier value"),
					}
				}

				let item = convert(&entry.value, opt, path, depth + 1)?;
				out.insert(key, item);
				path.truncate(mark);
			}
			Ok(JsonValue::Object(out))
		}
	}
}

fn bytes_to_json(bytes: &[u8], policy: TextPolicy, path: &str) -> Result<JsonValue> {
	match (std::str::from_utf8(bytes), policy) {
		(Ok(text), _) => Ok(JsonValue::String(text.to_owned())),
		(Err(_), TextPolicy::Strict) => Err(BencodeError::InvalidUtf8 { path: path.to_owned() }),
		(Err(_), TextPolicy::Lossy) => Ok(JsonValue::String(String::from_utf8_lossy(bytes).into_owned())),
		(Err(_), TextPolicy::ByteArray) => Ok(JsonValue::Array(bytes.iter().map(|byte| JsonValue::from(*byte)).collect())),
	}
}

fn key_to_string(key: &[u8], policy: TextPolicy, path: &str) -> Result<String> {
	match (std::str::from_utf8(key), policy) {
		(Ok(text), _) => Ok(text.to_owned()),
		(Err(_), TextPolicy::Lossy) => Ok(String::from_utf8_lossy(key).into_owned()),
		(Err(_), TextPolicy::Strict | TextPolicy::ByteArray) => Err(BencodeError::InvalidUtf8 { path: path.to_owned() }),
	}
}

/// Append `/segment` with JSON-pointer escaping (`~` -> `~0`, `/` -> `~1`).
fn push_pointer_segment(path: &mut String, segment: &str) {
	path.push('/');
	for ch in segment.chars() {
		match ch {
			'~' => path.push_str("~0"),
			'/' => path.push_str("~1"),
			c => path.push(c),
		}
	}
}

#[cfg(test)]
mod tests;
