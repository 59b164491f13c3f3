use std::cmp::Ordering;
use std::collections::TryReserveError;

use crate::bencode::cursor::Cursor;
use crate::bencode::value::{DictEntry, Value};
use crate::bencode::{BencodeError, Result};

/// Hard ceiling on list/dict nesting, applied whatever `max_depth` is configured.
///
/// Decoding, conversion, and serialization all recurse once per level; this
/// keeps the deepest accepted tree within an 8 MiB main-thread stack.
pub const MAX_DEPTH_LIMIT: u32 = 1024;

/// Runtime limits and behavior switches for bencode decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum list/dict nesting depth, clamped to [`MAX_DEPTH_LIMIT`].
	pub max_depth: u32,
	/// Maximum accepted input length in bytes.
	pub max_input_len: usize,
	/// Accept bytes after the first complete value.
	pub allow_trailing: bool,
	/// Enforce canonical form: sorted unique keys, unpadded integers and lengths.
	pub canonical: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 256,
			max_input_len: 64 * 1024 * 1024,
			allow_trailing: true,
			canonical: false,
		}
	}
}

impl DecodeOptions {
	/// Nesting limit actually enforced.
	pub fn effective_max_depth(&self) -> u32 {
		self.max_depth.min(MAX_DEPTH_LIMIT)
	}

	/// Preset that rejects trailing data and non-canonical encodings.
	pub fn strict() -> Self {
		Self {
			allow_trailing: false,
			canonical: true,
			..Self::default()
		}
	}
}

/// Decode one value with default options.
pub fn decode(input: &[u8]) -> Result<Value> {
	decode_with(input, &DecodeOptions::default())
}

/// Decode one value, applying the trailing-data policy of `opt`.
pub fn decode_with(input: &[u8], opt: &DecodeOptions) -> Result<Value> {
	let (value, consumed) = decode_prefix(input, opt)?;
	if !opt.allow_trailing && consumed < input.len() {
		return Err(BencodeError::TrailingBytes {
			at: consumed,
			rem: input.len() - consumed,
		});
	}
	Ok(value)
}

/// Decode the first value in `input` and return it with the number of bytes it spans.
pub fn decode_prefix(input: &[u8], opt: &DecodeOptions) -> Result<(Value, usize)> {
	if input.len() > opt.max_input_len {
		return Err(BencodeError::InputTooLarge {
			len: input.len(),
			max: opt.max_input_len,
		});
	}

	let mut cursor = Cursor::new(input);
	let value = decode_value(&mut cursor, opt, 0)?;
	tracing::debug!(kind = value.kind_label(), consumed = cursor.pos(), len = input.len(), "decoded bencode value");
	Ok((value, cursor.pos()))
}

fn decode_value(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let at = cursor.pos();
	match cursor.peek_required()? {
		b'i' => decode_integer(cursor, opt).map(Value::Integer),
		b'0'..=b'9' => decode_bytes(cursor, opt).map(Value::Bytes),
		b'l' => decode_list(cursor, opt, depth + 1),
		b'd' => decode_dict(cursor, opt, depth + 1),
		byte => Err(BencodeError::InvalidFormat { at, byte }),
	}
}

fn decode_integer(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<i64> {
	let at = cursor.pos();
	cursor.read_u8()?;
	let digits = cursor.read_until(b'e')?;

	let value = std::str::from_utf8(digits)
		.ok()
		.and_then(|text| text.parse::<i64>().ok())
		.ok_or(BencodeError::InvalidInteger { at })?;

	if opt.canonical && !is_canonical_integer(digits) {
		return Err(BencodeError::NonCanonicalInteger { at });
	}
	Ok(value)
}

fn decode_bytes(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Box<[u8]>> {
	let at = cursor.pos();
	let digits = cursor.read_until(b':')?;
	let len = parse_length(digits).ok_or(BencodeError::InvalidStringLength { at })?;
	if opt.canonical && digits.len() > 1 && digits[0] == b'0' {
		return Err(BencodeError::InvalidStringLength { at });
	}

	let payload = cursor.read_exact(len)?;
	let mut buf = Vec::new();
	reserve_exact_checked(&mut buf, len)?;
	buf.extend_from_slice(payload);
	Ok(buf.into_boxed_slice())
}

fn decode_list(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	check_depth(opt, depth)?;
	cursor.read_u8()?;

	let mut items = Vec::new();
	loop {
		match cursor.peek() {
			None => return Err(BencodeError::UnexpectedEof { at: cursor.pos() }),
			Some(b'e') => break,
			Some(_) => {
				let item = decode_value(cursor, opt, depth)?;
				push_checked(&mut items, item)?;
			}
		}
	}
	cursor.read_u8()?;

	Ok(Value::List(items))
}

fn decode_dict(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	check_depth(opt, depth)?;
	cursor.read_u8()?;

	let mut entries: Vec<DictEntry> = Vec::new();
	loop {
		let at = cursor.pos();
		match cursor.peek() {
			None => return Err(BencodeError::UnexpectedEof { at }),
			Some(b'e') => break,
			Some(byte) if byte.is_ascii_digit() => {
				let key = decode_bytes(cursor, opt)?;
				if opt.canonical {
					check_key_order(entries.last(), &key, at)?;
				}
				let value = decode_value(cursor, opt, depth)?;
				push_checked(&mut entries, DictEntry { key, value })?;
			}
			Some(byte) => return Err(BencodeError::InvalidDictKey { at, byte }),
		}
	}
	cursor.read_u8()?;

	Ok(Value::Dict(entries))
}

fn check_depth(opt: &DecodeOptions, depth: u32) -> Result<()> {
	let max_depth = opt.effective_max_depth();
	if depth > max_depth {
		tracing::debug!(depth, max_depth, "bencode nesting limit hit");
		return Err(BencodeError::DepthExceeded { max_depth });
	}
	Ok(())
}

fn check_key_order(prev: Option<&DictEntry>, key: &[u8], at: usize) -> Result<()> {
	let Some(prev) = prev else {
		return Ok(());
	};
	match prev.key.as_ref().cmp(key) {
		Ordering::Less => Ok(()),
		Ordering::Equal => Err(BencodeError::DuplicateDictKey { at }),
		Ordering::Greater => Err(BencodeError::UnsortedDictKey { at }),
	}
}

fn push_checked<T>(items: &mut Vec<T>, item: T) -> Result<()> {
	let len = items.len();
	items.try_reserve(1).map_err(|err| out_of_memory::<T>(err, len, 1))?;
	items.push(item);
	Ok(())
}

fn reserve_exact_checked<T>(items: &mut Vec<T>, additional: usize) -> Result<()> {
	let len = items.len();
	items
		.try_reserve_exact(additional)
		.map_err(|err| out_of_memory::<T>(err, len, additional))
}

/// Requested size is reported in bytes for `len + additional` elements, saturating.
fn out_of_memory<T>(err: TryReserveError, len: usize, additional: usize) -> BencodeError {
	let requested = std::mem::size_of::<T>().saturating_mul(len.saturating_add(additional));
	tracing::debug!(requested, error = %err, "allocation for decoded value failed");
	BencodeError::OutOfMemory { requested }
}

fn parse_length(digits: &[u8]) -> Option<usize> {
	if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
		return None;
	}
	std::str::from_utf8(digits).ok()?.parse::<usize>().ok()
}

/// `0`, or an optional `-` followed by digits without zero padding (`-0` excluded).
fn is_canonical_integer(digits: &[u8]) -> bool {
	let (negative, body) = match digits.split_first() {
		Some((b'-', rest)) => (true, rest),
		_ => (false, digits),
	};
	match body {
		[] => false,
		[b'0'] => !negative,
		[first, ..] => *first != b'0' && body.iter().all(u8::is_ascii_digit),
	}
}
