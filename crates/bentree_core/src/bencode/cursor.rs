use crate::bencode::{BencodeError, Result};

/// Simple bounded cursor over an immutable byte slice.
///
/// One cursor is threaded by `&mut` through every recursive decode step.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Return the byte at the cursor without consuming it.
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	/// Return the byte at the cursor or fail with `UnexpectedEof`.
	pub fn peek_required(&self) -> Result<u8> {
		self.peek().ok_or(BencodeError::UnexpectedEof { at: self.pos })
	}

	/// Consume one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		let byte = self.peek_required()?;
		self.pos += 1;
		Ok(byte)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(BencodeError::UnexpectedEof { at: self.bytes.len() });
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read bytes up to `delim`, consume the delimiter, and return the bytes before it.
	pub fn read_until(&mut self, delim: u8) -> Result<&'a [u8]> {
		let start = self.pos;
		let rem = self.bytes.get(start..).unwrap_or_default();
		let Some(rel_end) = rem.iter().position(|byte| *byte == delim) else {
			return Err(BencodeError::UnexpectedEof { at: self.bytes.len() });
		};

		let end = start + rel_end;
		self.pos = end + 1;
		Ok(&self.bytes[start..end])
	}
}
