use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BencodeError>;

/// Errors produced while decoding, converting, and selecting bencode values.
#[derive(Debug, Error)]
pub enum BencodeError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input ended before a terminator, length, or payload byte.
	#[error("unexpected end of input at offset {at}")]
	UnexpectedEof {
		/// Offset where more input was required.
		at: usize,
	},
	/// Byte at the cursor is not a value marker.
	#[error("invalid format at offset {at}: unexpected byte 0x{byte:02x}")]
	InvalidFormat {
		/// Offset of the offending byte.
		at: usize,
		/// Offending byte.
		byte: u8,
	},
	/// Integer body is not a valid signed 64-bit decimal.
	#[error("invalid integer at offset {at}")]
	InvalidInteger {
		/// Offset of the leading `i`.
		at: usize,
	},
	/// Byte-string length prefix is not a valid non-negative decimal.
	#[error("invalid string length at offset {at}")]
	InvalidStringLength {
		/// Offset of the first length digit.
		at: usize,
	},
	/// Dictionary key position does not start a byte string.
	#[error("invalid dict key at offset {at}: unexpected byte 0x{byte:02x}")]
	InvalidDictKey {
		/// Offset of the key position.
		at: usize,
		/// Byte found where a key was expected.
		byte: u8,
	},
	/// Allocation for a value or buffer could not be satisfied.
	#[error("out of memory reserving {requested} bytes")]
	OutOfMemory {
		/// Requested allocation size in bytes.
		requested: usize,
	},
	/// Container nesting exceeded the configured limit.
	#[error("depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Input is longer than the configured limit.
	#[error("input too large: len={len}, max={max}")]
	InputTooLarge {
		/// Input length in bytes.
		len: usize,
		/// Maximum permitted length.
		max: usize,
	},
	/// Bytes remained after the first complete value.
	#[error("trailing bytes at offset {at}: {rem} unread")]
	TrailingBytes {
		/// Offset just past the decoded value.
		at: usize,
		/// Number of unread bytes.
		rem: usize,
	},
	/// Canonical mode: key sorts before its predecessor.
	#[error("unsorted dict key at offset {at}")]
	UnsortedDictKey {
		/// Offset of the out-of-order key.
		at: usize,
	},
	/// Canonical mode: key repeats its predecessor.
	#[error("duplicate dict key at offset {at}")]
	DuplicateDictKey {
		/// Offset of the repeated key.
		at: usize,
	},
	/// Canonical mode: integer has a sign or zero padding the format forbids.
	#[error("non-canonical integer at offset {at}")]
	NonCanonicalInteger {
		/// Offset of the leading `i`.
		at: usize,
	},
	/// Byte string is not UTF-8 and the text policy rejects it.
	#[error("invalid utf-8 at {path:?}")]
	InvalidUtf8 {
		/// JSON-pointer style location of the value.
		path: String,
	},
	/// Field name repeats within one object and duplicates are rejected.
	#[error("duplicate json key at {path:?}")]
	DuplicateJsonKey {
		/// JSON-pointer style location of the repeated field.
		path: String,
	},
	/// Selector path syntax is invalid.
	#[error("invalid path: {path}")]
	InvalidPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Selector path did not match any value.
	#[error("selection not found: {path}")]
	SelectionNotFound {
		/// Original user-provided path string.
		path: String,
	},
}

/// Payload-free failure kind, stable across message changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// See [`BencodeError::Io`].
	Io,
	/// See [`BencodeError::UnexpectedEof`].
	UnexpectedEndOfInput,
	/// See [`BencodeError::InvalidFormat`].
	InvalidFormat,
	/// See [`BencodeError::InvalidInteger`].
	InvalidInteger,
	/// See [`BencodeError::InvalidStringLength`].
	InvalidStringLength,
	/// See [`BencodeError::InvalidDictKey`].
	InvalidDictKey,
	/// See [`BencodeError::OutOfMemory`].
	OutOfMemory,
	/// See [`BencodeError::DepthExceeded`].
	DepthExceeded,
	/// See [`BencodeError::InputTooLarge`].
	InputTooLarge,
	/// See [`BencodeError::TrailingBytes`].
	TrailingBytes,
	/// See [`BencodeError::UnsortedDictKey`].
	UnsortedDictKey,
	/// See [`BencodeError::DuplicateDictKey`].
	DuplicateDictKey,
	/// See [`BencodeError::NonCanonicalInteger`].
	NonCanonicalInteger,
	/// See [`BencodeError::InvalidUtf8`].
	InvalidUtf8,
	/// See [`BencodeError::DuplicateJsonKey`].
	DuplicateJsonKey,
	/// See [`BencodeError::InvalidPath`].
	InvalidPath,
	/// See [`BencodeError::SelectionNotFound`].
	SelectionNotFound,
}

impl ErrorKind {
	/// Stable snake_case label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Io => "io",
			Self::UnexpectedEndOfInput => "unexpected_end_of_input",
			Self::InvalidFormat => "invalid_format",
			Self::InvalidInteger => "invalid_integer",
			Self::InvalidStringLength => "invalid_string_length",
			Self::InvalidDictKey => "invalid_dict_key",
			Self::OutOfMemory => "out_of_memory",
			Self::DepthExceeded => "depth_exceeded",
			Self::InputTooLarge => "input_too_large",
			Self::TrailingBytes => "trailing_bytes",
			Self::UnsortedDictKey => "unsorted_dict_key",
			Self::DuplicateDictKey => "duplicate_dict_key",
			Self::NonCanonicalInteger => "non_canonical_integer",
			Self::InvalidUtf8 => "invalid_utf8",
			Self::DuplicateJsonKey => "duplicate_json_key",
			Self::InvalidPath => "invalid_path",
			Self::SelectionNotFound => "selection_not_found",
		}
	}
}

impl BencodeError {
	/// Return the payload-free kind of this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Io(_) => ErrorKind::Io,
			Self::UnexpectedEof { .. } => ErrorKind::UnexpectedEndOfInput,
			Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
			Self::InvalidInteger { .. } => ErrorKind::InvalidInteger,
			Self::InvalidStringLength { .. } => ErrorKind::InvalidStringLength,
			Self::InvalidDictKey { .. } => ErrorKind::InvalidDictKey,
			Self::OutOfMemory { .. } => ErrorKind::OutOfMemory,
			Self::DepthExceeded { .. } => ErrorKind::DepthExceeded,
			Self::InputTooLarge { .. } => ErrorKind::InputTooLarge,
			Self::TrailingBytes { .. } => ErrorKind::TrailingBytes,
			Self::UnsortedDictKey { .. } => ErrorKind::UnsortedDictKey,
			Self::DuplicateDictKey { .. } => ErrorKind::DuplicateDictKey,
			Self::NonCanonicalInteger { .. } => ErrorKind::NonCanonicalInteger,
			Self::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
			Self::DuplicateJsonKey { .. } => ErrorKind::DuplicateJsonKey,
			Self::InvalidPath { .. } => ErrorKind::InvalidPath,
			Self::SelectionNotFound { .. } => ErrorKind::SelectionNotFound,
		}
	}
}
