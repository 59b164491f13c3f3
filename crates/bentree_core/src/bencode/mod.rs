mod cursor;
mod decode;
mod error;
mod json;
mod path;
mod stats;
mod value;

/// Bounded byte cursor used by the decoder.
pub use cursor::Cursor;
/// Decoding entry points and options.
pub use decode::{DecodeOptions, MAX_DEPTH_LIMIT, decode, decode_prefix, decode_with};
/// Error, error-kind, and result aliases.
pub use error::{BencodeError, ErrorKind, Result};
/// Structured-tree conversion entry points and policies.
pub use json::{DuplicateKeys, JsonOptions, TextPolicy, to_json, to_json_with};
/// Selector path parser types.
pub use path::{PathStep, ValuePath};
/// Whole-tree summary counters.
pub use stats::ValueStats;
/// Decoded value types.
pub use value::{DictEntry, Value};
