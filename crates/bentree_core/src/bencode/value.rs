/// Decoded bencode value.
///
/// The root value owns every nested value and buffer; dropping it releases the
/// whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	/// Signed 64-bit integer (`i<digits>e`).
	Integer(i64),
	/// Raw byte string (`<len>:<bytes>`), not necessarily UTF-8.
	Bytes(Box<[u8]>),
	/// Ordered list (`l...e`).
	List(Vec<Value>),
	/// Ordered dictionary entries (`d...e`) in encounter order.
	Dict(Vec<DictEntry>),
}

/// One key/value pair of a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
	/// Raw key bytes.
	pub key: Box<[u8]>,
	/// Associated value.
	pub value: Value,
}

impl DictEntry {
	/// Build an entry from anything convertible to key bytes.
	pub fn new(key: impl Into<Box<[u8]>>, value: Value) -> Self {
		Self { key: key.into(), value }
	}
}

impl Value {
	/// Build a byte-string value.
	pub fn bytes(bytes: impl Into<Box<[u8]>>) -> Self {
		Self::Bytes(bytes.into())
	}

	/// Stable lowercase label for the variant.
	pub fn kind_label(&self) -> &'static str {
		match self {
			Self::Integer(_) => "integer",
			Self::Bytes(_) => "bytes",
			Self::List(_) => "list",
			Self::Dict(_) => "dict",
		}
	}

	/// Integer payload, if any.
	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Self::Integer(v) => Some(*v),
			_ => None,
		}
	}

	/// Raw byte-string payload, if any.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::Bytes(v) => Some(v),
			_ => None,
		}
	}

	/// Byte-string payload viewed as UTF-8, if it is valid text.
	pub fn as_str(&self) -> Option<&str> {
		self.as_bytes().and_then(|bytes| std::str::from_utf8(bytes).ok())
	}

	/// List elements, if any.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Dictionary entries, if any.
	pub fn as_dict(&self) -> Option<&[DictEntry]> {
		match self {
			Self::Dict(entries) => Some(entries),
			_ => None,
		}
	}

	/// Look up a dictionary value by key.
	///
	/// When a key repeats, the last entry wins, matching structured-tree
	/// conversion.
	pub fn get(&self, key: &[u8]) -> Option<&Value> {
		self.as_dict()?
			.iter()
			.rev()
			.find(|entry| entry.key.as_ref() == key)
			.map(|entry| &entry.value)
	}
}
