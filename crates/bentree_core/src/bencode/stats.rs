use crate::bencode::value::Value;

/// Whole-tree counters gathered by [`Value::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueStats {
	/// Number of integer values.
	pub integers: usize,
	/// Number of byte-string values, dictionary keys excluded.
	pub byte_strings: usize,
	/// Number of lists.
	pub lists: usize,
	/// Number of dictionaries.
	pub dicts: usize,
	/// Number of dictionary entries.
	pub dict_entries: usize,
	/// Total payload bytes across byte strings and keys.
	pub byte_total: usize,
	/// Deepest container nesting (0 for a scalar root).
	pub max_depth: u32,
}

impl Value {
	/// Count values, containers, and payload bytes in the whole tree.
	pub fn stats(&self) -> ValueStats {
		let mut stats = ValueStats::default();
		collect(self, 0, &mut stats);
		stats
	}
}

fn collect(value: &Value, depth: u32, stats: &mut ValueStats) {
	match value {
		Value::Integer(_) => stats.integers += 1,
		Value::Bytes(bytes) => {
			stats.byte_strings += 1;
			stats.byte_total += bytes.len();
		}
		Value::List(items) => {
			stats.lists += 1;
			stats.max_depth = stats.max_depth.max(depth + 1);
			for item in items {
				collect(item, depth + 1, stats);
			}
		}
		Value::Dict(entries) => {
			stats.dicts += 1;
			stats.dict_entries += entries.len();
			stats.max_depth = stats.max_depth.max(depth + 1);
			for entry in entries {
				stats.byte_total += entry.key.len();
				collect(&entry.value, depth + 1, stats);
			}
		}
	}
}

#[cfg(test)]
mod tests;
