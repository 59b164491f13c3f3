use crate::bencode::value::Value;
use crate::bencode::{BencodeError, Result};

/// One parsed operation in a selector path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a dictionary value by key.
	Key(String),
	/// Select a list element by zero-based index.
	Index(usize),
}

/// Parsed selector path such as `info.files[0].length`.
#[derive(Debug, Clone)]
pub struct ValuePath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl ValuePath {
	/// Parse dotted key syntax with optional `[index]` selectors.
	///
	/// Keys may contain anything except `.` and `[`; a path may start with an
	/// index to address a top-level list.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || BencodeError::InvalidPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && bytes[idx] != b'.' && bytes[idx] != b'[' {
				idx += 1;
			}

			if idx > start {
				steps.push(PathStep::Key(input[start..idx].to_owned()));
			} else if start != 0 || bytes[idx] != b'[' {
				return Err(invalid());
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}

				let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self { steps })
	}
}

impl Value {
	/// Follow `path` from this value.
	pub fn select(&self, path: &ValuePath) -> Option<&Value> {
		path.steps.iter().try_fold(self, |current, step| match step {
			PathStep::Key(key) => current.get(key.as_bytes()),
			PathStep::Index(index) => current.as_list()?.get(*index),
		})
	}
}

#[cfg(test)]
mod tests;
