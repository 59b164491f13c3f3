use std::io::Write;

use bentree::bencode::Result;

/// Write one JSON document followed by a newline to stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T, pretty: bool) -> Result<()> {
	let mut stdout = std::io::stdout().lock();
	let written = if pretty {
		serde_json::to_writer_pretty(&mut stdout, payload)
	} else {
		serde_json::to_writer(&mut stdout, payload)
	};
	written.map_err(std::io::Error::from)?;
	writeln!(stdout)?;
	Ok(())
}
