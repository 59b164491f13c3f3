use crate::bencode::{ValueStats, decode};

#[test]
fn scalar_root_has_zero_depth() {
	let stats = decode(b"i5e").expect("decodes").stats();
	assert_eq!(
		stats,
		ValueStats {
			integers: 1,
			..ValueStats::default()
		}
	);
}

#[test]
fn counts_nested_tree() {
	let stats = decode(b"d4:infod6:lengthi1024e4:name8:file.txte4:listli1eleee").expect("decodes").stats();
	assert_eq!(stats.integers, 2);
	assert_eq!(stats.byte_strings, 1);
	assert_eq!(stats.lists, 2);
	assert_eq!(stats.dicts, 2);
	assert_eq!(stats.dict_entries, 4);
	assert_eq!(stats.byte_total, 4 + 6 + 4 + 8 + 4);
	assert_eq!(stats.max_depth, 3);
}
