use crate::bencode::{BencodeError, PathStep, Value, ValuePath, decode};

#[test]
fn parses_keys_and_indices() {
	let path = ValuePath::parse("info.files[0].path[1]").expect("path parses");
	assert_eq!(
		path.steps,
		vec![
			PathStep::Key("info".to_owned()),
			PathStep::Key("files".to_owned()),
			PathStep::Index(0),
			PathStep::Key("path".to_owned()),
			PathStep::Index(1),
		]
	);
}

#[test]
fn keys_may_contain_spaces_and_dashes() {
	let path = ValuePath::parse("info.piece length.x-y").expect("path parses");
	assert_eq!(path.steps[1], PathStep::Key("piece length".to_owned()));
	assert_eq!(path.steps[2], PathStep::Key("x-y".to_owned()));
}

#[test]
fn leading_index_addresses_top_level_list() {
	let path = ValuePath::parse("[2][0]").expect("path parses");
	assert_eq!(path.steps, vec![PathStep::Index(2), PathStep::Index(0)]);
}

#[test]
fn rejects_malformed_paths() {
	for input in ["", ".a", "a.", "a..b", "a[", "a[]", "a[x]", "a[1]b", "a.[1]"] {
		let err = ValuePath::parse(input).expect_err("malformed path should fail");
		assert!(matches!(err, BencodeError::InvalidPath { ref path } if path == input), "input {input:?}");
	}
}

#[test]
fn select_walks_dicts_and_lists() {
	let value = decode(b"d4:infod5:filesld6:lengthi7e4:pathl1:a1:beeeee").expect("decodes");

	let path = ValuePath::parse("info.files[0].path[1]").expect("path parses");
	assert_eq!(value.select(&path), Some(&Value::bytes(*b"b")));

	let length = ValuePath::parse("info.files[0].length").expect("path parses");
	assert_eq!(value.select(&length).and_then(Value::as_integer), Some(7));

	let missing = ValuePath::parse("info.files[3]").expect("path parses");
	assert_eq!(value.select(&missing), None);

	let wrong_kind = ValuePath::parse("info[0]").expect("path parses");
	assert_eq!(value.select(&wrong_kind), None);
}
