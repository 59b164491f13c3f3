use serde_json::json;

use crate::bencode::{BencodeError, DictEntry, DuplicateKeys, JsonOptions, MAX_DEPTH_LIMIT, TextPolicy, Value, decode, to_json, to_json_with};

fn render(input: &[u8]) -> String {
	let value = decode(input).expect("input decodes");
	serde_json::to_string(&to_json(&value).expect("value converts")).expect("json serializes")
}

#[test]
fn renders_scalars_and_containers() {
	assert_eq!(render(b"i52e"), "52");
	assert_eq!(render(b"i-3e"), "-3");
	assert_eq!(render(b"4:spam"), "\"spam\"");
	assert_eq!(render(b"l4:spam4:eggse"), r#"["spam","eggs"]"#);
	assert_eq!(render(b"d3:cow3:moo4:spam4:eggse"), r#"{"cow":"moo","spam":"eggs"}"#);
	assert_eq!(render(b"le"), "[]");
	assert_eq!(render(b"de"), "{}");
}

#[test]
fn integer_extremes_are_exact() {
	let value = Value::List(vec![Value::Integer(i64::MIN), Value::Integer(i64::MAX)]);
	assert_eq!(to_json(&value).expect("converts"), json!([i64::MIN, i64::MAX]));
}

#[test]
fn object_fields_keep_encounter_order() {
	assert_eq!(render(b"d1:bi1e1:ai2ee"), r#"{"b":1,"a":2}"#);
}

#[test]
fn duplicate_keys_last_wins_in_first_position() {
	assert_eq!(render(b"d1:ai1e1:bi2e1:ai3ee"), r#"{"a":3,"b":2}"#);
}

#[test]
fn duplicate_keys_can_be_rejected() {
	let value = decode(b"d1:xd1:ai1e1:ai3eee").expect("decodes");
	let opt = JsonOptions {
		duplicate_keys: DuplicateKeys::Reject,
		..JsonOptions::default()
	};
	let err = to_json_with(&value, &opt).expect_err("should fail");
	assert!(matches!(err, BencodeError::DuplicateJsonKey { ref path } if path == "/x/a"), "got {err:?}");
}

#[test]
fn strict_text_rejects_binary_payload_with_location() {
	let value = decode(b"d4:infod6:pieces2:\xff\xfeee").expect("decodes");
	let err = to_json(&value).expect_err("should fail");
	assert!(matches!(err, BencodeError::InvalidUtf8 { ref path } if path == "/info/pieces"), "got {err:?}");
}

#[test]
fn lossy_text_substitutes_replacement_characters() {
	let value = Value::Dict(vec![DictEntry::new(vec![b'k', 0xff], Value::bytes(vec![b'a', 0xff]))]);
	let opt = JsonOptions {
		text: TextPolicy::Lossy,
		..JsonOptions::default()
	};
	assert_eq!(to_json_with(&value, &opt).expect("converts"), json!({"k\u{fffd}": "a\u{fffd}"}));
}

#[test]
fn byte_array_text_keeps_raw_bytes() {
	let value = Value::List(vec![Value::bytes(*b"ok"), Value::bytes(vec![0x00, 0xff])]);
	let opt = JsonOptions {
		text: TextPolicy::ByteArray,
		..JsonOptions::default()
	};
	assert_eq!(to_json_with(&value, &opt).expect("converts"), json!(["ok", [0, 255]]));

	let bad_key = Value::Dict(vec![DictEntry::new(vec![0xff], Value::Integer(1))]);
	let err = to_json_with(&bad_key, &opt).expect_err("binary key should fail");
	assert!(matches!(err, BencodeError::InvalidUtf8 { .. }));
}

#[test]
fn pointer_segments_are_escaped() {
	let value = decode(b"d3:a/bl1:x1:\xc3ee").expect("decodes");
	let err = to_json(&value).expect_err("should fail");
	assert!(matches!(err, BencodeError::InvalidUtf8 { ref path } if path == "/a~1b/1"), "got {err:?}");
}

#[test]
fn conversion_is_idempotent_and_leaves_source_intact() {
	let value = decode(b"d4:infod6:lengthi1024e4:name8:file.txte4:listli1ei2eee").expect("decodes");
	let snapshot = value.clone();

	let first = to_json(&value).expect("first conversion");
	let second = to_json(&value).expect("second conversion");
	assert_eq!(first, second);
	assert_eq!(value, snapshot);
	assert_eq!(first["info"]["length"], 1024);
	assert_eq!(first["list"], json!([1, 2]));
}

#[test]
fn hand_built_trees_deeper_than_ceiling_are_rejected() {
	// Test threads get a 2 MiB stack; give this one the room a main thread has.
	let worker = std::thread::Builder::new()
		.stack_size(16 << 20)
		.spawn(|| {
			let mut value = Value::Integer(7);
			for _ in 0..MAX_DEPTH_LIMIT {
				value = Value::List(vec![value]);
			}
			let json = to_json(&value).expect("ceiling depth converts");
			assert_eq!(json.to_string().len(), 2 * MAX_DEPTH_LIMIT as usize + 1);

			let value = Value::Dict(vec![DictEntry::new(*b"k", value)]);
			let err = to_json(&value).expect_err("one level past ceiling should fail");
			assert!(matches!(err, BencodeError::DepthExceeded { max_depth: MAX_DEPTH_LIMIT }), "got {err:?}");
		})
		.expect("spawn worker");
	worker.join().expect("worker finished");
}
