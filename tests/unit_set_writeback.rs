#![allow(missing_docs)]

use pathwalk::{
	Matcher, RecordValue, SetOutcome, Value, WalkOptions, get, must_parse_path, set, set_all_by, set_by,
};

fn options() -> WalkOptions {
	WalkOptions::default()
}

#[test]
fn set_rewrites_a_record_field_in_place() {
	let mut root = Value::from(RecordValue::new("Counter").field("a", 1_i64));
	let path = must_parse_path("a", false);

	assert!(set(&mut root, &path, 2_i64, &options()));
	assert_eq!(root, Value::from(RecordValue::new("Counter").field("a", 2_i64)));
}

#[test]
fn setting_an_already_present_value_changes_nothing_observable() {
	let mut root = Value::from(RecordValue::new("Counter").field("a", 2_i64));
	let path = must_parse_path("a", false);

	assert!(set(&mut root, &path, 2_i64, &options()));
	let after_first = root.clone();
	assert!(set(&mut root, &path, 2_i64, &options()));
	assert_eq!(root, after_first);
}

#[test]
fn identity_setter_round_trips_the_whole_tree() {
	let mut root = Value::map([
		("name", Value::from("scene")),
		("sizes", Value::seq([1_i64, 2_i64, 3_i64])),
		("nested", Value::any(Value::from(RecordValue::new("P").field("x", 4_i64)))),
	]);
	let before = root.clone();

	let path = must_parse_path("**", false);
	let count = set_all_by::<Value, _>(&mut root, &path, SetOutcome::set, &options());

	assert!(count > 0, "identity setter must have rewritten something");
	assert_eq!(root, before);
}

#[test]
fn inner_field_of_a_boxed_record_in_a_map_persists_after_set_by() {
	// Map values are not writable storage, and the record is further
	// hidden behind a polymorphic container. The write must still be
	// observable in the original map after the call returns.
	let record = RecordValue::new("Extent").field("width", 1_i64).field("height", 2_i64);
	let mut root = Value::map([("extent", Value::any(Value::from(record)))]);

	let path = must_parse_path("extent.width", false);
	let changed = set_by::<i64, _>(&mut root, &path, |old| SetOutcome::set(old + 99), &options());

	assert!(changed);
	let expected = RecordValue::new("Extent").field("width", 100_i64).field("height", 2_i64);
	assert_eq!(root, Value::map([("extent", Value::any(Value::from(expected)))]));
}

#[test]
fn replacing_a_boxed_terminal_keeps_the_container_wrapper() {
	let record = RecordValue::new("Extent").field("width", 1_i64);
	let mut root = Value::map([("extent", Value::any(Value::from(record)))]);

	let replacement = RecordValue::new("Extent").field("width", 50_i64);
	let path = must_parse_path("extent", false);
	assert!(set(&mut root, &path, Value::from(replacement.clone()), &options()));
	assert_eq!(root, Value::map([("extent", Value::any(Value::from(replacement)))]));
}

#[test]
fn deep_set_through_sequences_of_maps() {
	let mut root = Value::from(serde_json::json!({
		"layers": [
			{ "opacity": 30 },
			{ "opacity": 100 },
		],
	}));

	let path = must_parse_path("layers.*.opacity", false);
	let count = set_all_by::<i64, _>(&mut root, &path, |old| SetOutcome::set(old / 2), &options());

	assert_eq!(count, 2);
	// Textual exact tokens are strings and never index sequences; a
	// programmatic integer matcher does.
	let first = [Matcher::exact("layers"), Matcher::exact(0_i64), Matcher::exact("opacity")];
	assert_eq!(get::<i64>(&root, &first, &options()), Some(15));
	assert_eq!(
		root,
		Value::from(serde_json::json!({ "layers": [ { "opacity": 15 }, { "opacity": 50 } ] }))
	);
}

#[test]
fn set_through_a_shared_cell_is_visible_to_every_alias() {
	let shared = Value::shared(Value::from(RecordValue::new("Node").field("mark", 0_i64)));
	let alias = shared.clone();
	let mut root = Value::seq([shared]);

	let path = must_parse_path("*.mark", false);
	assert!(set(&mut root, &path, 1_i64, &options()));
	assert_eq!(alias.unbox(), Value::from(RecordValue::new("Node").field("mark", 1_i64)));
}
