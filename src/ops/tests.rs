use crate::matcher::Matcher;
use crate::ops::{SetOutcome, get, get_all, must_get, set, set_all, set_all_by, set_by};
use crate::value::{RecordValue, Value};
use crate::walk::WalkOptions;

fn options() -> WalkOptions {
	WalkOptions::default()
}

fn fixture() -> Value {
	Value::from(
		RecordValue::new("Scene")
			.field("name", Value::from("main"))
			.field("width", 1920_i64)
			.field("height", 1080_i64)
			.field("tags", Value::seq([Value::from("a"), Value::from("b")])),
	)
}

#[test]
fn get_returns_the_first_typed_match_only() {
	let root = fixture();
	let path = [Matcher::pattern("*")];
	// The first i64 in field order is width; name is skipped by the
	// type filter.
	assert_eq!(get::<i64>(&root, &path, &options()), Some(1920));
	assert_eq!(get::<String>(&root, &path, &options()), Some("main".to_owned()));
	assert_eq!(get::<bool>(&root, &path, &options()), None);
}

#[test]
fn get_all_collects_in_traversal_order() {
	let root = fixture();
	let path = [Matcher::pattern("*")];
	assert_eq!(get_all::<i64>(&root, &path, &options()), vec![1920, 1080]);
	assert_eq!(get_all::<Value>(&root, &path, &options()).len(), 4);
}

#[test]
fn must_get_returns_the_match() {
	let root = fixture();
	assert_eq!(must_get::<i64>(&root, &[Matcher::exact("height")], &options()), 1080);
}

#[test]
#[should_panic(expected = "pathwalk: no match")]
fn must_get_panics_when_nothing_matches() {
	must_get::<i64>(&fixture(), &[Matcher::exact("depth")], &options());
}

#[test]
fn set_changes_the_first_assignable_match_only() {
	let mut root = fixture();
	// Both width and height match the pattern; only the first changes.
	assert!(set(&mut root, &[Matcher::pattern("*i*h*")], 0_i64, &options()));
	assert_eq!(get::<i64>(&root, &[Matcher::exact("width")], &options()), Some(0));
	assert_eq!(get::<i64>(&root, &[Matcher::exact("height")], &options()), Some(1080));
}

#[test]
fn set_skips_unassignable_slots_and_keeps_searching() {
	let mut root = fixture();
	// Str slots reject an Int; the first Int slot takes it.
	assert!(set(&mut root, &[Matcher::pattern("*")], 7_i64, &options()));
	assert_eq!(get::<String>(&root, &[Matcher::exact("name")], &options()), Some("main".to_owned()));
	assert_eq!(get::<i64>(&root, &[Matcher::exact("width")], &options()), Some(7));
	assert_eq!(get::<i64>(&root, &[Matcher::exact("height")], &options()), Some(1080));
}

#[test]
fn set_reports_false_when_nothing_is_assignable() {
	let mut root = fixture();
	assert!(!set(&mut root, &[Matcher::exact("name")], 1_i64, &options()));
	assert_eq!(root, fixture());
}

#[test]
fn set_by_filters_on_the_requested_type() {
	let mut root = fixture();
	let changed = set_by::<i64, _>(
		&mut root,
		&[Matcher::pattern("*")],
		|old| SetOutcome::set(old * 2),
		&options(),
	);
	assert!(changed);
	assert_eq!(get::<i64>(&root, &[Matcher::exact("width")], &options()), Some(3840));
	assert_eq!(get::<i64>(&root, &[Matcher::exact("height")], &options()), Some(1080));
}

#[test]
fn set_all_counts_every_change() {
	let mut root = fixture();
	let count = set_all_by::<i64, _>(&mut root, &[Matcher::pattern("*")], |old| SetOutcome::set(old + 1), &options());
	assert_eq!(count, 2);
	assert_eq!(get_all::<i64>(&root, &[Matcher::pattern("*")], &options()), vec![1921, 1081]);
}

#[test]
fn set_all_with_constant_value_touches_each_assignable_slot() {
	let mut root = Value::seq([1_i64, 2_i64, 3_i64]);
	assert_eq!(set_all(&mut root, &[Matcher::pattern("*")], 0_i64, &options()), 3);
	assert_eq!(root, Value::seq([0_i64, 0_i64, 0_i64]));
}

#[test]
fn setter_can_stop_the_operation_early() {
	let mut root = Value::seq([1_i64, 2_i64, 3_i64]);
	let count = set_all_by::<i64, _>(
		&mut root,
		&[Matcher::pattern("*")],
		|old| SetOutcome::set(old * 10).stop(),
		&options(),
	);
	assert_eq!(count, 1);
	assert_eq!(root, Value::seq([10_i64, 2_i64, 3_i64]));
}

#[test]
fn setter_skip_leaves_values_alone() {
	let mut root = Value::seq([1_i64, 2_i64]);
	let count = set_all_by::<i64, _>(&mut root, &[Matcher::pattern("*")], |_| SetOutcome::skip(), &options());
	assert_eq!(count, 0);
	assert_eq!(root, Value::seq([1_i64, 2_i64]));
}

#[test]
fn writes_into_container_slots_stay_boxed() {
	let mut root = Value::map([("slot", Value::any(Value::Int(1)))]);
	assert!(set(&mut root, &[Matcher::exact("slot")], Value::from("replaced"), &options()));
	assert_eq!(root, Value::map([("slot", Value::any(Value::from("replaced")))]));
}

#[test]
fn record_replacement_requires_the_same_type_name() {
	let point = RecordValue::new("Point").field("x", 1_i64);
	let mut root = Value::map([("p", Value::from(point))]);

	let size = Value::from(RecordValue::new("Size").field("x", 9_i64));
	assert!(!set(&mut root, &[Matcher::exact("p")], size, &options()));

	let moved = Value::from(RecordValue::new("Point").field("x", 9_i64));
	assert!(set(&mut root, &[Matcher::exact("p")], moved.clone(), &options()));
	assert_eq!(get::<Value>(&root, &[Matcher::exact("p")], &options()), Some(moved));
}
