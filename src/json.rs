//! Conversions between [`Value`] trees and `serde_json` values.
//!
//! JSON objects become maps with string keys (not records: JSON carries
//! no nominal type or field-order contract), arrays become sequences,
//! and numbers become `Int`, `UInt`, or `Float` in that preference
//! order. The reverse rendering is lossy by construction: containers and
//! indirection cells are unwrapped, records render as objects, and map
//! keys are stringified (entries with non-stringifiable keys are
//! dropped).

use crate::value::{MapEntry, Value, try_stringify};

impl From<serde_json::Value> for Value {
	fn from(json: serde_json::Value) -> Self {
		match json {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(b),
			serde_json::Value::Number(number) => {
				if let Some(n) = number.as_i64() {
					Value::Int(n)
				} else if let Some(n) = number.as_u64() {
					Value::UInt(n)
				} else {
					Value::Float(number.as_f64().unwrap_or(f64::NAN))
				}
			}
			serde_json::Value::String(text) => Value::Str(text),
			serde_json::Value::Array(items) => Value::Seq(items.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(entries) => Value::Map(
				entries
					.into_iter()
					.map(|(key, value)| MapEntry {
						key: Value::Str(key),
						value: Value::from(value),
					})
					.collect(),
			),
		}
	}
}

/// Render a value tree as JSON.
pub fn to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Null => serde_json::Value::Null,
		Value::Bool(b) => serde_json::Value::Bool(*b),
		Value::Int(n) => serde_json::Value::from(*n),
		Value::UInt(n) => serde_json::Value::from(*n),
		Value::Float(n) => serde_json::Number::from_f64(*n)
			.map(serde_json::Value::Number)
			.unwrap_or(serde_json::Value::Null),
		Value::Str(text) => serde_json::Value::from(text.as_str()),
		Value::Seq(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
		Value::Map(entries) => {
			let mut object = serde_json::Map::new();
			for entry in entries {
				if let Some(key) = try_stringify(&entry.key) {
					object.insert(key, to_json(&entry.value));
				}
			}
			serde_json::Value::Object(object)
		}
		Value::Record(record) => {
			let mut object = serde_json::Map::new();
			for field in &record.fields {
				object.insert(field.name.to_string(), to_json(&field.value));
			}
			serde_json::Value::Object(object)
		}
		Value::Any(inner) => to_json(inner),
		Value::Ref(cell) => to_json(&cell.borrow()),
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::to_json;
	use crate::value::{RecordValue, Value};

	#[test]
	fn json_trees_become_maps_and_seqs() {
		let value = Value::from(json!({
			"name": "scene",
			"flags": [1, 2.5, true, null],
			"big": u64::MAX,
		}));

		let Value::Map(entries) = &value else {
			panic!("expected map root");
		};
		assert_eq!(entries.len(), 3);
		assert_eq!(entries[0].key, Value::Str("big".to_owned()));
		assert_eq!(entries[0].value, Value::UInt(u64::MAX));
		assert_eq!(
			entries[1].value,
			Value::seq([Value::Int(1), Value::Float(2.5), Value::Bool(true), Value::Null])
		);
	}

	#[test]
	fn rendering_unwraps_boxes_and_stringifies_keys() {
		let record = RecordValue::new("Point").field("x", 1_i64).field("y", 2_i64);
		let value = Value::map([
			(Value::from("point"), Value::any(Value::from(record))),
			(Value::Int(7), Value::shared(Value::from("seven"))),
			(Value::seq([0_i64]), Value::from("dropped")),
		]);

		assert_eq!(
			to_json(&value),
			json!({
				"point": { "x": 1, "y": 2 },
				"7": "seven",
			})
		);
	}
}
