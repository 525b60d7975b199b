use std::cell::RefCell;
use std::rc::Rc;

use crate::value::{Kind, Value};

/// Access key used to read a value out of its owning parent composite.
///
/// The variant is determined by the parent kind: records are keyed by
/// field name, maps by entry key, sequences by index.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
	/// Record field name.
	Field(String),
	/// Map entry key.
	Entry(Value),
	/// Sequence index.
	Index(usize),
}

/// Writable storage slot for one traversal step.
///
/// Every descent clones the child value out of its parent into a fresh
/// location; after the subtree traversal returns, a mutating walk commits
/// the location's final content back into the parent at the key. Values
/// reached through non-addressable storage (map lookups, boxed
/// composites) become writable this way without special cases. Cloning a
/// location aliases the same slot.
#[derive(Debug, Clone)]
pub struct Location(Rc<RefCell<Value>>);

impl Location {
	/// Wrap a value in a fresh writable slot.
	pub fn new(value: Value) -> Self {
		Self(Rc::new(RefCell::new(value)))
	}

	/// Clone of the current slot content.
	pub fn read(&self) -> Value {
		self.0.borrow().clone()
	}

	/// Replace the slot content.
	pub fn write(&self, value: Value) {
		*self.0.borrow_mut() = value;
	}

	/// Move the slot content out, leaving [`Value::Null`].
	pub fn take(&self) -> Value {
		std::mem::take(&mut *self.0.borrow_mut())
	}

	/// Borrow the slot content.
	pub fn with<R>(&self, f: impl FnOnce(&Value) -> R) -> R {
		f(&self.0.borrow())
	}

	/// Clone of the concrete composite behind container and indirection
	/// layers.
	pub fn unboxed(&self) -> Value {
		self.0.borrow().unbox()
	}

	/// Concrete kind behind container and indirection layers.
	pub fn unboxed_kind(&self) -> Kind {
		self.0.borrow().unboxed_kind()
	}

	/// Snapshot of `(name, embedded)` for every field of the concrete
	/// record, in declaration order. Empty for non-records.
	pub fn record_fields(&self) -> Vec<(String, bool)> {
		self.0.borrow().with_unboxed(|concrete| match concrete {
			Value::Record(record) => record
				.fields
				.iter()
				.map(|field| (field.name.to_string(), field.embedded))
				.collect(),
			_ => Vec::new(),
		})
	}

	/// Snapshot of every key of the concrete map, in insertion order.
	/// Empty for non-maps.
	pub fn map_keys(&self) -> Vec<Value> {
		self.0.borrow().with_unboxed(|concrete| match concrete {
			Value::Map(entries) => entries.iter().map(|entry| entry.key.clone()).collect(),
			_ => Vec::new(),
		})
	}

	/// Element count of the concrete sequence. Zero for non-sequences.
	pub fn seq_len(&self) -> usize {
		self.0.borrow().with_unboxed(|concrete| match concrete {
			Value::Seq(items) => items.len(),
			_ => 0,
		})
	}

	/// Clone the child stored under `key` in the concrete composite.
	pub fn read_child(&self, key: &Key) -> Option<Value> {
		self.0.borrow().with_unboxed(|concrete| match (key, concrete) {
			(Key::Field(name), Value::Record(record)) => record.get(name).cloned(),
			(Key::Entry(wanted), Value::Map(entries)) => entries
				.iter()
				.find(|entry| entry.key == *wanted)
				.map(|entry| entry.value.clone()),
			(Key::Index(index), Value::Seq(items)) => items.get(*index).cloned(),
			_ => None,
		})
	}

	/// Store `value` under `key` in the concrete composite.
	///
	/// Map writes overwrite an existing entry or append a new one; record
	/// and sequence writes require the key to exist. Returns whether the
	/// write landed.
	pub fn write_child(&self, key: &Key, value: Value) -> bool {
		self.0.borrow_mut().with_unboxed_mut(|concrete| match (key, concrete) {
			(Key::Field(name), Value::Record(record)) => record.set(name, value),
			(Key::Entry(wanted), Value::Map(entries)) => {
				match entries.iter_mut().find(|entry| entry.key == *wanted) {
					Some(entry) => entry.value = value,
					None => entries.push(crate::value::MapEntry {
						key: wanted.clone(),
						value,
					}),
				}
				true
			}
			(Key::Index(index), Value::Seq(items)) => match items.get_mut(*index) {
				Some(slot) => {
					*slot = value;
					true
				}
				None => false,
			},
			_ => false,
		})
	}
}
