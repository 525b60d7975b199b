use crate::error::NO_MATCH;
use crate::matcher::Matcher;
use crate::value::{FromValue, Value};
use crate::walk::{Found, WalkOptions, walk, walk_mut};

/// Decision returned by a setter callback for one found value.
#[derive(Debug, Clone)]
pub struct SetOutcome {
	/// Replacement value, or `None` to leave the found value alone.
	/// A replacement that is not assignable to the found slot is
	/// silently skipped and not counted as a change.
	pub value: Option<Value>,
	/// Whether the operation may keep visiting further matches. For the
	/// single-shot set operations this is additionally cut off by the
	/// first successful change.
	pub keep_searching: bool,
}

impl SetOutcome {
	/// Replace the found value and keep searching.
	pub fn set(value: impl Into<Value>) -> Self {
		Self {
			value: Some(value.into()),
			keep_searching: true,
		}
	}

	/// Leave the found value alone and keep searching.
	pub fn skip() -> Self {
		Self {
			value: None,
			keep_searching: true,
		}
	}

	/// Stop the traversal after this decision is applied.
	pub fn stop(mut self) -> Self {
		self.keep_searching = false;
		self
	}
}

/// First value of type `T` matching the path, in traversal order.
///
/// Matches of a different type are skipped and the search continues.
pub fn get<T: FromValue>(root: &Value, path: &[Matcher], options: &WalkOptions) -> Option<T> {
	let mut result = None;
	walk(root, path, options, &mut |found: &Found| match T::from_value(&found.value()) {
		Some(value) => {
			result = Some(value);
			false
		}
		None => true,
	});
	result
}

/// First value of type `T` matching the path.
///
/// # Panics
///
/// Panics with [`NO_MATCH`] when nothing matched.
pub fn must_get<T: FromValue>(root: &Value, path: &[Matcher], options: &WalkOptions) -> T {
	match get(root, path, options) {
		Some(value) => value,
		None => panic!("{NO_MATCH}"),
	}
}

/// Every value of type `T` matching the path, in traversal order.
pub fn get_all<T: FromValue>(root: &Value, path: &[Matcher], options: &WalkOptions) -> Vec<T> {
	let mut results = Vec::new();
	walk(root, path, options, &mut |found: &Found| {
		if let Some(value) = T::from_value(&found.value()) {
			results.push(value);
		}
		true
	});
	results
}

/// Replace the first assignable match with a fixed value. Returns
/// whether a change was made.
pub fn set(root: &mut Value, path: &[Matcher], value: impl Into<Value>, options: &WalkOptions) -> bool {
	let value = value.into();
	set_by::<Value, _>(root, path, |_| SetOutcome::set(value.clone()), options)
}

/// Replace the first match of type `T` that the setter rewrites.
/// Returns whether a change was made.
pub fn set_by<T: FromValue, F: FnMut(T) -> SetOutcome>(
	root: &mut Value,
	path: &[Matcher],
	mut setter: F,
	options: &WalkOptions,
) -> bool {
	let mut changed = false;
	walk_mut(root, path, options, &mut |found: &Found| {
		let Some(old_value) = T::from_value(&found.value()) else {
			return true;
		};
		let outcome = setter(old_value);
		if apply(found, outcome.value) {
			changed = true;
		}
		outcome.keep_searching && !changed
	});
	changed
}

/// Replace every assignable match with a fixed value. Returns the
/// number of changes made.
pub fn set_all(root: &mut Value, path: &[Matcher], value: impl Into<Value>, options: &WalkOptions) -> usize {
	let value = value.into();
	set_all_by::<Value, _>(root, path, |_| SetOutcome::set(value.clone()), options)
}

/// Replace every match of type `T` that the setter rewrites. Returns
/// the number of changes made.
pub fn set_all_by<T: FromValue, F: FnMut(T) -> SetOutcome>(
	root: &mut Value,
	path: &[Matcher],
	mut setter: F,
	options: &WalkOptions,
) -> usize {
	let mut count = 0_usize;
	walk_mut(root, path, options, &mut |found: &Found| {
		let Some(old_value) = T::from_value(&found.value()) else {
			return true;
		};
		let outcome = setter(old_value);
		if apply(found, outcome.value) {
			count += 1;
		}
		outcome.keep_searching
	});
	count
}

/// Write a replacement into the found slot when assignable. A value
/// written into a polymorphic-container slot is re-boxed so the slot
/// keeps its container kind.
fn apply(found: &Found, replacement: Option<Value>) -> bool {
	let Some(new_value) = replacement else {
		return false;
	};
	let current = found.value();
	if !current.can_assign(&new_value) {
		return false;
	}
	let stored = if matches!(current, Value::Any(_)) && !matches!(new_value, Value::Any(_)) {
		Value::any(new_value)
	} else {
		new_value
	};
	found.location().write(stored);
	true
}

#[cfg(test)]
mod tests;
