use crate::location::{Key, Location};
use crate::matcher::Matcher;
use crate::value::Value;

/// Behavior switches fixed for the lifetime of one traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
	/// Treat embedded record fields as ordinary fields instead of
	/// promoting their own fields into the parent's namespace.
	pub no_flat_embeds: bool,
	/// Do not descend into records. A record can still be returned as a
	/// terminal match selected by an earlier segment.
	pub ignore_records: bool,
	/// Do not descend into maps. Does not prevent map terminal matches.
	pub ignore_maps: bool,
	/// Do not descend into sequences. Does not prevent sequence terminal
	/// matches.
	pub ignore_seqs: bool,
}

/// One terminal match: the path was fully consumed at this value.
#[derive(Debug, Clone)]
pub struct Found {
	location: Location,
	parent: Option<Location>,
	key: Option<Key>,
}

impl Found {
	/// The matched value. Not unboxed: a boxed or indirected match is
	/// handed over as stored, so callers can inspect the wrapper.
	pub fn value(&self) -> Value {
		self.location.read()
	}

	/// The writable slot holding the matched value. Writes land in the
	/// working copy that a mutating walk commits back to the tree.
	pub fn location(&self) -> &Location {
		&self.location
	}

	/// The concrete composite the value was read from, unboxed. `None`
	/// only when the root itself matched.
	pub fn parent(&self) -> Option<Value> {
		self.parent.as_ref().map(Location::unboxed)
	}

	/// The key that reads the value out of the parent. Its variant is
	/// determined by the parent kind.
	pub fn key(&self) -> Option<&Key> {
		self.key.as_ref()
	}
}

/// Callback fired on every terminal match. Return false to stop the
/// whole traversal.
pub type FoundFn<'f> = dyn FnMut(&Found) -> bool + 'f;

pub(crate) struct Walker<'w> {
	path: &'w [Matcher],
	options: &'w WalkOptions,
	write_back: bool,
	on_found: &'w mut FoundFn<'w>,
}

/// One matcher's view of the traversal at a fixed path index.
pub(crate) struct Segment<'s, 'w> {
	walker: &'s mut Walker<'w>,
	index: usize,
}

impl<'w> Walker<'w> {
	/// Apply the matcher at `index` to the value held by `location`.
	/// Index equal to the path length is the terminal state and fires
	/// the found callback.
	fn match_at(&mut self, index: usize, location: &Location, parent: Option<&Location>, key: Option<&Key>) -> bool {
		if index == self.path.len() {
			let found = Found {
				location: location.clone(),
				parent: parent.cloned(),
				key: key.cloned(),
			};
			return (self.on_found)(&found);
		}

		let path = self.path;
		path[index].matches(location, &mut Segment { walker: self, index })
	}

	/// Allocate a working slot for a child value, traverse the subtree,
	/// and in write-back mode commit the slot's final content to the
	/// parent. The commit is unconditional: detecting no-op writes is not
	/// attempted, and committing an unchanged value is semantically a
	/// no-op anyway.
	fn descend(&mut self, index: usize, value: Value, parent: &Location, key: Key) -> bool {
		let child = Location::new(value);
		let keep_searching = self.match_at(index, &child, Some(parent), Some(&key));
		if self.write_back {
			parent.write_child(&key, child.take());
		}
		keep_searching
	}
}

impl Segment<'_, '_> {
	/// Traversal configuration.
	pub(crate) fn options(&self) -> &WalkOptions {
		self.walker.options
	}

	/// Advance to the next path segment with a child value. False means
	/// traversal must not continue.
	pub(crate) fn next(&mut self, value: Value, parent: &Location, key: Key) -> bool {
		self.walker.descend(self.index + 1, value, parent, key)
	}

	/// Re-apply the current segment's matcher to a child value, used for
	/// recursive and embed-flattening behavior.
	pub(crate) fn stay(&mut self, value: Value, parent: &Location, key: Key) -> bool {
		self.walker.descend(self.index, value, parent, key)
	}
}

/// Read-only traversal over a value tree.
///
/// The root is cloned into a working slot; the callback observes matches
/// but writes through [`Found::location`] are discarded.
pub fn walk<'w>(root: &Value, path: &'w [Matcher], options: &'w WalkOptions, on_found: &'w mut FoundFn<'w>) {
	let location = Location::new(root.clone());
	let mut walker = Walker {
		path,
		options,
		write_back: false,
		on_found,
	};
	walker.match_at(0, &location, None, None);
}

/// Mutating traversal over a value tree.
///
/// Every traversal step commits its working slot back to the parent, so
/// writes through [`Found::location`] cascade up to `root`, including
/// writes into values reached through map lookups, boxed composites and
/// indirection cells.
pub fn walk_mut<'w>(root: &mut Value, path: &'w [Matcher], options: &'w WalkOptions, on_found: &'w mut FoundFn<'w>) {
	let location = Location::new(std::mem::take(root));
	let mut walker = Walker {
		path,
		options,
		write_back: true,
		on_found,
	};
	walker.match_at(0, &location, None, None);
	*root = location.take();
}
