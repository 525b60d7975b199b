use crate::location::{Key, Location};
use crate::value::{Kind, Value, try_stringify};
use crate::walk::Segment;
use crate::wild::wild_match;

/// One path segment's matching strategy.
///
/// Matchers are stateless with respect to traversal and may be reused
/// across calls. A matcher enumerates the children of the concrete
/// composite at its step and decides, per child, whether to advance to
/// the next path segment ([`Segment::next`]) or re-apply itself
/// ([`Segment::stay`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Matcher {
	/// Exact match by key value.
	Exact(MatchExact),
	/// Wildcard string pattern match.
	Pattern(MatchPattern),
	/// Recursive descent: match anything at any depth.
	Multi(MatchMulti),
}

/// Exact match by key value.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchExact {
	/// The key to match with: a string for record field names, an
	/// integer for sequence indices, the map's key type for map entries.
	pub value: Value,
}

/// Match keys by a wildcard string pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPattern {
	/// Wildcard pattern; `*` matches any run of characters.
	pub pattern: String,
	/// Only consider map keys that are already strings instead of
	/// coercing other scalar keys. Suppresses all sequence matches.
	pub only_string_keys: bool,
	/// ASCII case-insensitive comparison.
	pub case_insensitive: bool,
}

/// Recursive free matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchMulti {
	/// Explore deeper with the current segment before consuming it.
	/// Changes traversal order but not the set of found values.
	pub stay_first: bool,
}

impl Matcher {
	/// Exact matcher for the given key.
	pub fn exact(value: impl Into<Value>) -> Self {
		Matcher::Exact(MatchExact { value: value.into() })
	}

	/// Case-sensitive wildcard matcher for the given pattern.
	pub fn pattern(pattern: &str) -> Self {
		Matcher::Pattern(MatchPattern {
			pattern: pattern.to_owned(),
			only_string_keys: false,
			case_insensitive: false,
		})
	}

	/// Recursive descent matcher with next-before-stay ordering.
	pub fn multi() -> Self {
		Matcher::Multi(MatchMulti { stay_first: false })
	}

	pub(crate) fn matches(&self, location: &Location, seg: &mut Segment<'_, '_>) -> bool {
		match self {
			Matcher::Exact(exact) => exact.matches(location, seg),
			Matcher::Pattern(pattern) => pattern.matches(location, seg),
			Matcher::Multi(multi) => multi.matches(location, seg),
		}
	}
}

impl MatchExact {
	fn matches(&self, location: &Location, seg: &mut Segment<'_, '_>) -> bool {
		match location.unboxed_kind() {
			Kind::Record => self.match_record(location, seg),
			Kind::Map => self.match_map(location, seg),
			Kind::Seq => self.match_seq(location, seg),
			_ => true,
		}
	}

	fn match_record(&self, location: &Location, seg: &mut Segment<'_, '_>) -> bool {
		if seg.options().ignore_records {
			return true;
		}
		let Value::Str(wanted) = &self.value else {
			return true;
		};
		for (name, embedded) in location.record_fields() {
			if name == *wanted {
				let Some(child) = location.read_child(&Key::Field(name.clone())) else {
					continue;
				};
				if !seg.next(child, location, Key::Field(name.clone())) {
					return false;
				}
			}
			// Embedded fields stay reachable without naming them.
			if !seg.options().no_flat_embeds && embedded {
				let Some(child) = location.read_child(&Key::Field(name.clone())) else {
					continue;
				};
				if !seg.stay(child, location, Key::Field(name)) {
					return false;
				}
			}
		}
		true
	}

	fn match_map(&self, location: &Location, seg: &mut Segment<'_, '_>) -> bool {
		if seg.options().ignore_maps {
			return true;
		}
		// A key of the wrong kind never compares equal: no match, no error.
		let Some(found_key) = location.map_keys().into_iter().find(|key| *key == self.value) else {
			return true;
		};
		let Some(child) = location.read_child(&Key::Entry(found_key.clone())) else {
			return true;
		};
		seg.next(child, location, Key::Entry(found_key))
	}

	fn match_seq(&self, location: &Location, seg: &mut Segment<'_, '_>) -> bool {
		if seg.options().ignore_seqs {
			return true;
		}
		let index = match self.value {
			Value::Int(i) if i >= 0 => i as usize,
			Value::UInt(u) => u as usize,
			_ => return true,
		};
		if index >= location.seq_len() {
			return true;
		}
		let Some(child) = location.read_child(&Key::Index(index)) else {
			return true;
		};
		seg.next(child, location, Key::Index(index))
	}
}

impl MatchPattern {
	fn matches(&self, location: &Location, seg: &mut Segment<'_, '_>) -> bool {
		match location.unboxed_kind() {
			Kind::Record => self.match_record(location, seg),
			Kind::Map => self.match_map(location, seg),
			Kind::Seq => self.match_seq(location, seg),
			_ => true,
		}
	}

	fn match_record(&self, location: &Location, seg: &mut Segment<'_, '_>) -> bool {
		if seg.options().ignore_records {
			return true;
		}
		for (name, embedded) in location.record_fields() {
			if wild_match(&self.pattern, &name, self.case_insensitive) {
				let Some(child) = location.read_child(&Key::Field(name.clone())) else {
					continue;
				};
				if !seg.next(child, location, Key::Field(name.clone())) {
					return false;
				}
			}
			if !seg.options().no_flat_embeds && embedded {
				let Some(child) = location.read_child(&Key::Field(name.clone())) else {
					continue;
				};
				if !seg.stay(child, location, Key::Field(name)) {
					return false;
				}
			}
		}
		true
	}

	fn match_map(&self, location: &Location, seg: &mut Segment<'_, '_>) -> bool {
		if seg.options().ignore_maps {
			return true;
		}
		for key in location.map_keys() {
			let key_text = if self.only_string_keys {
				match &key {
					Value::Str(text) => Some(text.clone()),
					_ => None,
				}
			} else {
				try_stringify(&key)
			};
			// Non-coercible keys are skipped, never an error.
			let Some(key_text) = key_text else {
				continue;
			};
			if !wild_match(&self.pattern, &key_text, self.case_insensitive) {
				continue;
			}
			let Some(child) = location.read_child(&Key::Entry(key.clone())) else {
				continue;
			};
			if !seg.next(child, location, Key::Entry(key)) {
				return false;
			}
		}
		true
	}

	fn match_seq(&self, location: &Location, seg: &mut Segment<'_, '_>) -> bool {
		if seg.options().ignore_seqs {
			return true;
		}
		// Indices are never strings, so only_string_keys rules them all out.
		if self.only_string_keys {
			return true;
		}
		for index in 0..location.seq_len() {
			if !wild_match(&self.pattern, &index.to_string(), self.case_insensitive) {
				continue;
			}
			let Some(child) = location.read_child(&Key::Index(index)) else {
				continue;
			};
			if !seg.next(child, location, Key::Index(index)) {
				return false;
			}
		}
		true
	}
}

impl MatchMulti {
	fn matches(&self, location: &Location, seg: &mut Segment<'_, '_>) -> bool {
		match location.unboxed_kind() {
			Kind::Record => {
				if seg.options().ignore_records {
					return true;
				}
				for (name, _) in location.record_fields() {
					if !self.visit(location, Key::Field(name), seg) {
						return false;
					}
				}
				true
			}
			Kind::Map => {
				if seg.options().ignore_maps {
					return true;
				}
				for key in location.map_keys() {
					if !self.visit(location, Key::Entry(key), seg) {
						return false;
					}
				}
				true
			}
			Kind::Seq => {
				if seg.options().ignore_seqs {
					return true;
				}
				for index in 0..location.seq_len() {
					if !self.visit(location, Key::Index(index), seg) {
						return false;
					}
				}
				true
			}
			_ => true,
		}
	}

	// Both continuations run per child. The first one's write-back may
	// replace the child, so it is re-read from the parent before each.
	fn visit(&self, location: &Location, key: Key, seg: &mut Segment<'_, '_>) -> bool {
		if self.stay_first {
			stay_op(location, &key, seg) && next_op(location, &key, seg)
		} else {
			next_op(location, &key, seg) && stay_op(location, &key, seg)
		}
	}
}

fn next_op(location: &Location, key: &Key, seg: &mut Segment<'_, '_>) -> bool {
	match location.read_child(key) {
		Some(child) => seg.next(child, location, key.clone()),
		None => true,
	}
}

fn stay_op(location: &Location, key: &Key, seg: &mut Segment<'_, '_>) -> bool {
	match location.read_child(key) {
		Some(child) => seg.stay(child, location, key.clone()),
		None => true,
	}
}
