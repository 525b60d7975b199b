//! Path-driven traversal and in-place mutation of dynamically shaped
//! value trees.
//!
//! A tree of [`Value`]s (records, maps, sequences and scalars, possibly
//! wrapped in polymorphic containers or indirection cells) is searched
//! with a sequence of [`Matcher`]s. Exhausting the path fires a match;
//! the result operations interpret matches as typed reads
//! ([`get`], [`get_all`]) or in-place writes ([`set`], [`set_all`] and
//! their callback variants), including writes into values reached
//! through non-addressable storage such as map lookups and boxed
//! composites.
//!
//! ```
//! use pathwalk::{Value, WalkOptions, get_all, must_parse_path};
//!
//! let scene = Value::map([
//! 	("width", 1920_i64),
//! 	("height", 1080_i64),
//! ]);
//! let path = must_parse_path("*", false);
//! assert_eq!(get_all::<i64>(&scene, &path, &WalkOptions::default()), vec![1920, 1080]);
//! ```

mod error;
mod json;
mod location;
mod matcher;
mod ops;
mod path;
mod value;
mod walk;
mod wild;

/// Error and result aliases.
pub use error::{NO_MATCH, PathError, Result};
/// JSON rendering for value trees.
pub use json::to_json;
/// Writable slot and parent-access key types.
pub use location::{Key, Location};
/// Path segment matchers.
pub use matcher::{MatchExact, MatchMulti, MatchPattern, Matcher};
/// Typed read and write operations over matched values.
pub use ops::{SetOutcome, get, get_all, must_get, set, set_all, set_all_by, set_by};
/// Textual path compiler.
pub use path::{must_parse_path, parse_path};
/// Runtime value model and typed extraction.
pub use value::{FieldValue, FromValue, Kind, MapEntry, RecordValue, SharedValue, Value, try_stringify};
/// Traversal entry points, configuration, and match events.
pub use walk::{Found, FoundFn, WalkOptions, walk, walk_mut};
/// Wildcard string matching primitive.
pub use wild::wild_match;
