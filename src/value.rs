use std::cell::RefCell;
use std::rc::Rc;

/// Shared mutable cell behind a [`Value::Ref`] indirection.
pub type SharedValue = Rc<RefCell<Value>>;

/// Runtime value of unknown static shape.
///
/// Cloning is deep for owned composites and shallow for [`Value::Ref`]
/// cells: the shared cell is aliased, so writes through one clone are
/// visible through every other. That is the pointer semantics the
/// indirection variant exists to model.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent value. Also the terminal of a dangling `Ref` chain.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	Int(i64),
	/// Unsigned integer scalar.
	UInt(u64),
	/// Floating point scalar.
	Float(f64),
	/// Text scalar.
	Str(String),
	/// Ordered, integer-indexed sequence.
	Seq(Vec<Value>),
	/// Associative entries in insertion order. Keys are scalar values
	/// compared with `==`.
	Map(Vec<MapEntry>),
	/// Composite with a fixed set of named fields.
	Record(RecordValue),
	/// Polymorphic container boxing exactly one value of any kind.
	Any(Box<Value>),
	/// Pointer-like indirection cell.
	Ref(SharedValue),
}

/// Discriminant for [`Value`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
	/// [`Value::Null`].
	Null,
	/// [`Value::Bool`].
	Bool,
	/// [`Value::Int`].
	Int,
	/// [`Value::UInt`].
	UInt,
	/// [`Value::Float`].
	Float,
	/// [`Value::Str`].
	Str,
	/// [`Value::Seq`].
	Seq,
	/// [`Value::Map`].
	Map,
	/// [`Value::Record`].
	Record,
	/// [`Value::Any`].
	Any,
	/// [`Value::Ref`].
	Ref,
}

/// One key/value pair inside [`Value::Map`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
	/// Entry key. Expected to be a scalar of a uniform kind per map.
	pub key: Value,
	/// Entry value.
	pub value: Value,
}

/// Composite value with named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
	/// Nominal type name, used for record-to-record assignability.
	pub type_name: Box<str>,
	/// Fields in declaration order.
	pub fields: Vec<FieldValue>,
}

/// One named field of a [`RecordValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field name.
	pub name: Box<str>,
	/// Whether the field is an embedded record whose own fields are
	/// treated as promoted into the parent's namespace when matching.
	pub embedded: bool,
	/// Field value.
	pub value: Value,
}

impl Default for Value {
	fn default() -> Self {
		Value::Null
	}
}

impl Value {
	/// Wrap a value in a fresh indirection cell.
	pub fn shared(value: Value) -> Self {
		Value::Ref(Rc::new(RefCell::new(value)))
	}

	/// Box a value in a polymorphic container.
	pub fn any(value: impl Into<Value>) -> Self {
		Value::Any(Box::new(value.into()))
	}

	/// Build a map value from key/value pairs in insertion order.
	pub fn map<K: Into<Value>, V: Into<Value>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
		Value::Map(
			entries
				.into_iter()
				.map(|(key, value)| MapEntry {
					key: key.into(),
					value: value.into(),
				})
				.collect(),
		)
	}

	/// Build a sequence value.
	pub fn seq<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
		Value::Seq(items.into_iter().map(Into::into).collect())
	}

	/// Variant discriminant.
	pub fn kind(&self) -> Kind {
		match self {
			Value::Null => Kind::Null,
			Value::Bool(_) => Kind::Bool,
			Value::Int(_) => Kind::Int,
			Value::UInt(_) => Kind::UInt,
			Value::Float(_) => Kind::Float,
			Value::Str(_) => Kind::Str,
			Value::Seq(_) => Kind::Seq,
			Value::Map(_) => Kind::Map,
			Value::Record(_) => Kind::Record,
			Value::Any(_) => Kind::Any,
			Value::Ref(_) => Kind::Ref,
		}
	}

	/// Borrow the concrete value behind one polymorphic-container layer
	/// and any number of indirection cells.
	///
	/// A `Ref` chain ending in [`Value::Null`] yields `Null`. A container
	/// nested inside another container is not stripped further.
	pub fn with_unboxed<R>(&self, f: impl FnOnce(&Value) -> R) -> R {
		match self {
			Value::Any(inner) => deref_chain(inner, f),
			Value::Ref(_) => deref_chain(self, f),
			other => f(other),
		}
	}

	/// Mutable counterpart of [`Value::with_unboxed`].
	pub fn with_unboxed_mut<R>(&mut self, f: impl FnOnce(&mut Value) -> R) -> R {
		match self {
			Value::Any(inner) => deref_chain_mut(inner, f),
			Value::Ref(_) => deref_chain_mut(self, f),
			other => f(other),
		}
	}

	/// Clone of the concrete value behind container and indirection layers.
	pub fn unbox(&self) -> Value {
		self.with_unboxed(Value::clone)
	}

	/// Discriminant of the concrete value behind container and
	/// indirection layers.
	pub fn unboxed_kind(&self) -> Kind {
		self.with_unboxed(Value::kind)
	}

	/// Whether `incoming` may be stored where `self` currently lives.
	///
	/// Kinds must agree, records additionally by type name. A polymorphic
	/// container accepts anything (the incoming value is re-boxed on
	/// write).
	pub fn can_assign(&self, incoming: &Value) -> bool {
		match self {
			Value::Any(_) => true,
			Value::Record(target) => {
				matches!(incoming, Value::Record(source) if source.type_name == target.type_name)
			}
			_ => self.kind() == incoming.kind(),
		}
	}
}

fn deref_chain<R>(value: &Value, f: impl FnOnce(&Value) -> R) -> R {
	match value {
		Value::Ref(cell) => {
			let target = cell.borrow();
			deref_chain(&target, f)
		}
		other => f(other),
	}
}

fn deref_chain_mut<R>(value: &mut Value, f: impl FnOnce(&mut Value) -> R) -> R {
	match value {
		Value::Ref(cell) => {
			let mut target = cell.borrow_mut();
			deref_chain_mut(&mut target, f)
		}
		other => f(other),
	}
}

impl RecordValue {
	/// Start an empty record of the given nominal type.
	pub fn new(type_name: &str) -> Self {
		Self {
			type_name: Box::from(type_name),
			fields: Vec::new(),
		}
	}

	/// Append a named field.
	pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
		self.fields.push(FieldValue {
			name: Box::from(name),
			embedded: false,
			value: value.into(),
		});
		self
	}

	/// Append an embedded field.
	pub fn embedded(mut self, name: &str, value: impl Into<Value>) -> Self {
		self.fields.push(FieldValue {
			name: Box::from(name),
			embedded: true,
			value: value.into(),
		});
		self
	}

	/// Field value by name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}

	/// Replace a field value by name. Returns false when the field does
	/// not exist; records have a fixed field set.
	pub fn set(&mut self, name: &str, value: Value) -> bool {
		match self.fields.iter_mut().find(|field| field.name.as_ref() == name) {
			Some(field) => {
				field.value = value;
				true
			}
			None => false,
		}
	}
}

impl From<RecordValue> for Value {
	fn from(record: RecordValue) -> Self {
		Value::Record(record)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Value::UInt(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Str(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Str(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Value::Seq(items)
	}
}

/// Render a scalar value as a string for key matching.
///
/// Succeeds for text, integers, floats (shortest round-trippable form),
/// and booleans; fails for everything else.
pub fn try_stringify(value: &Value) -> Option<String> {
	match value {
		Value::Str(text) => Some(text.clone()),
		Value::Int(n) => Some(n.to_string()),
		Value::UInt(n) => Some(n.to_string()),
		Value::Float(n) => Some(n.to_string()),
		Value::Bool(b) => Some(b.to_string()),
		_ => None,
	}
}

/// Typed extraction from a found value.
///
/// Scalar implementations see through one polymorphic-container layer,
/// matching how an interface-boxed scalar type-asserts in dynamic
/// languages; they do not see through indirection cells.
pub trait FromValue: Sized {
	/// Extract `Self` from the value, or `None` on a kind mismatch.
	fn from_value(value: &Value) -> Option<Self>;
}

fn scalar_view(value: &Value) -> &Value {
	match value {
		Value::Any(inner) => inner,
		other => other,
	}
}

impl FromValue for Value {
	fn from_value(value: &Value) -> Option<Self> {
		Some(value.clone())
	}
}

impl FromValue for i64 {
	fn from_value(value: &Value) -> Option<Self> {
		match scalar_view(value) {
			Value::Int(n) => Some(*n),
			_ => None,
		}
	}
}

impl FromValue for u64 {
	fn from_value(value: &Value) -> Option<Self> {
		match scalar_view(value) {
			Value::UInt(n) => Some(*n),
			_ => None,
		}
	}
}

impl FromValue for f64 {
	fn from_value(value: &Value) -> Option<Self> {
		match scalar_view(value) {
			Value::Float(n) => Some(*n),
			_ => None,
		}
	}
}

impl FromValue for bool {
	fn from_value(value: &Value) -> Option<Self> {
		match scalar_view(value) {
			Value::Bool(b) => Some(*b),
			_ => None,
		}
	}
}

impl FromValue for String {
	fn from_value(value: &Value) -> Option<Self> {
		match scalar_view(value) {
			Value::Str(text) => Some(text.clone()),
			_ => None,
		}
	}
}
