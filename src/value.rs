use derive_more::Display;
use im_rc::Vector;
use itertools::Itertools;
use std::any::Any;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::ops;
use std::rc::Rc;

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Display)]
#[display(fmt = "{}", "_0")]
pub struct Name(Rc<str>);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ops::Deref for Name {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self(Rc::from(name))
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Self(Rc::from(name))
    }
}

/// An opaque host value, compared by identity rather than by content.
#[derive(Clone)]
pub struct Object {
    label: Name,
    value: Rc<dyn Any>,
}

impl Object {
    pub fn new<T: Any>(label: impl Into<Name>, value: T) -> Self {
        Self {
            label: label.into(),
            value: Rc::new(value),
        }
    }

    pub fn label(&self) -> &Name {
        &self.label
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }
}

impl PartialEq for Object {
    #[allow(clippy::vtable_address_comparisons)]
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl Eq for Object {}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<{}>", self.label)
    }
}

/// Keyword arguments in the order they were supplied.
///
/// Inserting a name that is already present replaces its value but keeps its
/// original position. Two maps are equal when they bind the same names to the
/// same values, regardless of order.
#[derive(Clone, Debug, Default)]
pub struct Keywords(Vector<(Name, Value)>);

impl Keywords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<Name>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<Name>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter().position(|(existing, _)| *existing == name) {
            Some(index) => {
                self.0.set(index, (name, value));
            }
            None => self.0.push_back((name, value)),
        }
    }

    pub fn merge(&mut self, other: Keywords) {
        for (name, value) in other.0 {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter().find(|(existing, _)| existing.as_str() == name).map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &Name> + '_ {
        self.0.iter().map(|(name, _)| name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> + '_ {
        self.0.iter().map(|(name, value)| (name, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for Keywords {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for Keywords {}

impl<N, V> FromIterator<(N, V)> for Keywords
where
    N: Into<Name>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut keywords = Self::new();
        for (name, value) in iter {
            keywords.insert(name, value);
        }

        keywords
    }
}

impl fmt::Display for Keywords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self.iter().format_with(", ", |(name, value), f| f(&format_args!("{}: {}", name, value)));
        write!(f, "{{{}}}", pairs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Str(Rc<str>),
    List(Vector<Value>),
    Map(Keywords),
    Object(Object),
}

impl Value {
    pub fn as_map(&self) -> Option<&Keywords> {
        match self {
            Value::Map(keywords) => Some(keywords),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Str(value) => write!(f, "{:?}", value),
            Value::List(values) => write!(f, "[{}]", values.iter().join(", ")),
            Value::Map(keywords) => write!(f, "{}", keywords),
            Value::Object(object) => write!(f, "{}", object),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Nil
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

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(Rc::from(value))
    }
}

impl From<Keywords> for Value {
    fn from(keywords: Keywords) -> Self {
        Value::Map(keywords)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values.into_iter().collect())
    }
}
