//! Field store.
//!
//! # Responsibilities
//! - Represent a set of structured key/value fields
//! - Merge two field sets with last-write-wins semantics
//!
//! # Design Decisions
//! - `Fields` is immutable; every mutation returns a new value
//! - Backing map is shared through `Arc` and only copied when written,
//!   so derived sets never alias writable state with their origin
//! - Keys are kept sorted (`BTreeMap`), which is also the render order
//! - Values are `serde_json::Value` and are never inspected by the core

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// An opaque field value, passed through to the backend unexamined.
pub type FieldValue = serde_json::Value;

/// Reserved key under which `with_error` stores an error's description.
pub const ERROR_KEY: &str = "error";

/// Immutable set of structured log fields.
#[derive(Clone, Default, PartialEq)]
pub struct Fields {
    inner: Arc<BTreeMap<String, FieldValue>>,
}

impl Fields {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new set equal to `self` with `key` set to `value`.
    pub fn with(&self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let mut map = BTreeMap::clone(&self.inner);
        map.insert(key.into(), value.into());
        Self { inner: Arc::new(map) }
    }

    /// Return `self` overlaid with `overlay`; keys in `overlay` win.
    ///
    /// Neither input is modified. When one side is empty the other side's
    /// storage is shared, which is safe because it can never be written.
    pub fn merge(&self, overlay: &Fields) -> Self {
        if overlay.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return overlay.clone();
        }

        let mut map = BTreeMap::clone(&self.inner);
        for (key, value) in overlay.iter() {
            map.insert(key.to_owned(), value.clone());
        }
        Self { inner: Arc::new(map) }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.inner.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Debug for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map: BTreeMap<String, FieldValue> = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { inner: Arc::new(map) }
    }
}

impl From<BTreeMap<String, FieldValue>> for Fields {
    fn from(map: BTreeMap<String, FieldValue>) -> Self {
        Self { inner: Arc::new(map) }
    }
}

/// Build a [`Fields`] set from `key => value` pairs.
///
/// ```
/// let fields = ctxlog::fields! { "user" => "alice", "attempt" => 3 };
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::fields::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        <$crate::fields::Fields as ::std::iter::FromIterator<(String, $crate::fields::FieldValue)>>::from_iter([
            $((::std::string::String::from($key), $crate::fields::FieldValue::from($value))),+
        ])
    };
}
