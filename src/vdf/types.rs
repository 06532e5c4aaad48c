//! KeyValues document model

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single KeyValues value
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
    UInt64(u64),
    Float(f32),
    Doc(Document),
    /// Never produced by the decoders, but accepted wherever Steam is known
    /// to use "one or many" fields.
    List(Vec<Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_doc(&self) -> Option<&Document> {
        match self {
            Value::Doc(d) => Some(d),
            _ => None,
        }
    }

    /// Numeric view of the value; decimal strings count as numbers since the
    /// text encoding has no integer type.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Str(s) => s.trim().parse().ok(),
            Value::Int(i) => u64::try_from(*i).ok(),
            Value::UInt64(u) => Some(*u),
            _ => None,
        }
    }
}

/// An ordered mapping from keys to values
///
/// Insertion order is kept, but Steam makes no promise about the order it
/// writes keys in, so callers that care about numeric order must sort.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    entries: Vec<(String, Value)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, following Steam's duplicate-key behaviour: two nested
    /// documents under the same key are merged, anything else is replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => match (existing, value) {
                (Value::Doc(old), Value::Doc(new)) => {
                    for (k, v) in new.entries {
                        old.insert(k, v);
                    }
                }
                (slot, value) => *slot = value,
            },
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Case-insensitive lookup; an exact match wins over a case-folded one.
    pub fn get_ci(&self, key: &str) -> Option<&Value> {
        self.get(key).or_else(|| {
            self.entries
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        })
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get_ci(key).and_then(Value::as_str)
    }

    pub fn get_doc(&self, key: &str) -> Option<&Document> {
        self.get_ci(key).and_then(Value::as_doc)
    }

    /// Walk nested documents, matching every path segment case-insensitively
    pub fn path(&self, segments: &[&str]) -> Option<&Value> {
        let (last, parents) = segments.split_last()?;
        let mut doc = self;
        for segment in parents {
            doc = doc.get_doc(segment)?;
        }
        doc.get_ci(last)
    }

    pub fn path_doc(&self, segments: &[&str]) -> Option<&Document> {
        self.path(segments).and_then(Value::as_doc)
    }

    /// Lower-case every top-level key. Keys that collide after folding are
    /// resolved with [`Document::insert`] semantics.
    pub fn lowercase_keys(self) -> Document {
        let mut out = Document::new();
        for (k, v) in self.entries {
            out.insert(k.to_lowercase(), v);
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut doc = Document::new();
        for (k, v) in iter {
            doc.insert(k, v);
        }
        doc
    }
}
