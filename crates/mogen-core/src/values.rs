//! Generated values, records and batches.

use serde::{Deserialize, Serialize};

/// A single generated field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedValue {
    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int64(i64),

    /// String value
    String(String),
}

impl GeneratedValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            GeneratedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int64(i) => Some(*i),
            _ => None,
        }
    }
}

/// One output row: field names mapped to generated values.
///
/// Fields keep the order in which they were first inserted. Inserting an
/// existing name replaces its value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, GeneratedValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Set a field value, returning the previous value for that name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: GeneratedValue,
    ) -> Option<GeneratedValue> {
        let name = name.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&GeneratedValue> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratedValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Record {
    type Item = (String, GeneratedValue);
    type IntoIter = std::vec::IntoIter<(String, GeneratedValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// A group of records submitted in one bulk write.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Batch {
    /// Zero-based position of this batch in generation order
    pub sequence: u64,
    pub records: Vec<Record>,
}

impl Batch {
    pub fn new(sequence: u64, records: Vec<Record>) -> Self {
        Self { sequence, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
