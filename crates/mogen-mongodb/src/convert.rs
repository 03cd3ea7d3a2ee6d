//! Conversion of generated records into BSON documents.

use bson::{Bson, Document};
use mogen_core::{GeneratedValue, Record};

/// Wrapper for BSON values that can be inserted into MongoDB.
#[derive(Debug, Clone, PartialEq)]
pub struct BsonValue(pub Bson);

impl BsonValue {
    /// Get the inner BSON value.
    pub fn into_inner(self) -> Bson {
        self.0
    }
}

impl From<GeneratedValue> for BsonValue {
    fn from(value: GeneratedValue) -> Self {
        match value {
            GeneratedValue::Bool(b) => BsonValue(Bson::Boolean(b)),
            GeneratedValue::Int64(i) => BsonValue(Bson::Int64(i)),
            GeneratedValue::String(s) => BsonValue(Bson::String(s)),
        }
    }
}

/// Convert a record into a document, keeping field order.
///
/// `_id` is left to the server.
pub fn record_to_document(record: &Record) -> Document {
    let mut doc = Document::new();
    for (name, value) in record.iter() {
        doc.insert(name, BsonValue::from(value.clone()).into_inner());
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_to_document() {
        let mut record = Record::new();
        record.insert("name", GeneratedValue::String("Liam".to_string()));
        record.insert("active", GeneratedValue::Bool(true));
        record.insert("age", GeneratedValue::Int64(31));

        let doc = record_to_document(&record);

        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["name", "active", "age"]);
        assert_eq!(doc.get_str("name").unwrap(), "Liam");
        assert!(doc.get_bool("active").unwrap());
        assert_eq!(doc.get_i64("age").unwrap(), 31);
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn test_value_conversion() {
        assert_eq!(
            BsonValue::from(GeneratedValue::Bool(false)).into_inner(),
            Bson::Boolean(false)
        );
        assert_eq!(
            BsonValue::from(GeneratedValue::Int64(-4)).into_inner(),
            Bson::Int64(-4)
        );
    }
}
