//! Secondary index creation before a load.

use crate::error::StoreError;
use bson::{doc, Document};
use mongodb::{Collection, IndexModel};
use tracing::info;

/// One ascending single-field index per name.
pub fn index_models<S: AsRef<str>>(fields: &[S]) -> Vec<IndexModel> {
    fields
        .iter()
        .map(|field| {
            IndexModel::builder()
                .keys(doc! { field.as_ref(): 1 })
                .build()
        })
        .collect()
}

/// Create ascending indexes on `fields` in a single request.
///
/// Returns the number of indexes requested; does nothing when `fields` is empty.
pub async fn create_indexes<S: AsRef<str>>(
    collection: &Collection<Document>,
    fields: &[S],
) -> Result<usize, StoreError> {
    if fields.is_empty() {
        return Ok(0);
    }

    let models = index_models(fields);
    let count = models.len();
    let result = collection
        .create_indexes(models)
        .await
        .map_err(|source| StoreError::Index {
            collection: collection.name().to_string(),
            source,
        })?;

    info!(
        "Created {} index(es) on '{}': {:?}",
        count,
        collection.name(),
        result.index_names
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_models_are_ascending() {
        let models = index_models(&["firstName", "active"]);

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].keys, doc! { "firstName": 1 });
        assert_eq!(models[1].keys, doc! { "active": 1 });
    }

    #[test]
    fn test_no_index_models_for_no_fields() {
        assert!(index_models::<&str>(&[]).is_empty());
    }
}
