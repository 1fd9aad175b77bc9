//! Object pipeline
//!
//! Analysis output is applied to the per-property buckets: for each
//! analyzed property, resolve its bucket, then insert or delete one
//! posting row entry per item. Mutations run in schema property order,
//! then analyzer item order.

use tracing::debug;

use crate::analysis::{Analyzer, Property};
use crate::config::ShardConfig;
use crate::error::{CuttleError, Result};
use crate::models::{DocId, StoredObject};
use crate::persistence::{Bucket, PropertyBuckets, PropertyStore};
use crate::postings::{self, DocEntry, Row};
use crate::schema::{ClassSchema, SchemaRegistry};

/// Apply one object's analyzed properties to their buckets
///
/// A non-frequency property must have produced exactly one item; text
/// and string properties insert one row entry per distinct term.
pub fn extend_rows<P: PropertyBuckets>(
    store: &mut P,
    props: &[Property],
    doc_id: DocId,
) -> Result<()> {
    for prop in props {
        let bucket = store
            .bucket_for(&prop.name)
            .ok_or_else(|| CuttleError::MissingBucket(prop.name.clone()))?;

        if prop.has_frequency {
            for item in &prop.items {
                postings::insert_with_frequency(bucket, &item.data, doc_id, item.term_frequency)?;
            }
        } else {
            if prop.items.len() != 1 {
                return Err(CuttleError::SchemaMismatch {
                    property: prop.name.clone(),
                    detail: format!(
                        "property has no frequency but {} items",
                        prop.items.len()
                    ),
                });
            }
            postings::insert(bucket, &prop.items[0].data, doc_id)?;
        }
    }

    Ok(())
}

/// Remove one object's analyzed properties from their buckets
pub fn delete_rows<P: PropertyBuckets>(
    store: &mut P,
    props: &[Property],
    doc_id: DocId,
) -> Result<()> {
    for prop in props {
        let bucket = store
            .bucket_for(&prop.name)
            .ok_or_else(|| CuttleError::MissingBucket(prop.name.clone()))?;

        for item in &prop.items {
            postings::delete(bucket, &item.data, doc_id, prop.has_frequency)?;
        }
    }

    Ok(())
}

/// A single class shard: the resolved class schema plus the
/// fjall-backed buckets holding its posting rows
pub struct Shard {
    class: ClassSchema,
    store: PropertyStore,
    analyzer: Analyzer,
}

impl std::fmt::Debug for Shard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shard")
            .field("class", &self.class.name)
            .finish_non_exhaustive()
    }
}

impl Shard {
    /// Open (or create) the shard for `class_name`, preallocating one
    /// bucket per declared property
    pub fn open(config: &ShardConfig, schema: &SchemaRegistry, class_name: &str) -> Result<Self> {
        let class = schema
            .lookup(class_name)
            .ok_or_else(|| CuttleError::UnknownClass(class_name.to_string()))?
            .clone();
        let store = PropertyStore::open(config, &class)?;
        Ok(Self::from_parts(class, store))
    }

    /// Assemble a shard from parts, for callers that manage bucket
    /// allocation themselves
    pub fn from_parts(class: ClassSchema, store: PropertyStore) -> Self {
        Self {
            class,
            store,
            analyzer: Analyzer::new(),
        }
    }

    pub fn class(&self) -> &ClassSchema {
        &self.class
    }

    /// Analyze and index one object under `doc_id`
    pub fn index_object(&mut self, doc_id: DocId, object: &StoredObject) -> Result<()> {
        let props = self.analyze_object(object)?;
        debug!(doc_id, class = %object.class, properties = props.len(), "index object");
        extend_rows(&mut self.store, &props, doc_id)
    }

    /// Remove one object's rows, symmetric to [`Shard::index_object`]
    pub fn deindex_object(&mut self, doc_id: DocId, object: &StoredObject) -> Result<()> {
        let props = self.analyze_object(object)?;
        debug!(doc_id, class = %object.class, properties = props.len(), "deindex object");
        delete_rows(&mut self.store, &props, doc_id)
    }

    /// Update path: delete the previous version's rows, then index the
    /// new version. Row inserts never deduplicate, so this is what
    /// keeps each `(term, doc id)` pair unique across updates.
    pub fn reindex_object(
        &mut self,
        doc_id: DocId,
        previous: &StoredObject,
        object: &StoredObject,
    ) -> Result<()> {
        self.deindex_object(doc_id, previous)?;
        self.index_object(doc_id, object)
    }

    /// Read the posting entries for one term of one property. Absent
    /// rows read as empty.
    pub fn posting(&mut self, property: &str, term: &[u8]) -> Result<Vec<DocEntry>> {
        let has_frequency = self
            .class
            .property(property)
            .ok_or_else(|| CuttleError::MissingBucket(property.to_string()))?
            .kind
            .has_frequency();
        let bucket = self
            .store
            .bucket_for(property)
            .ok_or_else(|| CuttleError::MissingBucket(property.to_string()))?;

        match bucket.get(term)? {
            Some(data) if !data.is_empty() => {
                Ok(Row::decode(&data, has_frequency, term)?.entries().to_vec())
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Flush all buckets durably to disk
    pub fn persist(&self) -> Result<()> {
        self.store.persist()
    }

    fn analyze_object(&self, object: &StoredObject) -> Result<Vec<Property>> {
        if object.class != self.class.name {
            return Err(CuttleError::UnknownClass(object.class.clone()));
        }

        let Some(properties) = &object.properties else {
            return Ok(Vec::new());
        };
        self.analyzer.object(properties, &self.class.properties)
    }
}
