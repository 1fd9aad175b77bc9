//! Fjall-backed property buckets

use std::collections::HashMap;

use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};

use super::bucket::{Bucket, PropertyBuckets};
use crate::config::ShardConfig;
use crate::error::Result;
use crate::schema::ClassSchema;

/// Bucket identifier for a property
///
/// Centralized so the key-space layout has a single source of truth.
pub fn bucket_name_for_prop(property: &str) -> String {
    format!("property_{property}")
}

/// One property's posting rows, backed by a fjall partition
pub struct PropertyBucket {
    partition: PartitionHandle,
}

impl Bucket for PropertyBucket {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.partition.get(key)?.map(|slice| slice.to_vec()))
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.partition.insert(key, value)?;
        Ok(())
    }
}

/// All property buckets of one shard
///
/// One partition per declared property, preallocated at open so that a
/// failed lookup only ever means schema drift.
pub struct PropertyStore {
    keyspace: Keyspace,
    buckets: HashMap<String, PropertyBucket>,
}

impl PropertyStore {
    pub fn open(config: &ShardConfig, class: &ClassSchema) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let keyspace = fjall::Config::new(&config.data_dir).open()?;

        let mut buckets = HashMap::with_capacity(class.properties.len());
        for spec in &class.properties {
            let partition = keyspace.open_partition(
                &bucket_name_for_prop(&spec.name),
                PartitionCreateOptions::default(),
            )?;
            buckets.insert(spec.name.clone(), PropertyBucket { partition });
        }

        Ok(Self { keyspace, buckets })
    }

    /// Flush all buckets durably to disk
    pub fn persist(&self) -> Result<()> {
        self.keyspace.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}

impl PropertyBuckets for PropertyStore {
    type Bucket = PropertyBucket;

    fn bucket_for(&mut self, property: &str) -> Option<&mut PropertyBucket> {
        self.buckets.get_mut(property)
    }
}
