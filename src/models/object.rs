use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable 32-bit identifier for an object within a shard
pub type DocId = u32;

/// An object as handed to the indexing pipeline: its class name plus
/// the dynamic property map. Object identity and full serialization
/// live upstream.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredObject {
    pub class: String,
    /// Property name to JSON value. `None` analyzes to no properties.
    pub properties: Option<Map<String, Value>>,
}

impl StoredObject {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            properties: None,
        }
    }

    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = Some(properties);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_without_properties() {
        let object = StoredObject::new("Article");
        assert!(object.properties.is_none());
    }

    #[test]
    fn test_object_with_properties() {
        let map = json!({"title": "hello"}).as_object().unwrap().clone();
        let object = StoredObject::new("Article").with_properties(map);
        assert_eq!(
            object.properties.unwrap().get("title"),
            Some(&json!("hello"))
        );
    }
}
