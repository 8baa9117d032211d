use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::path::DbPath;
use crate::store::Database;

/// In-memory JSON tree with the same path semantics as the real store.
/// Serves as a test double and as a dry-run target.
#[derive(Default)]
pub struct MemoryDb {
    tree: Mutex<Value>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the whole tree, for assertions.
    pub fn snapshot(&self) -> Value {
        self.tree.lock().unwrap().clone()
    }
}

fn lookup<'a>(tree: &'a Value, path: &DbPath) -> Option<&'a Value> {
    let mut node = tree;
    for segment in path.segments() {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}

#[async_trait]
impl Database for MemoryDb {
    async fn read(&self, path: &DbPath) -> Result<Option<Value>> {
        let tree = self.tree.lock().unwrap();
        Ok(lookup(&tree, path)
            .filter(|value| !value.is_null())
            .cloned())
    }

    async fn write(&self, path: &DbPath, value: &Value) -> Result<()> {
        let mut tree = self.tree.lock().unwrap();
        let mut node = &mut *tree;
        for segment in path.segments() {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            let Value::Object(map) = node else {
                unreachable!()
            };
            node = map.entry(segment.as_str()).or_insert(Value::Null);
        }
        *node = value.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn absent_path_reads_as_none() {
        let db = MemoryDb::new();
        let path = DbPath::parse("seasons/2022/events").unwrap();
        assert!(db.read(&path).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let db = MemoryDb::new();
        let path = DbPath::parse("events/2022/K2345678AB").unwrap();
        db.write(&path, &json!({"eventCode": "MIKET"})).await.unwrap();

        let value = db.read(&path).await.unwrap().unwrap();
        assert_eq!(value, json!({"eventCode": "MIKET"}));
    }

    #[tokio::test]
    async fn parent_path_reads_all_children() {
        let db = MemoryDb::new();
        let root = DbPath::parse("events/2022").unwrap();
        db.write(&root.child("AAA2345678"), &json!({"eventCode": "MIKET"}))
            .await
            .unwrap();
        db.write(&root.child("BBB2345678"), &json!({"eventCode": "MITRY"}))
            .await
            .unwrap();

        let children = db.read(&root).await.unwrap().unwrap();
        let children = children.as_object().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children["AAA2345678"]["eventCode"], "MIKET");
        assert_eq!(children["BBB2345678"]["eventCode"], "MITRY");
    }

    #[tokio::test]
    async fn write_replaces_the_previous_value() {
        let db = MemoryDb::new();
        let path = DbPath::parse("events/2022/K2345678AB").unwrap();
        db.write(&path, &json!({"eventCode": "MIKET"})).await.unwrap();
        db.write(&path, &json!({"eventCode": "MITRY"})).await.unwrap();

        let value = db.read(&path).await.unwrap().unwrap();
        assert_eq!(value["eventCode"], "MITRY");
    }
}
