//! In-memory item store.
//!
//! The store owns the ordered item sequence. Handles are cheap to clone and
//! share one sequence; every append goes through the write lock, so concurrent
//! creates are serialized and none is lost.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::types::Item;

#[derive(Clone, Debug, Default)]
pub struct ItemStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl ItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Store holding the three catalog entries present at startup.
    pub fn seeded() -> Self {
        Self::new(vec![
            Item::new("984058981", "Green", "M"),
            Item::new("984058982", "Blue", "L"),
            Item::new("984058983", "Red", "S"),
        ])
    }

    /// Snapshot of every item in insertion order.
    pub async fn list_all(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    /// Appends `item` unchanged and hands it back.
    pub async fn create(&self, item: Item) -> Item {
        self.items.write().await.push(item.clone());
        item
    }
}
