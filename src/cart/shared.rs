use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{ExtraOption, Price, Product};

use super::{Cart, CartSnapshot, LineKey};

/// A cart handle that can be cloned across tasks.
///
/// Every mutation holds the write lock across key lookup and update; reads
/// hold the read lock, so they never see a half-applied command.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    inner: Arc<RwLock<Cart>>,
}

impl SharedCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(
        &self,
        product: &Product,
        extras: Vec<ExtraOption>,
        note: impl Into<String>,
    ) -> LineKey {
        self.inner.write().await.add(product, extras, note)
    }

    pub async fn remove(&self, key: &LineKey) {
        self.inner.write().await.remove(key);
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    pub async fn total(&self) -> Price {
        self.inner.read().await.total()
    }

    pub async fn item_count(&self) -> u32 {
        self.inner.read().await.item_count()
    }

    /// Lines and totals read under a single lock.
    pub async fn snapshot(&self) -> CartSnapshot {
        self.inner.read().await.snapshot()
    }
}

impl From<Cart> for SharedCart {
    fn from(cart: Cart) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cart)),
        }
    }
}
