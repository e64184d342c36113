use std::sync::Arc;

use log::{debug, warn};

use agora_core::{Product, ProductDraft, ProductId, ProductPatch};
use agora_ports::{CatalogApi, CatalogResult};

use crate::patch::{append_item, remove_by_id, replace_by_id};
use crate::store::{CollectionEntry, PRODUCTS_KEY, QueryStore};

/// Keeps the locally cached product collection consistent with the remote
/// catalog.
///
/// Exactly one cache entry exists for the collection. Every mutation success
/// patches that entry inside the completion path of its network call, so
/// patches land in the order responses arrive; nothing serializes concurrent
/// mutations on the same identifier. Failures leave the cache untouched and
/// propagate to the caller.
pub struct CatalogSync {
    api: Arc<dyn CatalogApi>,
    store: QueryStore,
}

impl CatalogSync {
    pub fn new(api: Arc<dyn CatalogApi>, store: QueryStore) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &QueryStore {
        &self.store
    }

    /// Current snapshot of the collection entry
    pub fn snapshot(&self) -> CollectionEntry {
        self.store
            .get(PRODUCTS_KEY)
            .unwrap_or_else(CollectionEntry::idle)
    }

    /// Fetch the full collection
    ///
    /// Transitions the entry to `Loading`, then to `Success` with the fresh
    /// sequence or to `Error` with the failure. A failure keeps whatever was
    /// cached before; `Error` is terminal for the attempt and only
    /// `invalidate` re-enters `Loading`.
    pub async fn fetch_all(&self) -> CatalogResult<()> {
        self.store.update(PRODUCTS_KEY, CollectionEntry::loading);

        match self.api.list().await {
            Ok(items) => {
                debug!("fetched {} products", items.len());
                self.store.update(PRODUCTS_KEY, |e| e.resolved(items));
                Ok(())
            }
            Err(err) => {
                warn!("product fetch failed: {}", err);
                self.store
                    .update(PRODUCTS_KEY, |e| e.failed(err.clone()));
                Err(err)
            }
        }
    }

    /// Explicit retry path out of the `Error` state
    pub async fn invalidate(&self) -> CatalogResult<()> {
        debug!("invalidating product collection");
        self.fetch_all().await
    }

    /// Create a product and append it to the cache on success
    ///
    /// No speculative insert: the cache changes only once the server has
    /// assigned an identifier.
    pub async fn create(&self, draft: &ProductDraft) -> CatalogResult<Product> {
        let created = self.api.create(draft).await?;
        debug!("created product {} ({})", created.id, created.title);

        let appended = created.clone();
        self.store
            .update(PRODUCTS_KEY, move |e| {
                e.map_items(|items| append_item(items, appended))
            });
        Ok(created)
    }

    /// Update a product and merge the submitted patch into the cache on
    /// success
    ///
    /// The merge uses the fields the caller sent, keyed by identifier. An
    /// identifier missing from the cache makes the merge a no-op.
    pub async fn update(&self, id: ProductId, patch: &ProductPatch) -> CatalogResult<Product> {
        let updated = self.api.update(id, patch).await?;
        debug!("updated product {}", id);

        if !self.snapshot().items.iter().any(|p| p.id == id) {
            warn!("update for product {} not in cache; merge is a no-op", id);
        }

        let patch = patch.clone();
        self.store.update(PRODUCTS_KEY, move |e| {
            e.map_items(|items| replace_by_id(items, id, &patch))
        });
        Ok(updated)
    }

    /// Delete a product and drop it from the cache on success
    ///
    /// An identifier missing from the cache is a no-op.
    pub async fn remove(&self, id: ProductId) -> CatalogResult<()> {
        self.api.remove(id).await?;
        debug!("removed product {}", id);

        self.store.update(PRODUCTS_KEY, move |e| {
            e.map_items(|items| remove_by_id(items, id))
        });
        Ok(())
    }
}
