use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::sync::watch;

use agora_core::{Product, ProductDraft, ProductId, ProductPatch};
use agora_gateway::{GatewayConfig, RestCatalogClient};
use agora_ports::{CatalogApi, CatalogResult};
use agora_sync::{
    CatalogSync, CollectionEntry, Debouncer, QueryStatus, QueryStore, derive_view,
};

/// Delay before a burst of search keystrokes settles
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(500);

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Quiescence delay for the search box
    pub search_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            search_delay: DEFAULT_SEARCH_DELAY,
        }
    }
}

/// One dashboard session: the synchronized collection, the debounced search
/// box, and the derived grid behind it
///
/// Mutation entry points log success notifications at info level (the toast
/// collaborator's contract) and propagate failures per-action; only a failed
/// load changes the collection status.
pub struct DashboardSession {
    sync: CatalogSync,
    debouncer: Debouncer,
    stabilized: watch::Receiver<String>,
}

impl DashboardSession {
    /// Wire a session over any catalog port implementation
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self::with_config(api, SessionConfig::default())
    }

    pub fn with_config(api: Arc<dyn CatalogApi>, config: SessionConfig) -> Self {
        let (debouncer, stabilized) = Debouncer::new(config.search_delay);
        Self {
            sync: CatalogSync::new(api, QueryStore::new()),
            debouncer,
            stabilized,
        }
    }

    /// Wire a session over the REST gateway
    pub fn connect(config: GatewayConfig) -> Self {
        Self::new(Arc::new(RestCatalogClient::new(config)))
    }

    /// Initial load of the product grid
    pub async fn load(&self) -> CatalogResult<()> {
        self.sync.fetch_all().await
    }

    /// Retry after a failed load (the error state's retry button)
    pub async fn retry(&self) -> CatalogResult<()> {
        self.sync.invalidate().await
    }

    /// Raw search input, one call per keystroke
    pub fn search(&mut self, raw: &str) {
        self.debouncer.observe(raw);
    }

    /// Stabilized search term currently applied to the grid
    pub fn search_term(&self) -> String {
        self.stabilized.borrow().clone()
    }

    /// The filtered, display-ready product sequence
    pub fn visible(&self) -> Vec<Product> {
        derive_view(&self.sync.snapshot().items, &self.search_term())
    }

    /// Collection snapshot: status, items, last error
    pub fn collection(&self) -> CollectionEntry {
        self.sync.snapshot()
    }

    /// True while the initial fetch or a retry is in flight
    pub fn is_loading(&self) -> bool {
        self.collection().is_loading()
    }

    /// True when the load succeeded but nothing matches the search
    pub fn is_empty(&self) -> bool {
        self.collection().status == QueryStatus::Success && self.visible().is_empty()
    }

    /// Add a product from a form submission
    ///
    /// Field validation runs before the draft reaches the network.
    pub async fn add(&self, draft: ProductDraft) -> CatalogResult<Product> {
        draft.validate()?;

        match self.sync.create(&draft).await {
            Ok(product) => {
                info!("Product added: {} (id {})", product.title, product.id);
                Ok(product)
            }
            Err(err) => {
                error!("Product add failed: {}", err);
                Err(err)
            }
        }
    }

    /// Edit a product from a form submission
    pub async fn edit(&self, id: ProductId, patch: ProductPatch) -> CatalogResult<Product> {
        match self.sync.update(id, &patch).await {
            Ok(product) => {
                info!("Product updated: id {}", id);
                Ok(product)
            }
            Err(err) => {
                error!("Product update failed: {}", err);
                Err(err)
            }
        }
    }

    /// Delete after the confirmation dialog yields an identifier
    pub async fn delete(&self, id: ProductId) -> CatalogResult<()> {
        match self.sync.remove(id).await {
            Ok(()) => {
                info!("Product deleted: id {}", id);
                Ok(())
            }
            Err(err) => {
                error!("Product delete failed: {}", err);
                Err(err)
            }
        }
    }
}
