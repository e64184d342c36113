use async_trait::async_trait;

use agora_core::{Product, ProductDraft, ProductId, ProductPatch};

use crate::error::CatalogResult;

/// Port for the remote catalog service
///
/// One HTTP call per operation, no retries, no client-side timeouts beyond
/// transport defaults. Implementations surface failures through the
/// `CatalogError` taxonomy and never touch local state.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full product collection
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    /// Fetch the products belonging to one category
    async fn list_by_category(&self, category: &str) -> CatalogResult<Vec<Product>>;

    /// Create a product; the server assigns the identifier
    async fn create(&self, draft: &ProductDraft) -> CatalogResult<Product>;

    /// Apply a partial update to an existing product
    async fn update(&self, id: ProductId, patch: &ProductPatch) -> CatalogResult<Product>;

    /// Delete a product by identifier
    async fn remove(&self, id: ProductId) -> CatalogResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ensure the port stays object-safe; synchronizer and session hold it
    // as `Arc<dyn CatalogApi>`.
    fn _assert_object_safe(_: &dyn CatalogApi) {}
}
