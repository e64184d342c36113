//! Integration test: synchronizer <-> catalog port
//!
//! Drives CatalogSync through an in-memory catalog double and checks the
//! cached collection after each completion.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal_macros::dec;

use agora_core::{Product, ProductDraft, ProductId, ProductPatch};
use agora_ports::{CatalogApi, CatalogError, CatalogResult};
use agora_sync::{CatalogSync, QueryStatus, QueryStore, derive_view};

/// In-memory catalog double: behaves like the remote service, with an
/// injectable one-shot failure for the next call.
#[derive(Default)]
struct FakeCatalog {
    products: Mutex<Vec<Product>>,
    next_id: Mutex<ProductId>,
    fail_next: Mutex<Option<CatalogError>>,
    create_calls: AtomicUsize,
}

impl FakeCatalog {
    fn new() -> Self {
        Self {
            next_id: Mutex::new(1),
            ..Self::default()
        }
    }

    fn seed(&self, product: Product) {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(product.id + 1);
        self.products.lock().unwrap().push(product);
    }

    fn fail_next(&self, err: CatalogError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    fn take_failure(&self) -> CatalogResult<()> {
        if let Some(err) = self.fail_next.lock().unwrap().take() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        self.take_failure()?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn list_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        self.take_failure()?;
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &ProductDraft) -> CatalogResult<Product> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;

        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        let product = draft.clone().into_product(id);
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, patch: &ProductPatch) -> CatalogResult<Product> {
        self.take_failure()?;

        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = patch.apply_to(existing);
                Ok(existing.clone())
            }
            None => Err(CatalogError::Server {
                status: 404,
                message: format!("product {} not found", id),
            }),
        }
    }

    async fn remove(&self, id: ProductId) -> CatalogResult<()> {
        self.take_failure()?;
        self.products.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}

fn shirt() -> Product {
    Product {
        id: 1,
        title: "Shirt".to_string(),
        price: dec!(22.30),
        description: "Slim fit".to_string(),
        category: "men's clothing".to_string(),
        image: "https://img.example.com/shirt.png".to_string(),
    }
}

fn hat_draft() -> ProductDraft {
    ProductDraft::new(
        "Hat",
        dec!(12.50),
        "accessories",
        "https://img.example.com/hat.png",
    )
}

fn sync_over(catalog: Arc<FakeCatalog>) -> CatalogSync {
    CatalogSync::new(catalog, QueryStore::new())
}

#[tokio::test]
async fn test_fetch_then_create_appends_in_order() {
    let _ = env_logger::try_init();

    let catalog = Arc::new(FakeCatalog::new());
    catalog.seed(shirt());
    let sync = sync_over(catalog.clone());

    sync.fetch_all().await.unwrap();
    let created = sync.create(&hat_draft()).await.unwrap();
    assert_eq!(created.id, 2, "server assigned the identifier");

    let entry = sync.snapshot();
    assert_eq!(entry.status, QueryStatus::Success);
    assert_eq!(
        entry.items.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 2],
        "created product is appended after the fetched one"
    );
}

#[tokio::test]
async fn test_remove_drops_only_matching() {
    let _ = env_logger::try_init();

    let catalog = Arc::new(FakeCatalog::new());
    catalog.seed(shirt());
    catalog.seed(hat_draft().into_product(2));
    let sync = sync_over(catalog);

    sync.fetch_all().await.unwrap();
    sync.remove(1).await.unwrap();

    let entry = sync.snapshot();
    assert_eq!(entry.items.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
}

#[tokio::test]
async fn test_update_merges_single_element() {
    let _ = env_logger::try_init();

    let catalog = Arc::new(FakeCatalog::new());
    catalog.seed(shirt());
    catalog.seed(hat_draft().into_product(2));
    let sync = sync_over(catalog);

    sync.fetch_all().await.unwrap();
    let patch = ProductPatch::new().with_price(dec!(9.99));
    sync.update(2, &patch).await.unwrap();

    let entry = sync.snapshot();
    let hat = entry.items.iter().find(|p| p.id == 2).unwrap();
    assert_eq!(hat.price, dec!(9.99));
    assert_eq!(hat.title, "Hat", "unset fields keep their values");
    assert_eq!(
        entry.items.iter().find(|p| p.id == 1).unwrap(),
        &shirt(),
        "other elements are untouched"
    );
}

#[tokio::test]
async fn test_update_for_uncached_id_leaves_cache_alone() {
    let _ = env_logger::try_init();

    let catalog = Arc::new(FakeCatalog::new());
    catalog.seed(shirt());
    let sync = sync_over(catalog.clone());

    sync.fetch_all().await.unwrap();
    // the server gains a product the cache has never seen
    catalog.seed(hat_draft().into_product(2));

    let patch = ProductPatch::new().with_price(dec!(5.00));
    sync.update(2, &patch).await.unwrap();

    let entry = sync.snapshot();
    assert_eq!(
        entry.items.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1],
        "merge for an uncached id is a no-op"
    );
}

#[tokio::test]
async fn test_fetch_error_then_explicit_retry() {
    let _ = env_logger::try_init();

    let catalog = Arc::new(FakeCatalog::new());
    catalog.seed(shirt());
    let sync = sync_over(catalog.clone());

    sync.fetch_all().await.unwrap();
    assert_eq!(sync.snapshot().status, QueryStatus::Success);

    catalog.fail_next(CatalogError::Server {
        status: 500,
        message: "boom".to_string(),
    });
    let err = sync.invalidate().await.unwrap_err();
    assert!(matches!(err, CatalogError::Server { status: 500, .. }));

    let entry = sync.snapshot();
    assert_eq!(entry.status, QueryStatus::Error);
    assert_eq!(entry.items.len(), 1, "stale items survive the failure");
    assert!(entry.error.is_some());

    // explicit retry re-enters Loading and can reach Success
    sync.invalidate().await.unwrap();
    let entry = sync.snapshot();
    assert_eq!(entry.status, QueryStatus::Success);
    assert!(entry.error.is_none());
}

#[tokio::test]
async fn test_mutation_failure_leaves_cache_and_status() {
    let _ = env_logger::try_init();

    let catalog = Arc::new(FakeCatalog::new());
    catalog.seed(shirt());
    let sync = sync_over(catalog.clone());

    sync.fetch_all().await.unwrap();

    catalog.fail_next(CatalogError::Network("connection reset".to_string()));
    let err = sync.create(&hat_draft()).await.unwrap_err();
    assert!(matches!(err, CatalogError::Network(_)));

    let entry = sync.snapshot();
    assert_eq!(
        entry.status,
        QueryStatus::Success,
        "mutation failures never touch the collection status"
    );
    assert_eq!(entry.items.len(), 1, "no speculative insert");
}

#[tokio::test]
async fn test_create_before_first_fetch_materializes_entry() {
    let _ = env_logger::try_init();

    let catalog = Arc::new(FakeCatalog::new());
    let sync = sync_over(catalog);

    let created = sync.create(&hat_draft()).await.unwrap();

    let entry = sync.snapshot();
    assert_eq!(entry.status, QueryStatus::Idle, "status is not forged");
    assert_eq!(entry.items, vec![created]);
}

#[tokio::test]
async fn test_mutation_sequence_yields_surviving_ids() {
    let _ = env_logger::try_init();

    let catalog = Arc::new(FakeCatalog::new());
    let sync = sync_over(catalog);

    let a = sync.create(&hat_draft()).await.unwrap();
    let b = sync
        .create(&ProductDraft::new(
            "Scarf",
            dec!(8.00),
            "accessories",
            "https://img.example.com/scarf.png",
        ))
        .await
        .unwrap();
    let c = sync
        .create(&ProductDraft::new(
            "Belt",
            dec!(14.00),
            "accessories",
            "https://img.example.com/belt.png",
        ))
        .await
        .unwrap();

    sync.update(b.id, &ProductPatch::new().with_price(dec!(7.00)))
        .await
        .unwrap();
    sync.remove(a.id).await.unwrap();

    let entry = sync.snapshot();
    assert_eq!(
        entry.items.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![b.id, c.id]
    );
    assert_eq!(entry.items[0].price, dec!(7.00), "latest field values win");

    // the filter term never feeds back into the cache
    let filtered = derive_view(&entry.items, "belt");
    assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![c.id]);
    assert_eq!(sync.snapshot().items.len(), 2);
}
