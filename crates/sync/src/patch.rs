//! Pure cache patch functions
//!
//! The read-modify-write half of mutation handling, isolated from network
//! timing. Each function takes an immutable sequence and returns a new one;
//! `QueryStore::update` supplies the last-write-wins composition.

use agora_core::{Product, ProductId, ProductPatch};

/// Append a newly created product, preserving prior order
pub fn append_item(items: &[Product], item: Product) -> Vec<Product> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Shallow-merge a patch into the element with matching id
///
/// An id with no matching element leaves the sequence unchanged; the caller
/// decides whether that is worth logging.
pub fn replace_by_id(items: &[Product], id: ProductId, patch: &ProductPatch) -> Vec<Product> {
    items
        .iter()
        .map(|p| if p.id == id { patch.apply_to(p) } else { p.clone() })
        .collect()
}

/// Drop the element with matching id; unknown ids are a no-op
pub fn remove_by_id(items: &[Product], id: ProductId) -> Vec<Product> {
    items.iter().filter(|p| p.id != id).cloned().collect()
}
