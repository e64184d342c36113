use agora_core::Product;

/// Compute the display-ready sequence from the cached collection and the
/// stabilized search term.
///
/// A product is included when the case-insensitive `"{title} {category}"`
/// concatenation contains the trimmed, case-insensitive term as a substring.
/// An empty term includes everything. Pure and stable: same inputs yield the
/// same output in source order.
pub fn derive_view(items: &[Product], term: &str) -> Vec<Product> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|p| {
            format!("{} {}", p.title, p.category)
                .to_lowercase()
                .contains(&needle)
        })
        .cloned()
        .collect()
}
