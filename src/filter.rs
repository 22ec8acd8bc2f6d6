use crate::models::Product;

/// Client-side filter state, owned by the view.
///
/// An empty/whitespace query and an unset max price are no-op predicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub title_query: String,
    pub max_price: Option<f64>,
}

/// Derive the visible subset of the catalog for the given criteria.
///
/// Both predicates apply conjunctively when both are set. The result is a
/// stable subsequence of `all`: relative order is preserved and nothing is
/// re-sorted.
pub fn visible_products(all: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let query = criteria.title_query.trim().to_lowercase();

    all.iter()
        .filter(|product| match criteria.max_price {
            Some(max) => product.price <= max,
            None => true,
        })
        .filter(|product| {
            query.is_empty() || product.title.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
