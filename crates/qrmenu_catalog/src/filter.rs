//! Category and search predicate.

use crate::product::Product;
use crate::selection::SelectionState;
use crate::taxonomy::Taxonomy;

/// Whether `product` is visible under `state`.
pub fn matches(product: &Product, state: &SelectionState, taxonomy: &Taxonomy) -> bool {
    matches_search(product, &state.search_term().to_lowercase())
        && matches_category(product, state, taxonomy)
}

/// Order-preserving subsequence of `products` visible under `state`.
pub fn filter_products<'a>(
    products: &'a [Product],
    state: &SelectionState,
    taxonomy: &Taxonomy,
) -> Vec<&'a Product> {
    let needle = state.search_term().to_lowercase();
    products
        .iter()
        .filter(|p| matches_search(p, &needle) && matches_category(p, state, taxonomy))
        .collect()
}

fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty() || product.name.to_lowercase().contains(needle)
}

fn matches_category(product: &Product, state: &SelectionState, taxonomy: &Taxonomy) -> bool {
    if state.is_all() {
        return true;
    }
    match taxonomy {
        Taxonomy::Flat { .. } => product.group_name == state.active_top(),
        Taxonomy::Hierarchical { .. } => {
            product.top_group_name.as_deref() == Some(state.active_top())
                && (state.active_sub().is_empty() || product.group_name == state.active_sub())
        }
    }
}
