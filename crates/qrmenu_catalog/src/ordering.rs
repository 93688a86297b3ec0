//! Ordering and sectioning for the aggregate "all" view.
//!
//! Products are ranked by top category, then by group, then by explicit `sira` rank.
//! Every step is stable: equal keys keep their source order. Section headers are
//! emitted for contiguous runs only; the same label appearing twice yields two
//! sections.

use crate::product::Product;
use crate::taxonomy::Taxonomy;
use serde::Serialize;

/// One headered block of the grouped listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section<'a> {
    pub label: String,
    pub products: Vec<&'a Product>,
}

/// Re-order filtered products for the "all" view.
pub fn order_for_display<'a>(mut products: Vec<&'a Product>, taxonomy: &Taxonomy) -> Vec<&'a Product> {
    products.sort_by_key(|p| category_rank(p, taxonomy));

    let mut start = 0;
    while start < products.len() {
        let rank = category_rank(products[start], taxonomy);
        let mut end = start + 1;
        while end < products.len() && category_rank(products[end], taxonomy) == rank {
            end += 1;
        }
        order_within_group(&mut products[start..end]);
        start = end;
    }
    products
}

/// Header label for a product.
pub fn display_label(product: &Product, taxonomy: &Taxonomy) -> String {
    match taxonomy {
        Taxonomy::Flat { .. } => product.group_name.clone(),
        Taxonomy::Hierarchical { .. } => match (product.top_group(), product.group_name.as_str()) {
            (Some(top), "") => top.to_string(),
            (Some(top), group) => format!("{} - {}", top, group),
            (None, group) => group.to_string(),
        },
    }
}

/// Split an ordered sequence into contiguous same-label sections.
pub fn group_contiguous<'a>(ordered: &[&'a Product], taxonomy: &Taxonomy) -> Vec<Section<'a>> {
    let mut sections: Vec<Section<'a>> = Vec::new();
    for &product in ordered {
        let label = display_label(product, taxonomy);
        match sections.last_mut() {
            Some(section) if section.label == label => section.products.push(product),
            _ => sections.push(Section {
                label,
                products: vec![product],
            }),
        }
    }
    sections
}

/// (top position, group position); unknown values rank after all known ones.
fn category_rank(product: &Product, taxonomy: &Taxonomy) -> (usize, usize) {
    let top = product.top_group_name.as_deref().unwrap_or("");
    (
        taxonomy.top_index(top).unwrap_or(usize::MAX),
        taxonomy.group_index(&product.group_name).unwrap_or(usize::MAX),
    )
}

/// Sort the ranked products among the slots they occupy; unranked ones stay put.
fn order_within_group(group: &mut [&Product]) {
    let slots: Vec<usize> = (0..group.len()).filter(|&i| group[i].order.is_some()).collect();
    if slots.len() < 2 {
        return;
    }
    let mut ranked: Vec<&Product> = slots.iter().map(|&i| group[i]).collect();
    ranked.sort_by(|a, b| rank_of(a).total_cmp(&rank_of(b)));
    for (slot, product) in slots.into_iter().zip(ranked) {
        group[slot] = product;
    }
}

fn rank_of(product: &Product) -> f64 {
    product.order.unwrap_or(f64::INFINITY)
}
