//! Taxonomy derivation.
//!
//! The menu never declares its categories. They are inferred from the product list on
//! every load: a list where any product names a top group is hierarchical, otherwise
//! it is flat. All orders are first-seen orders of the source list.

use crate::product::Product;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, warn};

/// Reserved top-category value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "Tümü";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyMode {
    Flat,
    Hierarchical,
}

impl TaxonomyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxonomyMode::Flat => "flat",
            TaxonomyMode::Hierarchical => "hierarchical",
        }
    }
}

impl fmt::Display for TaxonomyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A top group together with its sub groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopCategory {
    pub name: String,
    pub subs: Vec<String>,
}

/// Categories derived from one product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Taxonomy {
    /// Every group is a selectable top-level category.
    Flat { groups: Vec<String> },
    /// Top groups narrow first, sub groups second.
    Hierarchical {
        tops: Vec<TopCategory>,
        /// First-seen order of every group name in the list, orphans included.
        group_order: Vec<String>,
    },
}

impl Taxonomy {
    /// Derive the taxonomy from a product list in a single pass.
    pub fn extract(products: &[Product]) -> Self {
        let mut groups = FirstSeen::default();
        let mut tops: Vec<TopCategory> = Vec::new();
        let mut top_index: HashMap<&str, usize> = HashMap::new();
        let mut ungrouped = 0usize;

        for product in products {
            groups.insert(&product.group_name);
            if product.group_name.is_empty() {
                ungrouped += 1;
            }

            let Some(top) = product.top_group() else {
                continue;
            };
            let idx = *top_index.entry(top).or_insert_with(|| {
                tops.push(TopCategory {
                    name: top.to_string(),
                    subs: Vec::new(),
                });
                tops.len() - 1
            });
            let subs = &mut tops[idx].subs;
            if !subs.iter().any(|s| s == &product.group_name) {
                subs.push(product.group_name.clone());
            }
        }

        if ungrouped > 0 {
            warn!(count = ungrouped, "products without a group name are listed under an empty category");
        }

        let taxonomy = if tops.is_empty() {
            Taxonomy::Flat {
                groups: groups.into_vec(),
            }
        } else {
            Taxonomy::Hierarchical {
                tops,
                group_order: groups.into_vec(),
            }
        };

        debug!(
            mode = %taxonomy.mode(),
            tops = taxonomy.top_categories().len(),
            groups = taxonomy.group_order().len(),
            "derived taxonomy"
        );
        taxonomy
    }

    pub fn mode(&self) -> TaxonomyMode {
        match self {
            Taxonomy::Flat { .. } => TaxonomyMode::Flat,
            Taxonomy::Hierarchical { .. } => TaxonomyMode::Hierarchical,
        }
    }

    /// Selectable top categories, led by the "all" sentinel.
    pub fn top_categories(&self) -> Vec<&str> {
        let rest: Vec<&str> = match self {
            Taxonomy::Flat { groups } => groups.iter().map(String::as_str).collect(),
            Taxonomy::Hierarchical { tops, .. } => tops.iter().map(|t| t.name.as_str()).collect(),
        };
        std::iter::once(ALL_CATEGORIES).chain(rest).collect()
    }

    /// First real (non-sentinel) top category.
    pub fn first_top(&self) -> Option<&str> {
        match self {
            Taxonomy::Flat { groups } => groups.first().map(String::as_str),
            Taxonomy::Hierarchical { tops, .. } => tops.first().map(|t| t.name.as_str()),
        }
    }

    /// Sub categories of `top`; empty for flat lists and unknown tops.
    pub fn sub_categories_of(&self, top: &str) -> &[String] {
        match self {
            Taxonomy::Flat { .. } => &[],
            Taxonomy::Hierarchical { tops, .. } => tops
                .iter()
                .find(|t| t.name == top)
                .map(|t| t.subs.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// Whether `top` is a selectable top category (the sentinel included).
    pub fn has_top(&self, top: &str) -> bool {
        self.top_index(top).is_some()
    }

    /// Position of `top` within [`Taxonomy::top_categories`].
    pub fn top_index(&self, top: &str) -> Option<usize> {
        if top == ALL_CATEGORIES {
            return Some(0);
        }
        let pos = match self {
            Taxonomy::Flat { groups } => groups.iter().position(|g| g == top),
            Taxonomy::Hierarchical { tops, .. } => tops.iter().position(|t| t.name == top),
        };
        pos.map(|p| p + 1)
    }

    /// First-seen order of group names across the whole, unfiltered list.
    pub fn group_order(&self) -> &[String] {
        match self {
            Taxonomy::Flat { groups } => groups,
            Taxonomy::Hierarchical { group_order, .. } => group_order,
        }
    }

    pub fn group_index(&self, group: &str) -> Option<usize> {
        self.group_order().iter().position(|g| g == group)
    }
}

/// Distinct strings in first-occurrence order.
#[derive(Default)]
struct FirstSeen<'a> {
    seen: HashSet<&'a str>,
    order: Vec<&'a str>,
}

impl<'a> FirstSeen<'a> {
    fn insert(&mut self, value: &'a str) {
        if self.seen.insert(value) {
            self.order.push(value);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.order.into_iter().map(str::to_string).collect()
    }
}
