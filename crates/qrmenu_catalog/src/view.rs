//! Navigation projection shared by every category surface.
//!
//! Sidebar, dropdown, pill bar and accordion all read the same [`Navigation`], so
//! they cannot disagree about which entry is active.

use crate::selection::SelectionState;
use crate::taxonomy::{Taxonomy, TaxonomyMode, ALL_CATEGORIES};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub mode: TaxonomyMode,
    pub tops: Vec<CategoryEntry>,
    /// Sub categories of the active top; empty when not applicable.
    pub subs: Vec<CategoryEntry>,
    /// Compact "you are here" label for dropdown triggers.
    pub location: String,
}

pub fn project(taxonomy: &Taxonomy, state: &SelectionState) -> Navigation {
    let tops = taxonomy
        .top_categories()
        .into_iter()
        .map(|top| CategoryEntry {
            label: top.to_string(),
            active: top == state.active_top(),
        })
        .collect();

    let (subs, location) = match taxonomy {
        Taxonomy::Flat { .. } => (Vec::new(), state.active_top().to_string()),
        Taxonomy::Hierarchical { .. } if state.is_all() => (Vec::new(), ALL_CATEGORIES.to_string()),
        Taxonomy::Hierarchical { .. } => {
            let subs = taxonomy
                .sub_categories_of(state.active_top())
                .iter()
                .map(|sub| CategoryEntry {
                    label: sub.clone(),
                    active: sub == state.active_sub(),
                })
                .collect();
            let location = if state.active_sub().is_empty() {
                state.active_top().to_string()
            } else {
                format!("{} - {}", state.active_top(), state.active_sub())
            };
            (subs, location)
        }
    };

    Navigation {
        mode: taxonomy.mode(),
        tops,
        subs,
        location,
    }
}

impl Navigation {
    pub fn active_top(&self) -> Option<&str> {
        self.tops.iter().find(|e| e.active).map(|e| e.label.as_str())
    }

    pub fn active_sub(&self) -> Option<&str> {
        self.subs.iter().find(|e| e.active).map(|e| e.label.as_str())
    }
}
