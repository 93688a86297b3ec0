//! Browsing selection and its transition rules.

use crate::taxonomy::{Taxonomy, ALL_CATEGORIES};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Current top category, sub category and search text.
///
/// `active_sub` is only meaningful for hierarchical taxonomies with a non-sentinel
/// top; every transition keeps it empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    active_top: String,
    active_sub: String,
    search_term: String,
}

impl SelectionState {
    /// Default selection for a freshly derived taxonomy.
    ///
    /// Flat lists start on the "all" view; hierarchical lists start on their first
    /// top group and its first sub group.
    pub fn initialize(taxonomy: &Taxonomy) -> Self {
        let mut state = Self {
            active_top: ALL_CATEGORIES.to_string(),
            active_sub: String::new(),
            search_term: String::new(),
        };
        if let Taxonomy::Hierarchical { .. } = taxonomy {
            if let Some(first) = taxonomy.first_top() {
                state.active_top = first.to_string();
                state.repair_sub(taxonomy);
            }
        }
        state
    }

    pub fn active_top(&self) -> &str {
        &self.active_top
    }

    pub fn active_sub(&self) -> &str {
        &self.active_sub
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Whether the "all" sentinel is selected.
    pub fn is_all(&self) -> bool {
        self.active_top == ALL_CATEGORIES
    }

    /// Select a top category, repairing the sub selection for the new top.
    ///
    /// Re-selecting the active top is a no-op apart from the repair.
    pub fn select_top(&mut self, top: &str, taxonomy: &Taxonomy) {
        self.active_top = top.to_string();
        self.repair_sub(taxonomy);
        debug!(top = %self.active_top, sub = %self.active_sub, "selected top category");
    }

    /// Select a sub category of the active top.
    ///
    /// Not validated: a sub that does not belong to the active top simply matches
    /// nothing.
    pub fn select_sub(&mut self, sub: &str) {
        self.active_sub = sub.to_string();
    }

    /// Store the raw search text; folding happens at comparison time.
    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Bring the selection back in line after the taxonomy was recomputed.
    ///
    /// An active top that no longer exists falls back to the default selection;
    /// the search text is kept.
    pub fn repair(&mut self, taxonomy: &Taxonomy) {
        if !taxonomy.has_top(&self.active_top) {
            let search = std::mem::take(&mut self.search_term);
            *self = Self::initialize(taxonomy);
            self.search_term = search;
            return;
        }
        self.repair_sub(taxonomy);
    }

    /// Consuming form of [`SelectionState::repair`].
    pub fn repaired(mut self, taxonomy: &Taxonomy) -> Self {
        self.repair(taxonomy);
        self
    }

    fn repair_sub(&mut self, taxonomy: &Taxonomy) {
        match taxonomy {
            Taxonomy::Flat { .. } => self.active_sub.clear(),
            Taxonomy::Hierarchical { .. } if self.is_all() => self.active_sub.clear(),
            Taxonomy::Hierarchical { .. } => {
                let subs = taxonomy.sub_categories_of(&self.active_top);
                if !subs.contains(&self.active_sub) {
                    self.active_sub = subs.first().cloned().unwrap_or_default();
                }
            }
        }
    }
}
