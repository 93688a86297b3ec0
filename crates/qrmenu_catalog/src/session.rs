//! The full derivation pipeline and a session facade over it.
//!
//! `render` is a pure function of (products, taxonomy, selection). `MenuSession` owns
//! one product snapshot and re-runs the pipeline on demand; nothing is cached between
//! calls.

use crate::filter::filter_products;
use crate::ordering::{group_contiguous, order_for_display, Section};
use crate::product::Product;
use crate::selection::SelectionState;
use crate::taxonomy::Taxonomy;
use crate::view::{project, Navigation};
use serde::Serialize;
use tracing::{debug, info};

/// Products to show for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum Listing<'a> {
    /// "All" view: ordered and split into headered sections.
    Grouped(Vec<Section<'a>>),
    /// A specific category: source order, no headers.
    Plain(Vec<&'a Product>),
}

impl<'a> Listing<'a> {
    /// Flattened product sequence in display order.
    pub fn products(&self) -> Vec<&'a Product> {
        match self {
            Listing::Grouped(sections) => sections
                .iter()
                .flat_map(|s| s.products.iter().copied())
                .collect(),
            Listing::Plain(products) => products.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Listing::Grouped(sections) => sections.iter().map(|s| s.products.len()).sum(),
            Listing::Plain(products) => products.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Why nothing is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// The catalog itself has no products.
    EmptyCatalog,
    /// Products exist but none match the selection and search.
    NoMatches,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::EmptyCatalog => "Menüde ürün bulunmuyor.",
            EmptyState::NoMatches => "Ürün bulunamadı. Farklı bir arama yapmayı deneyin.",
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuView<'a> {
    pub navigation: Navigation,
    pub listing: Listing<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<EmptyState>,
}

/// Run filter, ordering and projection for one selection.
pub fn render<'a>(
    products: &'a [Product],
    taxonomy: &Taxonomy,
    state: &SelectionState,
) -> MenuView<'a> {
    let visible = filter_products(products, state, taxonomy);

    let listing = if state.is_all() {
        let ordered = order_for_display(visible, taxonomy);
        Listing::Grouped(group_contiguous(&ordered, taxonomy))
    } else {
        Listing::Plain(visible)
    };

    let empty = if products.is_empty() {
        Some(EmptyState::EmptyCatalog)
    } else if listing.is_empty() {
        Some(EmptyState::NoMatches)
    } else {
        None
    };

    debug!(
        top = %state.active_top(),
        sub = %state.active_sub(),
        visible = listing.len(),
        "rendered menu view"
    );

    MenuView {
        navigation: project(taxonomy, state),
        listing,
        empty,
    }
}

/// One product snapshot with its taxonomy and selection.
#[derive(Debug, Clone)]
pub struct MenuSession {
    products: Vec<Product>,
    taxonomy: Taxonomy,
    selection: SelectionState,
}

impl MenuSession {
    pub fn new(products: Vec<Product>) -> Self {
        let taxonomy = Taxonomy::extract(&products);
        let selection = SelectionState::initialize(&taxonomy);
        info!(
            products = products.len(),
            mode = %taxonomy.mode(),
            "loaded menu catalog"
        );
        Self {
            products,
            taxonomy,
            selection,
        }
    }

    /// Replace the catalog. The previous selection is discarded.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        *self = Self::new(products);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Adopt a previously captured selection, repaired against this catalog.
    pub fn restore_selection(&mut self, selection: SelectionState) {
        self.selection = selection.repaired(&self.taxonomy);
    }

    pub fn select_top(&mut self, top: &str) {
        self.selection.select_top(top, &self.taxonomy);
    }

    pub fn select_sub(&mut self, sub: &str) {
        self.selection.select_sub(sub);
    }

    pub fn set_search(&mut self, term: &str) {
        self.selection.set_search(term);
    }

    pub fn view(&self) -> MenuView<'_> {
        render(&self.products, &self.taxonomy, &self.selection)
    }
}
