//! Category derivation, selection, filtering and grouping for QR menus.
//!
//! The pipeline is a chain of pure functions re-run on every change:
//!
//! ```text
//! products -> Taxonomy::extract -> SelectionState (initialize / repair)
//!          -> filter_products -> order_for_display + group_contiguous ("all" view only)
//!          -> view::project -> MenuView
//! ```
//!
//! [`MenuSession`] wraps the chain for callers that want a stateful handle.

pub mod business;
pub mod error;
pub mod filter;
pub mod ordering;
pub mod product;
pub mod selection;
pub mod session;
pub mod taxonomy;
pub mod view;

pub use business::{Business, BusinessResponse, LogoSource};
pub use error::{CatalogError, Result};
pub use filter::{filter_products, matches};
pub use ordering::{display_label, group_contiguous, order_for_display, Section};
pub use product::{parse_products, DisplaySettings, Product, ProductCard, ProductPayload};
pub use selection::SelectionState;
pub use session::{render, EmptyState, Listing, MenuSession, MenuView};
pub use taxonomy::{Taxonomy, TaxonomyMode, TopCategory, ALL_CATEGORIES};
pub use view::{project, CategoryEntry, Navigation};
