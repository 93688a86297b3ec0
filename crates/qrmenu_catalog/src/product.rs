//! Product records as delivered by the retrieval service.
//!
//! Field names on the wire are the service's (`urunAdi`, `grupIsim`, ...); the Rust
//! side uses descriptive names. Optional fields stay `None` when absent because the
//! presence of `ustGrupIsim` decides the taxonomy mode.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// Image shown when a product has no image path.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x300?text=No+Image";

/// Suffix appended to prices on product cards.
pub const CURRENCY_SUFFIX: &str = "₺";

/// A single menu item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "urunAdi", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "resimYolu", default, deserialize_with = "null_as_default")]
    pub image_path: String,
    #[serde(rename = "aciklama", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "fiyat", default, deserialize_with = "null_as_default")]
    pub price: f64,
    /// Leaf category. A missing group decodes to `""` so the item stays visible.
    #[serde(rename = "grupIsim", default, deserialize_with = "null_as_default")]
    pub group_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "ustGrupIsim", default, skip_serializing_if = "Option::is_none")]
    pub top_group_name: Option<String>,
    #[serde(rename = "ustGrupId", default, skip_serializing_if = "Option::is_none")]
    pub top_group_id: Option<i64>,
    #[serde(rename = "grupId", default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    /// Explicit rank within the group.
    #[serde(rename = "sira", default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

impl Product {
    /// Top group name when present and non-empty.
    pub fn top_group(&self) -> Option<&str> {
        self.top_group_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Key used by UI surfaces to identify a card.
    pub fn ui_key(&self) -> String {
        format!("{}-{}", self.group_name, self.name)
    }
}

/// Display knobs for product cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub placeholder_image: String,
    pub currency_suffix: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            currency_suffix: CURRENCY_SUFFIX.to_string(),
        }
    }
}

/// What a rendering surface needs to draw one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub key: String,
    pub title: String,
    pub image: String,
    pub description: String,
    pub price_label: String,
}

impl ProductCard {
    pub fn new(product: &Product, settings: &DisplaySettings) -> Self {
        let image = if product.image_path.is_empty() {
            settings.placeholder_image.clone()
        } else {
            product.image_path.clone()
        };
        Self {
            key: product.ui_key(),
            title: product.name.clone(),
            image,
            description: product.description.clone(),
            price_label: format_price(product.price, &settings.currency_suffix),
        }
    }
}

/// Format a price the way the menu prints it.
///
/// Examples:
/// - 120.0 -> "120 ₺"
/// - 12.5 -> "12.5 ₺"
pub fn format_price(price: f64, suffix: &str) -> String {
    if suffix.is_empty() {
        format!("{}", price)
    } else {
        format!("{} {}", price, suffix)
    }
}

/// Envelope returned by the product endpoint: `{ "urunler": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(rename = "urunler", default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProductDocument {
    Envelope(ProductPayload),
    List(Vec<Product>),
}

/// Decode a product document.
///
/// Accepts either the service envelope or a bare array of products. A missing or
/// `null` product list is an empty catalog.
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    let document: ProductDocument =
        serde_json::from_str(json).map_err(|e| CatalogError::payload("product", e))?;
    Ok(match document {
        ProductDocument::Envelope(payload) => payload.products,
        ProductDocument::List(products) => products,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
