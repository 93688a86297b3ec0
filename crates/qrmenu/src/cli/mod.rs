//! CLI module for qrmenu
//!
//! Every command reads collaborator payloads (product list, business lookup) from
//! JSON files and prints what the menu surfaces would show.

pub mod error;
pub mod output;

pub mod browse;
pub mod business;
pub mod categories;
pub mod config;

use crate::cli::config::{ConfigError, Settings};
use crate::cli::error::HelpfulError;
use qrmenu_catalog::{parse_products, Business, BusinessResponse, Product};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read a payload file, mapping IO failures to helpful errors.
fn read_payload(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        return Err(HelpfulError::file_not_found(path).into());
    }
    let text = fs::read_to_string(path)
        .map_err(|e| HelpfulError::cannot_read_file(path, &e.to_string()))?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Load the product list from a product payload file.
pub fn load_products(path: &Path) -> anyhow::Result<Vec<Product>> {
    let text = read_payload(path)?;
    let products =
        parse_products(&text).map_err(|e| HelpfulError::invalid_payload(path, &e.to_string()))?;
    info!("Loaded {} products from {}", products.len(), path.display());
    Ok(products)
}

/// Load and resolve a business lookup response.
pub fn load_business(path: &Path, short_name: &str) -> anyhow::Result<Business> {
    let text = read_payload(path)?;
    let response = BusinessResponse::from_json(&text)
        .map_err(|e| HelpfulError::invalid_payload(path, &e.to_string()))?;
    if let Some(message) = response.error_message.as_deref() {
        debug!("Business lookup reported: {}", message);
    }
    response
        .resolve(short_name)
        .ok_or_else(|| HelpfulError::business_not_found(short_name).into())
}

/// Load config.toml from the home directory.
pub fn load_settings() -> anyhow::Result<Settings> {
    Settings::load_default().map_err(|err| {
        let path = match &err {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path.clone(),
        };
        HelpfulError::invalid_config(&path, &err.to_string()).into()
    })
}
