//! Business metadata: display name and logo source.
//!
//! Fetching the business record and encoding remote logos are collaborator concerns.
//! This module only interprets what they return.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// Response of the business lookup endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessResponse {
    #[serde(rename = "hataMesaj", default)]
    pub error_message: Option<String>,
    #[serde(rename = "basarili", default)]
    pub success: bool,
    #[serde(rename = "isletmeler", default)]
    pub businesses: Option<Vec<BusinessRecord>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "isletmeAdi", default)]
    pub name: Option<String>,
    #[serde(rename = "kisaAdi", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl BusinessResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CatalogError::payload("business", e))
    }

    /// Resolve the business for `short_name`, the name it was requested by.
    ///
    /// Returns `None` when the lookup failed or matched nothing; the first record wins.
    pub fn resolve(&self, short_name: &str) -> Option<Business> {
        if !self.success {
            return None;
        }
        let record = self.businesses.as_ref()?.first()?;
        let name = match record.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => turkish_uppercase(short_name),
        };
        Some(Business {
            id: record.id,
            name,
            logo: LogoSource::classify(record.logo.as_deref()),
        })
    }
}

/// A resolved business ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub logo: LogoSource,
}

impl Business {
    /// Brand text to show next to the logo; suppressed when a logo is displayable.
    pub fn brand_text(&self) -> &str {
        if self.logo.is_absent() {
            &self.name
        } else {
            ""
        }
    }
}

/// How a logo reference must be turned into an image source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LogoSource {
    /// No logo; show the default brand mark.
    Absent,
    /// Data URL or site-relative path, usable as-is.
    Inline(String),
    /// Remote URL the logo collaborator may inline as a data URL.
    Remote(String),
    /// Bare base64 image bytes.
    RawBase64(String),
}

impl LogoSource {
    pub fn classify(logo: Option<&str>) -> Self {
        match logo {
            None | Some("") => LogoSource::Absent,
            Some(logo) if logo.starts_with("data:") || logo.starts_with('/') => {
                LogoSource::Inline(logo.to_string())
            }
            Some(logo) if logo.starts_with("http") => LogoSource::Remote(logo.to_string()),
            Some(logo) => LogoSource::RawBase64(logo.to_string()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, LogoSource::Absent)
    }

    /// Image source for display, without contacting the network.
    pub fn image_src(&self) -> Option<String> {
        match self {
            LogoSource::Absent => None,
            LogoSource::Inline(src) | LogoSource::Remote(src) => Some(src.clone()),
            LogoSource::RawBase64(data) => Some(format!("data:image/png;base64,{}", data)),
        }
    }

    /// Image source, letting `inline` turn a remote URL into a data URL.
    ///
    /// When `inline` gives up, the URL itself is used.
    pub fn resolve_with<F>(&self, inline: F) -> Option<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match self {
            LogoSource::Remote(url) => inline(url).or_else(|| Some(url.clone())),
            other => other.image_src(),
        }
    }
}

/// Upper-case with Turkish rules: `i` becomes `İ` and `ı` becomes `I`.
pub fn turkish_uppercase(text: &str) -> String {
    text.chars()
        .flat_map(|c| match c {
            'i' => vec!['İ'],
            'ı' => vec!['I'],
            other => other.to_uppercase().collect(),
        })
        .collect()
}
