//! Business command - Resolve a business lookup response for the header

use crate::cli::load_business;
use qrmenu_catalog::business::turkish_uppercase;
use qrmenu_catalog::{Business, LogoSource};
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the business command
#[derive(Debug)]
pub struct BusinessArgs {
    pub response: PathBuf,
    pub short_name: String,
    pub json: bool,
}

/// What the menu header shows for a business.
#[derive(Debug, Serialize)]
pub struct BusinessHeader<'a> {
    pub id: i64,
    pub name: &'a str,
    pub brand_text: &'a str,
    pub logo: &'a LogoSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_src: Option<String>,
}

impl<'a> BusinessHeader<'a> {
    pub fn new(business: &'a Business) -> Self {
        Self {
            id: business.id,
            name: &business.name,
            brand_text: business.brand_text(),
            logo: &business.logo,
            logo_src: business.logo.image_src(),
        }
    }
}

/// Execute the business command
pub fn run(args: BusinessArgs) -> anyhow::Result<()> {
    let business = load_business(&args.response, &args.short_name)?;
    let header = BusinessHeader::new(&business);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&header)?);
        return Ok(());
    }

    println!("{}", turkish_uppercase(&business.name));
    println!();
    println!("Id:    {}", header.id);
    println!("Logo:  {}", describe_logo(header.logo));
    if !header.brand_text.is_empty() {
        println!("Brand: {}", header.brand_text);
    }
    Ok(())
}

fn describe_logo(logo: &LogoSource) -> String {
    match logo {
        LogoSource::Absent => "none (default brand mark)".to_string(),
        LogoSource::Inline(src) if src.starts_with("data:") => "inline data URL".to_string(),
        LogoSource::Inline(src) => format!("path {}", src),
        LogoSource::Remote(url) => format!("remote {}", url),
        LogoSource::RawBase64(data) => format!("base64 image ({} chars)", data.len()),
    }
}
