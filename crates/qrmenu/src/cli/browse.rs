//! Browse command - Render the menu for a selection
//!
//! Applies `--top`, `--sub` and `--search` in that order, the same sequence a guest
//! would tap through, and prints the resulting view.

use crate::cli::business::BusinessHeader;
use crate::cli::error::HelpfulError;
use crate::cli::output::{format_category_bar, truncate};
use crate::cli::{load_business, load_products, load_settings};
use qrmenu_catalog::{DisplaySettings, EmptyState, Listing, MenuSession, MenuView, ProductCard};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the browse command
#[derive(Debug)]
pub struct BrowseArgs {
    pub products: PathBuf,
    pub top: Option<String>,
    pub sub: Option<String>,
    pub search: Option<String>,
    pub business: Option<PathBuf>,
    pub short_name: Option<String>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CardSection {
    label: String,
    products: Vec<ProductCard>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum CardListing {
    Grouped { sections: Vec<CardSection> },
    Plain { products: Vec<ProductCard> },
}

impl CardListing {
    fn from_listing(listing: &Listing<'_>, settings: &DisplaySettings) -> Self {
        match listing {
            Listing::Grouped(sections) => CardListing::Grouped {
                sections: sections
                    .iter()
                    .map(|section| CardSection {
                        label: section.label.clone(),
                        products: section
                            .products
                            .iter()
                            .map(|p| ProductCard::new(p, settings))
                            .collect(),
                    })
                    .collect(),
            },
            Listing::Plain(products) => CardListing::Plain {
                products: products
                    .iter()
                    .map(|p| ProductCard::new(p, settings))
                    .collect(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct EmptyOutput {
    kind: EmptyState,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct BrowseOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    business: Option<BusinessHeader<'a>>,
    navigation: &'a qrmenu_catalog::Navigation,
    search: &'a str,
    count: usize,
    listing: CardListing,
    #[serde(skip_serializing_if = "Option::is_none")]
    empty: Option<EmptyOutput>,
}

/// Build a session and apply the requested selection.
fn build_session(args: &BrowseArgs) -> anyhow::Result<MenuSession> {
    let products = load_products(&args.products)?;
    let mut session = MenuSession::new(products);

    if let Some(top) = args.top.as_deref() {
        if !session.taxonomy().has_top(top) {
            let available = session.taxonomy().top_categories();
            return Err(HelpfulError::unknown_category(top, &available).into());
        }
        session.select_top(top);
    }
    if let Some(sub) = args.sub.as_deref() {
        session.select_sub(sub);
    }
    if let Some(search) = args.search.as_deref() {
        session.set_search(search);
    }
    Ok(session)
}

/// Execute the browse command
pub fn run(args: BrowseArgs) -> anyhow::Result<()> {
    let settings = load_settings()?;

    let business = match (&args.business, &args.short_name) {
        (Some(path), Some(short_name)) => Some(load_business(path, short_name)?),
        (Some(path), None) => {
            return Err(HelpfulError::new("Missing --short-name")
                .with_context(format!(
                    "A business response was given ({}) without the short name to resolve",
                    path.display()
                ))
                .with_suggestion("TRY: Add --short-name <NAME>")
                .into())
        }
        _ => None,
    };

    let session = build_session(&args)?;
    let view = session.view();
    info!(
        top = %session.selection().active_top(),
        visible = view.listing.len(),
        "browse rendered"
    );

    let output = BrowseOutput {
        business: business.as_ref().map(BusinessHeader::new),
        navigation: &view.navigation,
        search: session.selection().search_term(),
        count: view.listing.len(),
        listing: CardListing::from_listing(&view.listing, &settings.display),
        empty: view.empty.map(|kind| EmptyOutput {
            kind,
            message: kind.message(),
        }),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_view(&output, &view);
    Ok(())
}

fn print_view(output: &BrowseOutput<'_>, view: &MenuView<'_>) {
    if let Some(header) = &output.business {
        if header.brand_text.is_empty() {
            println!("{}  (logo)", header.name);
        } else {
            println!("{}", header.brand_text);
        }
        println!();
    }

    println!("{}", format_category_bar(&view.navigation.tops));
    if !view.navigation.subs.is_empty() {
        println!("  {}", format_category_bar(&view.navigation.subs));
    }
    println!();
    println!("{}", view.navigation.location);
    if !output.search.is_empty() {
        println!("Search: \"{}\"", output.search);
    }
    println!();

    if let Some(empty) = &output.empty {
        println!("{}", empty.message);
        return;
    }

    match &output.listing {
        CardListing::Grouped { sections } => {
            for section in sections {
                println!("== {} ==", section.label);
                print_cards(&section.products);
                println!();
            }
        }
        CardListing::Plain { products } => print_cards(products),
    }
}

fn print_cards(cards: &[ProductCard]) {
    for card in cards {
        println!("  {:<32} {:>10}", truncate(&card.title, 32), card.price_label);
        if !card.description.is_empty() {
            println!("    {}", truncate(&card.description, 60));
        }
    }
}
