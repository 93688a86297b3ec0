//! Categories command - Show the taxonomy derived from a product list

use crate::cli::load_products;
use crate::cli::output::print_table;
use qrmenu_catalog::{Taxonomy, TaxonomyMode, ALL_CATEGORIES};
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the categories command
#[derive(Debug)]
pub struct CategoriesArgs {
    pub products: PathBuf,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CategoryRow<'a> {
    name: &'a str,
    subs: &'a [String],
    products: usize,
}

#[derive(Debug, Serialize)]
struct CategoriesOutput<'a> {
    mode: TaxonomyMode,
    total_products: usize,
    top_categories: Vec<&'a str>,
    categories: Vec<CategoryRow<'a>>,
    /// Products without a top group in a hierarchical list.
    orphans: usize,
}

/// Execute the categories command
pub fn run(args: CategoriesArgs) -> anyhow::Result<()> {
    let products = load_products(&args.products)?;
    let taxonomy = Taxonomy::extract(&products);

    let categories: Vec<CategoryRow> = taxonomy
        .top_categories()
        .into_iter()
        .filter(|top| *top != ALL_CATEGORIES)
        .map(|top| {
            let count = products
                .iter()
                .filter(|p| match &taxonomy {
                    Taxonomy::Flat { .. } => p.group_name == top,
                    Taxonomy::Hierarchical { .. } => p.top_group() == Some(top),
                })
                .count();
            CategoryRow {
                name: top,
                subs: taxonomy.sub_categories_of(top),
                products: count,
            }
        })
        .collect();

    let orphans = match &taxonomy {
        Taxonomy::Flat { .. } => 0,
        Taxonomy::Hierarchical { .. } => products.iter().filter(|p| p.top_group().is_none()).count(),
    };

    let output = CategoriesOutput {
        mode: taxonomy.mode(),
        total_products: products.len(),
        top_categories: taxonomy.top_categories(),
        categories,
        orphans,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} products, {} taxonomy",
        output.total_products,
        output.mode.as_str().to_uppercase()
    );
    println!();

    if output.categories.is_empty() {
        println!("No categories.");
        return Ok(());
    }

    let rows = output
        .categories
        .iter()
        .map(|row| {
            vec![
                row.name.to_string(),
                row.subs.join(", "),
                row.products.to_string(),
            ]
        })
        .collect();
    print_table(&["Category", "Sub categories", "Products"], rows);

    if output.orphans > 0 {
        println!();
        println!(
            "{} product(s) have no top group and only appear under \"{}\".",
            output.orphans, ALL_CATEGORIES
        );
    }
    Ok(())
}
