//! Product command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use storelens_api::CatalogClient;
use storelens_core::{CatalogQuery, Product};

use super::util;
use crate::cli::{GlobalOpts, OutputFormat, ProductListArgs, ProductsArgs, ProductsCommand};
use crate::error::CliError;
use crate::output;

/// Shown in table mode when every product was filtered away.
const NO_RESULTS: &str = "No products found matching your search criteria.";

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Rating")]
    rating: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            category: p.category.clone(),
            price: util::format_price(p.price),
            rating: format!("{:.1} ({} reviews)", p.rating.rate, p.rating.count),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle(
    client: &CatalogClient,
    args: ProductsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProductsCommand::List(args) => list(client, &args, global).await,
        ProductsCommand::Get { id } => get(client, id, global).await,
    }
}

async fn list(
    client: &CatalogClient,
    args: &ProductListArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    util::validate_filters(&args.filters)?;

    let products = client.list_products().await?;
    let query = CatalogQuery {
        filter: util::criteria(&args.filters),
        sort: args.sort.map(util::sort_mode),
    };
    let view = query.execute(&products);

    if view.is_empty() && matches!(global.output, OutputFormat::Table) {
        output::print_output(NO_RESULTS, global.quiet);
        return Ok(());
    }

    let out = output::render_list(
        &global.output,
        &view,
        |p| ProductRow::from(p),
        |p| p.id.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

async fn get(client: &CatalogClient, id: u64, global: &GlobalOpts) -> Result<(), CliError> {
    let products = client.list_products().await?;
    let product = products
        .iter()
        .find(|p| p.id == id)
        .ok_or(CliError::ProductNotFound { id })?;

    let color = output::should_color(&global.color);
    let out = output::render_single(
        &global.output,
        product,
        |p| detail(p, color),
        |p| p.id.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Multi-line detail view for a single product.
fn detail(p: &Product, color: bool) -> String {
    let label = |text: &str| {
        if color {
            text.bold().to_string()
        } else {
            text.to_owned()
        }
    };

    [
        format!("{} {}", label("Title:"), p.title),
        format!("{} {}", label("Category:"), p.category),
        format!("{} {}", label("Price:"), util::format_price(p.price)),
        format!(
            "{} {} ({} reviews)",
            label("Rating:"),
            p.rating.rate,
            p.rating.count
        ),
        format!("{} {}", label("Image:"), p.image),
        String::new(),
        p.description.clone(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use storelens_core::Rating;

    use super::*;

    fn product() -> Product {
        Product {
            id: 3,
            title: "Gold Chain Bracelet".to_owned(),
            price: 168.0,
            description: "Solid everyday piece.".to_owned(),
            category: "jewelery".to_owned(),
            image: "https://img.example/3.jpg".to_owned(),
            rating: Rating { rate: 4.6, count: 400 },
        }
    }

    #[test]
    fn rows_format_price_and_rating() {
        let row = ProductRow::from(&product());
        assert_eq!(row.price, "$168.00");
        assert_eq!(row.rating, "4.6 (400 reviews)");
    }

    #[test]
    fn detail_lists_every_field_without_color() {
        let text = detail(&product(), false);
        assert!(text.contains("Title: Gold Chain Bracelet"));
        assert!(text.contains("Price: $168.00"));
        assert!(text.contains("Rating: 4.6 (400 reviews)"));
        assert!(text.ends_with("Solid everyday piece."));
    }
}
