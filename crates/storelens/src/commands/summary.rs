//! Headline metrics command handler.

use tabled::Tabled;

use storelens_api::CatalogClient;
use storelens_core::{CatalogSummary, summarize};

use super::util;
use crate::cli::{GlobalOpts, SummaryArgs};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &CatalogClient,
    args: &SummaryArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    util::validate_filters(&args.filters)?;

    let products = client.list_products().await?;
    let categories = client.list_categories().await?;

    let view = util::criteria(&args.filters).apply(&products);
    let summary = summarize(&view, &categories);

    let out = output::render_single(
        &global.output,
        &summary,
        |s| metric_table(s),
        |s| plain_line(s),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Two-column metric table. The average row disappears when the
/// filtered view is empty.
fn metric_table(summary: &CatalogSummary) -> String {
    let mut rows = vec![
        MetricRow {
            metric: "Total Products".to_owned(),
            value: summary.product_count.to_string(),
        },
        MetricRow {
            metric: "Categories".to_owned(),
            value: summary.category_count.to_string(),
        },
    ];
    if let Some(avg) = summary.average_price {
        rows.push(MetricRow {
            metric: "Average Price".to_owned(),
            value: util::format_price(avg),
        });
    }
    output::render_table(&rows)
}

/// Tab-separated single line for scripting: count, categories, average.
fn plain_line(summary: &CatalogSummary) -> String {
    let avg = summary
        .average_price
        .map_or_else(|| "-".to_owned(), util::format_price);
    format!(
        "{}\t{}\t{}",
        summary.product_count, summary.category_count, avg
    )
}
