//! Clap derive structures for the `storelens` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! This file is also compiled standalone by `build.rs` for man-page
//! generation, so it must only depend on clap and clap_complete.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// storelens -- storefront catalog browser for the command line
#[derive(Debug, Parser)]
#[command(
    name = "storelens",
    version,
    about = "Browse a storefront product catalog from the command line",
    long_about = "Fetches the full product catalog from a public storefront API, then\n\
        slices it locally: filter by category, title search, rating, and price;\n\
        sort by price or rating; and print headline metrics.\n\n\
        Every invocation fetches fresh data. Nothing is cached between runs.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Storefront base URL
    #[arg(
        long,
        short = 'u',
        env = "STORELENS_BASE_URL",
        default_value = "https://fakestoreapi.com",
        global = true
    )]
    pub base_url: String,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "STORELENS_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the product catalog
    #[command(alias = "prod", alias = "p")]
    Products(ProductsArgs),

    /// List catalog categories
    #[command(alias = "cat")]
    Categories(CategoriesArgs),

    /// Print headline metrics for the (filtered) catalog
    #[command(alias = "sum")]
    Summary(SummaryArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Filter Arguments ──────────────────────────────────────────

/// Filter flags shared by `products list` and `summary`.
///
/// Stages always apply in the same order: category, search, rating,
/// price.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Keep only this category (exact name, case-sensitive)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Keep products whose title contains this text (case-insensitive)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Minimum rating to keep, 0.0-5.0 inclusive
    #[arg(long, default_value = "0.0")]
    pub min_rating: f64,

    /// Lowest price to keep (inclusive)
    #[arg(long, default_value = "0.0")]
    pub min_price: f64,

    /// Highest price to keep (inclusive)
    #[arg(long, default_value = "1000.0")]
    pub max_price: f64,
}

/// Sort order for `products list`. Omitting the flag keeps the
/// storefront's own order.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortOrder {
    /// Price: Low to High
    PriceAsc,
    /// Price: High to Low
    PriceDesc,
    /// Rating: High to Low
    RatingDesc,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PRODUCTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List products, filtered and optionally sorted
    #[command(alias = "ls")]
    List(ProductListArgs),

    /// Get a single product by id
    #[command(alias = "show")]
    Get {
        /// Product id
        id: u64,
    },
}

#[derive(Debug, Args)]
pub struct ProductListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Sort order (omit to keep the storefront's order)
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CATEGORIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List every category the storefront reports
    #[command(alias = "ls")]
    List,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SUMMARY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
