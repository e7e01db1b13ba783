//! Category list command handler.

use tabled::Tabled;

use storelens_api::CatalogClient;

use crate::cli::{CategoriesArgs, CategoriesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
}

impl From<&String> for CategoryRow {
    fn from(name: &String) -> Self {
        Self { name: name.clone() }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &CatalogClient,
    args: CategoriesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CategoriesCommand::List => list(client, global).await,
    }
}

async fn list(client: &CatalogClient, global: &GlobalOpts) -> Result<(), CliError> {
    let categories = client.list_categories().await?;
    let out = output::render_list(
        &global.output,
        &categories,
        |c| CategoryRow::from(c),
        |c| c.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
