//! Command dispatch: bridges CLI args -> catalog queries -> output formatting.

pub mod categories;
pub mod products;
pub mod summary;
pub mod util;

use storelens_api::CatalogClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a catalog-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &CatalogClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Products(args) => products::handle(client, args, global).await,
        Command::Categories(args) => categories::handle(client, args, global).await,
        Command::Summary(args) => summary::handle(client, &args, global).await,
        // Completions are handled before dispatch
        Command::Completions(_) => unreachable!(),
    }
}
