//! Command handlers. Each issues explicit commands to a `ShopClient`
//! and renders the resulting snapshot.

pub mod config_cmd;
pub mod items;
pub mod lists;

use shoplist_core::ShopClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a service-backed command to its handler.
pub async fn dispatch(
    cmd: Command,
    client: &ShopClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Lists => lists::handle_lists(client, global).await,
        Command::Show(args) => lists::handle_show(client, args, global).await,
        Command::Items(args) => items::handle_items(client, args, global).await,
        Command::Add(args) => items::handle_add(client, args, global).await,
        Command::Config(_) | Command::Completions(_) => {
            unreachable!("handled before a client is built")
        }
    }
}

/// Turn a store's read outcome into a CLI result.
///
/// A non-empty `error` takes the place of the rendered collection. A store
/// still `loading` after its fetch got a `null` body.
pub(crate) fn check_read(loading: bool, error: &str) -> Result<(), CliError> {
    if !error.is_empty() {
        return Err(CliError::ReadFailed {
            message: error.to_owned(),
        });
    }
    if loading {
        return Err(CliError::InvalidResponse {
            message: "service returned no data".into(),
        });
    }
    Ok(())
}
