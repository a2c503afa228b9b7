//! List command handlers.

use std::fmt::Write as _;

use shoplist_core::{Command as CoreCommand, CommandResult, List, ShopClient};
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{GlobalOpts, ListRef};
use crate::error::CliError;
use crate::output;

use super::items::ItemRow;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ListRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
}

impl From<&List> for ListRow {
    fn from(l: &List) -> Self {
        Self {
            id: l.id.to_string(),
            title: l.title.clone(),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle_lists(client: &ShopClient, global: &GlobalOpts) -> Result<(), CliError> {
    let CommandResult::Lists(state) = client.execute(CoreCommand::FetchLists).await? else {
        unreachable!("FetchLists yields Lists");
    };
    super::check_read(state.loading, &state.error)?;

    let out = output::render_list(
        &global.output,
        &state.lists,
        |l| ListRow::from(l),
        |l| l.id.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

/// The list-detail view: list title followed by its items.
pub async fn handle_show(
    client: &ShopClient,
    args: ListRef,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let CommandResult::ListDetail { lists, items } = client
        .execute(CoreCommand::OpenList {
            list_id: args.list_id,
        })
        .await?
    else {
        unreachable!("OpenList yields ListDetail");
    };

    super::check_read(lists.loading, &lists.detail_error)?;
    super::check_read(items.loading, &items.error)?;

    let Some(ref list) = lists.current else {
        return Err(CliError::InvalidResponse {
            message: "service returned no list".into(),
        });
    };

    let out = output::render_single(
        &global.output,
        &serde_json::json!({ "list": list, "items": items.items }),
        |_| {
            let mut text = String::new();
            let _ = writeln!(text, "{}", list.title);
            let rows: Vec<ItemRow> = items.items.iter().map(ItemRow::from).collect();
            text.push_str(&Table::new(rows).with(Style::rounded()).to_string());
            text
        },
        |_| {
            items
                .items
                .iter()
                .map(|i| i.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        },
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
