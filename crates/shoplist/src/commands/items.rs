//! Item command handlers.

use shoplist_core::{Command as CoreCommand, CommandResult, Item, NewItem, ShopClient};
use tabled::Tabled;

use crate::cli::{AddArgs, GlobalOpts, ListRef};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub(crate) struct ItemRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Price")]
    price: String,
}

impl From<&Item> for ItemRow {
    fn from(i: &Item) -> Self {
        Self {
            id: i.id.to_string(),
            title: i.title.clone(),
            quantity: i.quantity.to_string(),
            price: format!("{:.2}", i.price),
        }
    }
}

fn detail(i: &Item) -> String {
    format!(
        "ID:       {}\nList:     {}\nTitle:    {}\nQuantity: {}\nPrice:    {:.2}",
        i.id, i.list_id, i.title, i.quantity, i.price
    )
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle_items(
    client: &ShopClient,
    args: ListRef,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let CommandResult::Items(state) = client
        .execute(CoreCommand::FetchItems {
            list_id: args.list_id,
        })
        .await?
    else {
        unreachable!("FetchItems yields Items");
    };
    super::check_read(state.loading, &state.error)?;

    let out = output::render_list(
        &global.output,
        &state.items,
        |i| ItemRow::from(i),
        |i| i.id.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_add(
    client: &ShopClient,
    args: AddArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let new_item = validate(args)?;

    let CommandResult::ItemAdded(added) = client.execute(CoreCommand::AddItem(new_item)).await?
    else {
        unreachable!("AddItem yields ItemAdded");
    };

    match added {
        Some(item) => {
            let out = output::render_single(&global.output, &item, detail, |i| i.id.to_string());
            output::print_output(&out, global.quiet);
        }
        None => output::print_notice("Service returned no body; item was not added", &global.color),
    }
    Ok(())
}

/// Input checks belong to the view layer; the store accepts anything.
fn validate(args: AddArgs) -> Result<NewItem, CliError> {
    let title = args.title.trim();
    if title.is_empty() {
        return Err(CliError::Validation {
            field: "title".into(),
            reason: "must not be empty".into(),
        });
    }
    if !args.quantity.is_finite() || args.quantity <= 0.0 {
        return Err(CliError::Validation {
            field: "quantity".into(),
            reason: format!("expected a positive number, got {}", args.quantity),
        });
    }
    if !args.price.is_finite() || args.price < 0.0 {
        return Err(CliError::Validation {
            field: "price".into(),
            reason: format!("expected a non-negative number, got {}", args.price),
        });
    }
    Ok(NewItem {
        list_id: args.list_id,
        title: title.to_owned(),
        quantity: args.quantity,
        price: args.price,
    })
}
