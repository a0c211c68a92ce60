//! Interactive terminal loop.
//!
//! Blocks on operator input, runs each command to completion, then prompts
//! again. Prompt reads happen on the blocking pool so the feed pump keeps
//! running between commands; wishlist access still serializes through the
//! engine's lock.

use std::sync::Arc;

use dialoguer::Input;
use owo_colors::OwoColorize;
use serde::Deserialize;
use tabled::{Table, Tabled};
use tracing::error;

use crate::app::engine::{Reconciliation, ReconciliationEngine};
use crate::domain::PurchaseOutcome;
use crate::error::{Error, Result};
use crate::port::{MarketPort, WishlistStore};

/// Run the command loop until EXIT.
pub async fn run<M, S>(engine: Arc<ReconciliationEngine<M, S>>) -> Result<()>
where
    M: MarketPort,
    S: WishlistStore,
{
    loop {
        let command = prompt_command().await?;

        match command.trim().to_uppercase().as_str() {
            "ADD_MONEY" => {
                let amount = prompt_u64("Amount of money to add").await?;
                report(engine.market().add_balance(amount).await, "balance updated");
            }
            "ADD_ITEM" => {
                let name = prompt_text("Name of the item").await?;
                let count = prompt_u64("Count of the item").await?;
                let price = prompt_u64("Price of the item").await?;
                report(
                    engine.market().add_item(&name, count, price).await,
                    "item added to inventory",
                );
            }
            "QUERY_BALANCE" => match engine.market().query_balance().await {
                Ok(balance) => println!("{} {balance}", "[-] Balance:".green()),
                Err(e) => print_error(&e),
            },
            "GET_ITEM" => match engine.market().query_inventory().await {
                Ok(payload) => print_item_table(&payload, "No items in inventory."),
                Err(e) => print_error(&e),
            },
            "ENLIST_ITEM" => {
                let name = prompt_text("Name of the item").await?;
                let price = prompt_u64("Price of the item").await?;
                report(
                    engine.market().list_to_market(&name, price).await,
                    "item listed on the market",
                );
            }
            "ALL_ITEMS" => match engine.market().query_market().await {
                Ok(payload) => print_item_table(&payload, "No items on the market."),
                Err(e) => print_error(&e),
            },
            "WISHLIST" => {
                let name = prompt_text("Name of the item").await?;
                match engine.buy_or_watch(&name).await {
                    PurchaseOutcome::Completed => {
                        println!("{}", "[-] Item found on the market and bought.".green());
                    }
                    PurchaseOutcome::Failed { reason } => {
                        println!("{} {reason}", "[-] Cannot buy the item now:".red());
                        println!("[-] Added '{name}' to the wishlist instead.");
                    }
                }
            }
            "SHOW_WISHLIST" => {
                let wishlist = engine.snapshot().await;
                if wishlist.is_empty() {
                    println!("[-] Wishlist is empty.");
                } else {
                    for name in wishlist.names() {
                        println!("  - {name}");
                    }
                }
            }
            "EXIT" => {
                println!("[-] Saving wishlist and exiting gracefully.");
                return Ok(());
            }
            _ => print_help(),
        }
    }
}

/// Print the outcome of one reconciled feed event for the operator.
pub fn report_reconciliation(outcome: &Reconciliation) {
    match outcome {
        Reconciliation::Purchased { listing } => {
            println!(
                "\n{} '{}' ({})",
                "[+] Wishlist item listed on the market and bought:".green(),
                listing.name,
                listing.id
            );
        }
        Reconciliation::PurchaseFailed { listing, reason } => {
            println!(
                "\n{} '{}': {reason}",
                "[-] Could not buy wishlist item".red(),
                listing.name
            );
        }
        Reconciliation::UnknownKind { kind, payload } => {
            println!("\n{} {kind}", "[+] Unknown event detected:".red());
            println!("{payload}");
        }
        Reconciliation::DecodeFailed { reason } => {
            println!("\n{} {reason}", "[-] Dropped undecodable event:".red());
        }
        Reconciliation::NotWanted { .. } => {}
    }
}

/// A marketplace or inventory item as returned by the ledger queries.
#[derive(Debug, Deserialize, Tabled)]
struct ItemRow {
    #[serde(rename = "ID")]
    #[tabled(rename = "ID")]
    id: String,
    #[serde(rename = "Name")]
    #[tabled(rename = "Name")]
    name: String,
    #[serde(rename = "Count", default)]
    #[tabled(rename = "Count")]
    count: i64,
    #[serde(rename = "Price", default)]
    #[tabled(rename = "Price")]
    price: i64,
    #[serde(rename = "Org", default)]
    #[tabled(rename = "Org")]
    org: String,
}

fn print_item_table(payload: &str, empty_message: &str) {
    if payload.trim().is_empty() {
        println!("[-] {empty_message}");
        return;
    }

    match serde_json::from_str::<Vec<ItemRow>>(payload) {
        Ok(rows) if rows.is_empty() => println!("[-] {empty_message}"),
        Ok(rows) => println!("{}", Table::new(rows)),
        Err(e) => {
            error!(error = %e, "unexpected query payload");
            println!("{} {payload}", "[-] Unparseable response:".red());
        }
    }
}

fn report(result: Result<()>, done_message: &str) {
    match result {
        Ok(()) => println!("{} {done_message}", "[-] Done:".green()),
        Err(e) => print_error(&e),
    }
}

fn print_error(error: &Error) {
    println!("{} {error}", "[-] Error:".red());
}

#[derive(Tabled)]
struct HelpRow {
    command: &'static str,
    description: &'static str,
}

fn print_help() {
    let rows = vec![
        HelpRow {
            command: "ADD_MONEY",
            description: "adds money to balance",
        },
        HelpRow {
            command: "ADD_ITEM",
            description: "adds an item to inventory",
        },
        HelpRow {
            command: "QUERY_BALANCE",
            description: "retrieves current balance",
        },
        HelpRow {
            command: "GET_ITEM",
            description: "retrieves details about owned items",
        },
        HelpRow {
            command: "ENLIST_ITEM",
            description: "lists an item on the marketplace",
        },
        HelpRow {
            command: "ALL_ITEMS",
            description: "shows all items on the marketplace",
        },
        HelpRow {
            command: "WISHLIST",
            description: "buys an item now, or watches for it if the buy fails",
        },
        HelpRow {
            command: "SHOW_WISHLIST",
            description: "shows the current wishlist",
        },
        HelpRow {
            command: "EXIT",
            description: "saves the wishlist and exits",
        },
    ];
    println!("{}", Table::new(rows));
}

async fn prompt_command() -> Result<String> {
    blocking_prompt(|| {
        Input::<String>::new()
            .with_prompt("$>")
            .allow_empty(true)
            .interact_text()
    })
    .await
}

async fn prompt_text(label: &'static str) -> Result<String> {
    blocking_prompt(move || Input::<String>::new().with_prompt(label).interact_text()).await
}

async fn prompt_u64(label: &'static str) -> Result<u64> {
    blocking_prompt(move || Input::<u64>::new().with_prompt(label).interact_text()).await
}

/// Run a dialoguer prompt on the blocking pool.
async fn blocking_prompt<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> std::result::Result<T, dialoguer::Error> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?
        .map_err(Into::into)
}
