//! Application runtime: wires ports to the engine and runs both activity
//! sources until shutdown.

use std::sync::Arc;

use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::adapter::gateway::{GatewayClient, GatewayEventFeed};
use crate::adapter::store::FileWishlistStore;
use crate::app::engine::ReconciliationEngine;
use crate::cli::terminal;
use crate::config::Config;
use crate::error::Result;
use crate::port::{EventFeed, MarketPort, WishlistStore};

/// Main application struct.
pub struct App;

impl App {
    /// Run the agent for `identity` until EXIT or a shutdown signal.
    ///
    /// The wishlist is flushed to durable storage on either exit path.
    pub async fn run(config: Config, identity: String) -> Result<()> {
        let store = FileWishlistStore::new(config.wallet.dir.clone());
        let market = GatewayClient::new(&config.gateway);

        let engine = Arc::new(
            ReconciliationEngine::load(
                market,
                store,
                identity.clone(),
                config.market.counterparty.clone(),
            )
            .await?,
        );

        if let Err(e) = engine.market().init_ledger().await {
            warn!(error = %e, "ledger init failed, continuing");
        }

        // Subscription failure is non-fatal: the terminal still works, only
        // automatic fulfillment is off for this session.
        let mut feed = GatewayEventFeed::new(&config.gateway);
        let pump = match feed.subscribe().await {
            Ok(()) => Some(spawn_feed_pump(engine.clone(), feed)),
            Err(e) => {
                warn!(
                    error = %e,
                    "event feed unavailable; automatic fulfillment disabled for this session"
                );
                None
            }
        };

        info!(identity = %identity, "terminal ready");

        tokio::select! {
            result = terminal::run(engine.clone()) => {
                if let Err(e) = result {
                    error!(error = %e, "terminal loop failed");
                }
            }
            _ = signal::ctrl_c() => {
                info!("shutdown signal received");
            }
        }

        if let Some(pump) = pump {
            pump.abort();
        }

        info!("saving wishlist and exiting");
        engine.flush().await
    }
}

/// Drive the event feed into the engine, one event at a time, in delivery
/// order.
fn spawn_feed_pump<M, S, F>(
    engine: Arc<ReconciliationEngine<M, S>>,
    mut feed: F,
) -> JoinHandle<()>
where
    M: MarketPort + 'static,
    S: WishlistStore + 'static,
    F: EventFeed + 'static,
{
    tokio::spawn(async move {
        while let Some(event) = feed.next_event().await {
            let outcome = engine.handle_event(event).await;
            terminal::report_reconciliation(&outcome);
        }
        info!("event feed ended; automatic fulfillment stopped");
    })
}
