//! HTTP client for chaincode submit/evaluate calls.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::config::GatewayConfig;
use crate::domain::PurchaseOutcome;
use crate::error::{Error, Result};
use crate::port::MarketPort;

/// How a transaction is executed on the remote side.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum TxMode {
    /// Endorsed and ordered; mutates ledger state.
    Submit,
    /// Evaluated against a single peer; read only.
    Evaluate,
}

#[derive(Debug, Serialize)]
struct TxRequest<'a> {
    channel: &'a str,
    chaincode: &'a str,
    function: &'a str,
    args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transient: Option<serde_json::Value>,
    mode: TxMode,
}

#[derive(Debug, Deserialize)]
struct TxResponse {
    ok: bool,
    #[serde(default)]
    payload: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the ledger gateway's transaction endpoint.
pub struct GatewayClient {
    client: Client,
    api_url: String,
    channel: String,
    chaincode: String,
}

impl GatewayClient {
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.clone(),
            channel: config.channel.clone(),
            chaincode: config.chaincode.clone(),
        }
    }

    async fn execute(
        &self,
        operation: &'static str,
        function: &str,
        args: Vec<String>,
        transient: Option<serde_json::Value>,
        mode: TxMode,
    ) -> Result<String> {
        let url = format!("{}/transactions", self.api_url);
        let request = TxRequest {
            channel: &self.channel,
            chaincode: &self.chaincode,
            function,
            args,
            transient,
            mode,
        };

        debug!(function, ?mode, "executing transaction");

        let response: TxResponse = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        if response.ok {
            Ok(response.payload.unwrap_or_default())
        } else {
            Err(Error::Action {
                operation,
                reason: response
                    .error
                    .unwrap_or_else(|| "gateway reported failure without reason".into()),
            })
        }
    }

    async fn submit(
        &self,
        operation: &'static str,
        function: &str,
        args: Vec<String>,
        transient: Option<serde_json::Value>,
    ) -> Result<String> {
        self.execute(operation, function, args, transient, TxMode::Submit)
            .await
    }

    async fn evaluate(&self, operation: &'static str, function: &str) -> Result<String> {
        self.execute(operation, function, Vec::new(), None, TxMode::Evaluate)
            .await
    }
}

#[async_trait]
impl MarketPort for GatewayClient {
    async fn buy(&self, item_id: &str) -> PurchaseOutcome {
        match self
            .submit("purchase", "BuyFromMarket", vec![item_id.to_string()], None)
            .await
        {
            Ok(_) => {
                info!(item_id, "purchase submitted");
                PurchaseOutcome::Completed
            }
            Err(e) => PurchaseOutcome::failed(e.to_string()),
        }
    }

    async fn init_ledger(&self) -> Result<()> {
        self.submit("ledger init", "InitLedger", Vec::new(), None)
            .await?;
        Ok(())
    }

    async fn add_balance(&self, amount: u64) -> Result<()> {
        // Amounts travel in the transient map so they stay off the ledger proposal
        let transient = json!({ "amount": { "amount": amount } });
        self.submit("balance top-up", "AddBalance", Vec::new(), Some(transient))
            .await?;
        Ok(())
    }

    async fn add_item(&self, name: &str, count: u64, price: u64) -> Result<()> {
        let transient = json!({
            "item": { "name": name, "count": count, "price": price }
        });
        self.submit("inventory add", "AddItem", Vec::new(), Some(transient))
            .await?;
        Ok(())
    }

    async fn list_to_market(&self, name: &str, price: u64) -> Result<()> {
        self.submit(
            "market listing",
            "AddToMarket",
            vec![name.to_string(), price.to_string()],
            None,
        )
        .await?;
        Ok(())
    }

    async fn query_balance(&self) -> Result<String> {
        self.evaluate("balance query", "GetBalance").await
    }

    async fn query_inventory(&self) -> Result<String> {
        self.evaluate("inventory query", "GetItem").await
    }

    async fn query_market(&self) -> Result<String> {
        self.evaluate("market query", "GetItemsInMarket").await
    }

    fn gateway_name(&self) -> &'static str {
        "ledger-gateway"
    }
}
