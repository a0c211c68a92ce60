//! WebSocket contract event feed.
//!
//! Connection lifecycle: connect, send one subscription frame naming the
//! channel and chaincode, then pull event frames until the gateway closes
//! the stream. Frame parse failures are logged and skipped; they never
//! terminate the feed.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use crate::config::GatewayConfig;
use crate::domain::FeedEvent;
use crate::error::{Error, Result};
use crate::port::EventFeed;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

#[derive(Debug, Serialize)]
struct SubscribeFrame<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    channel: &'a str,
    chaincode: &'a str,
}

/// A contract event as framed by the gateway. The payload is the raw JSON
/// the chaincode attached to the event, carried as a string.
#[derive(Debug, Deserialize)]
struct EventFrame {
    event: String,
    #[serde(default)]
    payload: String,
}

/// Contract event feed over the gateway's WebSocket endpoint.
pub struct GatewayEventFeed {
    url: String,
    channel: String,
    chaincode: String,
    ws: Option<WsStream>,
}

impl GatewayEventFeed {
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            url: config.ws_url.clone(),
            channel: config.channel.clone(),
            chaincode: config.chaincode.clone(),
            ws: None,
        }
    }
}

#[async_trait]
impl EventFeed for GatewayEventFeed {
    async fn subscribe(&mut self) -> Result<()> {
        info!(url = %self.url, "connecting to event feed");

        let (mut ws, response) = connect_async(&self.url)
            .await
            .map_err(|e| Error::Subscription(e.to_string()))?;

        debug!(status = %response.status(), "event feed connected");

        let frame = SubscribeFrame {
            kind: "subscribe",
            channel: &self.channel,
            chaincode: &self.chaincode,
        };
        let json = serde_json::to_string(&frame)?;
        ws.send(Message::Text(json))
            .await
            .map_err(|e| Error::Subscription(e.to_string()))?;

        info!(
            channel = %self.channel,
            chaincode = %self.chaincode,
            "subscribed to contract events"
        );

        self.ws = Some(ws);
        Ok(())
    }

    async fn next_event(&mut self) -> Option<FeedEvent> {
        let ws = self.ws.as_mut()?;

        loop {
            match ws.next().await? {
                Ok(Message::Text(text)) => match serde_json::from_str::<EventFrame>(&text) {
                    Ok(frame) => {
                        debug!(event = %frame.event, "event frame received");
                        return Some(FeedEvent::new(frame.event, frame.payload.into_bytes()));
                    }
                    Err(e) => {
                        warn!(error = %e, "skipping unparseable event frame");
                    }
                },
                Ok(Message::Ping(data)) => {
                    if let Err(e) = ws.send(Message::Pong(data)).await {
                        warn!(error = %e, "failed to answer ping, closing feed");
                        self.ws = None;
                        return None;
                    }
                }
                Ok(Message::Close(_)) => {
                    info!("event feed closed by gateway");
                    self.ws = None;
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "event feed error, closing");
                    self.ws = None;
                    return None;
                }
            }
        }
    }

    fn feed_name(&self) -> &'static str {
        "ledger-gateway"
    }
}
