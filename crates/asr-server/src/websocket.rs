//! `WS /transcribe-stream`, streaming configuration handshake.
//!
//! The first client message must be a `config` frame carrying `language` and
//! `prefer_accuracy`. The server runs the same selector as the synchronous
//! path and acknowledges with the chosen engine; any other first message gets
//! a structured error and the connection closes.
//!
//! The streaming path performs selection only; there is no fallback chain
//! for live streams. Re-pointing an established audio stream at a different
//! engine mid-call is a product decision that has not been taken; clients
//! that need fallback semantics use `POST /transcribe`.

use axum::extract::WebSocketUpgrade;
use axum::extract::ws::{Message, WebSocket};
use axum::response::Response;
use metrics::counter;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use asr_core::{Engine, SelectionCategory, select_engine};
use asr_router::metrics::{
    ENGINE_SELECTIONS_TOTAL, STREAM_HANDSHAKE_ERRORS_TOTAL, STREAM_SESSIONS_TOTAL,
};

/// Sent after a valid `config` frame.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigAck {
    /// Always `config_ack`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Engine the stream should be carried by.
    pub engine_selected: Engine,
    /// Selection narrative, identical to the synchronous path.
    pub routing_reason: String,
}

#[derive(Debug, Deserialize)]
struct FirstMessage {
    #[serde(rename = "type")]
    kind: String,
    language: Option<String>,
    #[serde(default)]
    prefer_accuracy: bool,
}

/// Upgrade to a WebSocket and run the handshake.
pub async fn transcribe_stream(ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(mut socket: WebSocket) {
    // First data frame decides everything. Axum answers pings itself.
    let first = loop {
        match socket.recv().await {
            Some(Ok(Message::Text(text))) => break text,
            Some(Ok(Message::Ping(_) | Message::Pong(_))) => continue,
            Some(Ok(Message::Close(_))) | None => return,
            Some(Ok(Message::Binary(_))) => {
                reject(&mut socket).await;
                return;
            }
            Some(Err(e)) => {
                warn!(error = %e, "websocket receive failed during handshake");
                return;
            }
        }
    };

    match configure_stream(first.as_str()) {
        Some(ack) => {
            info!(
                engine = %ack.engine_selected,
                "stream configured"
            );
            if send_json(&mut socket, &ack).await.is_err() {
                return;
            }
            // Selection-only surface: hold the connection open and drain
            // until the client hangs up.
            while let Some(Ok(frame)) = socket.recv().await {
                if matches!(frame, Message::Close(_)) {
                    break;
                }
                debug!("ignoring post-handshake frame");
            }
        }
        None => reject(&mut socket).await,
    }
}

/// Run the handshake decision and emit the session counters.
///
/// The selection counter fires here exactly as it does for the synchronous
/// path; a stream handshake is a selection like any other.
fn configure_stream(text: &str) -> Option<ConfigAck> {
    let (ack, category) = handshake_reply(text)?;
    counter!(
        ENGINE_SELECTIONS_TOTAL,
        "engine" => ack.engine_selected.as_str(),
        "reason" => category.as_str(),
    )
    .increment(1);
    counter!(STREAM_SESSIONS_TOTAL).increment(1);
    Some(ack)
}

/// Parse the first frame; `None` means the handshake is invalid.
///
/// Shared with tests: the whole protocol decision, minus I/O and metrics.
fn handshake_reply(text: &str) -> Option<(ConfigAck, SelectionCategory)> {
    let msg: FirstMessage = serde_json::from_str(text).ok()?;
    if msg.kind != "config" {
        return None;
    }
    let language = msg.language?;
    let selection = select_engine(&language, msg.prefer_accuracy);
    Some((
        ConfigAck {
            kind: "config_ack".to_string(),
            engine_selected: selection.engine,
            routing_reason: selection.reason,
        },
        selection.category,
    ))
}

/// The error frame sent for an invalid first message.
fn handshake_error_frame() -> Value {
    serde_json::json!({
        "type": "error",
        "message": "First message must be config",
    })
}

async fn reject(socket: &mut WebSocket) {
    counter!(STREAM_HANDSHAKE_ERRORS_TOTAL).increment(1);
    let _ = socket
        .send(Message::Text(handshake_error_frame().to_string().into()))
        .await;
    let _ = socket.send(Message::Close(None)).await;
}

async fn send_json<T: Serialize>(socket: &mut WebSocket, value: &T) -> Result<(), axum::Error> {
    let text = serde_json::to_string(value).map_err(axum::Error::new)?;
    socket.send(Message::Text(text.into())).await
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
