//! Room-based realtime broadcast over WebSocket.
//!
//! Clients connect to `GET /ws` and join or leave per-token rooms:
//!
//! ```json
//! { "type": "join-token", "address": "0xabc..." }
//! { "type": "leave-token", "address": "0xabc..." }
//! ```
//!
//! Each room is a tokio broadcast channel; token lifecycle events
//! published by the token and admin services are relayed only to sockets
//! joined to that token's room. Slow subscribers that fall behind skip
//! missed events and continue from the latest.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::tokens::model::TokenStatus;
use crate::state::AppState;

const ROOM_CHANNEL_CAPACITY: usize = 64;
const OUTBOUND_QUEUE_CAPACITY: usize = 32;

/// Event broadcast into a token room.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RoomEvent {
    TokenCreated {
        address: String,
        name: String,
        symbol: String,
    },
    TokenStatusChanged {
        address: String,
        status: TokenStatus,
    },
    TokenFlagged {
        address: String,
        reason: Option<String>,
    },
}

/// Registry of token rooms. Cheap to clone; rooms are created lazily on
/// first subscription and a publish into a room nobody joined is a no-op.
#[derive(Clone, Debug, Default)]
pub struct RoomHub {
    rooms: Arc<RwLock<HashMap<String, broadcast::Sender<RoomEvent>>>>,
}

impl RoomHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a token room, creating it if needed.
    pub fn subscribe(&self, address: &str) -> broadcast::Receiver<RoomEvent> {
        let mut rooms = self.rooms.write().expect("room registry lock poisoned");
        rooms
            .entry(address.to_string())
            .or_insert_with(|| broadcast::channel(ROOM_CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Publish an event to a token room. Dropped silently if the room has
    /// no subscribers; a room whose last subscriber is gone is removed so
    /// the registry does not accumulate dead entries.
    pub fn publish(&self, address: &str, event: RoomEvent) {
        let mut rooms = self.rooms.write().expect("room registry lock poisoned");
        if let Some(tx) = rooms.get(address) {
            if tx.receiver_count() == 0 {
                rooms.remove(address);
                return;
            }
            let _ = tx.send(event);
        }
    }

    pub fn room_count(&self) -> usize {
        self.rooms.read().expect("room registry lock poisoned").len()
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum ClientMessage {
    JoinToken { address: String },
    LeaveToken { address: String },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum ServerMessage<'a> {
    Joined { address: &'a str },
    Left { address: &'a str },
    Error { message: &'a str },
}

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state.rooms))
}

async fn handle_socket(socket: WebSocket, hub: RoomHub) {
    let client_id = Uuid::new_v4();
    info!(client_id = %client_id, "Client connected");

    let (mut sink, mut stream) = socket.split();
    let (out_tx, mut out_rx) = mpsc::channel::<Message>(OUTBOUND_QUEUE_CAPACITY);

    // Single writer task owns the sink; room forwarders and the control
    // loop both feed it through the mpsc queue.
    let writer = tokio::spawn(async move {
        while let Some(msg) = out_rx.recv().await {
            if sink.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut subscriptions: HashMap<String, tokio::task::JoinHandle<()>> = HashMap::new();

    while let Some(Ok(msg)) = stream.next().await {
        let Message::Text(text) = msg else {
            continue;
        };

        match serde_json::from_str::<ClientMessage>(&text) {
            Ok(ClientMessage::JoinToken { address }) => {
                if subscriptions.contains_key(&address) {
                    continue;
                }

                let mut rx = hub.subscribe(&address);
                let tx = out_tx.clone();
                let handle = tokio::spawn(async move {
                    loop {
                        match rx.recv().await {
                            Ok(event) => {
                                let Ok(payload) = serde_json::to_string(&event) else {
                                    continue;
                                };
                                if tx.send(Message::Text(payload.into())).await.is_err() {
                                    break;
                                }
                            }
                            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                                warn!(skipped, "Room subscriber lagged, skipping to latest");
                            }
                            Err(broadcast::error::RecvError::Closed) => break,
                        }
                    }
                });
                subscriptions.insert(address.clone(), handle);

                info!(client_id = %client_id, room = %address, "Client joined token room");
                send_control(&out_tx, &ServerMessage::Joined { address: &address }).await;
            }
            Ok(ClientMessage::LeaveToken { address }) => {
                if let Some(handle) = subscriptions.remove(&address) {
                    handle.abort();
                    info!(client_id = %client_id, room = %address, "Client left token room");
                    send_control(&out_tx, &ServerMessage::Left { address: &address }).await;
                }
            }
            Err(_) => {
                send_control(
                    &out_tx,
                    &ServerMessage::Error {
                        message: "Unrecognized message",
                    },
                )
                .await;
            }
        }
    }

    for (_, handle) in subscriptions.drain() {
        handle.abort();
    }
    drop(out_tx);
    let _ = writer.await;

    info!(client_id = %client_id, "Client disconnected");
}

async fn send_control(tx: &mpsc::Sender<Message>, msg: &ServerMessage<'_>) {
    if let Ok(payload) = serde_json::to_string(msg) {
        let _ = tx.send(Message::Text(payload.into())).await;
    }
}
