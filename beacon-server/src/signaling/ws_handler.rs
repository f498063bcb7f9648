use crate::server::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use beacon_core::{ClientMessage, ParticipantId};
use futures::{Sink, SinkExt, StreamExt};
use std::fmt::Display;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// Upgrades `GET /ws`. The participant id is assigned here, never by the client.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let participant_id = ParticipantId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, participant_id, state))
}

async fn handle_socket(socket: WebSocket, participant_id: ParticipantId, state: AppState) {
    info!("New WebSocket connection: {}", participant_id);

    let (sender, mut receiver) = socket.split();
    let (tx, rx) = mpsc::unbounded_channel();

    state.registry.register(participant_id, tx);
    if let Err(e) = state.rooms.connect(participant_id).await {
        error!("Rejecting {}: {}", participant_id, e);
        state.registry.unregister(&participant_id);
        return;
    }

    let mut send_task = tokio::spawn(write_frames(
        sender,
        rx,
        state.heartbeat_interval,
        state.write_timeout,
        participant_id,
    ));

    let mut recv_task = tokio::spawn({
        let rooms = state.rooms.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(client_msg) => {
                            if let Err(e) = rooms.handle(participant_id, client_msg).await {
                                error!("Room hub died: {}", e);
                                break;
                            }
                        }
                        Err(e) => warn!("Invalid message from {}: {}", participant_id, e),
                    },
                    Message::Binary(_) => {
                        warn!("Dropping binary frame from {}", participant_id)
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    if let Err(e) = state.rooms.disconnect(participant_id).await {
        error!("Failed to clean up {}: {}", participant_id, e);
    }
    state.registry.unregister(&participant_id);
    info!("WebSocket disconnected: {}", participant_id);
}

/// Drains the outbound queue into the socket and pings every `heartbeat`.
///
/// Returns when the queue closes, a write fails, or a write takes longer than
/// `write_timeout`.
async fn write_frames<S>(
    mut sink: S,
    mut rx: mpsc::UnboundedReceiver<Message>,
    heartbeat: Duration,
    write_timeout: Duration,
    participant_id: ParticipantId,
) where
    S: Sink<Message> + Unpin,
    S::Error: Display,
{
    let mut ticker = tokio::time::interval(heartbeat);
    ticker.tick().await;

    loop {
        let frame = tokio::select! {
            msg = rx.recv() => match msg {
                Some(msg) => msg,
                None => break,
            },
            _ = ticker.tick() => Message::Ping(Bytes::new()),
        };

        match timeout(write_timeout, sink.send(frame)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                info!("Write to {} failed: {}", participant_id, e);
                break;
            }
            Err(_) => {
                warn!(
                    "Write to {} stalled for {:?}, dropping session",
                    participant_id, write_timeout
                );
                break;
            }
        }
    }
}
