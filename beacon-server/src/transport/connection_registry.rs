use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use beacon_core::{ParticipantId, ServerMessage};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error};

/// Live WebSocket connections, addressed by participant id.
///
/// Each entry is the unbounded queue feeding that socket's writer task, so a
/// send never waits on the network.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    peers: Arc<DashMap<ParticipantId, mpsc::UnboundedSender<Message>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, participant_id: ParticipantId, tx: mpsc::UnboundedSender<Message>) {
        self.peers.insert(participant_id, tx);
    }

    pub fn unregister(&self, participant_id: &ParticipantId) {
        self.peers.remove(participant_id);
    }

    pub fn contains(&self, participant_id: &ParticipantId) -> bool {
        self.peers.contains_key(participant_id)
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    fn encode(msg: &ServerMessage) -> Option<Message> {
        match serde_json::to_string(msg) {
            Ok(json) => Some(Message::Text(json.into())),
            Err(e) => {
                error!("Failed to serialize server message: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl SignalingOutput for ConnectionRegistry {
    async fn send(&self, participant_id: ParticipantId, msg: ServerMessage) -> bool {
        let Some(peer) = self.peers.get(&participant_id) else {
            debug!("No connection for {}, dropping message", participant_id);
            return false;
        };
        let Some(frame) = Self::encode(&msg) else {
            return false;
        };
        if let Err(e) = peer.send(frame) {
            error!("Failed to queue WS message for {}: {}", participant_id, e);
            return false;
        }
        true
    }

    async fn broadcast(&self, recipients: &[ParticipantId], msg: ServerMessage) {
        let Some(frame) = Self::encode(&msg) else {
            return;
        };
        for participant_id in recipients {
            let Some(peer) = self.peers.get(participant_id) else {
                continue;
            };
            if let Err(e) = peer.send(frame.clone()) {
                error!("Failed to queue WS broadcast for {}: {}", participant_id, e);
            }
        }
    }
}
