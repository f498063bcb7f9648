use crate::model::participant::ParticipantId;
use crate::model::room::{RoomId, RoomSummary};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Frames a client may send over its session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientMessage {
    /// Become the broadcaster of a fresh room.
    CreateRoom,
    /// Join an existing room as a viewer.
    Join(RoomId),
    /// Relay an opaque negotiation payload.
    Signal(SignalRequest),
}

/// Relay request as sent by a client.
///
/// There is deliberately no `from` field: the sender is stamped by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<ParticipantId>,
    pub data: Value,
}

/// Relayed envelope as delivered to its recipient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalRelay {
    pub from: ParticipantId,
    pub data: Value,
}

/// Frames the server pushes to a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerMessage {
    Welcome(ParticipantId),
    RoomCreated(RoomId),
    PeerJoined(ParticipantId),
    PeerLeft(ParticipantId),
    Signal(SignalRelay),
    RoomsUpdated(Vec<RoomSummary>),
    RoomNotFound(RoomId),
}
