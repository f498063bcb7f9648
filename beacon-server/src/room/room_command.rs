use beacon_core::{ParticipantId, RoomId, RoomSummary, SignalRequest};
use tokio::sync::oneshot;

/// Commands serialized into the room hub. Sessions push them in arrival order.
#[derive(Debug)]
pub enum RoomCommand {
    /// A transport connection was opened.
    Connect { participant_id: ParticipantId },

    CreateRoom { participant_id: ParticipantId },

    Join {
        participant_id: ParticipantId,
        room_id: RoomId,
    },

    Signal {
        participant_id: ParticipantId,
        request: SignalRequest,
    },

    /// The transport connection is gone. `done` fires once the tables are clean.
    Disconnect {
        participant_id: ParticipantId,
        done: oneshot::Sender<()>,
    },

    ListRooms {
        reply: oneshot::Sender<Vec<RoomSummary>>,
    },
}
