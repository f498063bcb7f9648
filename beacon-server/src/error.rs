use beacon_core::{ParticipantId, RoomId};
use thiserror::Error;

/// Failures of a single relay operation. None of them is fatal to the server.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    #[error("participant {0} is not connected")]
    RecipientUnreachable(ParticipantId),

    #[error("participant {participant} already owns room {room}")]
    DuplicateRoomOwnership {
        participant: ParticipantId,
        room: RoomId,
    },

    #[error("participant {0} already holds a conflicting role")]
    RoleConflict(ParticipantId),

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("room hub is no longer running")]
    HubClosed,

    #[error("invalid server configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type RelayResult<T> = Result<T, RelayError>;
