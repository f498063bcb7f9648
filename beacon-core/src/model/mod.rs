mod participant;
mod room;
mod signaling;

pub use participant::ParticipantId;
pub use room::{RoomId, RoomSummary};
pub use signaling::{ClientMessage, ServerMessage, SignalRequest, SignalRelay};
