use beacon_core::{ParticipantId, ServerMessage};
use async_trait::async_trait;

/// Outbound side of the transport, implemented by the WebSocket registry.
///
/// Sends are fire-and-forget: implementations must not wait on a slow peer.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Deliver to one participant. Returns `false` if it has no live connection.
    async fn send(&self, participant_id: ParticipantId, msg: ServerMessage) -> bool;

    /// Deliver the same message to each of `recipients`, skipping any that
    /// have no live connection.
    async fn broadcast(&self, recipients: &[ParticipantId], msg: ServerMessage);
}
