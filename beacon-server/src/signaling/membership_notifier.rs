use crate::signaling::SignalingOutput;
use beacon_core::{ParticipantId, RoomSummary, ServerMessage};
use std::sync::Arc;
use tracing::debug;

/// Pushes the room listing to every welcomed participant when the set of
/// rooms changes.
#[derive(Clone)]
pub struct MembershipNotifier {
    output: Arc<dyn SignalingOutput>,
}

impl MembershipNotifier {
    pub fn new(output: Arc<dyn SignalingOutput>) -> Self {
        Self { output }
    }

    pub async fn rooms_changed(&self, audience: &[ParticipantId], rooms: Vec<RoomSummary>) {
        debug!(
            "Pushing room listing ({} rooms) to {} participants",
            rooms.len(),
            audience.len()
        );
        self.output
            .broadcast(audience, ServerMessage::RoomsUpdated(rooms))
            .await;
    }
}
