use crate::error::{RelayError, RelayResult};
use crate::room::RoomTable;
use beacon_core::{ParticipantId, SignalRequest};

/// Resolves the recipients of a signal envelope. Holds no state of its own.
pub struct SignalingRouter;

impl SignalingRouter {
    /// An explicit `to` wins over `room`. A room-only envelope fans out to every
    /// other member of that room.
    pub fn route<F>(
        table: &RoomTable,
        sender: ParticipantId,
        request: &SignalRequest,
        is_connected: F,
    ) -> RelayResult<Vec<ParticipantId>>
    where
        F: Fn(&ParticipantId) -> bool,
    {
        if let Some(to) = request.to {
            if !is_connected(&to) {
                return Err(RelayError::RecipientUnreachable(to));
            }
            return Ok(vec![to]);
        }

        let Some(room_id) = &request.room else {
            return Err(RelayError::MalformedEnvelope(
                "signal needs `to` or `room`".to_owned(),
            ));
        };

        let room = table
            .get(room_id)
            .ok_or_else(|| RelayError::RoomNotFound(room_id.clone()))?;

        Ok(room
            .members_except(&sender)
            .into_iter()
            .filter(|id| is_connected(id))
            .collect())
    }
}
