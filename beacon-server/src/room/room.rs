use beacon_core::{ParticipantId, RoomId, RoomSummary};
use indexmap::IndexSet;
use std::time::{Duration, Instant};

/// One rendezvous context: a broadcaster plus the viewers that joined it.
#[derive(Debug)]
pub struct Room {
    id: RoomId,
    /// Fixed at creation. The room dies with this connection.
    broadcaster: ParticipantId,
    display_name: String,
    created_at: Instant,
    viewers: IndexSet<ParticipantId>,
}

impl Room {
    pub(crate) fn new(id: RoomId, broadcaster: ParticipantId) -> Self {
        Self {
            display_name: id.display_name(),
            id,
            broadcaster,
            created_at: Instant::now(),
            viewers: IndexSet::new(),
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn broadcaster(&self) -> ParticipantId {
        self.broadcaster
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    pub fn viewers(&self) -> impl Iterator<Item = &ParticipantId> {
        self.viewers.iter()
    }

    pub fn viewer_count(&self) -> usize {
        self.viewers.len()
    }

    pub fn has_viewer(&self, participant_id: &ParticipantId) -> bool {
        self.viewers.contains(participant_id)
    }

    /// Broadcaster first, then viewers in join order.
    pub fn members(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        std::iter::once(self.broadcaster).chain(self.viewers.iter().copied())
    }

    /// Every member except `participant_id`.
    pub fn members_except(&self, participant_id: &ParticipantId) -> Vec<ParticipantId> {
        self.members().filter(|id| id != participant_id).collect()
    }

    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            room_id: self.id.clone(),
            name: self.display_name.clone(),
        }
    }

    pub(crate) fn add_viewer(&mut self, participant_id: ParticipantId) -> bool {
        self.viewers.insert(participant_id)
    }

    pub(crate) fn remove_viewer(&mut self, participant_id: &ParticipantId) -> bool {
        self.viewers.shift_remove(participant_id)
    }
}
