use crate::error::{RelayError, RelayResult};
use crate::room::Room;
use beacon_core::{ParticipantId, RoomId, RoomSummary};
use indexmap::IndexMap;
use std::collections::HashMap;

/// What a participant currently is, as far as the table knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Unaffiliated,
    Broadcaster(RoomId),
    Viewer(RoomId),
}

/// Effect of a participant leaving the table.
#[derive(Debug)]
pub enum Departure {
    /// The broadcaster left; the room is gone together with its viewer set.
    RoomClosed(Room),
    /// A viewer left; `remaining` are the members still in the room.
    ViewerLeft {
        room_id: RoomId,
        remaining: Vec<ParticipantId>,
    },
}

/// Result of a successful join.
#[derive(Debug)]
pub struct Joined {
    pub room_id: RoomId,
    /// `false` when the participant was already a viewer of this room.
    pub newly_joined: bool,
    /// Members of the room other than the joining participant.
    pub others: Vec<ParticipantId>,
    /// Set when the participant moved here from another room.
    pub left: Option<Departure>,
}

/// Authoritative in-memory store of live rooms.
///
/// Not synchronized: a single owner applies every mutation (see `RoomHub`).
#[derive(Debug, Default)]
pub struct RoomTable {
    rooms: IndexMap<RoomId, Room>,
    owners: HashMap<ParticipantId, RoomId>,
    viewers: HashMap<ParticipantId, RoomId>,
}

impl RoomTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    pub fn role_of(&self, participant_id: &ParticipantId) -> Role {
        if let Some(room_id) = self.owners.get(participant_id) {
            return Role::Broadcaster(room_id.clone());
        }
        match self.viewers.get(participant_id) {
            Some(room_id) => Role::Viewer(room_id.clone()),
            None => Role::Unaffiliated,
        }
    }

    pub fn create_room(&mut self, broadcaster: ParticipantId) -> RelayResult<RoomId> {
        if let Some(room) = self.owners.get(&broadcaster) {
            return Err(RelayError::DuplicateRoomOwnership {
                participant: broadcaster,
                room: room.clone(),
            });
        }
        if self.viewers.contains_key(&broadcaster) {
            return Err(RelayError::RoleConflict(broadcaster));
        }

        let mut room_id = RoomId::generate();
        while self.rooms.contains_key(&room_id) {
            room_id = RoomId::generate();
        }

        self.rooms
            .insert(room_id.clone(), Room::new(room_id.clone(), broadcaster));
        self.owners.insert(broadcaster, room_id.clone());
        Ok(room_id)
    }

    pub fn join(&mut self, room_id: &RoomId, participant_id: ParticipantId) -> RelayResult<Joined> {
        if self.owners.contains_key(&participant_id) {
            return Err(RelayError::RoleConflict(participant_id));
        }
        if !self.rooms.contains_key(room_id) {
            return Err(RelayError::RoomNotFound(room_id.clone()));
        }

        let current = self.viewers.get(&participant_id).cloned();
        let left = match current {
            Some(current) if &current == room_id => {
                return Ok(Joined {
                    room_id: room_id.clone(),
                    newly_joined: false,
                    others: self.members_except(room_id, &participant_id),
                    left: None,
                });
            }
            Some(_) => self.remove_viewer(&participant_id),
            None => None,
        };

        let Some(room) = self.rooms.get_mut(room_id) else {
            return Err(RelayError::RoomNotFound(room_id.clone()));
        };
        room.add_viewer(participant_id);
        let others = room.members_except(&participant_id);
        self.viewers.insert(participant_id, room_id.clone());

        Ok(Joined {
            room_id: room_id.clone(),
            newly_joined: true,
            others,
            left,
        })
    }

    /// Listing of live rooms in creation order.
    pub fn rooms_snapshot(&self) -> Vec<RoomSummary> {
        self.rooms.values().map(Room::summary).collect()
    }

    /// All members of `room_id` except `participant_id`.
    pub fn members_except(&self, room_id: &RoomId, participant_id: &ParticipantId) -> Vec<ParticipantId> {
        self.rooms
            .get(room_id)
            .map(|room| room.members_except(participant_id))
            .unwrap_or_default()
    }

    pub fn remove_participant(&mut self, participant_id: &ParticipantId) -> Option<Departure> {
        if let Some(room_id) = self.owners.remove(participant_id) {
            let room = self.rooms.shift_remove(&room_id)?;
            for viewer in room.viewers() {
                self.viewers.remove(viewer);
            }
            return Some(Departure::RoomClosed(room));
        }
        self.remove_viewer(participant_id)
    }

    fn remove_viewer(&mut self, participant_id: &ParticipantId) -> Option<Departure> {
        let room_id = self.viewers.remove(participant_id)?;
        let room = self.rooms.get_mut(&room_id)?;
        room.remove_viewer(participant_id);
        Some(Departure::ViewerLeft {
            remaining: room.members().collect(),
            room_id,
        })
    }
}
