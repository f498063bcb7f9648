use crate::error::RelayError;
use crate::room::room_command::RoomCommand;
use crate::room::room_table::{Departure, RoomTable};
use crate::signaling::{MembershipNotifier, SignalingOutput, SignalingRouter};
use beacon_core::{ParticipantId, RoomId, ServerMessage, SignalRelay, SignalRequest};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Sole owner of the room table.
///
/// Every connect, disconnect, create, join and relay is applied here one
/// command at a time, so the table never needs a lock.
pub struct RoomHub {
    table: RoomTable,
    connected: HashSet<ParticipantId>,
    command_rx: mpsc::Receiver<RoomCommand>,
    signaling: Arc<dyn SignalingOutput>,
    notifier: MembershipNotifier,
}

impl RoomHub {
    pub fn new(command_rx: mpsc::Receiver<RoomCommand>, signaling: Arc<dyn SignalingOutput>) -> Self {
        Self {
            table: RoomTable::new(),
            connected: HashSet::new(),
            command_rx,
            notifier: MembershipNotifier::new(signaling.clone()),
            signaling,
        }
    }

    pub async fn run(mut self) {
        info!("Room hub started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }

        info!(
            "Command channel closed. Room hub stopping with {} live rooms.",
            self.table.len()
        );
    }

    async fn handle_command(&mut self, cmd: RoomCommand) {
        match cmd {
            RoomCommand::Connect { participant_id } => {
                if !self.connected.insert(participant_id) {
                    warn!("Participant {} connected twice", participant_id);
                    return;
                }
                info!("Participant {} connected", participant_id);
                self.signaling
                    .send(participant_id, ServerMessage::Welcome(participant_id))
                    .await;
            }

            RoomCommand::CreateRoom { participant_id } => {
                if !self.is_connected(&participant_id) {
                    return;
                }
                self.create_room(participant_id).await;
            }

            RoomCommand::Join {
                participant_id,
                room_id,
            } => {
                if !self.is_connected(&participant_id) {
                    return;
                }
                self.join(participant_id, room_id).await;
            }

            RoomCommand::Signal {
                participant_id,
                request,
            } => {
                if !self.is_connected(&participant_id) {
                    return;
                }
                self.relay(participant_id, request).await;
            }

            RoomCommand::Disconnect {
                participant_id,
                done,
            } => {
                self.disconnect(participant_id).await;
                let _ = done.send(());
            }

            RoomCommand::ListRooms { reply } => {
                let _ = reply.send(self.table.rooms_snapshot());
            }
        }
    }

    fn is_connected(&self, participant_id: &ParticipantId) -> bool {
        let connected = self.connected.contains(participant_id);
        if !connected {
            warn!("Dropping command from unknown participant {}", participant_id);
        }
        connected
    }

    async fn create_room(&mut self, participant_id: ParticipantId) {
        match self.table.create_room(participant_id) {
            Ok(room_id) => {
                info!("Participant {} created room {}", participant_id, room_id);
                self.signaling
                    .send(participant_id, ServerMessage::RoomCreated(room_id))
                    .await;
                self.push_listing().await;
            }
            Err(e) => warn!("Ignoring create-room: {}", e),
        }
    }

    async fn join(&mut self, participant_id: ParticipantId, room_id: RoomId) {
        match self.table.join(&room_id, participant_id) {
            Ok(joined) => {
                if let Some(left) = joined.left {
                    self.announce_departure(participant_id, left).await;
                }
                if !joined.newly_joined {
                    debug!("Participant {} already in room {}", participant_id, room_id);
                    return;
                }
                info!("Participant {} joined room {}", participant_id, room_id);
                for member in joined.others {
                    self.signaling
                        .send(member, ServerMessage::PeerJoined(participant_id))
                        .await;
                }
            }
            Err(RelayError::RoomNotFound(room_id)) => {
                info!("Participant {} asked for missing room {}", participant_id, room_id);
                self.signaling
                    .send(participant_id, ServerMessage::RoomNotFound(room_id))
                    .await;
            }
            Err(e) => warn!("Ignoring join: {}", e),
        }
    }

    async fn relay(&mut self, sender: ParticipantId, request: SignalRequest) {
        let connected = &self.connected;
        let routed = SignalingRouter::route(&self.table, sender, &request, |id| {
            connected.contains(id)
        });

        match routed {
            Ok(recipients) => {
                let relay = SignalRelay {
                    from: sender,
                    data: request.data,
                };
                for recipient in recipients {
                    let delivered = self
                        .signaling
                        .send(recipient, ServerMessage::Signal(relay.clone()))
                        .await;
                    if delivered {
                        debug!("Relayed signal {} -> {}", sender, recipient);
                    }
                }
            }
            Err(RelayError::RoomNotFound(room_id)) => {
                self.signaling
                    .send(sender, ServerMessage::RoomNotFound(room_id))
                    .await;
            }
            Err(RelayError::RecipientUnreachable(to)) => {
                debug!("Dropping signal {} -> {}: recipient gone", sender, to);
            }
            Err(e) => warn!("Dropping signal from {}: {}", sender, e),
        }
    }

    async fn disconnect(&mut self, participant_id: ParticipantId) {
        if !self.connected.remove(&participant_id) {
            return;
        }
        info!("Participant {} disconnected", participant_id);

        if let Some(departure) = self.table.remove_participant(&participant_id) {
            self.announce_departure(participant_id, departure).await;
        }
    }

    /// Only participants already sent `welcome` are addressed, so a push can
    /// never overtake it on a fresh connection.
    async fn push_listing(&self) {
        let audience: Vec<ParticipantId> = self.connected.iter().copied().collect();
        self.notifier
            .rooms_changed(&audience, self.table.rooms_snapshot())
            .await;
    }

    async fn announce_departure(&self, participant_id: ParticipantId, departure: Departure) {
        match departure {
            Departure::RoomClosed(room) => {
                info!(
                    "Room {} closed after {:?}, evicting {} viewers",
                    room.id(),
                    room.age(),
                    room.viewer_count()
                );
                self.push_listing().await;
            }
            Departure::ViewerLeft { room_id, remaining } => {
                debug!("Participant {} left room {}", participant_id, room_id);
                for member in remaining {
                    self.signaling
                        .send(member, ServerMessage::PeerLeft(participant_id))
                        .await;
                }
            }
        }
    }
}
