use crate::error::{RelayError, RelayResult};
use crate::room::{RoomCommand, RoomHub};
use crate::signaling::SignalingOutput;
use beacon_core::{ClientMessage, ParticipantId, RoomId, RoomSummary, SignalRequest};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::info;

/// Cloneable handle to a running [`RoomHub`].
///
/// The hub stops once every handle is dropped.
#[derive(Clone)]
pub struct RoomManager {
    command_tx: mpsc::Sender<RoomCommand>,
}

impl RoomManager {
    /// Spawns the hub on the current tokio runtime.
    ///
    /// A `command_buffer` of zero is raised to one.
    pub fn new(signaling: Arc<dyn SignalingOutput>, command_buffer: usize) -> Self {
        let command_buffer = command_buffer.max(1);
        let (command_tx, command_rx) = mpsc::channel(command_buffer);
        let hub = RoomHub::new(command_rx, signaling);
        tokio::spawn(hub.run());

        info!("Room manager ready (command buffer {})", command_buffer);
        Self { command_tx }
    }

    pub async fn connect(&self, participant_id: ParticipantId) -> RelayResult<()> {
        self.dispatch(RoomCommand::Connect { participant_id }).await
    }

    pub async fn create_room(&self, participant_id: ParticipantId) -> RelayResult<()> {
        self.dispatch(RoomCommand::CreateRoom { participant_id }).await
    }

    pub async fn join(&self, participant_id: ParticipantId, room_id: RoomId) -> RelayResult<()> {
        self.dispatch(RoomCommand::Join {
            participant_id,
            room_id,
        })
        .await
    }

    pub async fn signal(&self, participant_id: ParticipantId, request: SignalRequest) -> RelayResult<()> {
        self.dispatch(RoomCommand::Signal {
            participant_id,
            request,
        })
        .await
    }

    /// Returns once the hub has removed the participant and its room, if any.
    pub async fn disconnect(&self, participant_id: ParticipantId) -> RelayResult<()> {
        let (done, done_rx) = oneshot::channel();
        self.dispatch(RoomCommand::Disconnect {
            participant_id,
            done,
        })
        .await?;
        done_rx.await.map_err(|_| RelayError::HubClosed)
    }

    pub async fn rooms_snapshot(&self) -> RelayResult<Vec<RoomSummary>> {
        let (reply, reply_rx) = oneshot::channel();
        self.dispatch(RoomCommand::ListRooms { reply }).await?;
        reply_rx.await.map_err(|_| RelayError::HubClosed)
    }

    /// Forwards a decoded client frame.
    pub async fn handle(&self, participant_id: ParticipantId, msg: ClientMessage) -> RelayResult<()> {
        match msg {
            ClientMessage::CreateRoom => self.create_room(participant_id).await,
            ClientMessage::Join(room_id) => self.join(participant_id, room_id).await,
            ClientMessage::Signal(request) => self.signal(participant_id, request).await,
        }
    }

    async fn dispatch(&self, cmd: RoomCommand) -> RelayResult<()> {
        self.command_tx
            .send(cmd)
            .await
            .map_err(|_| RelayError::HubClosed)
    }
}
