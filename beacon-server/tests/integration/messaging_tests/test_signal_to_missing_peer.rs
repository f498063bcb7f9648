use beacon_core::{ParticipantId, RoomId, ServerMessage};
use serde_json::json;

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::{connect, directed, join_as_viewer, settle, start_broadcast, to_room};

#[tokio::test]
async fn test_signal_to_disconnected_peer_is_dropped() {
    init_tracing();

    let (rooms, signaling) = create_test_hub();
    let (broadcaster, room_id) = start_broadcast(&rooms, &signaling).await.unwrap();
    let viewer = join_as_viewer(&rooms, &room_id).await.unwrap();
    rooms.disconnect(viewer).await.unwrap();
    signaling.clear();

    rooms
        .signal(broadcaster, directed(viewer, json!({ "candidate": "late" })))
        .await
        .unwrap();
    rooms
        .signal(broadcaster, directed(ParticipantId::new(), json!({})))
        .await
        .unwrap();
    settle(&rooms).await.unwrap();

    assert!(signaling.all().is_empty(), "nothing is sent, not even an error");
}

#[tokio::test]
async fn test_room_signal_to_missing_room_is_reported() {
    init_tracing();

    let (rooms, signaling) = create_test_hub();
    let viewer = connect(&rooms).await.unwrap();
    let missing = RoomId::from("gone");

    rooms
        .signal(viewer, to_room(&missing, json!({ "candidate": "c" })))
        .await
        .unwrap();
    settle(&rooms).await.unwrap();

    assert_eq!(
        signaling.messages_for(&viewer).last(),
        Some(&ServerMessage::RoomNotFound(missing))
    );
}

#[tokio::test]
async fn test_envelope_without_destination_is_dropped() {
    init_tracing();

    let (rooms, signaling) = create_test_hub();
    let sender = connect(&rooms).await.unwrap();
    let bystander = connect(&rooms).await.unwrap();
    assert_eq!(signaling.all().len(), 2, "both welcomes are out before clearing");
    signaling.clear();

    let mut envelope = directed(bystander, json!({}));
    envelope.to = None;
    rooms.signal(sender, envelope).await.unwrap();
    settle(&rooms).await.unwrap();

    assert!(signaling.all().is_empty());
}
