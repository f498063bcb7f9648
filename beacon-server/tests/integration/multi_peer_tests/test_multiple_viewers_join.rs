use beacon_core::ServerMessage;

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::{join_as_viewer, settle, start_broadcast};

#[tokio::test]
async fn test_multiple_viewers_join() {
    init_tracing();

    let (rooms, signaling) = create_test_hub();
    let (broadcaster, room_id) = start_broadcast(&rooms, &signaling).await.unwrap();

    let first = join_as_viewer(&rooms, &room_id).await.unwrap();
    let second = join_as_viewer(&rooms, &room_id).await.unwrap();
    let third = join_as_viewer(&rooms, &room_id).await.unwrap();

    let joined: Vec<_> = signaling
        .messages_for(&broadcaster)
        .into_iter()
        .filter(|msg| matches!(msg, ServerMessage::PeerJoined(_)))
        .collect();
    assert_eq!(
        joined,
        vec![
            ServerMessage::PeerJoined(first),
            ServerMessage::PeerJoined(second),
            ServerMessage::PeerJoined(third),
        ]
    );

    // Earlier viewers hear about later ones, never about themselves.
    assert!(signaling
        .messages_for(&first)
        .contains(&ServerMessage::PeerJoined(third)));
    assert!(!signaling
        .messages_for(&third)
        .iter()
        .any(|msg| matches!(msg, ServerMessage::PeerJoined(_))));

    // Viewer joins are not room-list changes.
    assert_eq!(signaling.broadcasts().len(), 1);
}

#[tokio::test]
async fn test_repeated_join_is_silent() {
    init_tracing();

    let (rooms, signaling) = create_test_hub();
    let (broadcaster, room_id) = start_broadcast(&rooms, &signaling).await.unwrap();
    let viewer = join_as_viewer(&rooms, &room_id).await.unwrap();

    rooms.join(viewer, room_id.clone()).await.unwrap();
    settle(&rooms).await.unwrap();

    let joined = signaling
        .messages_for(&broadcaster)
        .into_iter()
        .filter(|msg| *msg == ServerMessage::PeerJoined(viewer))
        .count();
    assert_eq!(joined, 1);
}
