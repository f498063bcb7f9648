use beacon_core::{RoomId, ServerMessage};

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::{connect, settle, start_broadcast};

#[tokio::test]
async fn test_join_missing_room() {
    init_tracing();

    let (rooms, signaling) = create_test_hub();
    let (broadcaster, _) = start_broadcast(&rooms, &signaling).await.unwrap();
    let listing_before = rooms.rooms_snapshot().await.unwrap();
    signaling.clear();

    let viewer = connect(&rooms).await.unwrap();
    let missing = RoomId::from("webrtc-room");
    rooms.join(viewer, missing.clone()).await.unwrap();
    settle(&rooms).await.unwrap();

    assert_eq!(
        signaling.messages_for(&viewer),
        vec![
            ServerMessage::Welcome(viewer),
            ServerMessage::RoomNotFound(missing)
        ]
    );
    assert!(signaling.messages_for(&broadcaster).is_empty());
    assert_eq!(rooms.rooms_snapshot().await.unwrap(), listing_before);
}
