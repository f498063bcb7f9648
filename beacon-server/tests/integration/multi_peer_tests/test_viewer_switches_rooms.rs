use beacon_core::ServerMessage;

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::{join_as_viewer, settle, start_broadcast};

#[tokio::test]
async fn test_viewer_switches_rooms() {
    init_tracing();

    let (rooms, signaling) = create_test_hub();
    let (first_owner, first_room) = start_broadcast(&rooms, &signaling).await.unwrap();
    let (second_owner, second_room) = start_broadcast(&rooms, &signaling).await.unwrap();
    let viewer = join_as_viewer(&rooms, &first_room).await.unwrap();

    rooms.join(viewer, second_room.clone()).await.unwrap();
    settle(&rooms).await.unwrap();

    assert_eq!(
        signaling.messages_for(&first_owner).last(),
        Some(&ServerMessage::PeerLeft(viewer))
    );
    assert_eq!(
        signaling.messages_for(&second_owner).last(),
        Some(&ServerMessage::PeerJoined(viewer))
    );

    // Closing the old room no longer concerns the viewer.
    rooms.disconnect(first_owner).await.unwrap();
    rooms.disconnect(viewer).await.unwrap();
    assert_eq!(
        signaling.messages_for(&second_owner).last(),
        Some(&ServerMessage::PeerLeft(viewer))
    );
}
