use beacon_core::{ServerMessage, SignalRelay};
use serde_json::json;

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::{directed, join_as_viewer, settle, start_broadcast};

#[tokio::test]
async fn test_full_broadcast_cycle() {
    init_tracing();

    let (rooms, signaling) = create_test_hub();

    let (broadcaster, room_id) = start_broadcast(&rooms, &signaling).await.unwrap();
    assert_eq!(
        signaling.messages_for(&broadcaster),
        vec![
            ServerMessage::Welcome(broadcaster),
            ServerMessage::RoomCreated(room_id.clone())
        ]
    );

    let viewer = join_as_viewer(&rooms, &room_id).await.unwrap();
    assert_eq!(
        signaling.messages_for(&broadcaster).last(),
        Some(&ServerMessage::PeerJoined(viewer))
    );

    let mut offer = directed(viewer, json!({ "sdp": { "type": "offer", "sdp": "v=0" } }));
    offer.room = Some(room_id.clone());
    rooms.signal(broadcaster, offer).await.unwrap();

    rooms
        .signal(viewer, directed(broadcaster, json!({ "sdp": { "type": "answer" } })))
        .await
        .unwrap();
    settle(&rooms).await.unwrap();

    assert_eq!(
        signaling.messages_for(&viewer).last(),
        Some(&ServerMessage::Signal(SignalRelay {
            from: broadcaster,
            data: json!({ "sdp": { "type": "offer", "sdp": "v=0" } }),
        }))
    );
    assert_eq!(
        signaling.messages_for(&broadcaster).last(),
        Some(&ServerMessage::Signal(SignalRelay {
            from: viewer,
            data: json!({ "sdp": { "type": "answer" } }),
        }))
    );

    rooms.disconnect(broadcaster).await.unwrap();
    let listing = rooms.rooms_snapshot().await.unwrap();
    assert!(listing.iter().all(|summary| summary.room_id != room_id));
}
