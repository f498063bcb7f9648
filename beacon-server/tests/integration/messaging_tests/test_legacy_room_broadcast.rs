use beacon_core::{ServerMessage, SignalRelay};
use serde_json::json;

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::{join_as_viewer, settle, start_broadcast, to_room};

#[tokio::test]
async fn test_legacy_room_broadcast() {
    init_tracing();

    let (rooms, signaling) = create_test_hub();
    let (broadcaster, room_id) = start_broadcast(&rooms, &signaling).await.unwrap();
    let first = join_as_viewer(&rooms, &room_id).await.unwrap();
    let second = join_as_viewer(&rooms, &room_id).await.unwrap();
    signaling.clear();

    let payload = json!({ "candidate": { "candidate": "candidate:1 1 udp" } });
    rooms
        .signal(first, to_room(&room_id, payload.clone()))
        .await
        .unwrap();
    settle(&rooms).await.unwrap();

    let expected = ServerMessage::Signal(SignalRelay {
        from: first,
        data: payload,
    });
    assert_eq!(signaling.messages_for(&broadcaster), vec![expected.clone()]);
    assert_eq!(signaling.messages_for(&second), vec![expected]);
    assert!(
        signaling.messages_for(&first).is_empty(),
        "sender must not get its own envelope"
    );
}
