use rendezvous_core::ServerEvent;

use crate::integration::{create_test_coordinator, init_tracing};

#[tokio::test]
async fn test_leave_room_says_bye() {
    init_tracing();

    let (coordinator, transport, directory) = create_test_coordinator();
    let host = transport.connect().await;
    let guest = transport.connect().await;
    let other_host = transport.connect().await;

    coordinator.on_create_room(host, "pair".into()).await;
    coordinator.on_join_room(guest, "1").await;
    coordinator.on_create_room(other_host, "untouched".into()).await;
    transport.clear().await;

    coordinator.on_leave_room(guest, "1").await;

    assert_eq!(transport.events_for(host).await, vec![ServerEvent::Bye]);
    assert_eq!(transport.events_for(guest).await, vec![ServerEvent::Bye]);
    assert!(transport.events_for(other_host).await.is_empty());
    assert_eq!(directory.len(), 1);
    assert_eq!(transport.members("1").await, vec![host, guest]);
}
