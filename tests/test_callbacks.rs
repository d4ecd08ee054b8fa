//! Callback-style dispatch: each continuation runs at most once and the
//! caller is never blocked.

mod mocks;

use contacts_gateway::{
    CallbackDispatcher, Capability, CapabilitySet, Contact, ContactGateway, ContactId,
    GatewayError,
};
use mocks::{unavailable, Harness};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;

fn dispatcher(h: &Harness) -> CallbackDispatcher {
    CallbackDispatcher::current(h.gateway.clone() as Arc<dyn ContactGateway>)
}

#[tokio::test]
async fn test_fetch_contact_delivers_once() {
    let h = Harness::new(CapabilitySet::none());
    h.directory
        .add_contact(Contact::new(ContactId::from(1u32), "Ada"));
    let d = dispatcher(&h);

    let (tx, rx) = oneshot::channel();
    d.fetch_contact(ContactId::from(1u32), move |contact| {
        let _ = tx.send(contact);
    })
    .await
    .unwrap();

    let contact = rx.await.unwrap().unwrap();
    assert_eq!(contact.display_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn test_fetch_contact_failure_delivers_none() {
    let h = Harness::new(CapabilitySet::none());
    h.directory.fail_with(unavailable());
    let d = dispatcher(&h);

    let (tx, rx) = oneshot::channel();
    d.fetch_contact(ContactId::from(1u32), move |contact| {
        let _ = tx.send(contact);
    })
    .await
    .unwrap();

    assert_eq!(rx.await.unwrap(), None);
}

#[tokio::test]
async fn test_block_completion_fires_even_without_accounts() {
    let h = Harness::new([Capability::DefaultDialer].into_iter().collect());
    let d = dispatcher(&h);
    let fired = Arc::new(AtomicUsize::new(0));

    let counter = fired.clone();
    let outcome = d
        .block_contact(
            ContactId::from(9u32),
            Some(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(outcome.attempted(), 0);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_block_without_role_reports_permission_denied() {
    let h = Harness::new(CapabilitySet::none());
    let d = dispatcher(&h);
    let fired = Arc::new(AtomicUsize::new(0));

    let counter = fired.clone();
    let result = d
        .block_contact(
            ContactId::from(9u32),
            Some(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .await
        .unwrap();

    assert!(matches!(
        result,
        Err(GatewayError::PermissionDenied {
            capability: Capability::DefaultDialer
        })
    ));
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert_eq!(h.resolver.call_count(), 0);
}

#[tokio::test]
async fn test_unblock_failure_is_returned_by_handle() {
    let h = Harness::new(CapabilitySet::none());
    h.resolver.fail_with(unavailable());
    let d = dispatcher(&h);
    let fired = Arc::new(AtomicUsize::new(0));

    let counter = fired.clone();
    let result = d
        .unblock_contact(
            ContactId::from(2u32),
            Some(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .await
        .unwrap();

    assert!(matches!(result, Err(GatewayError::Collaborator(_))));
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unblock_without_completion() {
    let h = Harness::new(CapabilitySet::none());
    let id = ContactId::from(2u32);
    h.resolver.set_numbers(id, &["+15550100"]);
    h.block_list.set_blocked("+15550100", true);
    let d = dispatcher(&h);

    let outcome = d.unblock_contact(id, None::<fn()>).await.unwrap().unwrap();
    assert!(outcome.is_complete());
    assert!(h.block_list.blocked_numbers().is_empty());
}

#[tokio::test]
async fn test_blocked_check_failure_reports_false() {
    let h = Harness::new(CapabilitySet::all());
    let id = ContactId::from(2u32);
    h.resolver.set_numbers(id, &["+15550100"]);
    h.block_list.reject("+15550100");
    let d = dispatcher(&h);

    let (tx, rx) = oneshot::channel();
    d.get_is_contact_blocked(id, move |blocked| {
        let _ = tx.send(blocked);
    })
    .await
    .unwrap();

    assert!(!rx.await.unwrap());
}

#[tokio::test]
async fn test_outstanding_calls_complete_independently() {
    let h = Harness::new(CapabilitySet::all());
    let id = ContactId::from(42u32);
    h.resolver.set_numbers(id, &["+1555000111", "+1555000222"]);
    let d = dispatcher(&h);

    d.block_contact(id, None::<fn()>).await.unwrap().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let (tx, rx) = oneshot::channel();
            let handle = d.get_is_contact_blocked(id, move |blocked| {
                let _ = tx.send(blocked);
            });
            (handle, rx)
        })
        .collect();

    for (handle, rx) in handles {
        handle.await.unwrap();
        assert!(rx.await.unwrap());
    }
}

#[test]
fn test_dispatch_does_not_block_caller() {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();
    let h = Harness::new(CapabilitySet::none());
    h.resolver.delay_by(std::time::Duration::from_millis(100));
    let d = CallbackDispatcher::new(
        h.gateway.clone() as Arc<dyn ContactGateway>,
        runtime.handle().clone(),
    );

    let (tx, rx) = oneshot::channel();
    let started = std::time::Instant::now();
    let handle = d.get_is_contact_blocked(ContactId::from(1u32), move |blocked| {
        let _ = tx.send(blocked);
    });
    // Returned before the resolver's delay elapsed
    assert!(started.elapsed() < std::time::Duration::from_millis(100));

    runtime.block_on(handle).unwrap();
    assert!(!tokio_test::block_on(rx).unwrap());
}
