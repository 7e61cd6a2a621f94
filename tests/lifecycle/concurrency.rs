//! Concurrent confirms of the same advert: exactly one wins.

use std::sync::{Arc, Barrier};
use std::thread;

use advert_api::{ConfirmationMessage, NewAdvert, StoreError};

use crate::support::{in_memory_app, TOPIC};

#[test]
fn racing_confirms_publish_exactly_once() {
    const RACERS: usize = 8;

    let (app, broker) = in_memory_app();
    let app = Arc::new(app);
    let id = app.store().create(NewAdvert::titled("Sofa")).unwrap();
    let barrier = Arc::new(Barrier::new(RACERS));

    let handles: Vec<_> = (0..RACERS)
        .map(|_| {
            let app = Arc::clone(&app);
            let barrier = Arc::clone(&barrier);
            let id = id.clone();
            thread::spawn(move || {
                barrier.wait();
                app.confirm_and_notify(&id)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, StoreError::AlreadyConfirmed { .. })));

    let messages = broker.messages_on(TOPIC);
    assert_eq!(messages.len(), 1);
    let sent: ConfirmationMessage = messages[0].decode_json().unwrap();
    assert_eq!(sent.id, id);

    assert!(app.store().get_by_id(&id).unwrap().is_confirmed());
}

#[test]
fn distinct_adverts_confirm_independently() {
    let (app, broker) = in_memory_app();
    let app = Arc::new(app);

    let ids: Vec<String> = (0..16)
        .map(|i| app.store().create(NewAdvert::titled(format!("Advert {i}"))).unwrap())
        .collect();

    let handles: Vec<_> = ids
        .iter()
        .cloned()
        .map(|id| {
            let app = Arc::clone(&app);
            thread::spawn(move || app.confirm_and_notify(&id))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().unwrap().notified());
    }

    assert_eq!(broker.len(), 16);
    assert!(app.store().get_all().unwrap().iter().all(|a| a.is_confirmed()));
}
