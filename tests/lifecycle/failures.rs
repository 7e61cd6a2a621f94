//! Infrastructure failures: storage outages and broker outages.

use advert_api::bus::PublishError;
use advert_api::{NewAdvert, NotifyError, StoreError};

use crate::support::{flaky_app, TOPIC};

#[test]
fn storage_outage_between_confirm_and_read_back() {
    let (app, store, broker) = flaky_app();
    let id = app.store().create(NewAdvert::titled("Sofa")).unwrap();

    app.store().confirm(&id).unwrap();
    store.set_down(true);

    let err = app.notifier().notify_confirmed(&id).unwrap_err();
    assert!(matches!(err, NotifyError::Reread(StoreError::Unavailable(_))));
    assert!(broker.inner.is_empty());

    store.set_down(false);
    assert!(app.store().get_by_id(&id).unwrap().is_confirmed());
}

#[test]
fn broker_outage_keeps_confirm_committed() {
    let (app, _store, broker) = flaky_app();
    let id = app.store().create(NewAdvert::titled("Sofa")).unwrap();

    broker.set_down(true);
    let outcome = app.confirm_and_notify(&id).unwrap();

    assert!(!outcome.notified());
    assert!(matches!(
        outcome.notification,
        Err(NotifyError::Publish(PublishError::ConnectionFailed(_)))
    ));
    assert!(app.store().get_by_id(&id).unwrap().is_confirmed());
    assert!(broker.inner.is_empty());
}

#[test]
fn no_retry_after_broker_recovers() {
    let (app, _store, broker) = flaky_app();
    let id = app.store().create(NewAdvert::titled("Sofa")).unwrap();

    broker.set_down(true);
    app.confirm_and_notify(&id).unwrap();
    broker.set_down(false);

    assert!(broker.inner.messages_on(TOPIC).is_empty());
}

#[test]
fn storage_outage_is_not_not_found() {
    let (app, store, broker) = flaky_app();
    let id = app.store().create(NewAdvert::titled("Sofa")).unwrap();

    store.set_down(true);

    let err = app.store().get_by_id(&id).unwrap_err();
    assert!(!err.is_not_found());
    assert!(matches!(err, StoreError::Unavailable(_)));

    let err = app.confirm_and_notify(&id).unwrap_err();
    assert!(err.is_infrastructure());
    assert!(matches!(app.store().get_all(), Err(StoreError::Unavailable(_))));
    assert!(app.store().health().is_err());
    assert!(broker.inner.is_empty());

    store.set_down(false);
    assert!(app.store().get_by_id(&id).unwrap().is_pending());
}
