use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use advert_api::bus::LogPublisher;
use advert_api::{
    advert_service, service, AdvertStore, Adverts, Config, ConfirmationNotifier,
    InMemoryRecordStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("advert_api=info".parse()?))
        .init();

    let config = Config::from_env()?;

    let store = AdvertStore::new(InMemoryRecordStore::new());
    let notifier = ConfirmationNotifier::new(store.clone(), LogPublisher::new(), &config.topic)?;
    let service = Arc::new(advert_service(Adverts::new(store, notifier)));

    let addr = config.bind_addr();
    info!(%addr, topic = %config.topic, "advert api listening");
    service::serve(service, &addr).await?;

    Ok(())
}
