//! Handler: advert.all

use serde_json::Value;

use crate::app::Adverts;
use crate::bus::Publisher;
use crate::service::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "advert.all";

pub fn handle<S: RecordStore, P: Publisher>(
    ctx: &Context<Adverts<S, P>>,
) -> Result<Value, HandlerError> {
    let adverts = ctx.app().store().get_all()?;
    serde_json::to_value(adverts).map_err(|e| HandlerError::Other(Box::new(e)))
}
