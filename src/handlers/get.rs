//! Handler: advert.get

use serde::Deserialize;
use serde_json::Value;

use crate::app::Adverts;
use crate::bus::Publisher;
use crate::service::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "advert.get";

#[derive(Deserialize)]
pub struct Input {
    pub id: String,
}

pub fn guard<S, P>(ctx: &Context<Adverts<S, P>>) -> bool {
    ctx.has_fields(&["id"])
}

pub fn handle<S: RecordStore, P: Publisher>(
    ctx: &Context<Adverts<S, P>>,
) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;
    let advert = ctx.app().store().get_by_id(&input.id)?;
    serde_json::to_value(advert).map_err(|e| HandlerError::Other(Box::new(e)))
}
