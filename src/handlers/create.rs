//! Handler: advert.create

use serde_json::{json, Value};

use crate::advert::NewAdvert;
use crate::app::Adverts;
use crate::bus::Publisher;
use crate::service::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "advert.create";

pub fn guard<S, P>(ctx: &Context<Adverts<S, P>>) -> bool {
    ctx.has_fields(&["title"])
}

pub fn handle<S: RecordStore, P: Publisher>(
    ctx: &Context<Adverts<S, P>>,
) -> Result<Value, HandlerError> {
    let input = ctx.input::<NewAdvert>()?;
    let id = ctx.app().store().create(input)?;
    Ok(json!({ "id": id }))
}
