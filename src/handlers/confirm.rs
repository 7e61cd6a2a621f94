//! Handler: advert.confirm
//!
//! Only `id` is read from the request. Anything else the caller sends along
//! (a title, a status) is ignored; the notification is built from the
//! stored record.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::Adverts;
use crate::bus::Publisher;
use crate::service::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "advert.confirm";

/// Reported to the caller when the notification did not go out. The cause
/// is only logged.
pub const NOTIFY_FAILED: &str = "notification failed";

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
    let outcome = ctx.app().confirm_and_notify(&input.id)?;

    let mut body = json!({
        "id": outcome.id,
        "status": "Confirmed",
        "notified": outcome.notified(),
    });
    if outcome.notification.is_err() {
        body["notify_error"] = Value::String(NOTIFY_FAILED.to_string());
    }
    Ok(body)
}
