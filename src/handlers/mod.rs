//! Advert command handlers.
//!
//! Each handler module follows the same convention:
//! - `COMMAND` - the command name this handler responds to
//! - `guard` - input validation (optional but conventional)
//! - `handle` - the command handler

use crate::app::Adverts;
use crate::bus::Publisher;
use crate::service::Service;
use crate::store::RecordStore;

pub mod all;
pub mod confirm;
pub mod create;
pub mod get;

/// Build a service with every advert command registered.
pub fn advert_service<S, P>(adverts: Adverts<S, P>) -> Service<Adverts<S, P>>
where
    S: RecordStore + 'static,
    P: Publisher + 'static,
{
    Service::new(adverts)
        .command_guarded(
            create::COMMAND,
            create::guard::<S, P>,
            create::handle::<S, P>,
        )
        .command_guarded(
            confirm::COMMAND,
            confirm::guard::<S, P>,
            confirm::handle::<S, P>,
        )
        .command_guarded(get::COMMAND, get::guard::<S, P>, get::handle::<S, P>)
        .command(all::COMMAND, all::handle::<S, P>)
}
