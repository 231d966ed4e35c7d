//! Outbound notification port.
//!
//! Best-effort fan-out of engine events to whatever bridge is
//! listening. Delivery is fire-and-forget: a dropped notification must
//! never affect lifecycle correctness, so the method is infallible.

use realmkeeper_shared::WorldEvent;

#[cfg_attr(test, mockall::automock)]
pub trait NotifierPort: Send + Sync {
    fn notify(&self, event: WorldEvent);
}
