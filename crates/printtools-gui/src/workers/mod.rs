pub(crate) mod cache;
mod dispatch;
mod io;
mod tickets;

pub(crate) use cache::SheetCache;
pub use dispatch::spawn_worker;
pub(crate) use dispatch::{send, send_error, send_log};
pub use tickets::LoadTickets;
