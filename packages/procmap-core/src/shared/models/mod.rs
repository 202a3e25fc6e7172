//! Shared models

mod event;
mod session;

pub use event::Event;
pub use session::Session;
