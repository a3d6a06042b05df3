mod core;
mod event_bus;
mod event_loop;
mod state;
pub(crate) mod terminal_session;
mod view_ops;

#[cfg(test)]
mod tests;

pub use self::core::App;
pub use state::{AppState, DocumentPhase, StatusState};
