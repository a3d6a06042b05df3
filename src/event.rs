use crossterm::event::Event;

use crate::backend::PdfBackend;
use crate::command::{ActionId, Command, CommandOutcome};
use crate::error::AppResult;

/// Describes *why* a page navigation occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavReason {
    /// Incremental movement (next-page, prev-page).
    Step,
    /// Direct jump (first-page, last-page).
    Jump,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CommandExecuted {
        id: ActionId,
        outcome: CommandOutcome,
    },
    PageChanged {
        from: usize,
        to: usize,
        reason: NavReason,
    },
    DocumentLoaded {
        page_count: usize,
    },
}

pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    App(AppEvent),
    DocumentReady(AppResult<Box<dyn PdfBackend>>),
}
