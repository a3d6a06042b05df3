use crate::command::ActionId;
use crate::nav::PageNavigator;

/// Presentation-side view of the asynchronous document load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentPhase {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub nav: PageNavigator,
    pub doc: DocumentPhase,
    pub status: StatusState,
    pub debug_status_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            nav: PageNavigator::default(),
            doc: DocumentPhase::Loading,
            status: StatusState::default(),
            debug_status_visible: false,
        }
    }
}
