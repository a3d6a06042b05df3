use crate::app::AppState;
use crate::event::{AppEvent, NavReason};

use super::core::{first_page, last_page, next_page, prev_page, toggle_debug_status};
use super::types::{ActionId, Command, CommandOutcome};

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub emitted_events: Vec<AppEvent>,
}

/// Applies a command to the navigation state and collects the transition
/// events. A `PageChanged` event is emitted exactly when the current page
/// actually changed; out-of-range requests dispatch to no-ops and emit only
/// `CommandExecuted`.
pub fn dispatch(app: &mut AppState, command: Command) -> CommandDispatchResult {
    let previous_page = app.nav.current_page();
    let action_id = command.action_id();

    let outcome = match command {
        Command::NextPage => next_page(app),
        Command::PrevPage => prev_page(app),
        Command::FirstPage => first_page(app),
        Command::LastPage => last_page(app),
        Command::DebugStatusToggle => toggle_debug_status(app),
        Command::Quit => {
            app.status.last_action_id = Some(ActionId::Quit);
            app.status.message = "quit requested".to_string();
            CommandOutcome::QuitRequested
        }
    };

    let mut emitted_events = Vec::new();
    let current_page = app.nav.current_page();
    if current_page != previous_page {
        emitted_events.push(AppEvent::PageChanged {
            from: previous_page,
            to: current_page,
            reason: nav_reason(command),
        });
    }
    emitted_events.push(AppEvent::CommandExecuted {
        id: action_id,
        outcome,
    });

    CommandDispatchResult {
        outcome,
        emitted_events,
    }
}

fn nav_reason(command: Command) -> NavReason {
    match command {
        Command::NextPage | Command::PrevPage => NavReason::Step,
        _ => NavReason::Jump,
    }
}

#[cfg(test)]
mod tests {
    use crate::app::AppState;
    use crate::event::{AppEvent, NavReason};

    use super::super::types::{ActionId, Command, CommandOutcome};
    use super::dispatch;

    fn state_with_pages(total_pages: usize) -> AppState {
        let mut state = AppState::default();
        state.nav.on_document_loaded(total_pages);
        state
    }

    #[test]
    fn dispatch_next_page_emits_page_changed_and_command_executed() {
        let mut app = state_with_pages(3);

        let result = dispatch(&mut app, Command::NextPage);

        assert_eq!(result.outcome, CommandOutcome::Applied);
        assert_eq!(result.emitted_events.len(), 2);
        assert!(matches!(
            result.emitted_events[0],
            AppEvent::PageChanged {
                from: 1,
                to: 2,
                reason: NavReason::Step
            }
        ));
        assert!(matches!(
            result.emitted_events[1],
            AppEvent::CommandExecuted {
                id: ActionId::NextPage,
                outcome: CommandOutcome::Applied
            }
        ));
    }

    #[test]
    fn dispatch_noop_navigation_emits_command_executed_only() {
        let mut app = state_with_pages(3);

        let result = dispatch(&mut app, Command::PrevPage);

        assert_eq!(result.outcome, CommandOutcome::Noop);
        assert_eq!(result.emitted_events.len(), 1);
        assert!(matches!(
            result.emitted_events[0],
            AppEvent::CommandExecuted {
                id: ActionId::PrevPage,
                outcome: CommandOutcome::Noop
            }
        ));
    }

    #[test]
    fn dispatch_jump_commands_report_jump_reason() {
        let mut app = state_with_pages(5);

        let result = dispatch(&mut app, Command::LastPage);
        assert!(matches!(
            result.emitted_events[0],
            AppEvent::PageChanged {
                from: 1,
                to: 5,
                reason: NavReason::Jump
            }
        ));
    }

    #[test]
    fn dispatch_quit_requests_loop_exit() {
        let mut app = state_with_pages(3);

        let result = dispatch(&mut app, Command::Quit);
        assert_eq!(result.outcome, CommandOutcome::QuitRequested);
        assert_eq!(app.status.last_action_id, Some(ActionId::Quit));
    }
}
