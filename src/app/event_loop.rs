use crossterm::event::{Event, KeyEventKind, MouseEvent};
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;

use crate::analytics::AnalyticsEvent;
use crate::backend::PdfBackend;
use crate::command::{ActionId, Command, CommandOutcome, dispatch};
use crate::error::AppResult;
use crate::event::{AppEvent, DomainEvent};
use crate::input::{Gesture, GestureTracker, KeymapPreset, gesture_command, map_key_to_command};
use crate::ui;

use super::core::App;
use super::event_bus::EventBusRuntime;
use super::state::DocumentPhase;
use super::terminal_session::{TerminalSession, TerminalSurface};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct InputEventOutcome {
    pub(crate) command: Option<Command>,
    pub(crate) redraw: bool,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut session = TerminalSession::enter()?;
        self.render.presenter.initialize_terminal();

        let (tx, mut rx, mut bus) = EventBusRuntime::spawn(self.config.document.path.clone());
        let mut document: Option<Box<dyn PdfBackend>> = None;
        let mut gestures = GestureTracker::default();

        let pageview = AnalyticsEvent::Pageview {
            path: self.config.analytics.pageview_path.clone(),
        };
        self.analytics.record(&pageview, &mut self.state.status);

        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                self.render_frame(&mut session, document.as_deref())?;
                needs_redraw = false;
            }

            let Some(event) = rx.recv().await else {
                break;
            };
            match event {
                DomainEvent::Input(input) => {
                    let outcome = self.handle_input_event(input, &session, &mut gestures);
                    if outcome.redraw {
                        needs_redraw = true;
                    }
                    if let Some(command) = outcome.command {
                        let _ = tx.send(DomainEvent::Command(command));
                    }
                }
                DomainEvent::InputError(message) => {
                    self.state.status.last_action_id = Some(ActionId::Input);
                    self.state.status.message = format!("input error: {message}");
                    needs_redraw = true;
                }
                DomainEvent::Command(command) => {
                    let result = dispatch(&mut self.state, command);
                    for event in result.emitted_events {
                        let _ = tx.send(DomainEvent::App(event));
                    }
                    if result.outcome == CommandOutcome::QuitRequested {
                        break;
                    }
                    needs_redraw = true;
                }
                DomainEvent::App(event) => {
                    self.handle_app_event(&event);
                    needs_redraw = true;
                }
                DomainEvent::DocumentReady(result) => {
                    self.install_document(result, &mut document, &tx);
                    needs_redraw = true;
                }
            }
        }

        bus.shutdown();
        session.restore()?;
        Ok(())
    }

    fn install_document(
        &mut self,
        result: AppResult<Box<dyn PdfBackend>>,
        document: &mut Option<Box<dyn PdfBackend>>,
        tx: &UnboundedSender<DomainEvent>,
    ) {
        match result {
            Ok(backend) => {
                let page_count = backend.page_count();
                self.state.nav.on_document_loaded(page_count);
                self.state.doc = DocumentPhase::Ready;
                self.render.presenter.invalidate();
                *document = Some(backend);
                let _ = tx.send(DomainEvent::App(AppEvent::DocumentLoaded { page_count }));
            }
            Err(err) => {
                self.state.doc = DocumentPhase::Failed(err.to_string());
                self.state.status.last_action_id = Some(ActionId::DocumentLoad);
                self.state.status.message = format!("document load failed: {err}");
            }
        }
    }

    pub(crate) fn handle_app_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::PageChanged { to, .. } => {
                let event = AnalyticsEvent::PageTurn {
                    category: self.config.analytics.category.clone(),
                    action: self.config.analytics.action.clone(),
                    value: *to,
                };
                self.analytics.record(&event, &mut self.state.status);
            }
            AppEvent::DocumentLoaded { page_count } => {
                self.state.status.last_action_id = Some(ActionId::DocumentLoad);
                self.state.status.message = format!("document loaded: {page_count} pages");
            }
            AppEvent::CommandExecuted { .. } => {}
        }
    }

    pub(crate) fn handle_input_event(
        &mut self,
        event: Event,
        session: &impl TerminalSurface,
        gestures: &mut GestureTracker,
    ) -> InputEventOutcome {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                let preset = KeymapPreset::parse(&self.config.keymap.preset);
                InputEventOutcome {
                    command: map_key_to_command(key, preset),
                    redraw: false,
                }
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, session, gestures),
            Event::Resize(_, _) => InputEventOutcome {
                command: None,
                redraw: true,
            },
            _ => InputEventOutcome::default(),
        }
    }

    fn handle_mouse_event(
        &mut self,
        mouse: MouseEvent,
        session: &impl TerminalSurface,
        gestures: &mut GestureTracker,
    ) -> InputEventOutcome {
        let Some(gesture) = gestures.on_mouse_event(mouse, &self.config.input) else {
            return InputEventOutcome::default();
        };

        // A tap on the pagination bar activates the button under the
        // pointer; disabled buttons swallow the tap instead of letting it
        // fall through to tap-advance.
        if let Gesture::Tap { column, row } = gesture
            && let Some(bar) = self.current_controls_bar(session)
            && let Some(button) = bar.hit_test(column, row)
        {
            let command = button
                .is_enabled(&self.state.nav)
                .then(|| button.command());
            return InputEventOutcome {
                command,
                redraw: false,
            };
        }

        InputEventOutcome {
            command: gesture_command(gesture, &self.config.input),
            redraw: false,
        }
    }

    fn current_controls_bar(&self, session: &impl TerminalSurface) -> Option<ui::ControlsBar> {
        let size = session.size().ok()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let layout = ui::split_layout(area, self.state.debug_status_visible);
        Some(ui::layout_controls(layout.controls))
    }
}
