use std::convert::Infallible;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::{Rect, Size};

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::backend::{PdfBackend, RgbaFrame};
use crate::command::Command;
use crate::config::Config;
use crate::error::AppResult;
use crate::event::{AppEvent, NavReason};
use crate::input::GestureTracker;
use crate::ui;

use super::core::App;
use super::state::DocumentPhase;
use super::terminal_session::TerminalSurface;

struct TestTerminalSurface {
    terminal: Terminal<TestBackend>,
}

impl TestTerminalSurface {
    fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal should initialize");
        Self { terminal }
    }

    fn buffer_text(&self) -> String {
        self.terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }
}

impl TerminalSurface for TestTerminalSurface {
    fn size(&self) -> io::Result<Size> {
        infallible_to_io(self.terminal.size())
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        infallible_to_io(self.terminal.draw(render)).map(|_| ())
    }
}

fn infallible_to_io<T>(result: Result<T, Infallible>) -> io::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => match err {},
    }
}

#[derive(Debug)]
struct StubPdf {
    path: PathBuf,
    page_count: usize,
}

impl StubPdf {
    fn new(page_count: usize) -> Self {
        Self {
            path: PathBuf::from("stub.pdf"),
            page_count,
        }
    }
}

impl PdfBackend for StubPdf {
    fn path(&self) -> &Path {
        &self.path
    }

    fn doc_id(&self) -> u64 {
        7
    }

    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_dimensions(&self, _page: usize) -> AppResult<(f32, f32)> {
        Ok((612.0, 792.0))
    }

    fn render_page(&self, _page: usize, _scale: f32) -> AppResult<RgbaFrame> {
        Ok(RgbaFrame {
            width: 8,
            height: 8,
            pixels: Arc::from(vec![255u8; 8 * 8 * 4]),
        })
    }
}

#[derive(Clone, Default)]
struct RecordingSink {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl RecordingSink {
    fn recorded(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().expect("sink lock should not poison").clone()
    }
}

impl AnalyticsSink for RecordingSink {
    fn record(&mut self, event: &AnalyticsEvent) -> AppResult<()> {
        self.events
            .lock()
            .expect("sink lock should not poison")
            .push(event.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

fn test_app() -> (App, RecordingSink) {
    let sink = RecordingSink::default();
    let app = App::new_with_sink(Config::default(), Box::new(sink.clone()));
    (app, sink)
}

fn ready_app(page_count: usize) -> (App, RecordingSink) {
    let (mut app, sink) = test_app();
    app.state.nav.on_document_loaded(page_count);
    app.state.doc = DocumentPhase::Ready;
    (app, sink)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn tap_at(
    app: &mut App,
    session: &TestTerminalSurface,
    gestures: &mut GestureTracker,
    column: u16,
    row: u16,
) -> Option<Command> {
    let down = app.handle_input_event(
        mouse(MouseEventKind::Down(MouseButton::Left), column, row),
        session,
        gestures,
    );
    assert!(down.command.is_none());
    app.handle_input_event(
        mouse(MouseEventKind::Up(MouseButton::Left), column, row),
        session,
        gestures,
    )
    .command
}

#[test]
fn tap_on_an_enabled_button_dispatches_its_command() {
    let (mut app, _sink) = ready_app(3);
    let session = TestTerminalSurface::new(80, 24);
    let mut gestures = GestureTracker::default();

    let bar = ui::layout_controls(Rect::new(0, 0, 80, 1));
    let next = bar.rect(ui::ControlButton::Next);
    let command = tap_at(&mut app, &session, &mut gestures, next.x, next.y);
    assert_eq!(command, Some(Command::NextPage));
}

#[test]
fn tap_on_a_disabled_button_is_swallowed() {
    let (mut app, _sink) = ready_app(3);
    let session = TestTerminalSurface::new(80, 24);
    let mut gestures = GestureTracker::default();

    // Page 1: Previous is disabled. The tap must not fall through to the
    // tap-advances gesture either.
    let bar = ui::layout_controls(Rect::new(0, 0, 80, 1));
    let prev = bar.rect(ui::ControlButton::Previous);
    let command = tap_at(&mut app, &session, &mut gestures, prev.x, prev.y);
    assert_eq!(command, None);
}

#[test]
fn tap_on_the_page_area_advances_when_enabled() {
    let (mut app, _sink) = ready_app(3);
    let session = TestTerminalSurface::new(80, 24);
    let mut gestures = GestureTracker::default();

    let command = tap_at(&mut app, &session, &mut gestures, 40, 12);
    assert_eq!(command, Some(Command::NextPage));

    app.config.input.tap_advances_page = false;
    let command = tap_at(&mut app, &session, &mut gestures, 40, 12);
    assert_eq!(command, None);
}

#[test]
fn swipe_left_on_the_page_area_maps_to_next_page() {
    let (mut app, _sink) = ready_app(3);
    let session = TestTerminalSurface::new(80, 24);
    let mut gestures = GestureTracker::default();

    let down = app.handle_input_event(
        mouse(MouseEventKind::Down(MouseButton::Left), 50, 12),
        &session,
        &mut gestures,
    );
    assert!(down.command.is_none());
    let up = app.handle_input_event(
        mouse(MouseEventKind::Up(MouseButton::Left), 30, 12),
        &session,
        &mut gestures,
    );
    assert_eq!(up.command, Some(Command::NextPage));
}

#[test]
fn page_changed_events_reach_the_analytics_sink() {
    let (mut app, sink) = ready_app(5);

    app.handle_app_event(&AppEvent::PageChanged {
        from: 1,
        to: 2,
        reason: NavReason::Step,
    });

    let recorded = sink.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(
        recorded[0],
        AnalyticsEvent::PageTurn {
            category: "interaction".to_string(),
            action: "page-turn".to_string(),
            value: 2,
        }
    );
}

#[test]
fn document_loaded_event_updates_the_status_line_only() {
    let (mut app, sink) = ready_app(5);

    app.handle_app_event(&AppEvent::DocumentLoaded { page_count: 5 });

    assert!(app.state.status.message.contains("5 pages"));
    assert!(sink.recorded().is_empty());
}

#[test]
fn render_frame_shows_the_loading_placeholder_before_the_document_arrives() {
    let (mut app, _sink) = test_app();
    let mut session = TestTerminalSurface::new(80, 24);

    app.render_frame(&mut session, None)
        .expect("frame should render");

    let text = session.buffer_text();
    assert!(text.contains("Loading document..."));
    assert!(text.contains("First"));
    assert!(text.contains("page 1/1"));
}

#[test]
fn render_frame_shows_the_load_error_placeholder_after_a_failed_load() {
    let (mut app, _sink) = test_app();
    app.state.doc = DocumentPhase::Failed("boom".to_string());
    let mut session = TestTerminalSurface::new(80, 24);

    app.render_frame(&mut session, None)
        .expect("frame should render");

    assert!(session.buffer_text().contains("Could not load the document"));
}

#[test]
fn render_frame_draws_the_current_page_through_the_cache() {
    let (mut app, _sink) = ready_app(3);
    let pdf = StubPdf::new(3);
    let mut session = TestTerminalSurface::new(80, 24);

    app.render_frame(&mut session, Some(&pdf))
        .expect("frame should render");
    assert_eq!(app.render.page_cache.counters().misses, 1);

    app.render_frame(&mut session, Some(&pdf))
        .expect("second frame should render");
    assert_eq!(app.render.page_cache.counters().hits, 1);
    assert!(session.buffer_text().contains("page 1/3"));
}

#[test]
fn render_frame_degrades_to_the_no_page_placeholder_out_of_range() {
    let (mut app, _sink) = ready_app(10);
    app.state.nav.last();
    app.state.nav.on_document_loaded(3);
    let pdf = StubPdf::new(3);
    let mut session = TestTerminalSurface::new(80, 24);

    app.render_frame(&mut session, Some(&pdf))
        .expect("frame should render");

    let text = session.buffer_text();
    assert!(text.contains("No page to display"));
    assert_eq!(app.render.page_cache.counters().misses, 0);
}
