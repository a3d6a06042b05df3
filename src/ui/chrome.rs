use ratatui::Frame;
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::{AppState, DocumentPhase};
use crate::render::CacheCounters;

use super::layout::UiLayout;

pub fn draw_chrome(
    frame: &mut Frame<'_>,
    layout: UiLayout,
    app: &AppState,
    file_name: &str,
    cache: CacheCounters,
    protocol_label: &str,
) {
    let phase = match &app.doc {
        DocumentPhase::Loading => "loading",
        DocumentPhase::Ready => "ready",
        DocumentPhase::Failed(_) => "load failed",
    };

    let status_text = format!(
        "{} | page {}/{} | {}",
        file_name,
        app.nav.current_page(),
        app.nav.total_pages(),
        phase
    );

    let status = Paragraph::new(status_text)
        .style(Style::default())
        .wrap(Wrap { trim: true });
    if app.debug_status_visible && layout.status.height >= 2 {
        let top =
            ratatui::layout::Rect::new(layout.status.x, layout.status.y, layout.status.width, 1);
        frame.render_widget(status, top);

        let command_id = app
            .status
            .last_action_id
            .map(|id| id.as_str())
            .unwrap_or("-");
        let message = if app.status.message.is_empty() {
            "-"
        } else {
            app.status.message.as_str()
        };
        let debug_text = format!(
            "cmd={command_id} | msg={message} | cache=h{} m{} e{} | proto={protocol_label}",
            cache.hits, cache.misses, cache.evictions
        );
        let bottom = ratatui::layout::Rect::new(
            layout.status.x,
            layout.status.y + 1,
            layout.status.width,
            layout.status.height.saturating_sub(1).max(1),
        );
        let debug = Paragraph::new(debug_text)
            .style(Style::default())
            .wrap(Wrap { trim: true });
        frame.render_widget(debug, bottom);
        return;
    }

    frame.render_widget(status, layout.status);
}
