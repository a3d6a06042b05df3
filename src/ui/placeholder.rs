use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::layout::centered_rect;

/// Centered bordered box shown instead of a page: while the document loads,
/// when it failed to load, or when the current page cannot be rendered.
pub fn draw_placeholder(frame: &mut Frame<'_>, area: Rect, title: &str, message: &str) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let popup_width = area
        .width
        .min((message.width() as u16).saturating_add(6).max(24));
    let popup_height = area.height.min(5);
    let popup = centered_rect(area, popup_width, popup_height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let paragraph = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(paragraph, inner);
}
