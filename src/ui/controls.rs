use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::command::Command;
use crate::nav::PageNavigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    First,
    Previous,
    Next,
    Last,
}

impl ControlButton {
    pub const ALL: [ControlButton; 4] = [Self::First, Self::Previous, Self::Next, Self::Last];

    pub fn label(self) -> &'static str {
        match self {
            Self::First => "|< First",
            Self::Previous => "< Prev",
            Self::Next => "Next >",
            Self::Last => "Last >|",
        }
    }

    pub fn command(self) -> Command {
        match self {
            Self::First => Command::FirstPage,
            Self::Previous => Command::PrevPage,
            Self::Next => Command::NextPage,
            Self::Last => Command::LastPage,
        }
    }

    /// First/Previous follow the at-first-page flag, Next/Last the
    /// at-last-page flag.
    pub fn is_enabled(self, nav: &PageNavigator) -> bool {
        match self {
            Self::First | Self::Previous => !nav.is_at_first_page(),
            Self::Next | Self::Last => !nav.is_at_last_page(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsBar {
    buttons: [(ControlButton, Rect); 4],
}

/// Lays the four pagination buttons out in equal cells across the bar row;
/// each button's hit rect is its label (plus padding) centered in its cell.
pub fn layout_controls(area: Rect) -> ControlsBar {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let mut buttons = [(ControlButton::First, Rect::default()); 4];
    for (slot, button) in buttons.iter_mut().zip(ControlButton::ALL) {
        let cell = cells[match button {
            ControlButton::First => 0,
            ControlButton::Previous => 1,
            ControlButton::Next => 2,
            ControlButton::Last => 3,
        }];
        let label_width = (button.label().width() as u16).saturating_add(2);
        let width = label_width.min(cell.width);
        let x = cell.x + cell.width.saturating_sub(width) / 2;
        *slot = (button, Rect::new(x, cell.y, width, cell.height.min(1)));
    }

    ControlsBar { buttons }
}

impl ControlsBar {
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ControlButton> {
        self.buttons
            .iter()
            .find(|(_button, rect)| {
                rect.width > 0
                    && rect.height > 0
                    && row == rect.y
                    && column >= rect.x
                    && column < rect.x + rect.width
            })
            .map(|(button, _rect)| *button)
    }

    pub fn rect(&self, button: ControlButton) -> Rect {
        self.buttons
            .iter()
            .find(|(candidate, _rect)| *candidate == button)
            .map(|(_button, rect)| *rect)
            .unwrap_or_default()
    }
}

pub fn draw_controls(frame: &mut Frame<'_>, bar: &ControlsBar, nav: &PageNavigator) {
    for (button, rect) in bar.buttons {
        if rect.width == 0 || rect.height == 0 {
            continue;
        }

        let style = if button.is_enabled(nav) {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let paragraph = Paragraph::new(button.label())
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(paragraph, rect);
    }
}
