use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::command::Command;
use crate::config::InputConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Swipe(SwipeDirection),
    Tap { column: u16, row: u16 },
}

/// Classifies raw mouse events into swipes and taps. A press starts a
/// gesture, the matching release ends it; the displacement between the two
/// decides swipe vs tap. Wheel ticks reuse the swipe table: scrolling down
/// reads forward, like swiping the page up.
#[derive(Debug, Default)]
pub struct GestureTracker {
    press: Option<(u16, u16)>,
}

impl GestureTracker {
    pub fn on_mouse_event(&mut self, event: MouseEvent, config: &InputConfig) -> Option<Gesture> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let press = self.press.take()?;
                Some(classify(press, (event.column, event.row), config))
            }
            MouseEventKind::ScrollDown if config.wheel_navigates => {
                Some(Gesture::Swipe(SwipeDirection::Up))
            }
            MouseEventKind::ScrollUp if config.wheel_navigates => {
                Some(Gesture::Swipe(SwipeDirection::Down))
            }
            _ => None,
        }
    }
}

fn classify(press: (u16, u16), release: (u16, u16), config: &InputConfig) -> Gesture {
    let dx = i32::from(release.0) - i32::from(press.0);
    let dy = i32::from(release.1) - i32::from(press.1);
    let min_columns = u32::from(config.min_swipe_columns.max(1));
    let min_rows = u32::from(config.min_swipe_rows.max(1));

    let horizontal = dx.unsigned_abs() >= min_columns;
    let vertical = dy.unsigned_abs() >= min_rows;

    if !horizontal && !vertical {
        return Gesture::Tap {
            column: release.0,
            row: release.1,
        };
    }

    // When both axes pass their threshold, the axis that exceeds its own
    // threshold by the larger factor wins. Thresholds differ per axis
    // because terminal cells are taller than they are wide.
    let direction = if horizontal
        && (!vertical || dx.unsigned_abs() * min_rows >= dy.unsigned_abs() * min_columns)
    {
        if dx < 0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        }
    } else if dy < 0 {
        SwipeDirection::Up
    } else {
        SwipeDirection::Down
    };

    Gesture::Swipe(direction)
}

/// Direction wiring for the navigation gestures: swiping the page away in
/// the reading direction advances, swiping it back goes to the previous
/// page. Tap advances unless disabled in config.
pub fn gesture_command(gesture: Gesture, config: &InputConfig) -> Option<Command> {
    match gesture {
        Gesture::Swipe(SwipeDirection::Left | SwipeDirection::Up) => Some(Command::NextPage),
        Gesture::Swipe(SwipeDirection::Right | SwipeDirection::Down) => Some(Command::PrevPage),
        Gesture::Tap { .. } => config.tap_advances_page.then_some(Command::NextPage),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    use crate::command::Command;
    use crate::config::InputConfig;

    use super::{Gesture, GestureTracker, SwipeDirection, gesture_command};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn press_release(
        tracker: &mut GestureTracker,
        config: &InputConfig,
        press: (u16, u16),
        release: (u16, u16),
    ) -> Option<Gesture> {
        assert!(
            tracker
                .on_mouse_event(
                    mouse(MouseEventKind::Down(MouseButton::Left), press.0, press.1),
                    config
                )
                .is_none()
        );
        tracker.on_mouse_event(
            mouse(MouseEventKind::Up(MouseButton::Left), release.0, release.1),
            config,
        )
    }

    #[test]
    fn horizontal_drag_past_threshold_is_a_swipe() {
        let config = InputConfig::default();
        let mut tracker = GestureTracker::default();

        let gesture = press_release(&mut tracker, &config, (20, 10), (10, 10));
        assert_eq!(gesture, Some(Gesture::Swipe(SwipeDirection::Left)));

        let gesture = press_release(&mut tracker, &config, (20, 10), (30, 11));
        assert_eq!(gesture, Some(Gesture::Swipe(SwipeDirection::Right)));
    }

    #[test]
    fn vertical_drag_past_threshold_is_a_swipe() {
        let config = InputConfig::default();
        let mut tracker = GestureTracker::default();

        let gesture = press_release(&mut tracker, &config, (20, 10), (20, 4));
        assert_eq!(gesture, Some(Gesture::Swipe(SwipeDirection::Up)));

        let gesture = press_release(&mut tracker, &config, (20, 10), (21, 15));
        assert_eq!(gesture, Some(Gesture::Swipe(SwipeDirection::Down)));
    }

    #[test]
    fn short_press_release_is_a_tap_at_the_release_cell() {
        let config = InputConfig::default();
        let mut tracker = GestureTracker::default();

        let gesture = press_release(&mut tracker, &config, (20, 10), (21, 10));
        assert_eq!(
            gesture,
            Some(Gesture::Tap {
                column: 21,
                row: 10
            })
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let config = InputConfig::default();
        let mut tracker = GestureTracker::default();

        let gesture =
            tracker.on_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 5, 5), &config);
        assert_eq!(gesture, None);
    }

    #[test]
    fn wheel_ticks_map_to_vertical_swipes_unless_disabled() {
        let mut config = InputConfig::default();
        let mut tracker = GestureTracker::default();

        let gesture = tracker.on_mouse_event(mouse(MouseEventKind::ScrollDown, 5, 5), &config);
        assert_eq!(gesture, Some(Gesture::Swipe(SwipeDirection::Up)));

        config.wheel_navigates = false;
        let gesture = tracker.on_mouse_event(mouse(MouseEventKind::ScrollDown, 5, 5), &config);
        assert_eq!(gesture, None);
    }

    #[test]
    fn gesture_commands_follow_the_navigation_wiring() {
        let config = InputConfig::default();

        assert_eq!(
            gesture_command(Gesture::Swipe(SwipeDirection::Left), &config),
            Some(Command::NextPage)
        );
        assert_eq!(
            gesture_command(Gesture::Swipe(SwipeDirection::Up), &config),
            Some(Command::NextPage)
        );
        assert_eq!(
            gesture_command(Gesture::Swipe(SwipeDirection::Right), &config),
            Some(Command::PrevPage)
        );
        assert_eq!(
            gesture_command(Gesture::Swipe(SwipeDirection::Down), &config),
            Some(Command::PrevPage)
        );
        assert_eq!(
            gesture_command(Gesture::Tap { column: 1, row: 1 }, &config),
            Some(Command::NextPage)
        );
    }

    #[test]
    fn tap_navigation_can_be_disabled() {
        let config = InputConfig {
            tap_advances_page: false,
            ..InputConfig::default()
        };
        assert_eq!(
            gesture_command(Gesture::Tap { column: 1, row: 1 }, &config),
            None
        );
    }
}
