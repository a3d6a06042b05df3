mod chrome;
mod controls;
mod layout;
mod placeholder;

pub use chrome::draw_chrome;
pub use controls::{ControlButton, ControlsBar, draw_controls, layout_controls};
pub use layout::{UiLayout, split_layout};
pub use placeholder::draw_placeholder;
