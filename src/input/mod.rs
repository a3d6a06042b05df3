pub mod gesture;
pub mod keymap;

pub use gesture::{Gesture, GestureTracker, SwipeDirection, gesture_command};
pub use keymap::{KeymapPreset, map_key_to_command};
