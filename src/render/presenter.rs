use image::{DynamicImage, RgbaImage};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui_image::picker::{Picker, ProtocolType};
use ratatui_image::protocol::StatefulProtocol;
use ratatui_image::{FilterType, Resize, StatefulImage};

use crate::backend::RgbaFrame;
use crate::error::{AppError, AppResult};

use super::cache::RenderedPageKey;

const RESIZE_FILTER: FilterType = FilterType::Nearest;
const ENCODE_FAILURE_MESSAGE: &str = "failed to encode terminal image";

struct CurrentPage {
    key: RenderedPageKey,
    protocol: StatefulProtocol,
}

/// Terminal page presenter. Holds the protocol-encoded image for the page
/// currently on screen and re-encodes only when the cache key changes.
pub struct PagePresenter {
    picker: Picker,
    protocol_label: &'static str,
    terminal_initialized: bool,
    current: Option<CurrentPage>,
}

impl Default for PagePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PagePresenter {
    pub fn new() -> Self {
        Self {
            picker: Picker::halfblocks(),
            protocol_label: "halfblocks",
            terminal_initialized: false,
            current: None,
        }
    }

    /// Queries the terminal for its graphics protocol and cell geometry.
    /// Must run inside the raw-mode session; keeps the halfblock fallback
    /// when the query fails.
    pub fn initialize_terminal(&mut self) {
        if self.terminal_initialized {
            return;
        }

        if let Ok(picker) = Picker::from_query_stdio() {
            self.protocol_label = protocol_type_label(picker.protocol_type());
            self.picker = picker;
            self.current = None;
        }

        self.terminal_initialized = true;
    }

    pub fn cell_px(&self) -> (u16, u16) {
        self.picker.font_size()
    }

    pub fn protocol_label(&self) -> &'static str {
        self.protocol_label
    }

    /// Maximum render scale the active protocol benefits from. Kitty/iTerm2
    /// send raw pixels so high-res rendering pays off; sixel is
    /// color-quantized; halfblocks have very limited resolution.
    pub fn max_render_scale_hint(&self) -> f32 {
        match self.picker.protocol_type() {
            ProtocolType::Kitty | ProtocolType::Iterm2 => 2.5,
            ProtocolType::Sixel => 1.5,
            ProtocolType::Halfblocks => 1.0,
        }
    }

    pub fn prepare(&mut self, key: RenderedPageKey, frame: &RgbaFrame) -> AppResult<()> {
        if self.current.as_ref().is_some_and(|current| current.key == key) {
            return Ok(());
        }

        let image = RgbaImage::from_raw(frame.width, frame.height, frame.pixels_to_vec()).ok_or(
            AppError::invalid_argument("rgba frame pixels length does not match dimensions"),
        )?;
        let protocol = self
            .picker
            .new_resize_protocol(DynamicImage::ImageRgba8(image));
        self.current = Some(CurrentPage { key, protocol });
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect) -> AppResult<bool> {
        if area.width == 0 || area.height == 0 {
            return Ok(false);
        }
        let Some(current) = self.current.as_mut() else {
            return Ok(false);
        };

        let target_size = current
            .protocol
            .size_for(Resize::Fit(Some(RESIZE_FILTER)), area);
        let render_area = center_rect_within(area, target_size.width, target_size.height);

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(
            StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(Some(RESIZE_FILTER))),
            render_area,
            &mut current.protocol,
        );

        let encode_failed = current
            .protocol
            .last_encoding_result()
            .is_some_and(|result| result.is_err());
        if encode_failed {
            self.current = None;
            return Err(AppError::unsupported(ENCODE_FAILURE_MESSAGE));
        }
        Ok(true)
    }

    pub fn invalidate(&mut self) {
        self.current = None;
    }
}

fn protocol_type_label(protocol: ProtocolType) -> &'static str {
    match protocol {
        ProtocolType::Kitty => "kitty",
        ProtocolType::Iterm2 => "iterm2",
        ProtocolType::Sixel => "sixel",
        ProtocolType::Halfblocks => "halfblocks",
    }
}

fn center_rect_within(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
