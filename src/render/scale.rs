use ratatui::layout::Rect;

pub(crate) const SCALE_QUANTUM: f32 = 0.05;
pub(crate) const MIN_RENDER_SCALE: f32 = 1.0;
pub(crate) const DEFAULT_CELL_SIZE_PX: (u16, u16) = (10, 20);
pub(crate) const DEFAULT_PAGE_SIZE_PT: (f32, f32) = (612.0, 792.0);

pub(crate) fn resolved_cell_size_px(cell_px: (u16, u16)) -> (u16, u16) {
    match cell_px {
        (width, height) if width > 0 && height > 0 => (width, height),
        _ => DEFAULT_CELL_SIZE_PX,
    }
}

/// Render scale that fits the page into the viewer area, given the terminal
/// cell pixel geometry. Small viewports still render at a readable scale
/// (the presenter downscales on blit); the result is quantized so cache
/// keys stay stable across sub-cell viewport changes.
pub(crate) fn compute_render_scale(
    area: Rect,
    cell_px: (u16, u16),
    page_width_pt: f32,
    page_height_pt: f32,
    max_render_scale: f32,
) -> f32 {
    if !page_width_pt.is_finite()
        || !page_height_pt.is_finite()
        || page_width_pt <= 0.0
        || page_height_pt <= 0.0
    {
        return MIN_RENDER_SCALE;
    }

    let (cell_width_px, cell_height_px) = resolved_cell_size_px(cell_px);
    let (cell_width_px, cell_height_px) = (f32::from(cell_width_px), f32::from(cell_height_px));

    let area_width_px = f32::from(area.width.max(1)) * cell_width_px;
    let area_height_px = f32::from(area.height.max(1)) * cell_height_px;
    let fit_scale = (area_width_px / page_width_pt).min(area_height_px / page_height_pt);
    if !fit_scale.is_finite() || fit_scale <= 0.0 {
        return MIN_RENDER_SCALE;
    }

    let adaptive_scale = if fit_scale < 1.0 {
        (1.0 / fit_scale).sqrt()
    } else {
        fit_scale
    };

    let effective_max = max_render_scale.max(MIN_RENDER_SCALE);
    quantize_scale(adaptive_scale.clamp(MIN_RENDER_SCALE, effective_max))
}

pub(crate) fn quantize_scale(scale: f32) -> f32 {
    if !scale.is_finite() || scale <= 0.0 {
        return MIN_RENDER_SCALE;
    }

    ((scale / SCALE_QUANTUM).round() * SCALE_QUANTUM).max(SCALE_QUANTUM)
}
