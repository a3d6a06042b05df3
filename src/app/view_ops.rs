use ratatui::layout::Rect;

use crate::backend::PdfBackend;
use crate::command::ActionId;
use crate::config::RenderConfig;
use crate::error::{AppError, AppResult};
use crate::nav::PageNavigator;
use crate::render::RenderedPageKey;
use crate::render::scale::{DEFAULT_PAGE_SIZE_PT, compute_render_scale};
use crate::ui;

use super::core::{App, RenderSubsystem};
use super::state::DocumentPhase;
use super::terminal_session::TerminalSurface;

impl App {
    pub(crate) fn render_frame(
        &mut self,
        session: &mut impl TerminalSurface,
        document: Option<&dyn PdfBackend>,
    ) -> AppResult<()> {
        let file_name = self
            .config
            .document
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
            .unwrap_or_else(|| self.config.document.path.display().to_string());
        let mut render_error: Option<String> = None;

        session.draw(|frame| {
            let layout = ui::split_layout(frame.area(), self.state.debug_status_visible);
            let controls = ui::layout_controls(layout.controls);
            ui::draw_controls(frame, &controls, &self.state.nav);
            ui::draw_chrome(
                frame,
                layout,
                &self.state,
                &file_name,
                self.render.page_cache.counters(),
                self.render.presenter.protocol_label(),
            );

            let area = layout.viewer;
            match (&self.state.doc, document) {
                (DocumentPhase::Loading, _) | (DocumentPhase::Ready, None) => {
                    ui::draw_placeholder(
                        frame,
                        area,
                        "Document",
                        &self.config.document.loading_text,
                    );
                }
                (DocumentPhase::Failed(_), _) => {
                    ui::draw_placeholder(
                        frame,
                        area,
                        "Document",
                        &self.config.document.load_error_text,
                    );
                }
                (DocumentPhase::Ready, Some(pdf)) => {
                    if !self.state.nav.is_current_page_renderable() {
                        ui::draw_placeholder(
                            frame,
                            area,
                            "Page",
                            &self.config.document.no_page_text,
                        );
                        return;
                    }

                    let prepared = self.render.prepare_current_page(
                        pdf,
                        &self.state.nav,
                        area,
                        &self.config.render,
                    );
                    let outcome = match prepared {
                        Ok(()) => self.render.presenter.render(frame, area),
                        Err(err) => Err(err),
                    };
                    match outcome {
                        Ok(_drawn) => {}
                        Err(err) => {
                            render_error = Some(err.to_string());
                            ui::draw_placeholder(
                                frame,
                                area,
                                "Page",
                                &self.config.document.render_error_text,
                            );
                        }
                    }
                }
            }
        })?;

        if let Some(err) = render_error {
            self.state.status.last_action_id = Some(ActionId::RenderPage);
            self.state.status.message = format!("render error: {err}");
        }

        Ok(())
    }
}

impl RenderSubsystem {
    /// Renders (or fetches from cache) the navigator's current page and
    /// hands the frame to the presenter. Callers must have checked
    /// `is_current_page_renderable` first.
    fn prepare_current_page(
        &mut self,
        pdf: &dyn PdfBackend,
        nav: &PageNavigator,
        area: Rect,
        render_config: &RenderConfig,
    ) -> AppResult<()> {
        let page = nav.current_page().saturating_sub(1);
        let (page_width_pt, page_height_pt) =
            pdf.page_dimensions(page).unwrap_or(DEFAULT_PAGE_SIZE_PT);
        let max_scale = self
            .presenter
            .max_render_scale_hint()
            .clamp(1.0, render_config.max_render_scale.max(1.0));
        let scale = compute_render_scale(
            area,
            self.presenter.cell_px(),
            page_width_pt,
            page_height_pt,
            max_scale,
        );

        let key = RenderedPageKey::new(pdf.doc_id(), page, scale);
        let frame = match self.page_cache.get_cloned(&key) {
            Some(frame) => frame,
            None => {
                let frame = pdf
                    .render_page(page, scale)
                    .map_err(|source| AppError::pdf_render(page, source))?;
                self.page_cache.insert(key, frame.clone());
                frame
            }
        };
        self.presenter.prepare(key, &frame)
    }
}
