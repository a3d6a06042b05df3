use crate::analytics::{AnalyticsEvent, AnalyticsSink, open_default_sink};
use crate::command::ActionId;
use crate::config::Config;
use crate::error::AppResult;
use crate::render::{PagePresenter, RenderedPageCache};

use super::state::{AppState, StatusState};

pub struct RenderSubsystem {
    pub(crate) page_cache: RenderedPageCache,
    pub(crate) presenter: PagePresenter,
}

/// Holds the injected analytics sink. The first record failure disables the
/// sink for the rest of the session so telemetry can never interrupt
/// navigation.
pub(crate) struct AnalyticsChannel {
    sink: Option<Box<dyn AnalyticsSink>>,
}

impl AnalyticsChannel {
    pub(crate) fn new(sink: Box<dyn AnalyticsSink>) -> Self {
        Self { sink: Some(sink) }
    }

    pub(crate) fn record(&mut self, event: &AnalyticsEvent, status: &mut StatusState) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if let Err(err) = sink.record(event) {
            status.last_action_id = Some(ActionId::Analytics);
            status.message = format!("analytics disabled: {err}");
            self.sink = None;
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn is_active(&self) -> bool {
        self.sink.is_some()
    }
}

pub struct App {
    pub state: AppState,
    pub(crate) render: RenderSubsystem,
    pub(crate) analytics: AnalyticsChannel,
    pub config: Config,
}

impl App {
    pub fn new(config: Config) -> AppResult<Self> {
        let sink = open_default_sink(&config.analytics)?;
        Ok(Self::new_with_sink(config, sink))
    }

    pub fn new_with_sink(config: Config, sink: Box<dyn AnalyticsSink>) -> Self {
        Self {
            state: AppState::default(),
            render: RenderSubsystem {
                page_cache: RenderedPageCache::new(
                    config.cache.max_entries,
                    config.cache.memory_budget_bytes(),
                ),
                presenter: PagePresenter::new(),
            },
            analytics: AnalyticsChannel::new(sink),
            config,
        }
    }
}
