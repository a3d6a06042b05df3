mod jsonl;

use std::path::PathBuf;

use serde::Serialize;

use crate::config::AnalyticsConfig;
use crate::error::{AppError, AppResult};

pub use jsonl::JsonlSink;

/// Usage telemetry reported by the viewer: a pageview once at startup and a
/// page-turn event for every change of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    Pageview { path: String },
    PageTurn {
        category: String,
        action: String,
        value: usize,
    },
}

/// Injected analytics collaborator. The viewer constructs exactly one sink
/// at startup and routes all events through it; transport and batching are
/// the sink's concern.
pub trait AnalyticsSink: Send {
    fn record(&mut self, event: &AnalyticsEvent) -> AppResult<()>;
    fn name(&self) -> &'static str;
}

/// Sink used when analytics is disabled.
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn record(&mut self, _event: &AnalyticsEvent) -> AppResult<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

pub fn open_default_sink(config: &AnalyticsConfig) -> AppResult<Box<dyn AnalyticsSink>> {
    if !config.enabled {
        return Ok(Box::new(NullSink));
    }

    let path = config
        .log_path
        .clone()
        .or_else(default_analytics_path)
        .ok_or_else(|| {
            AppError::invalid_argument(
                "no analytics log path available: set [analytics] log_path or disable analytics",
            )
        })?;
    Ok(Box::new(JsonlSink::create(path)?))
}

pub fn default_analytics_path() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_STATE_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("pageturn").join("events.jsonl"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("pageturn")
                .join("events.jsonl"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("pageturn").join("events.jsonl"));
    }
    None
}
