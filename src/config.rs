use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub document: DocumentConfig,
    pub analytics: AnalyticsConfig,
    pub input: InputConfig,
    pub keymap: KeymapConfig,
    pub render: RenderConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DocumentConfig {
    pub path: PathBuf,
    pub loading_text: String,
    pub load_error_text: String,
    pub no_page_text: String,
    pub render_error_text: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("report.pdf"),
            loading_text: "Loading document...".to_string(),
            load_error_text: "Could not load the document".to_string(),
            no_page_text: "No page to display".to_string(),
            render_error_text: "Could not render this page".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    pub category: String,
    pub action: String,
    pub pageview_path: String,
    pub log_path: Option<PathBuf>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            category: "interaction".to_string(),
            action: "page-turn".to_string(),
            pageview_path: "/".to_string(),
            log_path: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    pub tap_advances_page: bool,
    pub wheel_navigates: bool,
    pub min_swipe_columns: u16,
    pub min_swipe_rows: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            tap_advances_page: true,
            wheel_navigates: true,
            min_swipe_columns: 4,
            min_swipe_rows: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeymapConfig {
    pub preset: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub max_render_scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_render_scale: 2.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    pub max_entries: usize,
    pub memory_budget_mb: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 32,
            memory_budget_mb: 256,
        }
    }
}

impl CacheConfig {
    const MEBIBYTE: usize = 1024 * 1024;

    pub fn memory_budget_bytes(&self) -> usize {
        self.memory_budget_mb.saturating_mul(Self::MEBIBYTE).max(1)
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.input.min_swipe_columns = self.input.min_swipe_columns.max(1);
        self.input.min_swipe_rows = self.input.min_swipe_rows.max(1);
        self.cache.max_entries = self.cache.max_entries.max(1);
        self.cache.memory_budget_mb = self.cache.memory_budget_mb.max(1);
        if !self.render.max_render_scale.is_finite() || self.render.max_render_scale < 1.0 {
            self.render.max_render_scale = RenderConfig::default().max_render_scale;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("PAGETURN_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("pageturn").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("pageturn")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("pageturn").join("config.toml"));
    }
    None
}
