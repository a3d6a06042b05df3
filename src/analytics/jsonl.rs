use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

use super::{AnalyticsEvent, AnalyticsSink};

/// Appends one JSON object per event to a log file. Each record is flushed
/// immediately so a crashed session still leaves complete lines behind.
pub struct JsonlSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl JsonlSink {
    pub fn create(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| {
                AppError::io_with_context(
                    source,
                    format!("failed to create analytics directory: {}", parent.display()),
                )
            })?;
        }

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|source| {
                AppError::io_with_context(
                    source,
                    format!("failed to open analytics log: {}", path.display()),
                )
            })?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnalyticsSink for JsonlSink {
    fn record(&mut self, event: &AnalyticsEvent) -> AppResult<()> {
        let line = serde_json::to_string(event).map_err(|source| {
            AppError::unsupported(format!("analytics event failed to serialize: {source}"))
        })?;
        writeln!(self.writer, "{line}").map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to append analytics log: {}", self.path.display()),
            )
        })?;
        self.writer.flush().map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to flush analytics log: {}", self.path.display()),
            )
        })
    }

    fn name(&self) -> &'static str {
        "jsonl"
    }
}
