use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::RiskAnalysis;

/// Accepts a rendered report
pub trait ReportSink {
    fn write_report(&self, report: &str) -> Result<()>;
}

/// Writes the report to a UTF-8 text file
#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileReportSink {
    fn write_report(&self, report: &str) -> Result<()> {
        std::fs::write(&self.path, report)
            .with_context(|| format!("Failed to write report: {:?}", self.path))
    }
}

/// Prints the report to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReportSink;

impl ReportSink for StdoutReportSink {
    fn write_report(&self, report: &str) -> Result<()> {
        println!("{}", report);
        Ok(())
    }
}

/// Write analyses as pretty-printed JSON
pub fn write_analyses_json(analyses: &[RiskAnalysis], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, analyses).context("Failed to write JSON")?;
    Ok(())
}
