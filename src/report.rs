//! Report Export
//!
//! Serializes a `{timestamp, input, results}` snapshot to pretty-printed
//! JSON for download or archiving. The report is a human-readable snapshot
//! only; there is no schema-version compatibility contract. Non-finite
//! numbers (from degenerate unvalidated scenarios) serialize as `null`.

use crate::optimizer::{OptimizationInput, OptimizationResult};
use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One exported optimization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// UTC capture time, RFC 3339
    pub timestamp: String,
    pub input: OptimizationInput,
    pub results: OptimizationResult,
}

impl Report {
    /// Capture a report with the current UTC timestamp
    pub fn new(input: OptimizationInput, results: OptimizationResult) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            input,
            results,
        }
    }

    /// Render the report as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize optimization report")
    }

    /// Write the report JSON to a file
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write optimization report: {:?}", path))
    }
}
