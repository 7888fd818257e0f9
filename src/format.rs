//! Report formats for validation results.
//!
//! Library-level types without CLI framework dependencies. A report is a
//! list of [`ValidationResult`]s rendered as aligned text, a JSON array, or
//! semicolon-separated CSV.
//!
//! # Example
//!
//! ```rust
//! use ddpack::format::{render_report, ReportFormat};
//! use ddpack::platform::Platform;
//! use ddpack::validate::ArchiveValidator;
//!
//! let result = ArchiveValidator::for_platform(Platform::TikTok).validate("missing.zip");
//! let text = render_report(&[result], ReportFormat::Text)?;
//! assert!(text.contains("Bad zipfile"));
//! # Ok::<(), ddpack::DdpError>(())
//! ```

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{DdpError, Result};
use crate::validate::ValidationResult;

/// Output format for validation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// One human-readable line per result (default)
    #[default]
    Text,

    /// Pretty-printed JSON array of results
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ReportFormat] {
        &[ReportFormat::Text, ReportFormat::Json, ReportFormat::Csv]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text/plain",
            ReportFormat::Json => "application/json",
            ReportFormat::Csv => "text/csv",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = DdpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(DdpError::invalid_format(
                "report format",
                format!("'{}'. Expected one of: {}", s, ReportFormat::all_names().join(", ")),
            )),
        }
    }
}

/// Renders results to a string in the given format.
///
/// # Errors
///
/// Returns an error if serialization fails or if CSV is requested without
/// the `csv-output` feature.
pub fn render_report(results: &[ValidationResult], format: ReportFormat) -> Result<String> {
    let mut buf = Vec::new();
    write_report(results, format, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes results to any writer in the given format.
pub fn write_report<W: Write>(results: &[ValidationResult], format: ReportFormat, mut out: W) -> Result<()> {
    match format {
        ReportFormat::Text => {
            for result in results {
                writeln!(out, "{}", text_line(result))?;
            }
            Ok(())
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut out, results)?;
            writeln!(out)?;
            Ok(())
        }
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => write_csv(results, out),
        #[allow(unreachable_patterns)]
        _ => Err(DdpError::invalid_format(
            "report format",
            format!("{format} output requires the 'csv-output' feature to be enabled"),
        )),
    }
}

fn text_line(result: &ValidationResult) -> String {
    let category = result
        .matched_category
        .map_or_else(|| "-".to_string(), ToString::to_string);
    format!(
        "{:<10} {:<16} {:<24} coverage {:>5.1}%  {} relevant file(s)",
        result.platform.token(),
        result.status.description(),
        category,
        result.coverage_percent,
        result.relevant_paths.len()
    )
}

#[cfg(feature = "csv-output")]
fn write_csv<W: Write>(results: &[ValidationResult], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record([
        "Platform",
        "Status",
        "Code",
        "Category",
        "FileFormat",
        "Coverage",
        "RelevantFiles",
    ])?;

    for result in results {
        let category = result.matched_category;
        writer.write_record([
            result.platform.token().to_string(),
            result.status.description().to_string(),
            result.status.code().to_string(),
            category.map(|c| c.id.to_string()).unwrap_or_default(),
            category.map(|c| c.file_format.extension().to_string()).unwrap_or_default(),
            format!("{:.1}", result.coverage_percent),
            result.relevant_paths.len().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
