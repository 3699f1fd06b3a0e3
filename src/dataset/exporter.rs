//! Synthetic swatch dataset export
//!
//! For each labeled row, `variants_per_row` uniform swatches are written,
//! each with every channel shifted by a uniform random amount in
//! `[-jitter, jitter]` and clamped to [0, 255]. Output layout:
//!
//! ```text
//! <output_root>/<sanitized label>/<sanitized label>_<index>.<ext>
//! ```
//!
//! Indices start at 1 and keep counting when a label appears in more than
//! one row, so every valid row contributes exactly `variants_per_row`
//! files. A re-run overwrites files with the same index.
//!
//! Malformed rows and failed writes are logged, recorded in the
//! [`ExportReport`] and skipped. Only an unusable output root or an
//! unreadable input file stops the export.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::row::{parse_rows, sanitize_label, DatasetRow};
use super::swatch::write_swatch;
use crate::color::RgbSample;
use crate::config::ExportConfig;
use crate::{NamingError, Result};

/// A row or file that was skipped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportFailure {
    /// 1-based table line, when the failure comes from parsing
    pub line: Option<usize>,
    pub label: Option<String>,
    pub path: Option<PathBuf>,
    pub message: String,
}

/// Summary of one export run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportReport {
    /// Rows that parsed successfully and were exported (fully or partly)
    pub rows_exported: usize,
    /// Rows skipped as malformed or unwritable
    pub rows_skipped: usize,
    pub images_written: usize,
    /// Images written per sanitized label
    pub groups: BTreeMap<String, u32>,
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, failure: ExportFailure) {
        warn!(
            line = ?failure.line,
            label = ?failure.label,
            path = ?failure.path,
            "Skipped: {}",
            failure.message
        );
        self.failures.push(failure);
    }
}

/// Writes jittered swatch images for labeled colors
pub struct DatasetExporter {
    config: ExportConfig,
    rng: StdRng,
}

impl DatasetExporter {
    /// Create an exporter; the jitter generator is seeded from
    /// `config.seed` when set.
    ///
    /// # Errors
    ///
    /// Returns `NamingError::InvalidParameter` if the configuration fails
    /// validation.
    pub fn new(config: ExportConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Shift each channel by a uniform amount in `[-jitter, jitter]`
    pub fn jitter(&mut self, sample: RgbSample) -> RgbSample {
        let spread = i64::from(self.config.jitter);
        let mut shift = |channel: u8| i64::from(channel) + self.rng.random_range(-spread..=spread);
        let r = shift(sample.r);
        let g = shift(sample.g);
        let b = shift(sample.b);
        RgbSample::from_clamped(r, g, b)
    }

    /// Export already-parsed rows
    ///
    /// # Errors
    ///
    /// Returns `NamingError::Io` only if the output root cannot be created.
    pub fn export_rows(&mut self, rows: &[DatasetRow]) -> Result<ExportReport> {
        let mut report = ExportReport::default();
        self.prepare_root()?;

        for row in rows {
            self.export_row(row, &mut report);
        }

        self.log_summary(&report);
        Ok(report)
    }

    /// Parse a delimited table and export every valid row
    ///
    /// # Errors
    ///
    /// Returns `NamingError::Io` only if the output root cannot be created.
    pub fn export_table(&mut self, text: &str) -> Result<ExportReport> {
        let mut report = ExportReport::default();
        self.prepare_root()?;

        for parsed in parse_rows(text, self.config.delimiter, self.config.has_header) {
            match parsed {
                Ok(row) => self.export_row(&row, &mut report),
                Err(NamingError::MalformedRow { line, reason }) => {
                    report.rows_skipped += 1;
                    report.record(ExportFailure {
                        line: Some(line),
                        label: None,
                        path: None,
                        message: reason,
                    });
                }
                Err(other) => {
                    report.rows_skipped += 1;
                    report.record(ExportFailure {
                        line: None,
                        label: None,
                        path: None,
                        message: other.to_string(),
                    });
                }
            }
        }

        self.log_summary(&report);
        Ok(report)
    }

    /// Read a table file and export it
    ///
    /// # Errors
    ///
    /// Returns `NamingError::Io` if the file cannot be read or the output
    /// root cannot be created.
    pub fn export_file(&mut self, path: &Path) -> Result<ExportReport> {
        let text = fs::read_to_string(path).map_err(|e| NamingError::io(path, e))?;
        info!("Exporting dataset from {}", path.display());
        self.export_table(&text)
    }

    fn log_summary(&self, report: &ExportReport) {
        info!(
            rows = report.rows_exported,
            skipped = report.rows_skipped,
            images = report.images_written,
            "Dataset export finished: {}",
            self.config.output_root.display()
        );
    }

    fn prepare_root(&self) -> Result<()> {
        let root = &self.config.output_root;
        fs::create_dir_all(root).map_err(|e| NamingError::io(root, e))
    }

    fn export_row(&mut self, row: &DatasetRow, report: &mut ExportReport) {
        let folder = sanitize_label(&row.label, &self.config.label_separator);
        if folder.is_empty() {
            report.rows_skipped += 1;
            report.record(ExportFailure {
                line: None,
                label: Some(row.label.clone()),
                path: None,
                message: "label is empty after sanitizing".to_string(),
            });
            return;
        }

        let dir = self.config.output_root.join(&folder);
        if let Err(e) = fs::create_dir_all(&dir) {
            report.rows_skipped += 1;
            report.record(ExportFailure {
                line: None,
                label: Some(row.label.clone()),
                path: Some(dir),
                message: format!("could not create directory: {}", e),
            });
            return;
        }

        let extension = self.config.format.extension();
        let mut written_any = false;

        for _ in 0..self.config.variants_per_row {
            let next_index = report.groups.get(&folder).copied().unwrap_or(0) + 1;
            let path = dir.join(format!("{}_{}.{}", folder, next_index, extension));
            let color = self.jitter(row.sample);

            match write_swatch(
                &path,
                color,
                self.config.image_width,
                self.config.image_height,
                self.config.format,
            ) {
                Ok(()) => {
                    debug!("Saved swatch {} {}", path.display(), color);
                    report.groups.insert(folder.clone(), next_index);
                    report.images_written += 1;
                    written_any = true;
                }
                Err(e) => report.record(ExportFailure {
                    line: None,
                    label: Some(row.label.clone()),
                    path: Some(path),
                    message: e.to_string(),
                }),
            }
        }

        if written_any {
            report.rows_exported += 1;
        } else {
            report.rows_skipped += 1;
        }
    }
}

/// Export `rows` into `output_root` with default image settings
///
/// `seed` makes the jitter reproducible.
pub fn export_dataset(
    rows: &[DatasetRow],
    variants_per_row: u32,
    jitter: u8,
    output_root: &Path,
    seed: Option<u64>,
) -> Result<ExportReport> {
    let config = ExportConfig {
        output_root: output_root.to_path_buf(),
        variants_per_row,
        jitter,
        seed,
        ..ExportConfig::default()
    };
    DatasetExporter::new(config)?.export_rows(rows)
}
