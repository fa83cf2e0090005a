// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `index` build: documents in, weighted documents out.
//!
//! An input directory holds `manifest.json` (index definition, document list,
//! optional processor settings) and one JSON file per document. The build
//! attaches the processor to the index, runs it over every document and
//! writes `items.json` to the output directory.

pub mod document;
pub mod manifest;
pub mod parallel;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::{ConfigError, ProcessorConfig};
use crate::processor::{AttachError, SortPriorityProcessor};
use crate::ranking::{sort_items, SortDirection};

pub use document::*;
pub use manifest::*;
pub use parallel::*;

/// Name of the file written to the output directory.
pub const OUTPUT_FILE: &str = "items.json";

/// Knobs for a build beyond the input and output directories.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Settings file overriding the manifest's `config`.
    pub config_path: Option<PathBuf>,
    /// Sort the written items by weight.
    pub sort: Option<SortDirection>,
}

/// What a processing pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessStats {
    /// Items that received a weight.
    pub weighted: usize,
    /// Items left untouched (missing fields or already weighted).
    pub skipped: usize,
    /// Written weight → number of items.
    pub histogram: BTreeMap<i64, usize>,
}

impl ProcessStats {
    pub(crate) fn record(&mut self, weight: i64) {
        self.weighted += 1;
        *self.histogram.entry(weight).or_insert(0) += 1;
    }
}

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub documents: usize,
    pub stats: ProcessStats,
    pub output_file: PathBuf,
}

/// Error type for the build pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// `manifest.json` could not be read.
    ReadManifest(String),
    /// `manifest.json` is not valid.
    InvalidManifest(String),
    /// A document file could not be read.
    ReadDocument { path: String, message: String },
    /// A document file is not valid JSON of the expected shape.
    ParseDocument { file: String, message: String },
    /// The processor settings could not be loaded.
    Config(ConfigError),
    /// The processor refused the index.
    Attach(AttachError),
    /// The output could not be written.
    Write { path: String, message: String },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::ReadManifest(message) => write!(f, "Failed to read manifest: {}", message),
            BuildError::InvalidManifest(message) => write!(f, "Invalid manifest: {}", message),
            BuildError::ReadDocument { path, message } => {
                write!(f, "Failed to read {}: {}", path, message)
            }
            BuildError::ParseDocument { file, message } => {
                write!(f, "Invalid JSON in {}: {}", file, message)
            }
            BuildError::Config(e) => write!(f, "{}", e),
            BuildError::Attach(e) => write!(f, "{}", e),
            BuildError::Write { path, message } => {
                write!(f, "Failed to write {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Config(e) => Some(e),
            BuildError::Attach(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for BuildError {
    fn from(e: ConfigError) -> Self {
        BuildError::Config(e)
    }
}

impl From<AttachError> for BuildError {
    fn from(e: AttachError) -> Self {
        BuildError::Attach(e)
    }
}

/// Create a progress style for the main progress bars
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Read and validate `manifest.json` from `input_dir`.
pub fn read_manifest(input_dir: &Path) -> Result<InputManifest, BuildError> {
    let manifest_path = input_dir.join("manifest.json");
    let content = fs::read_to_string(&manifest_path)
        .map_err(|e| BuildError::ReadManifest(format!("{}: {}", manifest_path.display(), e)))?;
    let manifest: InputManifest = serde_json::from_str(&content)
        .map_err(|e| BuildError::InvalidManifest(e.to_string()))?;

    if manifest.version != MANIFEST_VERSION {
        return Err(BuildError::InvalidManifest(format!(
            "unsupported version {} (expected {})",
            manifest.version, MANIFEST_VERSION
        )));
    }
    if let Some(config) = &manifest.config {
        config.validate()?;
    }
    Ok(manifest)
}

/// Settings for a build: the override file, else the manifest's, else defaults.
pub fn resolve_config(
    manifest: &InputManifest,
    options: &BuildOptions,
) -> Result<ProcessorConfig, BuildError> {
    if let Some(path) = &options.config_path {
        return Ok(ProcessorConfig::from_path(path)?);
    }
    Ok(manifest.config.clone().unwrap_or_default())
}

pub fn run_build(
    input_dir: &str,
    output_dir: &str,
    options: &BuildOptions,
) -> Result<BuildSummary, BuildError> {
    let input_path = Path::new(input_dir);
    let output_path = Path::new(output_dir);

    #[cfg(feature = "parallel")]
    let multi = MultiProgress::new();

    // 1. Read manifest and settings, attach the processor
    let manifest = read_manifest(input_path)?;
    let config = resolve_config(&manifest, options)?;
    let processor = SortPriorityProcessor::attach(config, &manifest.index)?;
    info!(
        index = %manifest.index.id,
        documents = manifest.documents.len(),
        "starting build"
    );

    // 2. Load documents
    #[cfg(feature = "parallel")]
    let mut documents = {
        let load_pb = multi.add(ProgressBar::new(manifest.documents.len() as u64));
        load_pb.set_style(create_progress_style());
        load_pb.set_prefix("Loading");
        load_pb.set_message("documents...");
        let docs = parallel::load_documents_with_progress(input_path, &manifest, &load_pb)?;
        load_pb.finish_with_message(format!("loaded {} documents", docs.len()));
        docs
    };
    #[cfg(not(feature = "parallel"))]
    let mut documents = parallel::load_documents(input_path, &manifest)?;

    if documents.is_empty() {
        warn!("no documents loaded");
    }

    // 3. Apply weights
    let stats = parallel::process_documents(&processor, &mut documents);
    info!(
        weighted = stats.weighted,
        skipped = stats.skipped,
        "processed documents"
    );

    if let Some(direction) = options.sort {
        sort_items(&mut documents, direction);
    }

    // 4. Write output
    fs::create_dir_all(output_path).map_err(|e| BuildError::Write {
        path: output_path.display().to_string(),
        message: e.to_string(),
    })?;
    let output_file = output_path.join(OUTPUT_FILE);
    let serialized = serde_json::to_string_pretty(&documents).map_err(|e| BuildError::Write {
        path: output_file.display().to_string(),
        message: e.to_string(),
    })?;
    fs::write(&output_file, serialized).map_err(|e| BuildError::Write {
        path: output_file.display().to_string(),
        message: e.to_string(),
    })?;
    info!(path = %output_file.display(), "wrote items");

    Ok(BuildSummary {
        documents: documents.len(),
        stats,
        output_file,
    })
}
