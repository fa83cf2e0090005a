// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel document loading and processing.
//!
//! Both halves of a build are embarrassingly parallel. Loading is one file per
//! document. Processing touches one item at a time and only reads the shared
//! configuration. Rayon gives us `par_iter()` for the first and
//! `par_iter_mut()` for the second. Without the `parallel` feature the same
//! code runs sequentially.

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::warn;

use crate::processor::SortPriorityProcessor;
use crate::types::IndexItem;

use super::{BuildError, Document, InputManifest, ProcessStats};

fn load_one(input_dir: &Path, filename: &str) -> Result<Document, BuildError> {
    let path = input_dir.join(filename);
    let content = fs::read_to_string(&path).map_err(|e| BuildError::ReadDocument {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str::<Document>(&content).map_err(|e| {
        warn!(path = %path.display(), error = %e, "failed to parse document");
        BuildError::ParseDocument {
            file: filename.to_string(),
            message: e.to_string(),
        }
    })
}

/// Load all documents listed in the manifest, sorted by id.
pub fn load_documents(
    input_dir: &Path,
    manifest: &InputManifest,
) -> Result<Vec<Document>, BuildError> {
    #[cfg(feature = "parallel")]
    let iter = manifest.documents.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = manifest.documents.iter();

    let mut docs = iter
        .map(|filename| load_one(input_dir, filename))
        .collect::<Result<Vec<Document>, BuildError>>()?;

    // Sort by ID to maintain consistent ordering
    docs.sort_by_key(|d| d.id);
    Ok(docs)
}

/// Load all documents in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
    progress: &ProgressBar,
) -> Result<Vec<Document>, BuildError> {
    let counter = AtomicUsize::new(0);
    let total = manifest.documents.len();

    let mut docs = manifest
        .documents
        .par_iter()
        .map(|filename| {
            let doc = load_one(input_dir, filename)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(doc)
        })
        .collect::<Result<Vec<Document>, BuildError>>()?;

    docs.sort_by_key(|d| d.id);
    Ok(docs)
}

/// Run the processor over every document.
///
/// Each document is handled independently; the processor is only read.
pub fn process_documents(processor: &SortPriorityProcessor, docs: &mut [Document]) -> ProcessStats {
    #[cfg(feature = "parallel")]
    let iter = docs.par_iter_mut();
    #[cfg(not(feature = "parallel"))]
    let iter = docs.iter_mut();

    let written: Vec<Option<i64>> = iter
        .map(|doc| {
            if processor.populate(doc) {
                doc.weight()
            } else {
                None
            }
        })
        .collect();

    let mut stats = ProcessStats::default();
    for weight in written {
        match weight {
            Some(w) => stats.record(w),
            None => stats.skipped += 1,
        }
    }
    stats
}
