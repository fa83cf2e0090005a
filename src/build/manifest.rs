use serde::Deserialize;

use crate::config::ProcessorConfig;
use crate::index::IndexDefinition;

/// Manifest format version understood by this build.
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    /// The index the documents belong to.
    pub index: IndexDefinition,
    /// Document files, relative to the manifest.
    pub documents: Vec<String>,
    /// Processor settings; the default configuration when absent.
    #[serde(default)]
    pub config: Option<ProcessorConfig>,
}
