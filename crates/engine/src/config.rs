//! Engine configuration via `sift.toml`
//!
//! Every key is optional; a missing key takes its default. Values are
//! validated eagerly when a file is loaded.

use crate::query::DEFAULT_RESULT_LIMIT;
use serde::{Deserialize, Serialize};
use sift_core::{SiftError, SiftResult};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "sift.toml";

/// Indexing and query settings
///
/// # Example
///
/// ```toml
/// result_limit = 5
/// reject_duplicate_documents = false
/// parallel_counting = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of documents returned by a query
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    /// Fail with `DuplicateDocument` instead of double counting a document
    /// that is merged twice
    #[serde(default)]
    pub reject_duplicate_documents: bool,
    /// Count keywords of listed documents on the rayon pool.
    /// Merging stays sequential in listing order.
    #[serde(default)]
    pub parallel_counting: bool,
}

fn default_result_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
            reject_duplicate_documents: false,
            parallel_counting: false,
        }
    }
}

impl EngineConfig {
    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `result_limit` is zero.
    pub fn validate(&self) -> SiftResult<()> {
        if self.result_limit == 0 {
            return Err(SiftError::invalid_config(
                "result_limit must be at least 1",
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# sift configuration
#
# Maximum number of documents returned by a two-keyword query (default: 5)
result_limit = 5

# Reject a document that is merged a second time instead of double
# counting its keywords (default: false)
reject_duplicate_documents = false

# Count keywords of each document on a thread pool before the sequential
# merge (default: false)
parallel_counting = false
"#
    }

    /// Parse and validate config text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the text is not valid TOML or fails validation.
    pub fn from_toml_str(content: &str) -> SiftResult<Self> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| SiftError::invalid_config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> SiftResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SiftError::source_unavailable(path.display().to_string(), e)
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            SiftError::InvalidConfig(msg) => SiftError::invalid_config(format!(
                "'{}': {}",
                path.display(),
                msg
            )),
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> SiftResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> SiftResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SiftError::invalid_config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
