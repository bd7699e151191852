//! JSON share-document model.
//!
//! A share document declares the scheme parameters under `"keys"` and keeps
//! every other top-level key as one base-encoded share, keyed by its
//! x-coordinate:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2",  "value": "111" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::share::{RawShare, ShareSet};

/// Scheme parameters declared under the document's `"keys"` object.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeKeys {
    /// Number of shares provided.
    pub n: usize,
    /// Minimum shares required to reconstruct (degree = k - 1).
    pub k: usize,
}

/// One base-encoded share entry. Both fields arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareEntry {
    pub base: String,
    pub value: String,
}

/// A parsed share document: scheme parameters plus one entry per x-key.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareDocument {
    pub keys: SchemeKeys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, ShareEntry>,
}

impl ShareDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("share document is not valid JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        Self::from_json(&content)
    }

    /// Decodes every entry into a sorted point set.
    pub fn into_share_set(self) -> Result<ShareSet> {
        let entries = self.shares.into_iter().map(|(key, entry)| RawShare {
            key,
            base: entry.base,
            value: entry.value,
        });
        Ok(ShareSet::from_entries(entries, self.keys.n, self.keys.k)?)
    }
}
