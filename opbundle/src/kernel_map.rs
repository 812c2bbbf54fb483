use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

use crate::logging;
use crate::trace;

static BUILTIN: Lazy<KernelOpMap> = Lazy::new(|| {
    KernelOpMap::from_json(include_str!("../../res/kernel2op.json"))
        .expect("failed to decode builtin kernel2op table")
});

/// Immutable mapping from kernel identifier to the op names it requires.
///
/// Loaded once per invocation and treated as read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct KernelOpMap {
    entries: HashMap<String, Vec<String>>,
}

impl KernelOpMap {
    /// Decode a table from a JSON object of kernel name to op-name list.
    ///
    /// Any other document shape is rejected; a table that is not a mapping
    /// is a caller error, not a recoverable condition.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, Vec<String>> = serde_json::from_str(json)
            .context("kernel2op table is not a string -> [string] mapping")?;
        Ok(Self { entries })
    }

    /// Read and decode a table file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let txt = fs::read_to_string(path)
            .with_context(|| format!("read kernel2op table {}", path.display()))?;
        let map = Self::from_json(&txt)
            .with_context(|| format!("decode kernel2op table {}", path.display()))?;
        trace!("loaded {} kernel mappings from {}", map.len(), path.display());
        if logging::trace_full_enabled() {
            for kernel in map.kernels() {
                trace!("  kernel {} -> {:?}", kernel, map.ops_for(kernel).unwrap_or(&[]));
            }
        }
        Ok(map)
    }

    /// The table shipped with the crate.
    pub fn builtin() -> &'static KernelOpMap {
        &BUILTIN
    }

    /// Ops required by `kernel`.
    ///
    /// `None` means the kernel is unknown to the table; an empty slice is a
    /// valid mapping to zero ops.
    pub fn ops_for(&self, kernel: &str) -> Option<&[String]> {
        self.entries.get(kernel).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Kernel identifiers known to the table, in no particular order.
    pub fn kernels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
