use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::graph::GraphDef;
use crate::trace;

/// Decoded model file: the graph topology plus its packaging metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelArtifacts {
    pub format: Option<String>,
    pub generated_by: Option<String>,
    pub converted_by: Option<String>,
    pub model_topology: Option<GraphDef>,
    pub weights_manifest: Option<Value>,
    pub signature: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct ModelLoader {
    path: PathBuf,
    artifacts: ModelArtifacts,
    graph: GraphDef,
}

impl ModelLoader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let txt = fs::read_to_string(&path)
            .with_context(|| format!("read model file {}", path.display()))?;
        let artifacts: ModelArtifacts = serde_json::from_str(&txt)
            .with_context(|| format!("decode model file {}", path.display()))?;
        // A model without a topology behaves as an empty graph.
        let graph = artifacts.model_topology.clone().unwrap_or_default();
        trace!(
            "loaded model {} ({} top-level nodes)",
            path.display(),
            graph.node.as_ref().map_or(0, Vec::len)
        );
        Ok(Self {
            path,
            artifacts,
            graph,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn artifacts(&self) -> &ModelArtifacts {
        &self.artifacts
    }

    pub fn graph(&self) -> &GraphDef {
        &self.graph
    }
}
