use anyhow::Result;
use serde_json::Value;

use crate::graph::GraphDef;
use crate::model_loader::ModelArtifacts;

pub struct GraphSerialize;

impl GraphSerialize {
    pub fn json(graph: &GraphDef) -> Result<Value> {
        Ok(serde_json::to_value(graph)?)
    }
}

pub struct GraphDeserialize;

impl GraphDeserialize {
    pub fn from_json(value: Value) -> Result<GraphDef> {
        Ok(serde_json::from_value(value)?)
    }

    /// Decode a graph from JSON text.
    pub fn from_str(json: &str) -> Result<GraphDef> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a full model document and pull out its topology.
    ///
    /// A model without a topology yields an empty graph.
    pub fn from_model(value: Value) -> Result<GraphDef> {
        let artifacts: ModelArtifacts = serde_json::from_value(value)?;
        Ok(artifacts.model_topology.unwrap_or_default())
    }
}
