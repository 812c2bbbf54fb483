//! Data types for the serialized graph.
//!
//! These mirror the JSON layout of a converted model's topology. Every
//! collection is optional: an absent or `null` collection decodes to `None`
//! and means "no entries". Fields the extraction does not consume are either
//! carried as opaque values or ignored by the decoder.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level serialized computation graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphDef {
    pub node: Option<Vec<NodeDef>>,
    pub library: Option<FunctionLibrary>,
    pub versions: Option<Value>,
}

/// Single node of a graph or function body.
///
/// `op` holds the kernel identifier the node executes under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeDef {
    pub name: Option<String>,
    pub op: Option<String>,
    pub input: Vec<String>,
    pub attr: Option<Value>,
}

/// Library of reusable function definitions referenced from the main graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionLibrary {
    pub function: Option<Vec<FunctionDef>>,
}

/// Named sub-graph with its own node collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionDef {
    pub signature: Option<FunctionSignature>,
    pub node_def: Option<Vec<NodeDef>>,
}

/// Identifying part of a function definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionSignature {
    pub name: Option<String>,
}
