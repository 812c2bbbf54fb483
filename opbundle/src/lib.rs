//! Op extraction for minimal runtime bundles.
//!
//! A serialized model graph names the kernels it executes, and a runtime
//! bundle only has to carry the ops those kernels resolve to. This crate
//! decodes model files, resolves each kernel identifier through a
//! kernel-to-ops table, and hands the deduplicated op set to the bundler.
//!
//! ## Modules
//! - `extract`: graph traversal and kernel-to-op resolution.
//! - `kernel_map`: the kernel-to-ops lookup table and its loaders.
//! - `model_loader`: decode a model file into graph plus metadata.
//! - `graph`: data types for the serialized graph.
//!
//! ## Usage
//! Open a model and a table, then call `extract_ops` on the model's graph.

mod extract;
mod graph;
#[path = "graph/serde.rs"]
mod graph_serde;
mod kernel_map;
pub mod logging;
mod model_loader;

pub use extract::{extract_ops, extract_ops_with, DiagnosticSink, LogSink};
pub use graph::{FunctionDef, FunctionLibrary, FunctionSignature, GraphDef, NodeDef};
pub use graph_serde::{GraphDeserialize, GraphSerialize};
pub use kernel_map::KernelOpMap;
pub use model_loader::{ModelArtifacts, ModelLoader};
