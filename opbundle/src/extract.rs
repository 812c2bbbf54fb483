//! Graph traversal and kernel-to-op resolution.
//!
//! The walk visits the top-level nodes and then every function body in the
//! library, resolves each node's kernel identifier through the table, and
//! collects the resulting op names into one deduplicated set. It is a pure
//! single pass: no I/O, no retries, and no failure mode of its own.

use std::collections::HashSet;

use crate::graph::{GraphDef, NodeDef};
use crate::kernel_map::KernelOpMap;
use crate::warning;

/// Receives diagnostics raised during extraction.
///
/// A kernel with no table entry is reported here and skipped; extraction
/// itself never fails. The default sink logs through the crate's logging
/// subsystem, and test suites inject their own to assert on reports.
pub trait DiagnosticSink {
    /// Called once per node whose kernel identifier has no table entry.
    fn missing_kernel(&mut self, kernel: &str);
}

/// Default sink: routes missing-kernel reports to the operator log.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn missing_kernel(&mut self, kernel: &str) {
        warning!("no op mapping found for kernel {}", kernel);
    }
}

/// Collect the distinct op names `graph` needs, logging unmapped kernels.
pub fn extract_ops(graph: &GraphDef, map: &KernelOpMap) -> HashSet<String> {
    extract_ops_with(graph, map, &mut LogSink)
}

/// Collect the distinct op names `graph` needs, reporting unmapped kernels
/// to `sink`.
///
/// Absent or `null` collections contribute nothing, at every level. The
/// inputs are never mutated, and two calls on the same inputs produce equal
/// sets.
pub fn extract_ops_with(
    graph: &GraphDef,
    map: &KernelOpMap,
    sink: &mut dyn DiagnosticSink,
) -> HashSet<String> {
    let mut ops = HashSet::new();

    if let Some(nodes) = &graph.node {
        for node in nodes {
            resolve_node(node, map, &mut ops, sink);
        }
    }

    if let Some(library) = &graph.library {
        if let Some(functions) = &library.function {
            for function in functions {
                if let Some(nodes) = &function.node_def {
                    for node in nodes {
                        resolve_node(node, map, &mut ops, sink);
                    }
                }
            }
        }
    }

    ops
}

// A node without an op field resolves as the empty kernel name.
fn resolve_node(
    node: &NodeDef,
    map: &KernelOpMap,
    ops: &mut HashSet<String>,
    sink: &mut dyn DiagnosticSink,
) {
    let kernel = node.op.as_deref().unwrap_or("");
    match map.ops_for(kernel) {
        Some(mapped) => ops.extend(mapped.iter().cloned()),
        None => sink.missing_kernel(kernel),
    }
}
