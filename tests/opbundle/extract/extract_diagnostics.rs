use anyhow::Result;
use opbundle::extract_ops_with;

use crate::common::{self, CaptureSink};

#[test]
fn unknown_kernel_reports_and_continues() -> Result<()> {
    let table = common::map_from_json("{}")?;
    let graph = common::graph_from_json(r#"{"node": [{"op": "Unknown"}]}"#)?;

    let mut sink = CaptureSink::default();
    let ops = extract_ops_with(&graph, &table, &mut sink);

    assert!(ops.is_empty());
    assert_eq!(sink.missing, vec!["Unknown".to_string()]);
    Ok(())
}

#[test]
fn known_kernels_still_resolve_after_a_miss() -> Result<()> {
    let table = common::map_from_json(r#"{"Add": ["Add"], "Mul": ["Mul"]}"#)?;
    let graph = common::graph_from_json(
        r#"{"node": [{"op": "Gone"}, {"op": "Add"}, {"op": "Mul"}]}"#,
    )?;

    let mut sink = CaptureSink::default();
    let ops = extract_ops_with(&graph, &table, &mut sink);

    assert_eq!(ops, common::op_set(&["Add", "Mul"]));
    assert_eq!(sink.missing, vec!["Gone".to_string()]);
    Ok(())
}

#[test]
fn each_unmapped_node_reports_once() -> Result<()> {
    let table = common::map_from_json("{}")?;
    let graph = common::graph_from_json(
        r#"{
            "node": [{"op": "Gone"}],
            "library": {"function": [{"nodeDef": [{"op": "Gone"}]}]}
        }"#,
    )?;

    let mut sink = CaptureSink::default();
    let ops = extract_ops_with(&graph, &table, &mut sink);

    assert!(ops.is_empty());
    assert_eq!(sink.missing, vec!["Gone".to_string(), "Gone".to_string()]);
    Ok(())
}

#[test]
fn node_without_op_field_reports_empty_key() -> Result<()> {
    let table = common::map_from_json(r#"{"Add": ["Add"]}"#)?;
    let graph = common::graph_from_json(r#"{"node": [{"name": "orphan"}, {"op": "Add"}]}"#)?;

    let mut sink = CaptureSink::default();
    let ops = extract_ops_with(&graph, &table, &mut sink);

    assert_eq!(ops, common::op_set(&["Add"]));
    assert_eq!(sink.missing, vec![String::new()]);
    Ok(())
}
