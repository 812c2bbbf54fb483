use anyhow::Result;
use opbundle::extract_ops_with;

use crate::common::{self, CaptureSink};

#[test]
fn dedups_across_top_level_and_functions() -> Result<()> {
    let table = common::map_from_json(r#"{"MatMul": ["MatMul", "BiasAdd"]}"#)?;
    let graph = common::graph_from_json(
        r#"{
            "node": [{"op": "MatMul"}],
            "library": {
                "function": [
                    {"nodeDef": [{"op": "MatMul"}]}
                ]
            }
        }"#,
    )?;

    let mut sink = CaptureSink::default();
    let ops = extract_ops_with(&graph, &table, &mut sink);

    assert_eq!(ops, common::op_set(&["MatMul", "BiasAdd"]));
    assert!(sink.missing.is_empty());
    Ok(())
}

#[test]
fn every_function_body_is_visited() -> Result<()> {
    let table = common::map_from_json(
        r#"{"Relu": ["Relu"], "Softmax": ["Softmax"], "Tanh": ["Tanh"]}"#,
    )?;
    let graph = common::graph_from_json(
        r#"{
            "library": {
                "function": [
                    {"signature": {"name": "block_a"}, "nodeDef": [{"op": "Relu"}]},
                    {"signature": {"name": "block_b"}, "nodeDef": [{"op": "Softmax"}, {"op": "Tanh"}]}
                ]
            }
        }"#,
    )?;

    let mut sink = CaptureSink::default();
    let ops = extract_ops_with(&graph, &table, &mut sink);

    assert_eq!(ops, common::op_set(&["Relu", "Softmax", "Tanh"]));
    assert!(sink.missing.is_empty());
    Ok(())
}

#[test]
fn function_without_body_is_skipped() -> Result<()> {
    let table = common::map_from_json(r#"{"Relu": ["Relu"]}"#)?;
    let graph = common::graph_from_json(
        r#"{
            "node": [{"op": "Relu"}],
            "library": {
                "function": [
                    {"signature": {"name": "hollow"}},
                    {"signature": {"name": "nulled"}, "nodeDef": null}
                ]
            }
        }"#,
    )?;

    let mut sink = CaptureSink::default();
    let ops = extract_ops_with(&graph, &table, &mut sink);

    assert_eq!(ops, common::op_set(&["Relu"]));
    assert!(sink.missing.is_empty());
    Ok(())
}

#[test]
fn empty_function_list_is_skipped() -> Result<()> {
    let table = common::map_from_json(r#"{"Relu": ["Relu"]}"#)?;
    let graph = common::graph_from_json(r#"{"library": {"function": null}}"#)?;

    let mut sink = CaptureSink::default();
    let ops = extract_ops_with(&graph, &table, &mut sink);

    assert!(ops.is_empty());
    assert!(sink.missing.is_empty());
    Ok(())
}
