use floptrace_core::{
    load_document, ControlFlowNode, FlopAnalysis, FlopDocument, FlopSource, FlopValue,
    Measurement, NodeId, TraceError,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn nested_loops(depth: usize) -> String {
    let mut json = String::from(r#"{ "type": "Block", "element_id": 0 }"#);
    for id in 1..=depth {
        json = format!(r#"{{ "type": "For", "element_id": {}, "root": {} }}"#, id, json);
    }
    format!(r#"{{ "root": {} }}"#, json)
}

#[test]
fn test_load_document_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "precise": false,
            "root": {{
                "type": "IfElse",
                "element_id": 0,
                "branches": [
                    {{ "condition": "x > 0", "body": {{ "type": "Sequence", "element_id": 1, "children": [] }} }},
                    {{ "condition": "x <= 0", "body": {{ "type": "Sequence", "element_id": 2, "children": [] }} }}
                ]
            }},
            "flops": {{ "0": 1.5 }}
        }}"#
    )
    .unwrap();

    let document = load_document(file.path()).unwrap();
    let (root, analysis) = document.into_parts();

    assert_eq!(root.kind_name(), "IfElse");
    assert_eq!(root.children().len(), 2);
    assert!(!analysis.precise());
    assert_eq!(
        analysis.measurement(NodeId(0)),
        Measurement::Value(&FlopValue::Real(1.5))
    );
    assert!(!analysis.measurement(NodeId(1)).is_measured());
}

#[test]
fn test_moderately_nested_document_loads() {
    let document = FlopDocument::from_json_str(&nested_loops(40)).unwrap();
    assert_eq!(document.root.node_count(), 41);
    assert_eq!(document.root.walk().last().map(|v| v.depth), Some(40));
}

#[test]
fn test_pathologically_nested_document_is_rejected() {
    let err = FlopDocument::from_json_str(&nested_loops(500)).unwrap_err();
    assert!(matches!(err, TraceError::Malformed(_)));
}

#[test]
fn test_document_from_tree_and_analysis() {
    let root = ControlFlowNode::while_loop(0, ControlFlowNode::continue_node(1))
        .with_debug_info("loop.c", 10, 12);
    let mut analysis = FlopAnalysis::new(true);
    analysis.record(0, "N").record_null(1);

    let document = FlopDocument::new(root.clone(), &analysis);
    let reparsed = FlopDocument::from_json_str(&document.to_json_string().unwrap()).unwrap();

    assert_eq!(reparsed.root, root);
    assert_eq!(reparsed.analysis(), analysis);
}
