use crate::config::PrinterConfig;
use crate::tree_printer::TreePrinter;
use anyhow::Result;
use floptrace_core::{ControlFlowNode, DebugInfo, FlopSource, FlopValue, Measurement, NodeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn precision_label(precise: bool) -> &'static str {
    if precise {
        "Precise"
    } else {
        "Approximation"
    }
}

/// Renders the report in the configured format. Text output ends with the last node's line
/// break; JSON output has no trailing newline.
pub fn render_report<S: FlopSource + ?Sized>(
    root: &ControlFlowNode,
    source: &S,
    config: &PrinterConfig,
) -> Result<String> {
    match config.format {
        ReportFormat::Text => Ok(TreePrinter::new(config.clone()).print(root, source)),
        ReportFormat::Json => {
            let report = JsonReport::collect(root, source, config.include_debug_info);
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    precision: &'static str,
    nodes: Vec<JsonNode<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonNode<'a> {
    depth: usize,
    id: NodeId,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug_info: Option<&'a DebugInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<&'a str>,
    flops: JsonFlops<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
enum JsonFlops<'a> {
    NotMeasured,
    Null,
    Value { value: &'a FlopValue },
}

impl<'a> JsonReport<'a> {
    fn collect<S: FlopSource + ?Sized>(
        root: &'a ControlFlowNode,
        source: &'a S,
        include_debug_info: bool,
    ) -> Self {
        let nodes = root
            .walk()
            .map(move |visit| JsonNode {
                depth: visit.depth,
                id: visit.node.id,
                kind: visit.node.kind_name(),
                debug_info: visit
                    .node
                    .debug_info
                    .as_ref()
                    .filter(|_| include_debug_info),
                condition: visit.condition,
                flops: match source.measurement(visit.node.id) {
                    Measurement::NotMeasured => JsonFlops::NotMeasured,
                    Measurement::Null => JsonFlops::Null,
                    Measurement::Value(value) => JsonFlops::Value { value },
                },
            })
            .collect();

        Self {
            precision: precision_label(source.precise()),
            nodes,
        }
    }
}
