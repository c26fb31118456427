/*! Unified interface for tracing flop counts over structured control flow.
 *
 * Single import for loading a flop document and rendering its report, plus the core tree and
 * emitter types for callers that build trees in memory.
 */

pub use floptrace_core as core;
pub use floptrace_emit as emit;

pub use floptrace_core::{
    load_document, ControlFlowNode, DebugInfo, FlopAnalysis, FlopDocument, FlopSource, FlopValue,
    Measurement, NodeId, NodeKind,
};

pub use floptrace_emit::{render_report, IndentWriter, PrinterConfig, ReportFormat, TreePrinter};

use anyhow::Result;
use std::path::Path;

pub fn trace_document(document: &FlopDocument, config: &PrinterConfig) -> Result<String> {
    let analysis = document.analysis();
    render_report(&document.root, &analysis, config)
}

pub fn trace_file(path: impl AsRef<Path>, config: &PrinterConfig) -> Result<String> {
    let document = load_document(path)?;
    trace_document(&document, config)
}
