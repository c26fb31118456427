/*! Structured control-flow trees carrying a per-node flop annotation.
 *
 * The tree mirrors the structured control flow of an SDFG: sequences, conditionals, loops and leaf
 * statements. A flop analysis is an external side-table keyed by node identity; this crate models
 * both and knows how to load them from a JSON document.
 */

pub mod flops;
pub mod node;
pub mod persist;

pub use flops::{FlopAnalysis, FlopSource, FlopValue, Measurement};
pub use node::{
    ControlFlowNode, DebugInfo, IfElseBranch, NodeId, NodeKind, SequenceEntry, Transition, Visit,
    Walk,
};
pub use persist::{load_document, save_document, FlopDocument};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Could not open file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not write file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed flop document: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TraceError>;
