use crate::flops::{FlopAnalysis, FlopValue};
use crate::node::{ControlFlowNode, NodeId};
use crate::{Result, TraceError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A control-flow tree together with the flop analysis computed over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlopDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub precise: bool,
    pub root: ControlFlowNode,
    #[serde(default)]
    pub flops: BTreeMap<NodeId, Option<FlopValue>>,
}

impl FlopDocument {
    pub fn new(root: ControlFlowNode, analysis: &FlopAnalysis) -> Self {
        use crate::flops::FlopSource;

        Self {
            name: None,
            precise: analysis.precise(),
            root,
            flops: analysis.entries().clone(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn analysis(&self) -> FlopAnalysis {
        FlopAnalysis::from_entries(self.precise, self.flops.clone())
    }

    pub fn into_parts(self) -> (ControlFlowNode, FlopAnalysis) {
        let analysis = FlopAnalysis::from_entries(self.precise, self.flops);
        (self.root, analysis)
    }
}

pub fn load_document(path: impl AsRef<Path>) -> Result<FlopDocument> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading flop document");

    let json = fs::read_to_string(path).map_err(|source| TraceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let document = FlopDocument::from_json_str(&json)?;

    tracing::debug!(
        nodes = document.root.node_count(),
        measured = document.flops.len(),
        precise = document.precise,
        "loaded flop document"
    );
    Ok(document)
}

pub fn save_document(document: &FlopDocument, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = document.to_json_string()?;
    fs::write(path, json).map_err(|source| TraceError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "saved flop document");
    Ok(())
}
