//! Flop annotations attached to control-flow nodes.
//!
//! The analysis that produces these values is an external collaborator; here they are only stored
//! and looked up. A node is either not measured, measured with an indeterminate result, or measured
//! with a concrete or symbolic count.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A flop count as produced by the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlopValue {
    Integer(i64),
    Real(f64),
    Symbolic(String),
}

impl fmt::Display for FlopValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlopValue::Integer(n) => write!(f, "{}", n),
            FlopValue::Real(x) => write!(f, "{}", x),
            FlopValue::Symbolic(expr) => f.write_str(expr),
        }
    }
}

impl From<i64> for FlopValue {
    fn from(n: i64) -> Self {
        FlopValue::Integer(n)
    }
}

impl From<i32> for FlopValue {
    fn from(n: i32) -> Self {
        FlopValue::Integer(n.into())
    }
}

impl From<f64> for FlopValue {
    fn from(x: f64) -> Self {
        FlopValue::Real(x)
    }
}

impl From<&str> for FlopValue {
    fn from(expr: &str) -> Self {
        FlopValue::Symbolic(expr.to_string())
    }
}

impl From<String> for FlopValue {
    fn from(expr: String) -> Self {
        FlopValue::Symbolic(expr)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement<'a> {
    NotMeasured,
    Null,
    Value(&'a FlopValue),
}

impl Measurement<'_> {
    pub fn is_measured(&self) -> bool {
        !matches!(self, Measurement::NotMeasured)
    }
}

/// Read-only view of an analysis result.
pub trait FlopSource {
    /// Whether every value is exact rather than an approximation.
    fn precise(&self) -> bool;

    fn measurement(&self, id: NodeId) -> Measurement<'_>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlopAnalysis {
    precise: bool,
    flops: BTreeMap<NodeId, Option<FlopValue>>,
}

impl FlopAnalysis {
    pub fn new(precise: bool) -> Self {
        Self {
            precise,
            flops: BTreeMap::new(),
        }
    }

    pub fn from_entries(precise: bool, flops: BTreeMap<NodeId, Option<FlopValue>>) -> Self {
        Self { precise, flops }
    }

    pub fn record(&mut self, id: u32, value: impl Into<FlopValue>) -> &mut Self {
        self.flops.insert(NodeId(id), Some(value.into()));
        self
    }

    pub fn record_null(&mut self, id: u32) -> &mut Self {
        self.flops.insert(NodeId(id), None);
        self
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.flops.contains_key(&id)
    }

    /// `None` when the node was never measured, `Some(None)` when it was measured as null.
    pub fn get(&self, id: NodeId) -> Option<Option<&FlopValue>> {
        self.flops.get(&id).map(Option::as_ref)
    }

    pub fn entries(&self) -> &BTreeMap<NodeId, Option<FlopValue>> {
        &self.flops
    }

    pub fn len(&self) -> usize {
        self.flops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flops.is_empty()
    }
}

impl FlopSource for FlopAnalysis {
    fn precise(&self) -> bool {
        self.precise
    }

    fn measurement(&self, id: NodeId) -> Measurement<'_> {
        match self.get(id) {
            None => Measurement::NotMeasured,
            Some(None) => Measurement::Null,
            Some(Some(value)) => Measurement::Value(value),
        }
    }
}
