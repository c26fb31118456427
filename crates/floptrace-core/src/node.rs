use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source range a node was lowered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub filename: String,
    pub start_line: u32,
    pub end_line: u32,
}

impl DebugInfo {
    pub fn new(filename: impl Into<String>, start_line: u32, end_line: u32) -> Self {
        Self {
            filename: filename.into(),
            start_line,
            end_line,
        }
    }
}

impl fmt::Display for DebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.filename, self.start_line, self.end_line)
    }
}

/// Symbol assignments performed when control leaves a sequence entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    #[serde(default, rename = "element_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub assignments: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceEntry {
    pub node: ControlFlowNode,
    #[serde(default)]
    pub transition: Transition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfElseBranch {
    pub condition: String,
    pub body: ControlFlowNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    Block,
    Sequence { children: Vec<SequenceEntry> },
    IfElse { branches: Vec<IfElseBranch> },
    For { root: Box<ControlFlowNode> },
    While { root: Box<ControlFlowNode> },
    Map { root: Box<ControlFlowNode> },
    Return,
    Break,
    Continue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlFlowNode {
    #[serde(rename = "element_id")]
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<DebugInfo>,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl ControlFlowNode {
    pub fn new(id: u32, kind: NodeKind) -> Self {
        Self {
            id: NodeId(id),
            debug_info: None,
            kind,
        }
    }

    pub fn block(id: u32) -> Self {
        Self::new(id, NodeKind::Block)
    }

    pub fn sequence(id: u32, children: Vec<ControlFlowNode>) -> Self {
        let children = children
            .into_iter()
            .map(|node| SequenceEntry {
                node,
                transition: Transition::default(),
            })
            .collect();
        Self::new(id, NodeKind::Sequence { children })
    }

    pub fn if_else<S: Into<String>>(id: u32, branches: Vec<(S, ControlFlowNode)>) -> Self {
        let branches = branches
            .into_iter()
            .map(|(condition, body)| IfElseBranch {
                condition: condition.into(),
                body,
            })
            .collect();
        Self::new(id, NodeKind::IfElse { branches })
    }

    pub fn for_loop(id: u32, root: ControlFlowNode) -> Self {
        Self::new(
            id,
            NodeKind::For {
                root: Box::new(root),
            },
        )
    }

    pub fn while_loop(id: u32, root: ControlFlowNode) -> Self {
        Self::new(
            id,
            NodeKind::While {
                root: Box::new(root),
            },
        )
    }

    pub fn map(id: u32, root: ControlFlowNode) -> Self {
        Self::new(
            id,
            NodeKind::Map {
                root: Box::new(root),
            },
        )
    }

    pub fn return_node(id: u32) -> Self {
        Self::new(id, NodeKind::Return)
    }

    pub fn break_node(id: u32) -> Self {
        Self::new(id, NodeKind::Break)
    }

    pub fn continue_node(id: u32) -> Self {
        Self::new(id, NodeKind::Continue)
    }

    pub fn with_debug_info(mut self, filename: impl Into<String>, start: u32, end: u32) -> Self {
        self.debug_info = Some(DebugInfo::new(filename, start, end));
        self
    }

    /// The literal tag this node prints as.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Block => "Block",
            NodeKind::Sequence { .. } => "Sequence",
            NodeKind::IfElse { .. } => "IfElse",
            NodeKind::For { .. } => "For",
            NodeKind::While { .. } => "While",
            NodeKind::Map { .. } => "Map",
            NodeKind::Return => "Return",
            NodeKind::Break => "Break",
            NodeKind::Continue => "Continue",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Block | NodeKind::Return | NodeKind::Break | NodeKind::Continue
        )
    }

    /// Direct children in print order. Branch bodies stand in for an `IfElse`'s children.
    pub fn children(&self) -> Vec<&ControlFlowNode> {
        match &self.kind {
            NodeKind::Block | NodeKind::Return | NodeKind::Break | NodeKind::Continue => {
                Vec::new()
            }
            NodeKind::For { root } | NodeKind::While { root } | NodeKind::Map { root } => {
                vec![root.as_ref()]
            }
            NodeKind::Sequence { children } => children.iter().map(|entry| &entry.node).collect(),
            NodeKind::IfElse { branches } => branches.iter().map(|branch| &branch.body).collect(),
        }
    }

    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![Visit {
                node: self,
                depth: 0,
                condition: None,
            }],
        }
    }

    pub fn node_count(&self) -> usize {
        self.walk().count()
    }
}

/// One node reached by [`Walk`], with its number of ancestors and, for branch bodies, the
/// condition guarding it.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub node: &'a ControlFlowNode,
    pub depth: usize,
    pub condition: Option<&'a str>,
}

/// Pre-order traversal driven by an explicit stack.
pub struct Walk<'a> {
    stack: Vec<Visit<'a>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        let depth = visit.depth + 1;
        match &visit.node.kind {
            NodeKind::IfElse { branches } => {
                self.stack.extend(branches.iter().rev().map(|branch| Visit {
                    node: &branch.body,
                    depth,
                    condition: Some(branch.condition.as_str()),
                }));
            }
            _ => {
                self.stack
                    .extend(visit.node.children().into_iter().rev().map(|node| Visit {
                        node,
                        depth,
                        condition: None,
                    }));
            }
        }
        Some(visit)
    }
}
