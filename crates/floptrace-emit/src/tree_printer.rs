use crate::config::PrinterConfig;
use crate::output::precision_label;
use crate::writer::IndentWriter;
use colored::Colorize;
use floptrace_core::{ControlFlowNode, FlopSource, Measurement, NodeKind};

enum Step<'a> {
    Node(&'a ControlFlowNode),
    Condition(&'a str),
    Indent,
    Dedent,
}

/// Prints a control-flow tree one node per line, each followed by its flop count.
///
/// Children of a loop or sequence sit one indent step below their parent. An `IfElse` prints each
/// branch condition one step below itself and the branch body one step below the condition.
#[derive(Debug, Clone, Default)]
pub struct TreePrinter {
    config: PrinterConfig,
}

impl TreePrinter {
    pub fn new(config: PrinterConfig) -> Self {
        Self { config }
    }

    /// Precision header followed by the whole tree.
    pub fn print<S: FlopSource + ?Sized>(&self, root: &ControlFlowNode, source: &S) -> String {
        tracing::debug!(
            root = %root.id,
            precise = source.precise(),
            "printing flop report"
        );

        let mut writer = IndentWriter::new();
        let header = precision_label(source.precise());
        if self.config.use_colors {
            writer.write_line(&header.bold().to_string());
        } else {
            writer.write_line(header);
        }
        self.print_tree(&mut writer, root, source);
        writer.finish()
    }

    pub fn print_tree<S: FlopSource + ?Sized>(
        &self,
        writer: &mut IndentWriter,
        root: &ControlFlowNode,
        source: &S,
    ) {
        let step = self.config.indent_step;
        let mut stack = vec![Step::Node(root)];

        while let Some(next) = stack.pop() {
            match next {
                Step::Node(node) => {
                    tracing::trace!(id = %node.id, kind = node.kind_name(), "emit node");
                    writer.write_line(&self.node_line(node, source));
                    schedule_children(node, &mut stack);
                }
                Step::Condition(condition) => writer.write_line(condition),
                Step::Indent => writer.increase_indent(step),
                Step::Dedent => writer.decrease_indent(step),
            }
        }
    }

    /// `<Kind> [<file>:<start>-<end> ]<flops>`, without indentation or line break.
    pub fn node_line<S: FlopSource + ?Sized>(&self, node: &ControlFlowNode, source: &S) -> String {
        let mut line = format!("{} ", node.kind_name());
        if self.config.include_debug_info {
            if let Some(info) = &node.debug_info {
                line.push_str(&format!("{} ", info));
            }
        }
        line.push_str(&self.format_measurement(source.measurement(node.id)));
        line
    }

    fn format_measurement(&self, measurement: Measurement<'_>) -> String {
        match (measurement, self.config.use_colors) {
            (Measurement::NotMeasured, false) => "NOT MEASURED".to_string(),
            (Measurement::NotMeasured, true) => "NOT MEASURED".yellow().to_string(),
            (Measurement::Null, false) => "NULL".to_string(),
            (Measurement::Null, true) => "NULL".red().to_string(),
            (Measurement::Value(value), _) => value.to_string(),
        }
    }
}

// Pushed in reverse so that popping replays increase, children, decrease in order.
fn schedule_children<'a>(node: &'a ControlFlowNode, stack: &mut Vec<Step<'a>>) {
    match &node.kind {
        NodeKind::Block | NodeKind::Return | NodeKind::Break | NodeKind::Continue => {}
        NodeKind::For { root } | NodeKind::While { root } | NodeKind::Map { root } => {
            stack.extend([Step::Dedent, Step::Node(&**root), Step::Indent]);
        }
        NodeKind::Sequence { children } => {
            stack.push(Step::Dedent);
            stack.extend(children.iter().rev().map(|entry| Step::Node(&entry.node)));
            stack.push(Step::Indent);
        }
        NodeKind::IfElse { branches } => {
            stack.push(Step::Dedent);
            for branch in branches.iter().rev() {
                stack.extend([
                    Step::Dedent,
                    Step::Node(&branch.body),
                    Step::Indent,
                    Step::Condition(&branch.condition),
                ]);
            }
            stack.push(Step::Indent);
        }
    }
}
