/*! Turn a flop-annotated control-flow tree into a readable report.
 *
 * Every node gets one line with its kind, source range and flop count, nested under its parent by
 * indentation. The same walk can also be emitted as JSON for tools that post-process the numbers.
 */

pub mod config;
pub mod output;
pub mod tree_printer;
pub mod writer;

pub use config::PrinterConfig;
pub use output::{precision_label, render_report, ReportFormat};
pub use tree_printer::TreePrinter;
pub use writer::IndentWriter;
