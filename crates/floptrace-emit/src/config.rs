use crate::output::ReportFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterConfig {
    /// Spaces added per nesting level.
    pub indent_step: usize,
    pub use_colors: bool,
    pub include_debug_info: bool,
    pub format: ReportFormat,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent_step: 2,
            use_colors: false,
            include_debug_info: true,
            format: ReportFormat::Text,
        }
    }
}

impl PrinterConfig {
    pub fn with_indent_step(mut self, indent_step: usize) -> Self {
        self.indent_step = indent_step;
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn with_debug_info(mut self, include_debug_info: bool) -> Self {
        self.include_debug_info = include_debug_info;
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrinterConfig::default();
        assert_eq!(config.indent_step, 2);
        assert!(!config.use_colors);
        assert!(config.include_debug_info);
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn test_config_from_json() {
        let config: PrinterConfig = serde_json::from_str(
            r#"{ "indent_step": 4, "use_colors": true, "include_debug_info": false, "format": "Json" }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            PrinterConfig::default()
                .with_indent_step(4)
                .with_colors(true)
                .with_debug_info(false)
                .with_format(ReportFormat::Json)
        );
    }
}
