/// Text buffer with stack-style indentation.
///
/// The current indent is applied when a new non-empty line starts, so callers bracket nested
/// output with [`increase_indent`](Self::increase_indent) and
/// [`decrease_indent`](Self::decrease_indent) and never pad lines themselves.
#[derive(Debug, Clone)]
pub struct IndentWriter {
    buffer: String,
    indent_level: usize,
    at_line_start: bool,
}

impl IndentWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    pub fn write(&mut self, text: &str) {
        for piece in text.split_inclusive('\n') {
            if self.at_line_start && piece != "\n" {
                self.buffer
                    .extend(std::iter::repeat(' ').take(self.indent_level));
            }
            self.buffer.push_str(piece);
            self.at_line_start = piece.ends_with('\n');
        }
    }

    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.write("\n");
    }

    pub fn increase_indent(&mut self, n: usize) {
        self.indent_level = match self.indent_level.checked_add(n) {
            Some(level) => level,
            None => panic!(
                "indent overflow: cannot add {} to level {}",
                n, self.indent_level
            ),
        };
    }

    pub fn decrease_indent(&mut self, n: usize) {
        assert!(
            n <= self.indent_level,
            "indent underflow: cannot remove {} from level {}",
            n,
            self.indent_level
        );
        self.indent_level -= n;
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

impl Default for IndentWriter {
    fn default() -> Self {
        Self::new()
    }
}
