/// Output buffer that accumulates generated Swift lines.
///
/// Every finished line carries its `\n` so the result can be spliced into a
/// [`LineBuffer`](crate::LineBuffer) as is.
pub struct Output {
    lines: Vec<String>,
    current_line: String,
}

impl Output {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            current_line: String::new(),
        }
    }

    /// Add text to the current line
    pub fn push(&mut self, text: &str) {
        self.current_line.push_str(text);
    }

    /// Terminate the current line
    pub fn newline(&mut self) {
        self.current_line.push('\n');
        self.lines.push(std::mem::take(&mut self.current_line));
    }

    pub fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.current_line.push('\t');
        }
    }

    /// Emit one full line at the given indentation level
    pub fn line(&mut self, level: usize, text: &str) {
        self.indent(level);
        self.push(text);
        self.newline();
    }

    pub fn blank(&mut self) {
        self.newline();
    }

    /// Emit a bracketed list with one entry per line.
    ///
    /// The first entry follows `open`; later entries are prefixed with
    /// `continuation` so they align under the first one.
    pub fn list(&mut self, level: usize, open: &str, entries: &[String], continuation: &str, close: &str) {
        let last = entries.len().saturating_sub(1);
        for (index, entry) in entries.iter().enumerate() {
            self.indent(level);
            self.push(if index == 0 { open } else { continuation });
            self.push(entry);
            self.push(if index == last { close } else { "," });
            self.newline();
        }
    }

    /// Finish and return the generated lines
    pub fn finish(mut self) -> Vec<String> {
        if !self.current_line.is_empty() {
            self.newline();
        }
        self.lines
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
