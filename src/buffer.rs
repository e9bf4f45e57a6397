/// Ordered, mutable sequence of source lines handed over by the host.
///
/// Each line keeps its own terminator (`\n` or `\r\n`); only the last line of
/// a file may be unterminated. Stages read the whole sequence, compute a new
/// one and swap it in with [`LineBuffer::replace`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split text into lines, keeping terminators attached.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Replace the full contents.
    pub fn replace(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    pub fn insert(&mut self, index: usize, line: impl Into<String>) {
        self.lines.insert(index, line.into());
    }

    pub fn remove(&mut self, index: usize) -> String {
        self.lines.remove(index)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Join the lines back into file text.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        let count = self.lines.len();
        for (index, line) in self.lines.iter().enumerate() {
            text.push_str(line);
            if index + 1 < count && !line.ends_with('\n') {
                text.push('\n');
            }
        }
        text
    }
}

impl From<Vec<String>> for LineBuffer {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

const CRLF: &str = "\r\n";

/// Terminator of the first terminated line, `\n` when there is none.
pub(crate) fn line_ending(lines: &[String]) -> &'static str {
    match lines.iter().find(|line| line.ends_with('\n')) {
        Some(line) if line.ends_with(CRLF) => CRLF,
        _ => "\n",
    }
}

fn with_ending(mut line: String, ending: &str) -> String {
    if ending == CRLF && line.ends_with('\n') && !line.ends_with(CRLF) {
        line.pop();
        line.push_str(CRLF);
    }
    line
}

/// Insert generated lines at `at`, rewriting their `\n` terminators to the
/// ones the buffer already uses.
pub(crate) fn splice(lines: &mut Vec<String>, at: usize, block: Vec<String>) {
    let ending = line_ending(lines);
    let tail = lines.split_off(at);
    lines.extend(block.into_iter().map(|line| with_ending(line, ending)));
    lines.extend(tail);
}

/// Append a generated block, terminating an unterminated last line first.
pub(crate) fn append_block(lines: &mut Vec<String>, block: Vec<String>) {
    let ending = line_ending(lines);
    if let Some(last) = lines.last_mut() {
        if !last.ends_with('\n') {
            last.push_str(ending);
        }
    }
    let at = lines.len();
    splice(lines, at, block);
}
