//! Where rendered reports go.

/// Destination for report lines.
///
/// Implementors only decide where a finished line ends up; the provided
/// methods fix how each kind of line looks, so every destination renders a
/// report identically.
pub trait Output {
    /// Emit one line of regular output.
    fn emit(&mut self, line: String);

    /// Emit one line of diagnostic output.
    fn emit_warning(&mut self, line: String) {
        self.emit(line);
    }

    fn section(&mut self, name: &str) {
        self.emit(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.emit(format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.emit(format!("  - {}", text));
    }

    /// A file that was created.
    fn added_item(&mut self, text: &str) {
        self.emit(format!("  + {}", text));
    }

    fn renamed_item(&mut self, from: &str, to: &str) {
        self.emit(format!("  {} -> {}", from, to));
    }

    fn warning(&mut self, msg: &str) {
        self.emit_warning(format!("warning: {}", msg));
    }

    /// Labelled rule between blocks, such as previewed files.
    fn divider(&mut self, label: &str) {
        self.emit(format!("── {} ──", label));
    }

    /// Text emitted as is, one line per line.
    fn preformatted(&mut self, text: &str) {
        for line in text.lines() {
            self.emit(line.to_string());
        }
    }

    fn newline(&mut self) {
        self.emit(String::new());
    }
}

/// Something the CLI prints after a command.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints reports to stdout, warnings to stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn emit(&mut self, line: String) {
        println!("{}", line);
    }

    fn emit_warning(&mut self, line: String) {
        eprintln!("{}", line);
    }
}

/// Collects rendered lines so tests can assert on them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl BufferOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for BufferOutput {
    fn emit(&mut self, line: String) {
        self.lines.push(line);
    }
}
