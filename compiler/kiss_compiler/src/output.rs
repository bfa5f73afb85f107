//! Result types and the in-memory sink.

use kiss_codegen::Output;
use kiss_diagnostic::CompileError;

/// Collects everything written to it, including error messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferOutput {
    text: String,
    halts: u32,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.text.lines()
    }

    /// Number of times `halt` was called.
    pub fn halts(&self) -> u32 {
        self.halts
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl Output for BufferOutput {
    fn write(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn write_line(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    fn halt(&mut self) {
        self.halts += 1;
    }
}

/// Result of compiling KISS source to program text.
#[derive(Clone, Debug)]
pub struct CompileOutput {
    /// Whether compilation finished without error.
    pub success: bool,
    /// Everything written: the program text, or the code emitted before the
    /// error followed by the error message.
    pub text: String,
    /// The error that stopped compilation.
    pub error: Option<CompileError>,
}
