use kiss_asm::Size;

/// Configuration for a compilation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileConfig {
    /// Name of the source, for logs (not used for IO).
    pub source_name: String,
    /// Variables declared before the source starts, in order.
    ///
    /// Each gets a symbol table entry and a zero-initialized data line ahead
    /// of the program's own declarations.
    pub predeclared: Vec<(String, Size)>,
}

impl CompileConfig {
    /// Add a predeclared variable.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, size: Size) -> Self {
        self.predeclared.push((name.into(), size));
        self
    }
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            source_name: "input.kiss".to_string(),
            predeclared: Vec::new(),
        }
    }
}
