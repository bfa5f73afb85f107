//! One compilation: predeclared symbols, then the program.

use kiss_codegen::{CodeGen, Output};
use kiss_diagnostic::{CompileResult, Location};
use kiss_lexer::{CharSource, StrSource};
use kiss_parse::{Parser, SymbolKind, SymbolTable};
use tracing::debug;

use crate::{BufferOutput, CompileConfig, CompileOutput};

/// Compiles programs one at a time.
///
/// The symbol table is reset at the start of every compilation, so a
/// `Compiler` can be reused.
pub struct Compiler {
    config: CompileConfig,
    symbols: SymbolTable,
}

impl Compiler {
    pub fn new(config: CompileConfig) -> Self {
        Compiler {
            config,
            symbols: SymbolTable::new(),
        }
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Names declared by the last compilation if it succeeded; empty after a
    /// failed one.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Compile `source`, writing program text to `out`.
    ///
    /// On error, the rendered message is written to `out`, `out.halt()` is
    /// called once and the error is returned. Whatever code was emitted
    /// before the error stays written.
    pub fn compile<S, O>(&mut self, source: S, out: &mut O) -> CompileResult<()>
    where
        S: CharSource,
        O: Output + ?Sized,
    {
        debug!(source = %self.config.source_name, "compiling");
        match self.translate(source, out) {
            Ok(()) => {
                debug!(symbols = self.symbols.len(), "compiled");
                Ok(())
            }
            Err(error) => {
                debug!(code = %error.code(), location = %error.location, "halting");
                for line in error.to_string().lines() {
                    out.write_line(line);
                }
                out.halt();
                Err(error)
            }
        }
    }

    fn translate<S, O>(&mut self, source: S, out: &mut O) -> CompileResult<()>
    where
        S: CharSource,
        O: Output + ?Sized,
    {
        let mut symbols = std::mem::take(&mut self.symbols);
        symbols.reset();
        let mut cg = CodeGen::new(out);
        for (name, size) in &self.config.predeclared {
            let name = name.to_ascii_uppercase();
            symbols
                .declare(&name, SymbolKind::Variable(*size))
                .map_err(|kind| kind.at(Location::START))?;
            cg.data(&name, *size, 0);
        }

        let mut parser = Parser::new(source, cg, symbols)?;
        parser.program()?;
        let (cg, symbols) = parser.into_parts();
        debug!(labels = cg.labels_allocated(), "code emitted");
        self.symbols = symbols;
        Ok(())
    }
}

/// Compile in-memory source into a [`CompileOutput`].
pub fn compile_str(source: &str, config: &CompileConfig) -> CompileOutput {
    let mut out = BufferOutput::new();
    let result = Compiler::new(config.clone()).compile(StrSource::new(source), &mut out);
    CompileOutput {
        success: result.is_ok(),
        text: out.into_text(),
        error: result.err(),
    }
}
