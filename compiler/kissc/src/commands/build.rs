//! The `build` command: compile a source file to program text.

use kiss_compiler::{BufferOutput, Compiler, Output};
use kiss_lexer::StrSource;
use tracing::debug;

use super::{read_file, Options};

/// Streams program text to stdout. A halt ends the process.
struct Console;

impl Output for Console {
    fn write(&mut self, text: &str) {
        print!("{text}");
    }

    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }

    fn halt(&mut self) {
        std::process::exit(1);
    }
}

pub fn build_file(path: &str, options: &Options) {
    let source = read_file(path);
    let mut compiler = Compiler::new(options.compile_config(path));

    let Some(output) = &options.output else {
        if compiler.compile(StrSource::new(&source), &mut Console).is_err() {
            std::process::exit(1);
        }
        return;
    };

    let mut buffer = BufferOutput::new();
    if let Err(err) = compiler.compile(StrSource::new(&source), &mut buffer) {
        eprintln!("{err}");
        std::process::exit(1);
    }
    if let Err(e) = std::fs::write(output, buffer.text()) {
        eprintln!("error writing '{}': {e}", output.display());
        std::process::exit(1);
    }
    debug!(path = %output.display(), lines = buffer.lines().count(), "wrote program");
}
