//! Command handlers for the `kissc` CLI.
//!
//! Shared option parsing and file reading live here in the module root.

use std::path::PathBuf;

use kiss_asm::Size;
use kiss_compiler::CompileConfig;

mod build;
mod explain;
mod lex;
mod run;

pub use build::build_file;
pub use explain::explain_error;
pub use lex::lex_file;
pub use run::run_file;

/// Options shared by `build` and `run`. Each command ignores the ones it
/// has no use for.
#[derive(Clone, Debug, Default)]
pub struct Options {
    pub output: Option<PathBuf>,
    pub input: Vec<i64>,
    pub max_steps: Option<u64>,
    pub show_code: bool,
    pub variables: Vec<(String, Size)>,
}

impl Options {
    fn compile_config(&self, path: &str) -> CompileConfig {
        CompileConfig {
            source_name: path.to_string(),
            predeclared: self.variables.clone(),
        }
    }
}

/// Parse command options, exiting with a message on anything malformed.
pub fn parse_options(args: &[String]) -> Options {
    let mut options = Options::default();
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-o" && i + 1 < args.len() {
            options.output = Some(PathBuf::from(&args[i + 1]));
            i += 2;
            continue;
        }
        if let Some(values) = arg.strip_prefix("--input=") {
            options.input = values
                .split(',')
                .filter(|v| !v.trim().is_empty())
                .map(|v| parse_number(v.trim(), "--input"))
                .collect();
        } else if let Some(value) = arg.strip_prefix("--max-steps=") {
            options.max_steps = Some(parse_number(value, "--max-steps"));
        } else if arg == "--show-code" {
            options.show_code = true;
        } else if let Some(var) = arg.strip_prefix("--var=") {
            options.variables.push(parse_variable(var));
        } else {
            eprintln!("error: unknown option '{arg}'");
            std::process::exit(1);
        }
        i += 1;
    }
    options
}

fn parse_number<T: std::str::FromStr>(text: &str, option: &str) -> T {
    text.parse().unwrap_or_else(|_| {
        eprintln!("error: {option} expects a number, got '{text}'");
        std::process::exit(1);
    })
}

/// `NAME` or `NAME:B|W|L`.
fn parse_variable(var: &str) -> (String, Size) {
    let (name, size) = match var.split_once(':') {
        Some((name, suffix)) => {
            let Some(size) = Size::from_suffix(&suffix.to_ascii_uppercase()) else {
                eprintln!("error: unknown size '{suffix}' in --var (use B, W or L)");
                std::process::exit(1);
            };
            (name, size)
        }
        None => (var, Size::Word),
    };
    (name.to_string(), size)
}

pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
