//! The `run` command: compile, then execute on the simulator.

use kiss_compiler::compile_str;
use kiss_vm::VmConfig;
use tracing::debug;

use super::{read_file, Options};

pub fn run_file(path: &str, options: &Options) {
    let source = read_file(path);
    let output = compile_str(&source, &options.compile_config(path));
    if let Some(err) = output.error {
        eprintln!("{err}");
        std::process::exit(1);
    }
    if options.show_code {
        println!("{}", output.text);
    }

    let mut config = VmConfig::default().with_input(options.input.iter().copied());
    if let Some(max_steps) = options.max_steps {
        config = config.with_max_steps(max_steps);
    }
    match kiss_vm::run(&output.text, config) {
        Ok(outcome) => {
            debug!(steps = outcome.steps, accumulator = outcome.accumulator, "halted");
            for value in &outcome.output {
                println!("{value}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
