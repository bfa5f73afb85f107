//! KISS compiler CLI.

mod commands;

use std::sync::Once;

use commands::{build_file, explain_error, lex_file, parse_options, run_file};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=kiss_parse=debug` or `RUST_LOG=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "build" => {
            if args.len() < 3 {
                eprintln!("Usage: kissc build <file.kiss> [-o <path>] [--var=NAME:SIZE]");
                std::process::exit(1);
            }
            let options = parse_options(&args[3..]);
            build_file(&args[2], &options);
        }
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: kissc run <file.kiss> [--input=N,N,...] [--max-steps=N]");
                std::process::exit(1);
            }
            let options = parse_options(&args[3..]);
            run_file(&args[2], &options);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: kissc lex <file.kiss>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: kissc explain <ERROR_CODE>");
                eprintln!("Example: kissc explain E2002");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("KISS Compiler {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("kiss"))
            {
                run_file(command, &parse_options(&args[2..]));
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("KISS Compiler");
    println!();
    println!("Usage: kissc <command> [options]");
    println!();
    println!("Commands:");
    println!("  build <file.kiss>    Compile to abstract-machine program text");
    println!("  run <file.kiss>      Compile, then execute on the simulator");
    println!("  lex <file.kiss>      Tokenize and display tokens");
    println!("  explain <code>       Explain an error code (e.g., E2002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Build options:");
    println!("  -o <path>            Write program text to a file instead of stdout");
    println!("  --var=NAME[:B|W|L]   Predeclare a variable (default size W)");
    println!();
    println!("Run options:");
    println!("  --input=N,N,...      Values for READ, in order");
    println!("  --max-steps=N        Give up after N instructions");
    println!("  --show-code          Print the program text before running");
    println!("  --var=NAME[:B|W|L]   Predeclare a variable (default size W)");
    println!();
    println!("Examples:");
    println!("  kissc build sum.kiss");
    println!("  kissc build sum.kiss -o sum.s");
    println!("  kissc run sum.kiss --input=3,4");
    println!("  kissc explain E2004");
}
