//! `bismuth`: run a linked Bismuth program.

use bisc::{init_tracing, parse_args, run, usage, Command, EXIT_SUCCESS, EXIT_USAGE, MAX_DEPTH_ENV};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_depth = std::env::var(MAX_DEPTH_ENV).ok();

    let code = match parse_args(&args, env_depth.as_deref()) {
        Ok(Command::Help) => {
            print!("{}", usage());
            EXIT_SUCCESS
        }
        Ok(Command::Run(options)) => run(&options),
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{}", usage());
            EXIT_USAGE
        }
    };
    std::process::exit(code);
}
