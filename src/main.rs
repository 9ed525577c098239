use std::{env, process};

use luxor::Luxor;

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        #[cfg(feature = "repl")]
        1 => Luxor::run_repl(),
        #[cfg(not(feature = "repl"))]
        1 => {
            eprintln!("Must enable 'repl' feature flag!");
            process::exit(1);
        }
        2 => Luxor::run_script(&args[1]),
        _ => {
            eprintln!("Usage: luxor [<filename>]");
            process::exit(1);
        }
    }
}
