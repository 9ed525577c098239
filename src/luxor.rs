use std::process;

#[cfg(feature = "repl")]
use crate::repl::Repl;
use crate::{domain::Source, LuxorContext};

/// The entrypoint to the Luxor executable. Supports script mode or REPL mode.
pub struct Luxor;

impl Luxor {
    pub fn run_script(filepath: &str) {
        let source = Source::from_path(filepath).unwrap_or_else(|err| {
            eprintln!("{err}");
            process::exit(1);
        });

        if let Err(err) = LuxorContext::new(source).run() {
            eprintln!("{err}");
            process::exit(1);
        }
    }

    #[cfg(feature = "repl")]
    pub fn run_repl() {
        Repl::default().run();
    }
}
