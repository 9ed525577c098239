mod context;
mod core;
mod domain;
mod errors;
mod lexer;
mod luxor;
mod parser;
#[cfg(feature = "repl")]
mod repl;
mod treewalk;

pub use context::LuxorContext;
pub use domain::{ExecutionError, Source};
pub use errors::{LuxorError, LuxorResult};
pub use luxor::Luxor;
pub use treewalk::Value;
