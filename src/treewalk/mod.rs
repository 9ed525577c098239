mod evaluators;
#[allow(clippy::module_inception)]
mod interpreter;
mod result;
mod scope;
mod statement_scope;
#[cfg(test)]
pub mod test_utils;
mod value;

pub use interpreter::Interpreter;
pub use result::EvalResult;
pub use scope::Scope;
pub use statement_scope::StatementScope;
pub use value::Value;
