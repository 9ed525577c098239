mod error;
mod identifier;
mod source;

pub use error::ExecutionError;
pub use identifier::Identifier;
pub use source::Source;

#[cfg(test)]
pub use error::test_utils;
