use std::fmt::{Display, Error, Formatter};

/// The errors which can occur while evaluating a statement. A failure anywhere during evaluation
/// aborts the entire statement and discards any statement-local bindings made so far.
#[derive(Debug, PartialEq, Clone)]
pub enum ExecutionError {
    NameError(String),
    TypeError(String),
    DivisionByZero(String),
    Overflow(String),
}

impl Display for ExecutionError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            ExecutionError::NameError(name) => {
                write!(f, "NameError: name '{name}' is not defined")
            }
            ExecutionError::TypeError(msg) => write!(f, "TypeError: {msg}"),
            ExecutionError::DivisionByZero(msg) => write!(f, "ZeroDivisionError: {msg}"),
            ExecutionError::Overflow(msg) => write!(f, "OverflowError: {msg}"),
        }
    }
}

#[cfg(test)]
pub mod test_utils {
    macro_rules! assert_name_error {
        ($error:expr, $expected_name:expr) => {{
            match &$error {
                $crate::domain::ExecutionError::NameError(name) => {
                    assert_eq!(name, $expected_name, "Unexpected NameError name");
                }
                _ => panic!("Expected a NameError, but got: {:?}", &$error),
            }
        }};
    }

    macro_rules! assert_type_error {
        ($error:expr, $expected_message:expr) => {{
            match &$error {
                $crate::domain::ExecutionError::TypeError(msg) => {
                    assert_eq!(msg, $expected_message, "Unexpected TypeError message");
                }
                _ => panic!("Expected a TypeError, but got: {:?}", &$error),
            }
        }};
    }

    macro_rules! assert_div_by_zero_error {
        ($error:expr, $expected_message:expr) => {{
            match &$error {
                $crate::domain::ExecutionError::DivisionByZero(msg) => {
                    assert_eq!(msg, $expected_message, "Unexpected ZeroDivisionError message");
                }
                _ => panic!("Expected a ZeroDivisionError, but got: {:?}", &$error),
            }
        }};
    }

    pub(crate) use assert_div_by_zero_error;
    pub(crate) use assert_name_error;
    pub(crate) use assert_type_error;
}
