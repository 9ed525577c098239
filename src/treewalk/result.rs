use crate::domain::ExecutionError;

/// Errors raised during statement evaluation, used in upper levels of the code. There is no local
/// recovery: a failure aborts the current statement and propagates to the caller.
pub type EvalResult<T> = Result<T, ExecutionError>;
