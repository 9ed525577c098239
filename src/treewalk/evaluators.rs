use crate::{
    domain::ExecutionError,
    parser::types::{BinOp, CompareOp},
    treewalk::{EvalResult, Value},
};

pub fn evaluate_integer_operation(left: i64, op: &BinOp, right: i64) -> EvalResult<Value> {
    // Checked arithmetic: overflow (including i64::MIN / -1) is an error, never a panic.
    let result = match op {
        BinOp::Add => left.checked_add(right),
        BinOp::Sub => left.checked_sub(right),
        BinOp::Mul => left.checked_mul(right),
        BinOp::Div | BinOp::Mod => {
            if right == 0 {
                return Err(ExecutionError::DivisionByZero(
                    "integer division or modulo by zero".into(),
                ));
            } else if op == &BinOp::Div {
                left.checked_div(right)
            } else {
                left.checked_rem(right)
            }
        }
    };

    result.map(Value::Int).ok_or_else(integer_overflow)
}

pub fn integer_overflow() -> ExecutionError {
    ExecutionError::Overflow("integer arithmetic overflowed".into())
}

pub fn evaluate_floating_point_operation(left: f64, op: &BinOp, right: f64) -> EvalResult<Value> {
    match op {
        BinOp::Add => Ok(Value::Float(left + right)),
        BinOp::Sub => Ok(Value::Float(left - right)),
        BinOp::Mul => Ok(Value::Float(left * right)),
        BinOp::Div | BinOp::Mod => {
            if right == 0.0 {
                let msg = if op == &BinOp::Div {
                    "float division by zero"
                } else {
                    "float modulo"
                };
                Err(ExecutionError::DivisionByZero(msg.into()))
            } else if op == &BinOp::Div {
                Ok(Value::Float(left / right))
            } else {
                Ok(Value::Float(left % right))
            }
        }
    }
}

pub fn evaluate_comparison(left: &Value, op: &CompareOp, right: &Value) -> EvalResult<Value> {
    // Numeric comparisons promote ints to floats; everything else only supports (in)equality.
    if let (Some(l), Some(r)) = (left.as_float(), right.as_float()) {
        let result = match op {
            CompareOp::GreaterThan => l > r,
            CompareOp::LessThan => l < r,
            CompareOp::GreaterThanOrEqual => l >= r,
            CompareOp::LessThanOrEqual => l <= r,
            CompareOp::Equals => l == r,
            CompareOp::NotEquals => l != r,
        };
        return Ok(Value::Bool(result));
    }

    match op {
        CompareOp::Equals => Ok(Value::Bool(left == right)),
        CompareOp::NotEquals => Ok(Value::Bool(left != right)),
        _ => Err(unsupported_operand(op_symbol(op), left, right)),
    }
}

pub fn unsupported_operand(symbol: &str, left: &Value, right: &Value) -> ExecutionError {
    ExecutionError::TypeError(format!(
        "unsupported operand type(s) for {}: '{}' and '{}'",
        symbol,
        left.get_type(),
        right.get_type()
    ))
}

pub fn bin_op_symbol(op: &BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::Mod => "%",
    }
}

fn op_symbol(op: &CompareOp) -> &'static str {
    match op {
        CompareOp::GreaterThan => ">",
        CompareOp::LessThan => "<",
        CompareOp::GreaterThanOrEqual => ">=",
        CompareOp::LessThanOrEqual => "<=",
        CompareOp::Equals => "==",
        CompareOp::NotEquals => "!=",
    }
}
