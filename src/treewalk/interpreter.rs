use crate::{
    core::{log, LogLevel},
    domain::{ExecutionError, Identifier},
    errors::{LuxorError, LuxorResult},
    parser::{
        types::{BinOp, Expr, LogicalOp, Statement, StatementKind, UnaryOp},
        Parser,
    },
    treewalk::{
        evaluators::{
            bin_op_symbol, evaluate_comparison, evaluate_floating_point_operation,
            evaluate_integer_operation, integer_overflow, unsupported_operand,
        },
        EvalResult, Scope, StatementScope, Value,
    },
};

/// A treewalk evaluator over a single outer scope. Each statement is evaluated with its own
/// [`StatementScope`] threaded through the expression walk, which is how named expressions get
/// their statement-local lifetime.
#[derive(Default)]
pub struct Interpreter {
    global_scope: Scope,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&mut self, parser: &mut Parser) -> LuxorResult<Value> {
        let mut result = Value::None;
        while !parser.is_finished() {
            let stmt = parser.parse_statement().map_err(LuxorError::Parser)?;
            result = self
                .evaluate_statement(&stmt)
                .map_err(LuxorError::Execution)?;
        }

        Ok(result)
    }

    pub fn evaluate_statement(&mut self, stmt: &Statement) -> EvalResult<Value> {
        log(LogLevel::Debug, || {
            format!("Evaluating statement on line {}", stmt.start_line)
        });

        // The statement scope lives exactly as long as this evaluation. On an error it is
        // dropped before the caller can observe anything, which is what makes failures atomic:
        // no statement-local binding survives.
        let mut locals = StatementScope::new();

        match &stmt.kind {
            StatementKind::Expression(expr) => self.evaluate_expr(expr, &mut locals),
            StatementKind::Assignment { target, value } => {
                let value = self.evaluate_expr(value, &mut locals)?;
                self.global_scope.insert(target.as_str(), value);
                Ok(Value::None)
            }
        }
    }

    pub fn evaluate_expr(&mut self, expr: &Expr, locals: &mut StatementScope) -> EvalResult<Value> {
        match expr {
            Expr::None => Ok(Value::None),
            Expr::Integer(value) => Ok(Value::Int(*value)),
            Expr::Float(value) => Ok(Value::Float(*value)),
            Expr::Boolean(value) => Ok(Value::Bool(*value)),
            Expr::StringLiteral(value) => Ok(Value::Str(value.clone())),
            Expr::Variable(name) => self.load_var(name, locals),
            Expr::Tuple(items) => self.evaluate_tuple(items, locals),
            Expr::UnaryOperation { op, right } => self.evaluate_unary_operation(op, right, locals),
            Expr::BinaryOperation { left, op, right } => {
                self.evaluate_binary_operation(left, op, right, locals)
            }
            Expr::Comparison { left, op, right } => {
                let left = self.evaluate_expr(left, locals)?;
                let right = self.evaluate_expr(right, locals)?;
                evaluate_comparison(&left, op, &right)
            }
            Expr::LogicalOperation { left, op, right } => {
                self.evaluate_logical_operation(left, op, right, locals)
            }
            Expr::NamedExpr { value, target } => {
                let value = self.evaluate_expr(value, locals)?;
                locals.bind(target, value.clone());
                Ok(value)
            }
        }
    }

    /// Resolve a plain name: first against any statement-local binding created earlier in this
    /// statement's evaluation order, then against the outer scope. A name used before its
    /// statement-local binding exists resolves to the outer value, which is what makes shadowing
    /// temporal rather than lexical.
    fn load_var(&self, name: &Identifier, locals: &StatementScope) -> EvalResult<Value> {
        locals
            .get(name.as_str())
            .cloned()
            .or_else(|| self.global_scope.get(name.as_str()))
            .ok_or_else(|| ExecutionError::NameError(name.to_string()))
    }

    pub fn read_global(&self, name: &str) -> Option<Value> {
        self.global_scope.get(name)
    }

    fn evaluate_tuple(&mut self, items: &[Expr], locals: &mut StatementScope) -> EvalResult<Value> {
        let mut values = Vec::with_capacity(items.len());
        for item in items {
            values.push(self.evaluate_expr(item, locals)?);
        }

        Ok(Value::Tuple(values))
    }

    fn evaluate_unary_operation(
        &mut self,
        op: &UnaryOp,
        right: &Expr,
        locals: &mut StatementScope,
    ) -> EvalResult<Value> {
        let right = self.evaluate_expr(right, locals)?;

        match op {
            UnaryOp::Minus => match right {
                Value::Int(i) => i.checked_neg().map(Value::Int).ok_or_else(integer_overflow),
                Value::Float(f) => Ok(Value::Float(-f)),
                _ => Err(bad_unary_operand("-", &right)),
            },
            // this acts as a no-op on numeric values
            UnaryOp::Plus => match right {
                Value::Int(_) | Value::Float(_) => Ok(right),
                _ => Err(bad_unary_operand("+", &right)),
            },
            UnaryOp::Not => Ok(Value::Bool(!right.as_boolean())),
        }
    }

    fn evaluate_binary_operation(
        &mut self,
        left: &Expr,
        op: &BinOp,
        right: &Expr,
        locals: &mut StatementScope,
    ) -> EvalResult<Value> {
        let left = self.evaluate_expr(left, locals)?;
        let right = self.evaluate_expr(right, locals)?;

        match (&left, &right) {
            (Value::Int(l), Value::Int(r)) => evaluate_integer_operation(*l, op, *r),
            (Value::Float(_), Value::Int(_) | Value::Float(_))
            | (Value::Int(_), Value::Float(_)) => {
                let l = left.as_float().unwrap_or_else(|| unreachable!());
                let r = right.as_float().unwrap_or_else(|| unreachable!());
                evaluate_floating_point_operation(l, op, r)
            }
            (Value::Str(l), Value::Str(r)) if op == &BinOp::Add => {
                Ok(Value::Str(format!("{l}{r}")))
            }
            _ => Err(unsupported_operand(bin_op_symbol(op), &left, &right)),
        }
    }

    fn evaluate_logical_operation(
        &mut self,
        left: &Expr,
        op: &LogicalOp,
        right: &Expr,
        locals: &mut StatementScope,
    ) -> EvalResult<Value> {
        let left = self.evaluate_expr(left, locals)?;

        // Short-circuit: the right operand is only evaluated (and any named expressions inside
        // it only bound) when the left operand does not decide the result.
        match op {
            LogicalOp::And if !left.as_boolean() => Ok(left),
            LogicalOp::Or if left.as_boolean() => Ok(left),
            _ => self.evaluate_expr(right, locals),
        }
    }
}

fn bad_unary_operand(symbol: &str, value: &Value) -> ExecutionError {
    ExecutionError::TypeError(format!(
        "bad operand type for unary {}: '{}'",
        symbol,
        value.get_type()
    ))
}
