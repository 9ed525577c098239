use std::slice::Iter;

use crate::domain::Identifier;

#[derive(Debug, PartialEq, Clone)]
pub struct Ast {
    statements: Vec<Statement>,
}

impl Ast {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn push(&mut self, stmt: Statement) {
        self.statements.push(stmt);
    }

    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }
}

/// Build an [`Ast`] from a literal list of [`Statement`] objects.
macro_rules! ast {
    // Match no arguments
    () => {
        $crate::parser::types::Ast::new(vec![])
    };

    // Match comma-separated list of elements
    ($($element:expr),* $(,)?) => {
        $crate::parser::types::Ast::new(vec![$($element),*])
    };
}

pub(crate) use ast;

#[derive(Debug, PartialEq, Clone)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

#[derive(Debug, PartialEq, Clone)]
pub enum CompareOp {
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Equals,
    NotEquals,
}

#[derive(Debug, PartialEq, Clone)]
pub enum UnaryOp {
    Not,
    Minus,
    Plus,
}

#[derive(Debug, PartialEq, Clone)]
pub enum LogicalOp {
    And,
    Or,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    None,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    StringLiteral(String),
    Variable(Identifier),
    Tuple(Vec<Expr>),
    UnaryOperation {
        op: UnaryOp,
        right: Box<Expr>,
    },
    BinaryOperation {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
    Comparison {
        left: Box<Expr>,
        op: CompareOp,
        right: Box<Expr>,
    },
    LogicalOperation {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },
    /// A named expression `(expr as NAME)`. Its value is that of `expr`, with the side effect of
    /// binding `NAME` for the remainder of the enclosing statement.
    NamedExpr {
        value: Box<Expr>,
        target: Identifier,
    },
}

#[derive(Debug, PartialEq, Clone)]
pub struct Statement {
    pub start_line: usize,
    pub kind: StatementKind,
}

impl Statement {
    pub fn new(start_line: usize, kind: StatementKind) -> Self {
        Self { start_line, kind }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum StatementKind {
    Expression(Expr),
    /// Writes to the outer (global) scope. This is the only construct which does; named
    /// expressions only ever touch the statement-local bindings.
    Assignment {
        target: Identifier,
        value: Expr,
    },
}

#[cfg(test)]
use crate::{errors::ParserError, parser::Parser};

#[cfg(test)]
pub trait ParseNode {
    fn parse_oneshot(parser: Parser) -> Result<Self, ParserError>
    where
        Self: Sized;
}

#[cfg(test)]
impl ParseNode for Expr {
    fn parse_oneshot(mut parser: Parser) -> Result<Self, ParserError> {
        parser.parse_expr()
    }
}

#[cfg(test)]
impl ParseNode for Statement {
    fn parse_oneshot(mut parser: Parser) -> Result<Self, ParserError> {
        parser.parse_statement()
    }
}
