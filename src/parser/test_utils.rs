use crate::{
    domain::{Identifier, Source},
    errors::ParserError,
    lexer::Lexer,
    parser::{
        types::{ast, Ast, BinOp, Expr, ParseNode, UnaryOp},
        Parser,
    },
};

pub struct ParseContext {
    lexer: Lexer,
}

impl ParseContext {
    pub fn new(source: Source) -> Self {
        Self {
            lexer: Lexer::new(&source),
        }
    }

    /// Parse a single [`ParseNode`]. This cannot be used for multiple parse calls.
    pub fn parse_oneshot<T>(&mut self) -> Result<T, ParserError>
    where
        T: ParseNode,
    {
        let parser = self.init_parser();
        T::parse_oneshot(parser)
    }

    pub fn parse_all(&mut self) -> Result<Ast, ParserError> {
        let mut parser = self.init_parser();
        let mut statements = ast![];

        while !parser.is_finished() {
            statements.push(parser.parse_statement()?);
        }

        Ok(statements)
    }

    pub fn init_parser(&mut self) -> Parser<'_> {
        Parser::new(&mut self.lexer)
    }
}

pub fn init(text: &str) -> ParseContext {
    ParseContext::new(Source::from_text(text))
}

pub fn parse_all(input: &str) -> Ast {
    init(input)
        .parse_all()
        .expect("Failed to parse all statements!")
}

macro_rules! expect_error {
    ($input:expr, $pattern:ident) => {
        match $crate::parser::test_utils::init($input).parse_oneshot::<$pattern>() {
            Ok(_) => panic!("Expected a ParserError!"),
            Err(e) => e,
        }
    };
}

macro_rules! parse {
    ($input:expr, $pattern:ident) => {
        match $crate::parser::test_utils::init($input).parse_oneshot::<$pattern>() {
            Err(e) => panic!("Parser error: {:?}", e),
            Ok(ast) => ast,
        }
    };
}

pub(crate) use expect_error;
pub(crate) use parse;

pub fn ident(name: &str) -> Identifier {
    Identifier::new(name).expect("Invalid identifier in test!")
}

pub fn int(value: i64) -> Expr {
    Expr::Integer(value)
}

pub fn var(name: &str) -> Expr {
    Expr::Variable(ident(name))
}

pub fn bin_op(left: Expr, op: BinOp, right: Expr) -> Expr {
    Expr::BinaryOperation {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

pub fn unary_op(op: UnaryOp, right: Expr) -> Expr {
    Expr::UnaryOperation {
        op,
        right: Box::new(right),
    }
}

pub fn named_expr(value: Expr, target: &str) -> Expr {
    Expr::NamedExpr {
        value: Box::new(value),
        target: ident(target),
    }
}
