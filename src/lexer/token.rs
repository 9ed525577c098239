use crate::parser::types::{BinOp, CompareOp, LogicalOp};

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    As,
    And,
    Or,
    Not,
    None,
    Identifier(String),
    StringLiteral(String),
    BooleanLiteral(bool),
    // This is unsigned because the minus unary operator is not handled by
    // this lexer, but rather left for the parser which has better context.
    Integer(u64),
    FloatingPoint(f64),
    Plus,
    Minus,
    Asterisk,
    Slash,
    Modulo,
    GreaterThan,
    LessThan,
    Equal,
    NotEqual,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Assign,
    Comma,
    LParen,
    RParen,
    Newline,
    Eof,
    InvalidCharacter(char),
    InvalidToken(String),
}

impl TryFrom<&Token> for BinOp {
    type Error = ();

    fn try_from(value: &Token) -> Result<Self, Self::Error> {
        let op = match value {
            Token::Plus => BinOp::Add,
            Token::Minus => BinOp::Sub,
            Token::Asterisk => BinOp::Mul,
            Token::Slash => BinOp::Div,
            Token::Modulo => BinOp::Mod,
            _ => return Err(()),
        };

        Ok(op)
    }
}

impl TryFrom<&Token> for CompareOp {
    type Error = ();

    fn try_from(value: &Token) -> Result<Self, Self::Error> {
        let op = match value {
            Token::LessThan => CompareOp::LessThan,
            Token::LessThanOrEqual => CompareOp::LessThanOrEqual,
            Token::GreaterThan => CompareOp::GreaterThan,
            Token::GreaterThanOrEqual => CompareOp::GreaterThanOrEqual,
            Token::Equal => CompareOp::Equals,
            Token::NotEqual => CompareOp::NotEquals,
            _ => return Err(()),
        };

        Ok(op)
    }
}

impl TryFrom<&Token> for LogicalOp {
    type Error = ();

    fn try_from(value: &Token) -> Result<Self, Self::Error> {
        let op = match value {
            Token::And => LogicalOp::And,
            Token::Or => LogicalOp::Or,
            _ => return Err(()),
        };

        Ok(op)
    }
}
