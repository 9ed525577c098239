use std::fmt::{Display, Error, Formatter};

use crate::{domain::ExecutionError, lexer::Token};

pub type LuxorResult<T> = Result<T, LuxorError>;

#[derive(Debug, PartialEq, Clone)]
pub enum LuxorError {
    Parser(ParserError),
    Execution(ExecutionError),
}

#[derive(Debug, PartialEq, Clone)]
pub enum LexerError {
    UnexpectedCharacter(char),
    InvalidToken(String),
}

#[derive(Debug, PartialEq, Clone)]
pub enum ParserError {
    ExpectedToken(Token, Token),
    UnexpectedToken(Token),
    SyntaxError,
}

impl Display for LuxorError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            LuxorError::Parser(e) => write!(f, "Parser error: {e}"),
            LuxorError::Execution(e) => write!(f, "{e}"),
        }
    }
}

impl Display for LexerError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            LexerError::UnexpectedCharacter(c) => write!(f, "Unexpected character: {c}"),
            LexerError::InvalidToken(t) => write!(f, "Invalid token: {t}"),
        }
    }
}

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            ParserError::ExpectedToken(expected, found) => {
                write!(f, "Expected token {expected:?}, found {found:?}")
            }
            ParserError::UnexpectedToken(token) => {
                write!(f, "Unexpected token \"{token:?}\"")
            }
            ParserError::SyntaxError => {
                write!(f, "SyntaxError")
            }
        }
    }
}
