use crate::{
    core::{log, LogLevel},
    domain::Identifier,
    errors::ParserError,
    lexer::{Lexer, Token},
    parser::{
        types::{BinOp, CompareOp, Expr, LogicalOp, Statement, StatementKind, UnaryOp},
        TokenBuffer,
    },
};

/// A recursive-descent parser for the Luxor expression grammar. Statements are newline-separated;
/// a statement is either an assignment to the outer scope or a bare expression.
pub struct Parser<'a> {
    tokens: TokenBuffer<'a>,
    line_number: usize,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: &'a mut Lexer) -> Self {
        Parser {
            tokens: TokenBuffer::new(lexer),
            line_number: 1,
        }
    }

    fn current_token(&mut self) -> &Token {
        self.tokens.peek(0)
    }

    pub fn is_finished(&mut self) -> bool {
        // Blank lines between statements are insignificant.
        self.consume_optional_many(&Token::Newline);
        self.current_token() == &Token::Eof
    }

    fn end_of_statement(&mut self) -> bool {
        matches!(self.current_token(), Token::Newline | Token::Eof)
    }

    fn consume(&mut self, expected: &Token) -> Result<(), ParserError> {
        let current = self.tokens.peek(0);

        log(LogLevel::Trace, || format!("Token: {current:?}"));

        if current != expected {
            return Err(ParserError::ExpectedToken(
                expected.clone(),
                current.clone(),
            ));
        }

        if current == &Token::Newline {
            self.line_number += 1;
        }

        self.tokens.consume();
        Ok(())
    }

    fn consume_current(&mut self) -> Result<(), ParserError> {
        let token = self.tokens.peek(0).clone();
        self.consume(&token)
    }

    fn consume_optional(&mut self, expected: &Token) {
        if self.current_token() == expected {
            let _ = self.consume(expected);
        }
    }

    fn consume_optional_many(&mut self, expected: &Token) {
        while self.current_token() == expected {
            let _ = self.consume(expected);
        }
    }

    pub fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        self.consume_optional_many(&Token::Newline);
        let start_line = self.line_number;

        let kind = self.parse_statement_kind()?;

        if !self.end_of_statement() {
            return Err(ParserError::UnexpectedToken(self.current_token().clone()));
        }
        self.consume_optional(&Token::Newline);

        Ok(Statement::new(start_line, kind))
    }

    fn parse_statement_kind(&mut self) -> Result<StatementKind, ParserError> {
        if matches!(self.current_token(), Token::Identifier(_))
            && self.tokens.peek(1) == &Token::Assign
        {
            let target = self.parse_identifier()?;
            self.consume(&Token::Assign)?;
            let value = self.parse_expr()?;
            return Ok(StatementKind::Assignment { target, value });
        }

        Ok(StatementKind::Expression(self.parse_expr()?))
    }

    /// Parse an expression in a context where open (unparenthesized) tuples may be expected.
    ///
    /// ```text
    /// 4, 5
    /// a = 4, 5
    /// ```
    ///
    /// All other expression parsing is immediately delegated to `parse_simple_expr`.
    pub fn parse_expr(&mut self) -> Result<Expr, ParserError> {
        log(LogLevel::Trace, || "parse_expr".to_string());
        let left = self.parse_simple_expr()?;

        if self.current_token() == &Token::Comma {
            let mut items = vec![left];
            while self.current_token() == &Token::Comma {
                self.consume(&Token::Comma)?;

                // We need this for the case of a trailing comma, which is most often used for a
                // tuple with a single element.
                if self.end_of_statement() {
                    break;
                }
                items.push(self.parse_simple_expr()?);
            }

            Ok(Expr::Tuple(items))
        } else {
            Ok(left)
        }
    }

    /// Implements the precedence order in reverse call stack order, meaning the operators
    /// evaluated last will be detected first during this recursive descent.
    ///
    /// The precedence order is:
    /// - Literals, Identifiers, Parenthesized forms - `parse_factor`
    /// - Unary operators (not, -, +) - `parse_unary`
    /// - Multiplication, Division, Modulo - `parse_term`
    /// - Addition, Subtraction - `parse_add_sub`
    /// - Comparison operators - `parse_comparison`
    /// - Logical operators (and/or) - `parse_simple_expr`
    fn parse_simple_expr(&mut self) -> Result<Expr, ParserError> {
        log(LogLevel::Trace, || "parse_simple_expr".to_string());
        let mut left = self.parse_comparison()?;

        while matches!(self.current_token(), Token::And | Token::Or) {
            let op = LogicalOp::try_from(self.current_token()).unwrap_or_else(|_| unreachable!());
            self.consume_current()?;
            let right = self.parse_comparison()?;
            left = Expr::LogicalOperation {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParserError> {
        log(LogLevel::Trace, || "parse_comparison".to_string());
        let left = self.parse_add_sub()?;

        if CompareOp::try_from(self.current_token()).is_ok() {
            let op = CompareOp::try_from(self.current_token()).unwrap_or_else(|_| unreachable!());
            self.consume_current()?;
            let right = self.parse_add_sub()?;
            return Ok(Expr::Comparison {
                left: Box::new(left),
                op,
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    fn parse_add_sub(&mut self) -> Result<Expr, ParserError> {
        log(LogLevel::Trace, || "parse_add_sub".to_string());
        let mut left = self.parse_term()?;

        while matches!(self.current_token(), Token::Plus | Token::Minus) {
            let op = BinOp::try_from(self.current_token()).unwrap_or_else(|_| unreachable!());
            self.consume_current()?;
            let right = self.parse_term()?;
            left = Expr::BinaryOperation {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, ParserError> {
        log(LogLevel::Trace, || "parse_term".to_string());
        let mut left = self.parse_unary()?;

        while matches!(
            self.current_token(),
            Token::Asterisk | Token::Slash | Token::Modulo
        ) {
            let op = BinOp::try_from(self.current_token()).unwrap_or_else(|_| unreachable!());
            self.consume_current()?;
            let right = self.parse_unary()?;
            left = Expr::BinaryOperation {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParserError> {
        log(LogLevel::Trace, || "parse_unary".to_string());
        let op = match self.current_token() {
            Token::Minus => Some(UnaryOp::Minus),
            Token::Plus => Some(UnaryOp::Plus),
            Token::Not => Some(UnaryOp::Not),
            _ => None,
        };

        if let Some(op) = op {
            self.consume_current()?;
            let right = self.parse_unary()?;
            return Ok(Expr::UnaryOperation {
                op,
                right: Box::new(right),
            });
        }

        self.parse_factor()
    }

    fn parse_factor(&mut self) -> Result<Expr, ParserError> {
        log(LogLevel::Trace, || "parse_factor".to_string());
        match self.current_token().clone() {
            Token::LParen => self.parse_parenthesized_expr(),
            Token::Integer(value) => {
                self.consume(&Token::Integer(value))?;
                let value = i64::try_from(value).map_err(|_| ParserError::SyntaxError)?;
                Ok(Expr::Integer(value))
            }
            Token::FloatingPoint(value) => {
                self.consume(&Token::FloatingPoint(value))?;
                Ok(Expr::Float(value))
            }
            Token::BooleanLiteral(value) => {
                self.consume(&Token::BooleanLiteral(value))?;
                Ok(Expr::Boolean(value))
            }
            Token::StringLiteral(value) => {
                self.consume(&Token::StringLiteral(value.clone()))?;
                Ok(Expr::StringLiteral(value))
            }
            Token::None => {
                self.consume(&Token::None)?;
                Ok(Expr::None)
            }
            Token::Identifier(_) => Ok(Expr::Variable(self.parse_identifier()?)),
            token => Err(ParserError::UnexpectedToken(token)),
        }
    }

    /// Everything which begins with an `LParen`: a grouped expression, a tuple display, or a
    /// named expression `(expr as NAME)`. The named-expression form requires its own parentheses,
    /// which is what makes `(x, (1 as x), x)` parse as a tuple whose second element is a named
    /// expression.
    fn parse_parenthesized_expr(&mut self) -> Result<Expr, ParserError> {
        log(LogLevel::Trace, || "parse_parenthesized_expr".to_string());
        self.consume(&Token::LParen)?;

        if self.current_token() == &Token::RParen {
            self.consume(&Token::RParen)?;
            return Ok(Expr::Tuple(vec![]));
        }

        let first = self.parse_simple_expr()?;

        match self.current_token() {
            Token::As => {
                self.consume(&Token::As)?;
                let target = self.parse_identifier()?;
                self.consume(&Token::RParen)?;
                Ok(Expr::NamedExpr {
                    value: Box::new(first),
                    target,
                })
            }
            Token::Comma => {
                let mut items = vec![first];
                while self.current_token() == &Token::Comma {
                    self.consume(&Token::Comma)?;
                    if self.current_token() == &Token::RParen {
                        break;
                    }
                    items.push(self.parse_simple_expr()?);
                }
                self.consume(&Token::RParen)?;
                Ok(Expr::Tuple(items))
            }
            _ => {
                self.consume(&Token::RParen)?;
                Ok(first)
            }
        }
    }

    fn parse_identifier(&mut self) -> Result<Identifier, ParserError> {
        match self.current_token().clone() {
            Token::Identifier(name) => {
                self.consume(&Token::Identifier(name.clone()))?;
                Identifier::new(name).map_err(|_| ParserError::SyntaxError)
            }
            token => Err(ParserError::UnexpectedToken(token)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parser::test_utils::*;

    #[test]
    fn literals() {
        let expr = parse!("42", Expr);
        assert_eq!(expr, Expr::Integer(42));

        let expr = parse!("4.5", Expr);
        assert_eq!(expr, Expr::Float(4.5));

        let expr = parse!("True", Expr);
        assert_eq!(expr, Expr::Boolean(true));

        let expr = parse!("'hello'", Expr);
        assert_eq!(expr, Expr::StringLiteral("hello".into()));

        let expr = parse!("None", Expr);
        assert_eq!(expr, Expr::None);
    }

    #[test]
    fn binary_precedence() {
        let expr = parse!("1 + 2 * 3", Expr);
        assert_eq!(expr, bin_op(int(1), BinOp::Add, bin_op(int(2), BinOp::Mul, int(3))));
    }

    #[test]
    fn grouping_overrides_precedence() {
        let expr = parse!("(1 + 2) * 3", Expr);
        assert_eq!(expr, bin_op(bin_op(int(1), BinOp::Add, int(2)), BinOp::Mul, int(3)));
    }

    #[test]
    fn unary_operations() {
        let expr = parse!("-5", Expr);
        assert_eq!(expr, unary_op(UnaryOp::Minus, int(5)));

        let expr = parse!("not True", Expr);
        assert_eq!(expr, unary_op(UnaryOp::Not, Expr::Boolean(true)));
    }

    #[test]
    fn comparison_and_logical() {
        let expr = parse!("1 < 2 and True", Expr);
        assert_eq!(
            expr,
            Expr::LogicalOperation {
                left: Box::new(Expr::Comparison {
                    left: Box::new(int(1)),
                    op: CompareOp::LessThan,
                    right: Box::new(int(2)),
                }),
                op: LogicalOp::And,
                right: Box::new(Expr::Boolean(true)),
            }
        );
    }

    #[test]
    fn named_expression() {
        let expr = parse!("(2 as x)", Expr);
        assert_eq!(expr, named_expr(int(2), "x"));
    }

    #[test]
    fn named_expression_wraps_compound_expr() {
        let expr = parse!("(1 + 2 as sum)", Expr);
        assert_eq!(expr, named_expr(bin_op(int(1), BinOp::Add, int(2)), "sum"));
    }

    #[test]
    fn named_expressions_inside_tuple() {
        let expr = parse!("(x, (1 as x), x)", Expr);
        assert_eq!(
            expr,
            Expr::Tuple(vec![var("x"), named_expr(int(1), "x"), var("x")])
        );
    }

    #[test]
    fn empty_tuple() {
        let expr = parse!("()", Expr);
        assert_eq!(expr, Expr::Tuple(vec![]));
    }

    #[test]
    fn open_tuple() {
        let expr = parse!("1, 2", Expr);
        assert_eq!(expr, Expr::Tuple(vec![int(1), int(2)]));
    }

    #[test]
    fn named_expression_requires_simple_name_target() {
        let e = expect_error!("(1 as 2)", Expr);
        assert_eq!(e, ParserError::UnexpectedToken(Token::Integer(2)));
    }

    #[test]
    fn named_expression_requires_closing_paren() {
        let e = expect_error!("(1 as x, y)", Expr);
        assert_eq!(
            e,
            ParserError::ExpectedToken(Token::RParen, Token::Comma)
        );
    }

    #[test]
    fn assignment_statement() {
        let stmt = parse!("x = 5", Statement);
        assert_eq!(
            stmt.kind,
            StatementKind::Assignment {
                target: ident("x"),
                value: int(5),
            }
        );
    }

    #[test]
    fn assignment_with_named_expression_rhs() {
        let stmt = parse!("y = (1 as t)", Statement);
        assert_eq!(
            stmt.kind,
            StatementKind::Assignment {
                target: ident("y"),
                value: named_expr(int(1), "t"),
            }
        );
    }

    #[test]
    fn oversized_integer_literal_is_rejected() {
        let e = expect_error!("99999999999999999999999999", Expr);
        assert_eq!(
            e,
            ParserError::UnexpectedToken(Token::InvalidToken(
                "99999999999999999999999999".into()
            ))
        );
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let e = expect_error!("1 2", Statement);
        assert_eq!(e, ParserError::UnexpectedToken(Token::Integer(2)));
    }

    #[test]
    fn statements_track_line_numbers() {
        let ast = parse_all("x = 1\n\ny = 2");
        let lines: Vec<usize> = ast.iter().map(|stmt| stmt.start_line).collect();
        assert_eq!(lines, vec![1, 3]);
    }
}
