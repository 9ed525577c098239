use std::{collections::VecDeque, iter::Peekable, str::Chars};

use crate::{domain::Source, errors::LexerError};

use super::Token;

type LexerResult<T> = Result<T, LexerError>;

/// A hand-written lexer which tokenizes one line at a time. Lines can be added incrementally,
/// which is what powers REPL mode.
#[derive(Default)]
pub struct Lexer {
    // Tokens we have produced but which have yet to be consumed
    pending_tokens: VecDeque<Token>,

    // Each input line, added incrementally
    source_lines: VecDeque<String>,
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // 1. Return any pending token if available
            if let Some(token) = self.pending_tokens.pop_front() {
                return Some(token);
            }

            // 2. If there's no more source to lex, stop
            if self.source_lines.is_empty() {
                return None;
            }

            // 3. Process the next line into tokens
            let line = self.source_lines.pop_front()?;
            match self.tokenize(&line) {
                Ok(()) => continue,
                Err(err) => self.handle_tokenize_error(err),
            }
        }
    }
}

impl Lexer {
    pub fn new(source: &Source) -> Lexer {
        let mut lexer = Lexer::default();

        // empty Source can occur in REPL mode
        if source.has_text() {
            lexer
                .add_line(source.text())
                .expect("Failed to add line to lexer");
        }

        lexer
    }

    pub fn add_line(&mut self, line: &str) -> LexerResult<()> {
        self.source_lines.push_back(line.to_string());
        Ok(())
    }

    /// Lexing failures are surfaced as tokens so that the parser can reject them as ordinary
    /// syntax errors rather than this iterator needing a failure mode of its own.
    fn handle_tokenize_error(&mut self, err: LexerError) {
        match err {
            LexerError::UnexpectedCharacter(c) => {
                self.pending_tokens.push_back(Token::InvalidCharacter(c));
            }
            LexerError::InvalidToken(literal) => {
                self.pending_tokens.push_back(Token::InvalidToken(literal));
            }
        }
    }

    fn tokenize(&mut self, input: &str) -> LexerResult<()> {
        for line in input.lines() {
            if !line.trim().is_empty() {
                self.tokenize_line(line)?;
            }
            self.pending_tokens.push_back(Token::Newline);
        }

        Ok(())
    }

    fn tokenize_line(&mut self, line: &str) -> LexerResult<()> {
        let mut chars = line.chars().peekable();

        while let Some(&c) = chars.peek() {
            match c {
                ' ' | '\t' => {
                    chars.next();
                }
                // A comment consumes the rest of the line.
                '#' => break,
                _ if c.is_alphabetic() || c == '_' => {
                    let word = read_word(&mut chars);
                    self.pending_tokens.push_back(keyword_or_identifier(word));
                }
                _ if c.is_ascii_digit() => {
                    let token = self.read_number(&mut chars)?;
                    self.pending_tokens.push_back(token);
                }
                '"' | '\'' => {
                    let token = self.read_string(&mut chars, c)?;
                    self.pending_tokens.push_back(token);
                }
                _ => {
                    let token = self.read_operator(&mut chars)?;
                    self.pending_tokens.push_back(token);
                }
            }
        }

        Ok(())
    }

    fn read_number(&mut self, chars: &mut Peekable<Chars>) -> LexerResult<Token> {
        let mut literal = String::new();
        let mut is_float = false;

        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                literal.push(c);
                chars.next();
            } else if c == '.' && !is_float {
                is_float = true;
                literal.push(c);
                chars.next();
            } else {
                break;
            }
        }

        if is_float {
            literal
                .parse::<f64>()
                .map(Token::FloatingPoint)
                .map_err(|_| LexerError::InvalidToken(literal))
        } else {
            literal
                .parse::<u64>()
                .map(Token::Integer)
                .map_err(|_| LexerError::InvalidToken(literal))
        }
    }

    fn read_string(&mut self, chars: &mut Peekable<Chars>, quote: char) -> LexerResult<Token> {
        chars.next(); // consume the opening quote

        let mut literal = String::new();
        for c in chars.by_ref() {
            if c == quote {
                return Ok(Token::StringLiteral(literal));
            }
            literal.push(c);
        }

        // We reached the end of the line without a closing quote.
        Err(LexerError::UnexpectedCharacter(quote))
    }

    fn read_operator(&mut self, chars: &mut Peekable<Chars>) -> LexerResult<Token> {
        let c = chars.next().ok_or(LexerError::UnexpectedCharacter(' '))?;

        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Asterisk,
            '/' => Token::Slash,
            '%' => Token::Modulo,
            ',' => Token::Comma,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '=' => {
                if chars.peek() == Some(&'=') {
                    chars.next();
                    Token::Equal
                } else {
                    Token::Assign
                }
            }
            '!' => {
                if chars.peek() == Some(&'=') {
                    chars.next();
                    Token::NotEqual
                } else {
                    return Err(LexerError::UnexpectedCharacter('!'));
                }
            }
            '<' => {
                if chars.peek() == Some(&'=') {
                    chars.next();
                    Token::LessThanOrEqual
                } else {
                    Token::LessThan
                }
            }
            '>' => {
                if chars.peek() == Some(&'=') {
                    chars.next();
                    Token::GreaterThanOrEqual
                } else {
                    Token::GreaterThan
                }
            }
            _ => return Err(LexerError::UnexpectedCharacter(c)),
        };

        Ok(token)
    }
}

fn read_word(chars: &mut Peekable<Chars>) -> String {
    let mut word = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_alphanumeric() || c == '_' {
            word.push(c);
            chars.next();
        } else {
            break;
        }
    }

    word
}

fn keyword_or_identifier(word: String) -> Token {
    match word.as_str() {
        "as" => Token::As,
        "and" => Token::And,
        "or" => Token::Or,
        "not" => Token::Not,
        "None" => Token::None,
        "True" => Token::BooleanLiteral(true),
        "False" => Token::BooleanLiteral(false),
        _ => Token::Identifier(word),
    }
}
