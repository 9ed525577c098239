use crate::{
    domain::Source,
    errors::LuxorResult,
    lexer::Lexer,
    parser::Parser,
    treewalk::{Interpreter, Value},
};

/// Wires the lexer, parser, and interpreter together. Lines can be added incrementally between
/// calls to [`LuxorContext::run`], which is what powers REPL mode.
pub struct LuxorContext {
    lexer: Lexer,
    interpreter: Interpreter,
}

impl LuxorContext {
    pub fn new(source: Source) -> Self {
        Self {
            lexer: Lexer::new(&source),
            interpreter: Interpreter::new(),
        }
    }

    /// Evaluate all statements currently available from the lexer, returning the value of the
    /// last one.
    pub fn run(&mut self) -> LuxorResult<Value> {
        // Destructure to break the borrow into disjoint pieces
        let LuxorContext {
            lexer, interpreter, ..
        } = self;

        let mut parser = Parser::new(lexer);
        interpreter.execute(&mut parser)
    }

    pub fn add_line(&mut self, line: &str) {
        self.lexer
            .add_line(line)
            .expect("Failed to add line to lexer");
    }

    /// Read a name from the outer (global) scope. Statement-local bindings are never visible
    /// here; they do not survive the statement that created them.
    pub fn read(&self, name: &str) -> Option<Value> {
        self.interpreter.read_global(name)
    }
}
