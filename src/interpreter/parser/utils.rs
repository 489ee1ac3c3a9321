use crate::{
    error::SyntaxError,
    interpreter::{
        instruction::{Instruction, InstructionKind},
        parser::{
            core::ParseResult,
            lexical::{Lexeme, LexemeKind},
        },
    },
    tokenizer::token::Position,
};

/// Working state of one parse.
///
/// Holds the classified input with a cursor into it, and the postfix output
/// built so far. Every level function borrows the same context mutably; a
/// fresh context is created for each parse.
#[derive(Debug)]
pub(in crate::interpreter::parser) struct ParseContext {
    lexemes:        Vec<Lexeme>,
    index:          usize,
    instructions:   Vec<Instruction>,
    variable_names: Vec<String>,
}

impl ParseContext {
    pub(in crate::interpreter::parser) const fn new(lexemes: Vec<Lexeme>) -> Self {
        Self { lexemes,
               index: 0,
               instructions: Vec::new(),
               variable_names: Vec::new() }
    }

    /// The lexeme under the cursor.
    pub(in crate::interpreter::parser) fn current(&self) -> Option<&Lexeme> {
        self.lexemes.get(self.index)
    }

    /// The kind of the lexeme `offset` places past the cursor.
    pub(in crate::interpreter::parser) fn kind_at(&self, offset: usize) -> Option<LexemeKind> {
        self.lexemes.get(self.index + offset).map(Lexeme::kind)
    }

    /// Whether the lexeme under the cursor has kind `kind`.
    pub(in crate::interpreter::parser) fn at(&self, kind: LexemeKind) -> bool {
        self.kind_at(0) == Some(kind)
    }

    pub(in crate::interpreter::parser) const fn advance(&mut self) {
        self.index += 1;
    }

    pub(in crate::interpreter::parser) fn has_more(&self) -> bool {
        self.index < self.lexemes.len()
    }

    /// The position just past the last lexeme, where a construct cut short
    /// by the end of input is reported.
    pub(in crate::interpreter::parser) fn end_position(&self) -> Position {
        self.lexemes.last().map_or_else(Position::default, Lexeme::end)
    }

    /// Returns the lexeme under the cursor, failing if the input ran out.
    pub(in crate::interpreter::parser) fn expect_more(&self) -> ParseResult<&Lexeme> {
        self.current()
            .ok_or_else(|| SyntaxError::UnexpectedEnd { position: self.end_position() })
    }

    /// Consumes `sequence` if the lexemes under the cursor match all of it.
    ///
    /// Nothing is consumed on a partial match, so `IS` followed by something
    /// other than `NULL` leaves the cursor on `IS`.
    pub(in crate::interpreter::parser) fn match_sequence(&mut self,
                                                         sequence: &[LexemeKind])
                                                         -> bool {
        let matched = sequence.iter()
                              .enumerate()
                              .all(|(offset, kind)| self.kind_at(offset) == Some(*kind));
        if matched {
            self.index += sequence.len();
        }
        matched
    }

    pub(in crate::interpreter::parser) fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub(in crate::interpreter::parser) fn emit_operator(&mut self,
                                                        kind: InstructionKind,
                                                        position: Position) {
        self.emit(Instruction::operator(kind, position));
    }

    /// Records a variable name the first time it is referenced.
    ///
    /// Names are compared exactly as written.
    pub(in crate::interpreter::parser) fn record_variable(&mut self, name: &str) {
        if !self.variable_names.iter().any(|known| known == name) {
            self.variable_names.push(name.to_string());
        }
    }

    pub(in crate::interpreter::parser) fn finish(self) -> (Vec<Instruction>, Vec<String>) {
        (self.instructions, self.variable_names)
    }
}
