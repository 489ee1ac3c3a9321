use crate::tokenizer::{
    char_map::CharMap,
    scanner::Scanner,
    token::{Token, TokenKind},
};

/// `#`-style and C-style comment states.
pub mod comment;
/// Numeric literal state with an optional leading minus.
pub mod number;
/// Quoted string state without escapes.
pub mod quote;
/// Operator state backed by a symbol trie.
pub mod symbol;
/// Whitespace run state.
pub mod whitespace;
/// Identifier state.
pub mod word;

pub use comment::{BlockCommentState, LineCommentState, SlashCommentState};
pub use number::NumberState;
pub use quote::PlainQuoteState;
pub use symbol::TrieSymbolState;
pub use whitespace::WhitespaceState;
pub use word::WordState;

/// Reads the longest run of characters that belong to `class`.
pub(crate) fn read_run(scanner: &mut Scanner, class: &CharMap<()>, kind: TokenKind) -> Token {
    let (line, column) = (scanner.peek_line(), scanner.peek_column());
    let mut value = String::new();

    while let Some(chr) = scanner.peek()
          && class.lookup(chr).is_some()
    {
        value.push(chr);
        scanner.read();
    }

    Token::new(kind, value, line, column)
}
