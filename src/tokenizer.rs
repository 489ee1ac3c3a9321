/// Maps code-point ranges to values.
///
/// The tokenizer uses it to dispatch characters to lexical states. The word
/// and whitespace states use it as a character class.
pub mod char_map;
/// The tokenizing engine.
///
/// Holds the dispatch table, the lexical states and the filtering options,
/// and turns a source string into a stream of tokens.
pub mod core;
/// A ready-made tokenizer for general text.
pub mod generic;
/// A repositionable character cursor with line and column tracking.
pub mod scanner;
/// The interfaces lexical states implement.
pub mod state;
/// Reusable lexical states.
///
/// Whitespace, word, number, quote, comment and symbol states that grammar
/// specific tokenizers configure or wrap.
pub mod states;
/// Longest-match lookup of multi-character operators.
pub mod symbol_trie;
/// Tokens, token kinds and source positions.
pub mod token;
