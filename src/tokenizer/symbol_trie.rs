use std::collections::HashMap;

use crate::tokenizer::{
    scanner::Scanner,
    token::{Token, TokenKind},
};

/// Index of the root node in the arena.
const ROOT: usize = 0;

#[derive(Debug, Clone)]
struct Node {
    character: Option<char>,
    /// Back-reference used only when backtracking.
    parent:    Option<usize>,
    children:  HashMap<char, usize>,
    valid:     bool,
    kind:      TokenKind,
}

impl Node {
    fn new(parent: Option<usize>, character: Option<char>) -> Self {
        Self { character,
               parent,
               children: HashMap::new(),
               valid: false,
               kind: TokenKind::Unknown }
    }
}

/// A prefix tree of multi-character operator spellings.
///
/// Nodes live in one vector and refer to their parent by index. Reading a
/// symbol walks the tree as deep as the input allows, then steps back to the
/// nearest node that completes a registered spelling, pushing the extra
/// characters back into the scanner. Every single character that starts a
/// registered spelling is a valid symbol on its own.
///
/// # Example
/// ```
/// use reckon::tokenizer::{scanner::Scanner, symbol_trie::SymbolTrie, token::TokenKind};
///
/// let mut trie = SymbolTrie::new();
/// trie.add("<", TokenKind::Symbol);
/// trie.add("<<", TokenKind::Symbol);
/// trie.add("<>", TokenKind::Symbol);
///
/// let mut scanner = Scanner::new("<<<>");
/// assert_eq!(trie.next_token(&mut scanner).value(), "<<");
/// assert_eq!(trie.next_token(&mut scanner).value(), "<>");
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTrie {
    nodes: Vec<Node>,
}

impl SymbolTrie {
    /// Creates a trie that knows no spellings.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: vec![Node::new(None, None)] }
    }

    /// Registers `spelling` as a complete symbol of the given kind.
    ///
    /// The first character of every spelling becomes a valid symbol if it was
    /// not one already. Characters between the first and the last stay
    /// incomplete until a spelling ends on them. An empty spelling is
    /// ignored.
    pub fn add(&mut self, spelling: &str, kind: TokenKind) {
        let mut chars = spelling.chars();
        let Some(first) = chars.next() else {
            return;
        };

        let mut node = self.ensure_child(ROOT, first);
        if self.nodes[node].kind == TokenKind::Unknown {
            self.nodes[node].valid = true;
            self.nodes[node].kind = TokenKind::Symbol;
        }

        for chr in chars {
            node = self.ensure_child(node, chr);
        }
        self.nodes[node].valid = true;
        self.nodes[node].kind = kind;
    }

    /// Reads the longest registered symbol at the scanner's cursor.
    ///
    /// If no spelling starts with the next character, a one-character symbol
    /// token is returned instead.
    ///
    /// # Returns
    /// A token positioned at the first character read. At the end of input
    /// the token is an empty symbol.
    pub fn next_token(&self, scanner: &mut Scanner) -> Token {
        let Some(first) = scanner.read() else {
            return Token::new(TokenKind::Symbol, "", scanner.peek_line(), scanner.peek_column());
        };
        let (line, column) = (scanner.line(), scanner.column());

        let Some(&child) = self.nodes[ROOT].children.get(&first) else {
            return Token::new(TokenKind::Symbol, first.to_string(), line, column);
        };

        let deepest = self.deepest_read(child, scanner);
        let node = self.unread_to_valid(deepest, scanner);

        Token::new(self.nodes[node].kind, self.ancestry(node), line, column)
    }

    fn ensure_child(&mut self, parent: usize, chr: char) -> usize {
        if let Some(&child) = self.nodes[parent].children.get(&chr) {
            return child;
        }

        let child = self.nodes.len();
        self.nodes.push(Node::new(Some(parent), Some(chr)));
        self.nodes[parent].children.insert(chr, child);
        child
    }

    /// Follows children for as long as the input matches them.
    fn deepest_read(&self, mut node: usize, scanner: &mut Scanner) -> usize {
        while let Some(chr) = scanner.read() {
            match self.nodes[node].children.get(&chr) {
                Some(&child) => node = child,
                None => {
                    scanner.unread();
                    break;
                },
            }
        }
        node
    }

    /// Backs up to the nearest node that completes a registered spelling.
    fn unread_to_valid(&self, mut node: usize, scanner: &mut Scanner) -> usize {
        while !self.nodes[node].valid
              && let Some(parent) = self.nodes[node].parent
        {
            scanner.unread();
            node = parent;
        }
        node
    }

    /// The characters on the path from the root to `node`.
    fn ancestry(&self, node: usize) -> String {
        let mut chars = Vec::new();
        let mut current = Some(node);
        while let Some(index) = current {
            chars.extend(self.nodes[index].character);
            current = self.nodes[index].parent;
        }
        chars.iter().rev().collect()
    }
}

impl Default for SymbolTrie {
    fn default() -> Self {
        Self::new()
    }
}
