use reckon::{
    interpreter::lexer::{expression_tokenizer, is_keyword},
    tokenizer::{
        core::{StateKind, States, Tokenizer},
        generic::generic_tokenizer,
        states::{BlockCommentState, NumberState, PlainQuoteState, TrieSymbolState, WhitespaceState,
                 WordState},
        token::{Token, TokenKind},
    },
};

fn assert_tokens(tokenizer: &Tokenizer, source: &str, expected: &[(TokenKind, &str)]) {
    let actual: Vec<(TokenKind, String)> =
        tokenizer.tokenize(source)
                 .into_iter()
                 .map(|token| (token.kind(), token.value().to_string()))
                 .collect();
    let expected: Vec<(TokenKind, String)> =
        expected.iter()
                .map(|(kind, value)| (*kind, (*value).to_string()))
                .collect();
    assert_eq!(actual, expected, "tokenizing {source:?}");
}

fn assert_round_trip(tokenizer: &Tokenizer, source: &str) {
    let joined: String = tokenizer.tokenize_to_strings(source).concat();
    assert_eq!(joined, source, "round trip of {source:?}");
}

fn compact(mut tokenizer: Tokenizer) -> Tokenizer {
    tokenizer.options.skip_whitespaces = true;
    tokenizer.options.skip_eof = true;
    tokenizer
}

#[test]
fn generic_tokenizer_reads_common_tokens() {
    let tokenizer = compact(generic_tokenizer());
    assert_tokens(&tokenizer,
                  "Name-1 <> 'x y' 12 -3.5 # note",
                  &[(TokenKind::Word, "Name-1"),
                    (TokenKind::Symbol, "<>"),
                    (TokenKind::Quoted, "'x y'"),
                    (TokenKind::Integer, "12"),
                    (TokenKind::Float, "-3.5"),
                    (TokenKind::Comment, "# note")]);
}

#[test]
fn generic_tokenizer_lone_minus_is_symbol() {
    let tokenizer = compact(generic_tokenizer());
    assert_tokens(&tokenizer,
                  "a - b",
                  &[(TokenKind::Word, "a"), (TokenKind::Symbol, "-"), (TokenKind::Word, "b")]);
}

#[test]
fn eof_token_closes_unfiltered_stream() {
    let tokens = generic_tokenizer().tokenize("a");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind(), TokenKind::Eof);

    assert_eq!(generic_tokenizer().tokenize("")[0].kind(), TokenKind::Eof);
}

#[test]
fn options_rewrite_tokens() {
    let mut tokenizer = generic_tokenizer();
    tokenizer.options.merge_whitespaces = true;
    tokenizer.options.unify_numbers = true;
    tokenizer.options.skip_comments = true;
    tokenizer.options.skip_eof = true;
    tokenizer.options.decode_strings = true;

    assert_tokens(&tokenizer,
                  "1 \t\n 2.5 'q' #c",
                  &[(TokenKind::Number, "1"),
                    (TokenKind::Whitespace, " "),
                    (TokenKind::Number, "2.5"),
                    (TokenKind::Whitespace, " "),
                    (TokenKind::Quoted, "q"),
                    (TokenKind::Whitespace, " ")]);
}

#[test]
fn unknown_characters_can_be_skipped() {
    let mut tokenizer = compact(generic_tokenizer());
    tokenizer.clear_character_states();
    tokenizer.set_character_state('0', '9', StateKind::Number);
    assert_tokens(&tokenizer,
                  "1$2",
                  &[(TokenKind::Integer, "1"), (TokenKind::Unknown, "$"), (TokenKind::Integer, "2")]);

    tokenizer.options.skip_unknown = true;
    assert_tokens(&tokenizer, "1$2", &[(TokenKind::Integer, "1"), (TokenKind::Integer, "2")]);
}

#[test]
fn token_stream_is_lazy_and_resettable() {
    let tokenizer = compact(generic_tokenizer());
    let mut tokens = tokenizer.tokens("a b c");
    assert_eq!(tokens.next().map(|t| t.value().to_string()), Some("a".to_string()));
    assert_eq!(tokens.next().map(|t| t.value().to_string()), Some("b".to_string()));
    tokens.reset();
    assert_eq!(tokens.count(), 3);
}

#[test]
fn tokens_carry_positions() {
    let tokenizer = compact(expression_tokenizer());
    let tokens = tokenizer.tokenize("a +\n  bc");
    assert_eq!(tokens[0].position().column, 1);
    assert_eq!(tokens[1].position().column, 3);
    assert_eq!((tokens[2].line(), tokens[2].column()), (2, 3));
    assert_eq!(tokens[2].end().column, 5);
}

#[test]
fn expression_tokenizer_recognises_keywords() {
    let tokenizer = compact(expression_tokenizer());
    assert_tokens(&tokenizer,
                  "a and Not b IS null",
                  &[(TokenKind::Word, "a"),
                    (TokenKind::Keyword, "and"),
                    (TokenKind::Keyword, "Not"),
                    (TokenKind::Word, "b"),
                    (TokenKind::Keyword, "IS"),
                    (TokenKind::Keyword, "null")]);
    assert!(is_keyword("xor"));
    assert!(!is_keyword("nand"));
}

#[test]
fn expression_tokenizer_reads_scientific_numbers() {
    let tokenizer = compact(expression_tokenizer());
    assert_tokens(&tokenizer,
                  "1e3 2.5E-2 7e x1e2",
                  &[(TokenKind::Float, "1e3"),
                    (TokenKind::Float, "2.5E-2"),
                    (TokenKind::Integer, "7"),
                    (TokenKind::Word, "e"),
                    (TokenKind::Word, "x1e2")]);
}

#[test]
fn expression_tokenizer_minus_is_always_an_operator() {
    let tokenizer = compact(expression_tokenizer());
    assert_tokens(&tokenizer,
                  "-2-x",
                  &[(TokenKind::Symbol, "-"),
                    (TokenKind::Integer, "2"),
                    (TokenKind::Symbol, "-"),
                    (TokenKind::Word, "x")]);
}

#[test]
fn expression_tokenizer_operators_use_longest_match() {
    let tokenizer = compact(expression_tokenizer());
    assert_tokens(&tokenizer,
                  "<A<<<>!=>=",
                  &[(TokenKind::Symbol, "<"),
                    (TokenKind::Word, "A"),
                    (TokenKind::Symbol, "<<"),
                    (TokenKind::Symbol, "<>"),
                    (TokenKind::Symbol, "!="),
                    (TokenKind::Symbol, ">=")]);
}

#[test]
fn expression_tokenizer_quotes() {
    let mut tokenizer = compact(expression_tokenizer());
    assert_tokens(&tokenizer,
                  r#"'it''s' "my var""#,
                  &[(TokenKind::Quoted, "'it''s'"), (TokenKind::Word, "\"my var\"")]);

    tokenizer.options.decode_strings = true;
    assert_tokens(&tokenizer,
                  r#"'it''s' "my var""#,
                  &[(TokenKind::Quoted, "it's"), (TokenKind::Word, "my var")]);

    let quote = tokenizer.quote_state();
    assert_eq!(quote.encode_string("it's", '\''), "'it''s'");
    assert_eq!(quote.decode_string("'it''s'", '\''), "it's");
}

#[test]
fn expression_tokenizer_comments() {
    let mut tokenizer = compact(expression_tokenizer());
    tokenizer.options.skip_comments = true;
    assert_tokens(&tokenizer,
                  "1 /* one */ + 2 // two",
                  &[(TokenKind::Integer, "1"), (TokenKind::Symbol, "+"), (TokenKind::Integer, "2")]);
}

#[test]
fn tokens_reproduce_the_source() {
    let expression = expression_tokenizer();
    for source in ["(2+2)*ABS(-2)",
                   "A + b / (3 - Max(-123, 1)*2)",
                   "'it''s' <> \"quoted name\" AND x NOT IN Array(1, 2.5e3)",
                   "a\r\n  // note\n  b /* block */ <= 1.5",
                   "'abc'[1] LIKE 'a%' IS NOT NULL"]
    {
        assert_round_trip(&expression, source);
    }

    let generic = generic_tokenizer();
    assert_round_trip(&generic, "Hello, 'world' -5 # bye");
}

#[test]
fn equal_tokens_ignore_position() {
    assert_eq!(Token::new(TokenKind::Symbol, "+", 1, 1), Token::new(TokenKind::Symbol, "+", 4, 9));
    assert_ne!(Token::new(TokenKind::Symbol, "+", 1, 1), Token::new(TokenKind::Word, "+", 1, 1));
}

#[test]
fn block_comment_state_leaves_double_slash_alone() {
    let states = States { whitespace: Box::new(WhitespaceState::new()),
                          word:       Box::new(WordState::new()),
                          number:     Box::new(NumberState::new()),
                          quote:      Box::new(PlainQuoteState::new()),
                          comment:    Box::new(BlockCommentState::new()),
                          symbol:     Box::new(TrieSymbolState::new()), };
    let mut tokenizer = Tokenizer::new(states);
    tokenizer.set_character_state('\0', char::MAX, StateKind::Symbol);
    tokenizer.set_character_state('\0', ' ', StateKind::Whitespace);
    tokenizer.set_character_state('a', 'z', StateKind::Word);
    tokenizer.set_character_state('/', '/', StateKind::Comment);

    let tokenizer = compact(tokenizer);
    assert_tokens(&tokenizer,
                  "a /* b */ // c",
                  &[(TokenKind::Word, "a"),
                    (TokenKind::Comment, "/* b */"),
                    (TokenKind::Symbol, "/"),
                    (TokenKind::Symbol, "/"),
                    (TokenKind::Word, "c")]);
}
