use qurt::{
    error::LexError,
    interpreter::{
        scanner::Scanner,
        token::{Pos, Token, TokenKind},
    },
};

fn scan(source: &str) -> Vec<Token> {
    Scanner::new("test.qurt", source).into_tokens().collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).into_iter().map(|token| token.kind).collect()
}

fn lexemes(source: &str) -> Vec<String> {
    scan(source).into_iter().map(|token| token.lexeme).collect()
}

#[test]
fn empty_and_whitespace_input_yield_only_eof() {
    for source in ["", " ", "\n", "\t\t\n\r\n   \n", "// only a comment\n"] {
        assert_eq!(kinds(source), [TokenKind::Eof], "source: {source:?}");
    }
}

#[test]
fn eof_repeats_after_end_of_input() {
    let mut scanner = Scanner::new("test.qurt", "x");

    assert_eq!(scanner.scan().kind, TokenKind::Ident);
    assert_eq!(scanner.scan().kind, TokenKind::Eof);
    assert_eq!(scanner.scan().kind, TokenKind::Eof);
}

#[test]
fn operators_follow_the_fixed_table() {
    use TokenKind::{
        Assign, Eof, Equal, Greater, GreaterEqual, Illegal, Less, LessEqual, LogicalAnd,
        LogicalOr, Not, NotEqual,
    };

    assert_eq!(kinds("<= >= == != ! = < > && || &"),
               [LessEqual,
                GreaterEqual,
                Equal,
                NotEqual,
                Not,
                Assign,
                Less,
                Greater,
                LogicalAnd,
                LogicalOr,
                Illegal,
                Eof]);
}

#[test]
fn arithmetic_and_punctuation() {
    use TokenKind::{
        Add, Comma, Div, Eof, LBrace, LBracket, LParen, Mod, Mul, Period, RBrace, RBracket,
        RParen, Semicolon, Sub,
    };

    assert_eq!(kinds("+ - * / % ( [ { , . ) ] } ;"),
               [Add, Sub, Mul, Div, Mod, LParen, LBracket, LBrace, Comma, Period, RParen,
                RBracket, RBrace, Semicolon, Eof]);
}

#[test]
fn lone_ampersand_and_pipe_are_diagnosed() {
    let tokens = scan("& |");

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].error,
               Some(LexError::LoneAmpersand { pos: Pos { line: 1, column: 1 } }));
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].error,
               Some(LexError::LonePipe { pos: Pos { line: 1, column: 3 } }));
}

#[test]
fn keywords_and_identifiers() {
    use TokenKind::{
        Break, Continue, Else, Eof, False, For, Func, Ident, If, Return, Struct, True, Var,
    };

    assert_eq!(kinds("тоқта өткіз әйтпесе қайтала функция егер қайтар құрылым айнымалы иә жоқ"),
               [Break, Continue, Else, For, Func, If, Return, Struct, Var, True, False, Eof]);

    // Near misses and type names are plain identifiers.
    assert_eq!(kinds("егерсіз функция2 бүтін жаз x1 Нүкте"),
               [Ident, Ident, Ident, Ident, Ident, Ident, Eof]);
}

#[test]
fn every_keyword_round_trips_through_its_canonical_string() {
    for kind in TokenKind::ALL.into_iter().filter(|kind| kind.is_keyword()) {
        assert_eq!(kinds(kind.as_str()), [kind, TokenKind::Eof]);
    }
}

#[test]
fn token_groups_are_contiguous() {
    let literals = TokenKind::ALL.iter().filter(|kind| kind.is_literal()).count();
    let operators = TokenKind::ALL.iter().filter(|kind| kind.is_operator()).count();
    let keywords = TokenKind::ALL.iter().filter(|kind| kind.is_keyword()).count();

    assert_eq!(literals, 6);
    assert_eq!(operators, 15);
    assert_eq!(keywords, 9);
}

#[test]
fn numbers_consume_at_most_one_period() {
    use TokenKind::{Eof, Float, Int, Period};

    assert_eq!(kinds("12..45"), [Float, Period, Int, Eof]);
    assert_eq!(lexemes("12..45"), ["12.", ".", "45", ""]);

    assert_eq!(kinds("123...456"), [Float, Period, Period, Int, Eof]);
    assert_eq!(kinds(".5"), [Period, Int, Eof]);
    assert_eq!(kinds("3.14 42"), [Float, Int, Eof]);
}

#[test]
fn strings_keep_escapes_and_drop_quotes() {
    let tokens = scan(r#""сәлем\n\"әлем\"""#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, r#"сәлем\n\"әлем\""#);
}

#[test]
fn multi_line_strings_advance_the_line_counter() {
    let tokens = scan("\"бір\nекі\" x");

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "бір\nекі");
    assert_eq!(tokens[1].pos, Pos { line: 2, column: 6 });
}

#[test]
fn unterminated_string_is_illegal() {
    let tokens = scan("x = \"ашық");

    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].error,
               Some(LexError::UnterminatedString { pos: Pos { line: 1, column: 5 } }));
    assert_eq!(tokens[3].kind, TokenKind::Eof);
}

#[test]
fn invalid_characters_are_reported_once_each() {
    let mut scanner = Scanner::new("test.qurt", "a @ б");

    assert_eq!(scanner.scan().kind, TokenKind::Ident);
    let illegal = scanner.scan();
    assert_eq!(illegal.kind, TokenKind::Illegal);
    assert_eq!(illegal.lexeme, "@");
    assert_eq!(scanner.last_error(),
               Some(&LexError::InvalidCharacter { character: '@',
                                                  pos:       Pos { line: 1, column: 3 }, }));
    assert_eq!(scanner.scan().lexeme, "б");
}

#[test]
fn non_ascii_invalid_character_keeps_scanning() {
    assert_eq!(kinds("x → y"),
               [TokenKind::Ident, TokenKind::Illegal, TokenKind::Ident, TokenKind::Eof]);
}

#[test]
fn newline_becomes_semicolon_only_after_statement_enders() {
    use TokenKind::{Assign, Eof, Ident, Int, LBrace, RBrace, Semicolon};

    let source = "x = 1\n\n\ny = {\n2\n}\n";
    assert_eq!(kinds(source),
               [Ident, Assign, Int, Semicolon, Ident, Assign, LBrace, Int, Semicolon, RBrace,
                Semicolon, Eof]);

    let tokens = scan(source);
    assert_eq!(tokens[3].lexeme, "newline");
}

#[test]
fn newline_after_return_break_and_continue_terminates() {
    use TokenKind::{Break, Continue, Eof, Return, Semicolon};

    assert_eq!(kinds("қайтар\nтоқта\nөткіз\n"),
               [Return, Semicolon, Break, Semicolon, Continue, Semicolon, Eof]);
}

#[test]
fn newline_after_operator_is_whitespace() {
    use TokenKind::{Add, Eof, Ident};

    assert_eq!(kinds("a +\nb"), [Ident, Add, Ident, Eof]);
}

#[test]
fn positions_count_code_points() {
    let tokens = scan("айнымалы х бүтін\n  жаз(х)");

    let positions: Vec<(usize, usize)> =
        tokens.iter().map(|token| (token.pos.line, token.pos.column)).collect();
    assert_eq!(positions,
               [(1, 1), (1, 10), (1, 12), (1, 17), (2, 3), (2, 6), (2, 7), (2, 8), (2, 9)]);
}

#[test]
fn scanner_reports_its_source_name() {
    let mut scanner = Scanner::new("негізгі.qurt", "x\ny");
    scanner.scan();
    scanner.scan();
    scanner.scan();

    assert_eq!(scanner.position(), ("негізгі.qurt", Pos { line: 2, column: 1 }));
}

#[test]
fn comments_are_skipped() {
    use TokenKind::{Eof, Ident, Semicolon};

    assert_eq!(kinds("x // түсініктеме\ny"), [Ident, Semicolon, Ident, Eof]);
}

#[test]
fn scan_and_token_stream_share_one_cursor() {
    let mut scanner = Scanner::new("test.qurt", "x @ y");
    assert_eq!(scanner.scan().kind, TokenKind::Ident);

    let mut tokens = scanner.into_tokens();
    assert_eq!(tokens.next().map(|token| token.kind), Some(TokenKind::Illegal));
    assert!(matches!(tokens.scanner().last_error(),
                     Some(LexError::InvalidCharacter { character: '@', .. })));
    assert_eq!(tokens.next().map(|token| token.lexeme), Some("y".to_string()));
    assert_eq!(tokens.next().map(|token| token.kind), Some(TokenKind::Eof));
    assert!(tokens.next().is_none());
}
