use crate::*;

#[test]
fn error_messages_name_the_position() {
    let cases = [
        ("[A]%", "Unexpected character at 1:4: '%'"),
        ("[A", "Unterminated node at 1:1: expected `]` to close node"),
        ("[A]-B [C]", "Expected dash after label \"B \" at 1:5"),
        ("[A]\n|\nB", "Expected pipe after label \"B\" at 3:1"),
        ("  ]", "Unexpected token CloseBracket at 1:3"),
        (
            "[A]-[A]",
            "Duplicate node label \"A\" at 1:5 (first defined at 1:1)",
        ),
        (
            "[A]-e-[B]\n|\ne\n|\n[C]",
            "Duplicate edge label \"e\" at 2:1 (first defined at 1:4)",
        ),
        ("[A] -", "Edge at 1:5 connects to nothing"),
    ];
    for (text, expected) in cases {
        let err = parse(text).unwrap_err();
        assert_eq!(err.to_string(), expected, "input: {text:?}");
    }
}

#[test]
fn error_position_points_at_the_offending_element() {
    assert_eq!(parse("\n  %").unwrap_err().position(), Position::new(2, 3));
    assert_eq!(parse("[]\n [").unwrap_err().position(), Position::new(2, 2));
    assert_eq!(
        parse("[A]\n\n[A]").unwrap_err().position(),
        Position::new(3, 1)
    );
}

#[test]
fn lex_errors_win_over_later_syntax_errors() {
    // The stray `]` comes first, but lexing finishes before any shape is recognized.
    let err = parse("] %").unwrap_err();
    assert!(matches!(err, Error::Lex(LexError { character: '%', .. })));
}

#[test]
fn syntax_errors_win_over_semantic_errors() {
    let err = parse("[A]-[A]\n[").unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
}

#[test]
fn sub_errors_convert_into_error() {
    let err: Error = SyntaxError::UnterminatedNode {
        position: Position::new(1, 1),
    }
    .into();
    assert!(matches!(err, Error::Syntax(_)));
    let err: Error = SemanticError::DanglingEdge {
        position: Position::new(1, 1),
    }
    .into();
    assert_eq!(err.position(), Position::new(1, 1));
}
