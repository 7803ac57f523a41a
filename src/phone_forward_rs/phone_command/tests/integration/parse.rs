/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use phone_command::{CommandError, Operation, OperationReader, Operator};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn parse_one(input: &str) -> Result<Operation, CommandError> {
    OperationReader::new(input.as_bytes())
        .next()
        .expect("the input holds at least one operation")
}

fn new_base(id: &str, position: usize) -> Operation {
    Operation::NewBase {
        id: id.to_owned(),
        position,
    }
}

#[rstest]
#[case::new_base("NEW abc", new_base("abc", 1))]
#[case::new_base_alphanumeric("NEW a1B2", new_base("a1B2", 1))]
#[case::leading_whitespace("  \n\tNEW x", new_base("x", 5))]
#[case::delete_base("DEL x1", Operation::DeleteBase { id: "x1".to_owned(), position: 1 })]
#[case::remove("DEL 12", Operation::Remove { prefix: "12".to_owned(), position: 1 })]
#[case::add("12 > 34", Operation::Add { from: "12".to_owned(), to: "34".to_owned(), position: 4 })]
#[case::add_compact("12>34", Operation::Add { from: "12".to_owned(), to: "34".to_owned(), position: 3 })]
#[case::get("123?", Operation::Get { number: "123".to_owned(), position: 4 })]
#[case::get_extension_symbols(":;?", Operation::Get { number: ":;".to_owned(), position: 3 })]
#[case::reverse("? 1", Operation::Reverse { number: "1".to_owned(), position: 1 })]
#[case::count("@ 12", Operation::NonTrivialCount { symbols: "12".to_owned(), position: 1 })]
#[case::comment("$$ comment $$ 1 ?", Operation::Get { number: "1".to_owned(), position: 17 })]
#[case::comment_with_dollars("$$a$b$$$$$$2?", Operation::Get { number: "2".to_owned(), position: 13 })]
#[case::comment_between_tokens("DEL$$c$$abc", Operation::DeleteBase { id: "abc".to_owned(), position: 1 })]
#[case::vertical_tab("1\x0b?", Operation::Get { number: "1".to_owned(), position: 3 })]
fn test_parse_operation(#[case] input: &str, #[case] expected: Operation) {
    assert_eq!(parse_one(input).unwrap(), expected);
}

#[rstest]
#[case::unknown_keyword("NEWX a", "1")]
#[case::keyword_as_identifier("NEW NEW", "5")]
#[case::del_as_identifier("NEW DEL", "5")]
#[case::delete_keyword_base("DEL DEL", "5")]
#[case::number_as_identifier("NEW 1", "5")]
#[case::bare_word("abc", "1")]
#[case::missing_operator("12 x", "4")]
#[case::bad_second_number("12 > x", "6")]
#[case::bad_reverse_argument("? %", "3")]
#[case::bad_count_argument("@ abc", "3")]
#[case::lone_dollar("$", "1")]
#[case::lone_dollar_inside("1 $ ?", "3")]
#[case::unknown_byte("#", "1")]
#[case::bad_delete_argument("DEL *", "5")]
#[case::eof_after_keyword("NEW", "EOF")]
#[case::eof_after_delete("DEL  ", "EOF")]
#[case::eof_after_number("12", "EOF")]
#[case::eof_after_redirect("12 >", "EOF")]
#[case::eof_after_count("@", "EOF")]
#[case::eof_in_comment("$$ unterminated", "EOF")]
#[case::eof_in_comment_end("$$ almost $", "EOF")]
fn test_parse_error(#[case] input: &str, #[case] expected: &str) {
    let error = parse_one(input).unwrap_err();
    assert_eq!(error.to_string(), expected);
}

#[test]
fn test_parse_stream() {
    let input = "NEW a\n12 > 3 $$ redirect $$\n125 ?\n? 35\nDEL 1\n@ 0123456789:;\nDEL a\n";
    let operations: Vec<Operation> = OperationReader::new(input.as_bytes())
        .collect::<Result<_, _>>()
        .unwrap();

    let operators: Vec<Operator> = operations.iter().map(Operation::operator).collect();
    assert_eq!(
        operators,
        [
            Operator::New,
            Operator::Redirect,
            Operator::Query,
            Operator::Query,
            Operator::Del,
            Operator::Count,
            Operator::Del,
        ]
    );
    let positions: Vec<usize> = operations.iter().map(Operation::position).collect();
    assert_eq!(positions, [1, 10, 33, 35, 40, 46, 61]);
}

#[test]
fn test_parse_stops_after_error() {
    let mut reader = OperationReader::new("NEW a\n$x 1 ?".as_bytes());
    assert_eq!(reader.next().unwrap().unwrap(), new_base("a", 1));
    assert!(matches!(
        reader.next(),
        Some(Err(CommandError::Syntax { position: 7 }))
    ));
    assert!(reader.next().is_none());
    assert!(reader.next().is_none());
}

#[test]
fn test_parse_empty_input() {
    assert!(OperationReader::new("".as_bytes()).next().is_none());
    assert!(OperationReader::new(" \n $$ only a comment $$ \n".as_bytes()).next().is_none());
}

#[test]
fn test_parse_tracks_position() {
    let mut reader = OperationReader::new("1 ? ".as_bytes());
    reader.next().unwrap().unwrap();
    assert_eq!(reader.position(), 3);
    assert!(reader.next().is_none());
    assert_eq!(reader.position(), 4);
}
