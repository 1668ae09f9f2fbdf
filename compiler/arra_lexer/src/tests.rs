use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_and_blank_lines() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t ").is_empty());
}

#[test]
fn words_and_numbers() {
    assert_eq!(tokenize("count 1"), vec!["count", "1"]);
    assert_eq!(tokenize("take_2 x1"), vec!["take_2", "x1"]);
}

#[test]
fn symbols_are_single_characters() {
    assert_eq!(tokenize("1+2"), vec!["1", "+", "2"]);
    assert_eq!(tokenize("x:=-"), vec!["x", ":", "=", "-"]);
}

#[test]
fn assignment_line() {
    assert_eq!(
        tokenize("x: 1 join 2 3"),
        vec!["x", ":", "1", "join", "2", "3"]
    );
}

#[test]
fn comment_marker_is_its_own_token() {
    assert_eq!(tokenize("/ a comment"), vec!["/", "a", "comment"]);
}

#[test]
fn any_whitespace_separates() {
    assert_eq!(tokenize("1\t+\n2"), vec!["1", "+", "2"]);
}

#[test]
fn non_ascii_symbols_stay_whole() {
    assert_eq!(tokenize("x÷y"), vec!["x", "÷", "y"]);
}

mod proptest_tokens {
    use super::super::{is_word_char, tokenize};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tokens_cover_all_non_whitespace(line in "[a-z0-9_ +:=/-]{0,40}") {
            let tokens = tokenize(&line);
            let joined: String = tokens.concat();
            let expected: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(joined, expected);
        }

        #[test]
        fn symbol_tokens_are_single_chars(line in "[a-z0-9 +:=-]{0,40}") {
            for token in tokenize(&line) {
                prop_assert!(!token.is_empty());
                let all_word = token.chars().all(is_word_char);
                prop_assert!(all_word || token.chars().count() == 1);
            }
        }
    }
}
