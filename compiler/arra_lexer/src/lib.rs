//! Arra Lexer - splits an input line into token strings.
//!
//! A token is either a maximal run of word characters (`[A-Za-z0-9_]`) or
//! a single other character. Whitespace separates tokens and never forms
//! one. Token shapes are not classified here: `count`, `42` and `x` are all
//! plain words, and the evaluator decides what each one means.
//!
//! ```text
//! tokenize("x: 1 + count y")  =>  ["x", ":", "1", "+", "count", "y"]
//! tokenize("a+-b")            =>  ["a", "+", "-", "b"]
//! ```

/// Whether `c` can appear in a multi-character word token.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split `line` into tokens borrowed from it.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        let mut end = start + c.len_utf8();
        if is_word_char(c) {
            while let Some(&(i, next)) = chars.peek() {
                if !is_word_char(next) {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
        }
        tokens.push(&line[start..end]);
    }
    tokens
}

#[cfg(test)]
mod tests;
