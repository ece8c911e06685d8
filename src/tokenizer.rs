// Tokenizer over a fixed character grammar

/// Characters that always form a token of their own.
pub const DELIMITERS: [char; 11] = ['{', '}', '(', ')', ':', ',', '+', '-', '*', '/', '='];

pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Split `source` into word and delimiter tokens.
///
/// Whitespace separates words and is dropped. Every delimiter character is
/// emitted alone, even when it touches another delimiter or a word. Tokens
/// borrow from `source`; any input tokenizes.
pub fn tokenize(source: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in source.char_indices() {
        if c.is_whitespace() || is_delimiter(c) {
            if let Some(start) = word_start.take() {
                tokens.push(&source[start..i]);
            }
            if !c.is_whitespace() {
                tokens.push(&source[i..i + c.len_utf8()]);
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }

    if let Some(start) = word_start {
        tokens.push(&source[start..]);
    }

    tokens
}
