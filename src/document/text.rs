//! Text leaf (w:t) tokenizer

use crate::xml::{self, XmlElement};

/// Tokens produced by a text leaf (w:t).
///
/// Words are split on whitespace. With `xml:space="preserve"` the leading and
/// trailing space runs are kept as extra tokens around the words, each one
/// character shorter than in the source.
pub fn text_tokens(text: &XmlElement) -> Vec<String> {
    let preserve = text.attr(xml::XML_SPACE) == Some(xml::PRESERVE);
    split_text(&text.text(), preserve)
}

/// Tokenize raw text content
pub fn split_text(text: &str, preserve_space: bool) -> Vec<String> {
    let mut tokens = Vec::new();

    if preserve_space {
        if text.chars().all(is_space) {
            // Blank leaf is a single token, words are never scanned
            tokens.push(chop(text).to_string());
            return tokens;
        }

        let leading = leading_spaces(text);
        if !leading.is_empty() {
            tokens.push(chop(leading).to_string());
        }
    }

    tokens.extend(
        text.split(is_space)
            .filter(|word| !word.is_empty())
            .map(str::to_string),
    );

    if preserve_space {
        let trailing = trailing_spaces(text);
        if !trailing.is_empty() {
            tokens.push(chop(trailing).to_string());
        }
    }

    tokens
}

/// ASCII whitespace, including vertical tab
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn leading_spaces(text: &str) -> &str {
    let end = text.len() - text.trim_start_matches(' ').len();
    &text[..end]
}

fn trailing_spaces(text: &str) -> &str {
    let start = text.trim_end_matches(' ').len();
    &text[start..]
}

/// Drop the last character; a trailing CRLF counts as one
fn chop(s: &str) -> &str {
    if let Some(stripped) = s.strip_suffix("\r\n") {
        return stripped;
    }
    match s.char_indices().next_back() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
