//! Decoder for the annotated context text format.
//!
//! A context value is an ordered sequence of string tokens. A token is either
//! plain text or a lemma reference written `word::id`, where `id` is the id of
//! the referenced lemma. Whitespace that follows the id belongs to the visible
//! text, not to the id, so the decoder detaches it and emits it as its own text
//! token right after the reference.
//!
//! The sequence reaches the reader in two shapes:
//!
//! - JSON-encoded, as an array of strings or an object whose values are the
//!   tokens in insertion order;
//! - raw text, where every token carries the whitespace character that
//!   ends it (`"Das Haus::12 steht"`).
//!
//! Only decoding is provided. The reader never writes annotated text.

use serde_json::Value;

/// Separator between the displayed word and the lemma id.
pub const DELIMITER: &str = "::";

/// A renderable piece of a decoded context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Plain text, rendered verbatim.
    Text(String),
    /// A word linking to the lemma it was annotated with.
    LemmaRef { text: String, lemma_id: i64 },
}

impl Token {
    /// The text a reader sees for this token, ignoring whether it is a link.
    pub fn display_text(&self) -> &str {
        match self {
            Token::Text(value) => value,
            Token::LemmaRef { text, .. } => text,
        }
    }

    pub fn lemma_id(&self) -> Option<i64> {
        match self {
            Token::Text(_) => None,
            Token::LemmaRef { lemma_id, .. } => Some(*lemma_id),
        }
    }

    /// Whether this token references `highlighted`.
    pub fn is_highlighted(&self, highlighted: Option<i64>) -> bool {
        highlighted.is_some() && self.lemma_id() == highlighted
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnnotationError {
    #[error("malformed context value: {0}")]
    Json(#[from] serde_json::Error),
    #[error("context value is neither a JSON array nor a JSON object")]
    UnexpectedShape,
    #[error("token {index} of the context value is not a string")]
    NonStringToken { index: usize },
    #[error("token {token:?} has no numeric lemma id")]
    InvalidLemmaId { token: String },
}

/// Decodes a raw `context_value` into render tokens.
pub fn decode(context_value: &str) -> Result<Vec<Token>, AnnotationError> {
    decode_tokens(split_tokens(context_value)?)
}

/// Resolves a `context_value` into its ordered string tokens.
///
/// A value whose first non-blank character is `[` or `{` is JSON-encoded and a
/// JSON error is reported as such, so raw text may not open with a bracket.
/// Anything else is raw text and is split after every whitespace character.
pub fn split_tokens(context_value: &str) -> Result<Vec<String>, AnnotationError> {
    let trimmed = context_value.trim_start();
    if !(trimmed.starts_with('[') || trimmed.starts_with('{')) {
        return Ok(context_value
            .split_inclusive(char::is_whitespace)
            .map(str::to_string)
            .collect());
    }

    let items: Vec<Value> = match serde_json::from_str(context_value)? {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, value)| value).collect(),
        _ => return Err(AnnotationError::UnexpectedShape),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(token) => Ok(token),
            _ => Err(AnnotationError::NonStringToken { index }),
        })
        .collect()
}

/// Decodes an already-resolved token sequence.
pub fn decode_tokens<I, S>(tokens: I) -> Result<Vec<Token>, AnnotationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut decoded = Vec::new();
    for token in tokens {
        decode_token(token.as_ref(), &mut decoded)?;
    }
    Ok(decoded)
}

fn decode_token(token: &str, out: &mut Vec<Token>) -> Result<(), AnnotationError> {
    // Only the first two segments count: `a::1::2` references lemma 1 and the
    // third segment is dropped.
    let mut parts = token.split(DELIMITER);
    let word = parts.next().unwrap_or_default();
    let Some(id_part) = parts.next() else {
        out.push(Token::Text(token.to_string()));
        return Ok(());
    };

    let id = id_part.trim_end();
    let trailing = &id_part[id.len()..];
    let lemma_id = parse_leading_int(id).ok_or_else(|| AnnotationError::InvalidLemmaId {
        token: token.to_string(),
    })?;

    out.push(Token::LemmaRef {
        text: word.to_string(),
        lemma_id,
    });
    if !trailing.is_empty() {
        out.push(Token::Text(trailing.to_string()));
    }
    Ok(())
}

/// Reads an integer the way `parseInt` does: leading blanks and a sign are
/// accepted, parsing stops at the first non-digit.
fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let number: i64 = digits[..end].parse().ok()?;
    Some(if negative { -number } else { number })
}

/// Concatenates the display text of `tokens`.
pub fn visible_text(tokens: &[Token]) -> String {
    tokens.iter().map(Token::display_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Token {
        Token::Text(value.to_string())
    }

    fn lemma(value: &str, lemma_id: i64) -> Token {
        Token::LemmaRef {
            text: value.to_string(),
            lemma_id,
        }
    }

    #[test]
    fn detaches_trailing_space_from_reference() {
        let tokens = decode(r#"["hello ", "world::42 "]"#).unwrap();
        assert_eq!(tokens, vec![text("hello "), lemma("world", 42), text(" ")]);
    }

    #[test]
    fn plain_token_is_kept_verbatim() {
        assert_eq!(decode(r#"["plainOnly"]"#).unwrap(), vec![text("plainOnly")]);
    }

    #[test]
    fn reference_without_trailing_space_emits_no_text() {
        let tokens = decode(r#"["Haus::7", "."]"#).unwrap();
        assert_eq!(tokens, vec![lemma("Haus", 7), text(".")]);
    }

    #[test]
    fn object_values_keep_insertion_order() {
        let tokens = decode(r#"{"9": "Der ", "1": "Hund::3 ", "5": "bellt"}"#).unwrap();
        assert_eq!(
            tokens,
            vec![text("Der "), lemma("Hund", 3), text(" "), text("bellt")]
        );
    }

    #[test]
    fn raw_text_is_split_after_spaces() {
        assert_eq!(
            split_tokens("Das Haus::12 steht").unwrap(),
            vec!["Das ", "Haus::12 ", "steht"]
        );
        let tokens = decode("Das Haus::12 steht").unwrap();
        assert_eq!(
            tokens,
            vec![text("Das "), lemma("Haus", 12), text(" "), text("steht")]
        );
    }

    #[test]
    fn raw_text_keeps_line_breaks_and_tabs() {
        let raw = "Das Haus::12\nsteht\that::7\tda";
        let tokens = decode(raw).unwrap();
        assert_eq!(
            tokens,
            vec![
                text("Das "),
                lemma("Haus", 12),
                text("\n"),
                text("steht\t"),
                lemma("hat", 7),
                text("\t"),
                text("da"),
            ]
        );
        assert_eq!(visible_text(&tokens), "Das Haus\nsteht\that\tda");
    }

    #[test]
    fn raw_text_opening_with_a_bracket_is_read_as_json() {
        assert!(matches!(
            decode("[sic] Haus::3 steht"),
            Err(AnnotationError::Json(_))
        ));
        assert!(decode(" sic] Haus::3 steht").is_ok());
    }

    #[test]
    fn empty_inputs_decode_to_nothing() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn visible_text_round_trips_whitespace() {
        let raw = vec!["  Er ", "ging::101 ", "nach ", "Hause::102\n", "\t", "und::5  ", "schlief."];
        let tokens = decode_tokens(&raw).unwrap();
        let expected: String = raw.concat().replace("::101", "").replace("::102", "").replace("::5", "");
        assert_eq!(visible_text(&tokens), expected);
        assert_eq!(tokens[2], text(" "));
        assert_eq!(tokens[5], text("\n"));
        assert_eq!(tokens[8], text("  "));
    }

    #[test]
    fn only_first_two_segments_are_used() {
        // `a::12::34 ` keeps lemma 12; the third segment, and the space after
        // it, are not part of the output.
        let tokens = decode(r#"["a::12::34 "]"#).unwrap();
        assert_eq!(tokens, vec![lemma("a", 12)]);
    }

    #[test]
    fn id_is_read_like_parse_int() {
        assert_eq!(decode(r#"["w::42abc"]"#).unwrap(), vec![lemma("w", 42)]);
        assert_eq!(decode(r#"["w:: 8 "]"#).unwrap(), vec![lemma("w", 8), text(" ")]);
        assert_eq!(decode(r#"["w::-3"]"#).unwrap(), vec![lemma("w", -3)]);
    }

    #[test]
    fn reference_without_digits_fails_the_item() {
        let err = decode(r#"["ok ", "broken::abc"]"#).unwrap_err();
        assert!(matches!(err, AnnotationError::InvalidLemmaId { ref token } if token == "broken::abc"));
        assert!(matches!(
            decode(r#"["empty:: "]"#),
            Err(AnnotationError::InvalidLemmaId { .. })
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            decode(r#"["unterminated"#),
            Err(AnnotationError::Json(_))
        ));
        assert!(matches!(decode("{oops}"), Err(AnnotationError::Json(_))));
    }

    #[test]
    fn non_string_tokens_are_rejected() {
        let err = decode(r#"["a ", 5]"#).unwrap_err();
        assert!(matches!(err, AnnotationError::NonStringToken { index: 1 }));
    }

    #[test]
    fn highlight_matches_reference_id_only() {
        let tokens = decode(r#"["Baum::4 ", "Baum"]"#).unwrap();
        assert!(tokens[0].is_highlighted(Some(4)));
        assert!(!tokens[0].is_highlighted(Some(5)));
        assert!(!tokens[0].is_highlighted(None));
        assert!(!tokens[2].is_highlighted(Some(4)));
    }
}
