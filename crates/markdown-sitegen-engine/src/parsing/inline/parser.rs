use regex::Regex;

use super::{
    kinds::{Bold, CodeSpan, Image, Italic, Link},
    types::{Span, SpanKind},
};

/// Tokenizer state between stages.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// Text that later stages may still split.
    Open(String),
    /// Unpaired delimiter text, skipped by the remaining delimiter stages.
    Literal(String),
    /// A finished span.
    Done(Span),
}

/// Splits inline text into a sequence of [`Span`]s.
///
/// # Stage Order
/// `**` bold, `*` italic, `` ` `` code, then images, then links. Each stage
/// only rewrites text that no earlier stage claimed; the content of spans
/// produced by an earlier stage is never parsed again.
///
/// # Unpaired Delimiters
/// A delimiter without a partner, or a pair with nothing between them, is
/// kept verbatim and no later delimiter stage looks at it again. Before
/// reference extraction it rejoins the text around it, so `"2 ** 3"` comes
/// back as one Text span.
///
/// # Returns
/// A non-empty vector. Only empty input yields an empty Text span.
pub fn tokenize(text: &str) -> Vec<Span> {
    let mut tokens = vec![Token::Open(text.to_string())];
    tokens = split_delimiter(tokens, Bold::DELIMITER, SpanKind::Bold);
    tokens = split_delimiter(tokens, Italic::DELIMITER, SpanKind::Italic);
    tokens = split_delimiter(tokens, CodeSpan::TICK, SpanKind::Code);
    tokens = merge_literals(tokens);
    tokens = extract_references(tokens, Image::regex(), |alt, url| Span::image(alt, url));
    tokens = extract_references(tokens, Link::regex(), |label, url| Span::link(label, url));

    let mut spans: Vec<Span> = tokens
        .into_iter()
        .map(|token| match token {
            Token::Open(text) | Token::Literal(text) => Span::text(text),
            Token::Done(span) => span,
        })
        .collect();

    if spans.is_empty() {
        spans.push(Span::text(""));
    }
    spans
}

/// Splits every open text token on `delimiter`, alternating text and `kind`.
///
/// With an odd number of delimiters the last one has no partner and becomes
/// a literal. An empty run between two delimiters keeps both as a literal.
fn split_delimiter(tokens: Vec<Token>, delimiter: &str, kind: SpanKind) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        let text = match token {
            Token::Open(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut parts: Vec<&str> = text.split(delimiter).collect();
        // Even part count means an unmatched trailing delimiter
        let tail = if parts.len() % 2 == 0 { parts.pop() } else { None };

        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 0 {
                if !part.is_empty() {
                    out.push(Token::Open(part.to_string()));
                }
            } else if part.is_empty() {
                out.push(Token::Literal(delimiter.repeat(2)));
            } else {
                out.push(Token::Done(Span::new(kind, part)));
            }
        }

        if let Some(tail) = tail {
            out.push(Token::Literal(delimiter.to_string()));
            if !tail.is_empty() {
                out.push(Token::Open(tail.to_string()));
            }
        }
    }

    out
}

/// Joins literals with neighbouring open text into single open tokens.
fn merge_literals(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let text = match token {
            Token::Open(text) | Token::Literal(text) => text,
            done => {
                out.push(done);
                continue;
            }
        };
        if let Some(Token::Open(prev)) = out.last_mut() {
            prev.push_str(&text);
        } else {
            out.push(Token::Open(text));
        }
    }

    out
}

/// Pulls `[label](url)`-style references out of open text, left to right.
///
/// `make` builds the span from the captured label and destination; text
/// around each match is kept verbatim when non-empty.
fn extract_references(
    tokens: Vec<Token>,
    pattern: &Regex,
    make: fn(String, String) -> Span,
) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        let text = match token {
            Token::Open(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut last = 0;
        for caps in pattern.captures_iter(&text) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() > last {
                out.push(Token::Open(text[last..whole.start()].to_string()));
            }
            out.push(Token::Done(make(caps[1].to_string(), caps[2].to_string())));
            last = whole.end();
        }
        if last < text.len() {
            out.push(Token::Open(text[last..].to_string()));
        }
    }

    out
}
