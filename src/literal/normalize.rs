//! Relaxed object literal -> strict JSON.
//!
//! Handled:
//! - 'single-quoted' strings (with \' escapes); embedded " gets escaped
//! - // line and /* block */ comments
//! - bare identifier keys: {name: ...} => {"name": ...}
//! - trailing commas before ] or }
//!
//! Anything else is passed through and left for serde_json to judge.

use crate::error::ParseError;
use regex::Regex;
use std::iter::Peekable;
use std::str::CharIndices;
use std::sync::LazyLock;
use tracing::trace;

static BARE_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<lead>[{,]\s*)(?P<key>[A-Za-z_$][A-Za-z0-9_$]*)(?P<gap>\s*):"#)
        .expect("bare key pattern compiles")
});

static TRAILING_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#",(?P<close>\s*[\]}])"#).expect("trailing comma pattern compiles"));

/// Source split into code runs (comments dropped) and JSON-ready strings.
#[derive(Debug, PartialEq, Eq)]
enum Piece {
    Code(String),
    Str(String),
}

pub fn normalize_literal(text: &str) -> Result<String, ParseError> {
    let pieces = split_pieces(text)?;
    trace!(pieces = pieces.len(), "split object literal");

    let mut out = String::with_capacity(text.len() + 32);
    for piece in &pieces {
        match piece {
            Piece::Code(code) => {
                let code = BARE_KEY_RE.replace_all(code, r#"${lead}"${key}"${gap}:"#);
                let code = TRAILING_COMMA_RE.replace_all(&code, "${close}");
                out.push_str(&code);
            }
            Piece::Str(s) => out.push_str(s),
        }
    }
    Ok(out)
}

fn split_pieces(text: &str) -> Result<Vec<Piece>, ParseError> {
    let mut pieces = Vec::new();
    let mut code = String::new();
    let mut chars = text.char_indices().peekable();

    while let Some((at, c)) = chars.next() {
        match c {
            '\'' | '"' => {
                if !code.is_empty() {
                    pieces.push(Piece::Code(std::mem::take(&mut code)));
                }
                pieces.push(Piece::Str(read_string(&mut chars, c, at)?));
            }
            '/' if matches!(chars.peek(), Some((_, '/'))) => {
                for (_, c) in chars.by_ref() {
                    if c == '\n' {
                        code.push('\n');
                        break;
                    }
                }
            }
            '/' if matches!(chars.peek(), Some((_, '*'))) => {
                chars.next();
                let mut prev = '\0';
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        closed = true;
                        break;
                    }
                    prev = c;
                }
                if !closed {
                    return Err(ParseError::UnterminatedComment { offset: at });
                }
                code.push(' ');
            }
            _ => code.push(c),
        }
    }

    if !code.is_empty() {
        pieces.push(Piece::Code(code));
    }
    Ok(pieces)
}

/// Read one string body (opening quote already consumed) as a JSON string.
fn read_string(
    chars: &mut Peekable<CharIndices<'_>>,
    quote: char,
    start: usize,
) -> Result<String, ParseError> {
    let mut out = String::from('"');
    loop {
        let Some((_, c)) = chars.next() else {
            return Err(ParseError::UnterminatedString { offset: start });
        };
        match c {
            c if c == quote => break,
            '\\' => {
                let Some((_, escaped)) = chars.next() else {
                    return Err(ParseError::UnterminatedString { offset: start });
                };
                match escaped {
                    '\'' => out.push('\''),
                    // line continuations
                    '\n' | '\u{2028}' | '\u{2029}' => {}
                    '\r' => {
                        if matches!(chars.peek(), Some((_, '\n'))) {
                            chars.next();
                        }
                    }
                    other => {
                        out.push('\\');
                        out.push(other);
                    }
                }
            }
            '"' => out.push_str("\\\""),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    Ok(out)
}
