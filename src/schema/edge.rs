//! Edge annotations.
//!
//! Example edges: "A|a" (vertical link), "a<->b t1" (span labeled t1).
//!
//! The text is kept verbatim. The only structure read out of it is the first
//! whitespace-separated token: its first char is the source node, its last
//! char the target node, and whatever sits between is the connector shape.
//! A one-char token links a node to itself; an empty edge names no node.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeAnnotation(String);

/// Endpoints parsed out of an edge's first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints<'a> {
    pub from: char,
    pub to: char,
    pub shape: &'a str,
}

impl EdgeAnnotation {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// None when the text is empty or all whitespace.
    pub fn endpoints(&self) -> Option<Endpoints<'_>> {
        let token = self.0.split_whitespace().next()?;
        let mut chars = token.char_indices();
        let (_, from) = chars.next()?;
        let Some((to_at, to)) = chars.next_back() else {
            return Some(Endpoints {
                from,
                to: from,
                shape: "",
            });
        };
        Some(Endpoints {
            from,
            to,
            shape: &token[from.len_utf8()..to_at],
        })
    }

    /// Text after the first token, if any.
    pub fn label(&self) -> Option<&str> {
        let trimmed = self.0.trim_start();
        let rest = trimmed[trimmed.find(char::is_whitespace)?..].trim();
        (!rest.is_empty()).then_some(rest)
    }
}

impl From<&str> for EdgeAnnotation {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for EdgeAnnotation {
    fn from(text: String) -> Self {
        Self(text)
    }
}
