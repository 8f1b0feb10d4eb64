//! One row of a timing diagram.
//!
//! JSON shape (every key optional):
//! {
//!   "name": "MOSI",               // label drawn left of the trace
//!   "wave": "x..2.2.2.|2.x...",   // one char per time slot
//!   "data": ["MSB", "", "", "LSB"],  // or "MSB a b LSB"
//!   "node": "....B......C......"  // '.' = blank, any other char = node id
//! }

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalTrace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_data",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub data: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
}

/// Data labels as they may appear on input.
#[derive(Deserialize)]
#[serde(untagged)]
enum DataSpec {
    // data: ['MSB', '', 'LSB']
    List(Vec<String>),
    // data: 'MSB x LSB', split on whitespace
    Text(String),
}

fn deserialize_data<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<DataSpec>::deserialize(deserializer)? {
        Some(DataSpec::List(labels)) => labels,
        Some(DataSpec::Text(text)) => text.split_whitespace().map(str::to_string).collect(),
        None => Vec::new(),
    })
}

/// Chars in a wave string that take their label from `data`.
pub fn is_data_slot(c: char) -> bool {
    matches!(c, '2'..='9' | '=')
}

/// Node strings use '.' for "no node here".
pub fn is_node_blank(c: char) -> bool {
    c == '.'
}

impl SignalTrace {
    /// A trace that only anchors nodes, with no name or wave.
    pub fn spacer(node: impl Into<String>) -> Self {
        Self {
            node: Some(node.into()),
            ..Self::default()
        }
    }

    /// Number of time slots covered by `wave`.
    pub fn slots(&self) -> usize {
        self.wave.as_deref().map_or(0, |w| w.chars().count())
    }

    /// Number of data-slot chars in `wave`.
    pub fn data_slots(&self) -> usize {
        self.wave
            .as_deref()
            .map_or(0, |w| w.chars().filter(|&c| is_data_slot(c)).count())
    }

    /// (slot, id) for every non-blank char of `node`.
    pub fn node_ids(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.node
            .as_deref()
            .unwrap_or("")
            .chars()
            .enumerate()
            .filter(|&(_, c)| !is_node_blank(c))
    }
}
