//! The waveform description record.
//!
//! JSON shape:
//! {
//!   "signal": [ { "name": "CLK", "wave": "1..0", "node": ".A.." }, ... ],
//!   "edge": [ "A|a", "a<->b t1" ]    // optional
//! }
//!
//! A `WaveformDescription` only exists in validated form: every way of
//! obtaining one (construction, JSON, literal) goes through `new`.

use crate::error::{ParseError, ValidationError, WaveError, WaveResult};
use crate::literal;
use crate::schema::{EdgeAnnotation, NodeIndex, SignalTrace};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Raw top-level shape as it appears on input. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
struct RawDescription {
    signal: Vec<SignalTrace>,

    #[serde(default)]
    edge: Vec<EdgeAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaveformDescription {
    #[serde(rename = "signal")]
    signals: Vec<SignalTrace>,

    #[serde(rename = "edge", skip_serializing_if = "Vec::is_empty")]
    edges: Vec<EdgeAnnotation>,
}

impl WaveformDescription {
    /// Build a description, rejecting it in full on the first violation:
    /// - at least one signal
    /// - every edge endpoint is placed exactly once across all node strings
    ///
    /// Blank edges name no node and are accepted as they are.
    pub fn new(
        signals: Vec<SignalTrace>,
        edges: Vec<EdgeAnnotation>,
    ) -> Result<Self, ValidationError> {
        if signals.is_empty() {
            return Err(ValidationError::EmptySignals);
        }

        let nodes = NodeIndex::build(&signals);
        for (index, edge) in edges.iter().enumerate() {
            let Some(ends) = edge.endpoints() else {
                continue;
            };

            for node in [ends.from, ends.to] {
                match nodes.placements(node).len() {
                    1 => {}
                    0 => {
                        return Err(ValidationError::UnknownNode {
                            index,
                            text: edge.text().to_string(),
                            node,
                        });
                    }
                    count => {
                        return Err(ValidationError::AmbiguousNode {
                            index,
                            text: edge.text().to_string(),
                            node,
                            count,
                        });
                    }
                }
            }
        }

        debug!(
            signals = signals.len(),
            edges = edges.len(),
            nodes = nodes.len(),
            "validated waveform description"
        );

        Ok(Self { signals, edges })
    }

    pub fn signals(&self) -> &[SignalTrace] {
        &self.signals
    }

    pub fn edges(&self) -> &[EdgeAnnotation] {
        &self.edges
    }

    pub fn into_parts(self) -> (Vec<SignalTrace>, Vec<EdgeAnnotation>) {
        (self.signals, self.edges)
    }

    pub fn node_index(&self) -> NodeIndex {
        NodeIndex::build(&self.signals)
    }

    /// Slots of the longest wave string.
    pub fn time_axis(&self) -> usize {
        self.signals.iter().map(SignalTrace::slots).max().unwrap_or(0)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// WaveDrom object-literal form (unquoted keys, single-quoted strings).
    pub fn to_literal(&self) -> String {
        literal::write_literal(self)
    }

    /// Strict JSON input.
    pub fn from_json(text: &str) -> WaveResult<Self> {
        let raw: RawDescription = serde_json::from_str(text).map_err(ParseError::from)?;
        Ok(Self::new(raw.signal, raw.edge)?)
    }

    /// JSON or the relaxed object-literal form WaveDrom sources use.
    pub fn from_literal(text: &str) -> WaveResult<Self> {
        let json = literal::normalize_literal(text)?;
        Self::from_json(&json)
    }
}

impl FromStr for WaveformDescription {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_literal(s)
    }
}

impl TryFrom<(Vec<SignalTrace>, Vec<EdgeAnnotation>)> for WaveformDescription {
    type Error = ValidationError;

    fn try_from(
        (signals, edges): (Vec<SignalTrace>, Vec<EdgeAnnotation>),
    ) -> Result<Self, Self::Error> {
        Self::new(signals, edges)
    }
}
