//! Node identifier index.
//!
//! Every non-blank char of a trace's `node` string is an anchor. Edges name
//! anchors by identifier, so an identifier must be placed exactly once to
//! resolve.

use crate::schema::SignalTrace;
use std::collections::BTreeMap;

/// Where a node identifier sits: trace index and time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeAnchor {
    pub signal: usize,
    pub slot: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeIndex {
    anchors: BTreeMap<char, Vec<NodeAnchor>>,
}

impl NodeIndex {
    pub fn build(signals: &[SignalTrace]) -> Self {
        let mut anchors: BTreeMap<char, Vec<NodeAnchor>> = BTreeMap::new();
        for (signal, trace) in signals.iter().enumerate() {
            for (slot, id) in trace.node_ids() {
                anchors.entry(id).or_default().push(NodeAnchor { signal, slot });
            }
        }
        Self { anchors }
    }

    /// All placements of `id`, in trace then slot order.
    pub fn placements(&self, id: char) -> &[NodeAnchor] {
        self.anchors.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// The single anchor for `id`; None when missing or placed more than once.
    pub fn resolve(&self, id: char) -> Option<NodeAnchor> {
        match self.placements(id) {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = char> + '_ {
        self.anchors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}
