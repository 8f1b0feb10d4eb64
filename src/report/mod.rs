//! Report model: derived, serializable view of a validated description.
//!
//! Nothing here can fail. Problems the external renderer tolerates (it
//! falls back or draws something odd) are collected as lints instead.

use crate::schema::{NodeAnchor, SignalTrace, WaveformDescription};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub id: char,
    pub slot: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalView {
    pub index: usize,
    pub name: Option<String>,
    /// Slots covered by the wave string.
    pub slots: usize,
    pub data_slots: usize,
    pub data_labels: usize,
    pub nodes: Vec<NodeView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorView {
    pub id: char,
    pub signal: usize,
    pub slot: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub text: String,
    pub shape: String,
    pub label: Option<String>,
    pub from: AnchorView,
    pub to: AnchorView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LintKind {
    DataSlotsExceedLabels,
    NodeBeyondTimeAxis,
    DuplicateNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lint {
    pub kind: LintKind,
    pub signal: Option<usize>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsView {
    pub signals: usize,
    pub named_signals: usize,
    pub edges: usize,
    pub nodes: usize,
    pub lints: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramReport {
    pub time_axis: usize,
    pub signals: Vec<SignalView>,
    pub edges: Vec<EdgeView>,
    pub lints: Vec<Lint>,
    pub totals: TotalsView,
}

impl DiagramReport {
    pub fn is_clean(&self) -> bool {
        self.lints.is_empty()
    }
}

/// Build the report. Performs:
/// - per-signal slot / data / node statistics
/// - endpoint resolution for every edge
/// - lints: data slots without labels, nodes past the time axis,
///   identifiers placed twice that no edge uses
pub fn build_report(desc: &WaveformDescription) -> DiagramReport {
    let time_axis = desc.time_axis();
    let index = desc.node_index();

    // 1) Per-signal views.
    let signals: Vec<SignalView> = desc
        .signals()
        .iter()
        .enumerate()
        .map(|(i, trace)| signal_view(i, trace))
        .collect();

    // 2) Edges. Construction guarantees every endpoint resolves.
    let mut referenced = BTreeSet::new();
    let mut edges = Vec::with_capacity(desc.edges().len());
    for edge in desc.edges() {
        let Some(ends) = edge.endpoints() else {
            continue;
        };
        let (Some(from), Some(to)) = (index.resolve(ends.from), index.resolve(ends.to)) else {
            continue;
        };
        referenced.insert(ends.from);
        referenced.insert(ends.to);
        edges.push(EdgeView {
            text: edge.text().to_string(),
            shape: ends.shape.to_string(),
            label: edge.label().map(str::to_string),
            from: anchor_view(ends.from, from),
            to: anchor_view(ends.to, to),
        });
    }

    // 3) Lints.
    let mut lints = Vec::new();

    for view in &signals {
        if view.data_slots > view.data_labels {
            lints.push(Lint {
                kind: LintKind::DataSlotsExceedLabels,
                signal: Some(view.index),
                message: format!(
                    "{} has {} data slots but only {} data labels",
                    describe(view),
                    view.data_slots,
                    view.data_labels
                ),
            });
        }

        if time_axis > 0 {
            for node in view.nodes.iter().filter(|n| n.slot >= time_axis) {
                lints.push(Lint {
                    kind: LintKind::NodeBeyondTimeAxis,
                    signal: Some(view.index),
                    message: format!(
                        "node '{}' on {} sits at slot {}, past the {}-slot time axis",
                        node.id,
                        describe(view),
                        node.slot,
                        time_axis
                    ),
                });
            }
        }
    }

    for id in index.ids() {
        let placements = index.placements(id);
        if placements.len() > 1 && !referenced.contains(&id) {
            let at: Vec<String> = placements
                .iter()
                .map(|a| format!("signal {} slot {}", a.signal, a.slot))
                .collect();
            lints.push(Lint {
                kind: LintKind::DuplicateNode,
                signal: None,
                message: format!("node '{}' is placed {} times ({})", id, placements.len(), at.join(", ")),
            });
        }
    }

    DiagramReport {
        time_axis,
        totals: TotalsView {
            signals: signals.len(),
            named_signals: signals.iter().filter(|s| s.name.is_some()).count(),
            edges: edges.len(),
            nodes: index.len(),
            lints: lints.len(),
        },
        signals,
        edges,
        lints,
    }
}

fn signal_view(index: usize, trace: &SignalTrace) -> SignalView {
    SignalView {
        index,
        name: trace.name.clone(),
        slots: trace.slots(),
        data_slots: trace.data_slots(),
        data_labels: trace.data.len(),
        nodes: trace
            .node_ids()
            .map(|(slot, id)| NodeView { id, slot })
            .collect(),
    }
}

fn anchor_view(id: char, anchor: NodeAnchor) -> AnchorView {
    AnchorView {
        id,
        signal: anchor.signal,
        slot: anchor.slot,
    }
}

fn describe(view: &SignalView) -> String {
    match &view.name {
        Some(name) => format!("signal '{}'", name),
        None => format!("signal #{}", view.index),
    }
}
