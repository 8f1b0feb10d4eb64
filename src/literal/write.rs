//! Description -> WaveDrom object literal.
//!
//! Output follows the hand-written layout: one trace per line, edges on a
//! single line, keys unquoted, strings single-quoted.

use crate::schema::{SignalTrace, WaveformDescription};

pub fn write_literal(desc: &WaveformDescription) -> String {
    let mut out = String::from("{ signal: [\n");

    let rows: Vec<String> = desc.signals().iter().map(write_trace).collect();
    out.push_str(&rows.join(",\n"));
    out.push_str("\n]");

    if !desc.edges().is_empty() {
        let edges: Vec<String> = desc.edges().iter().map(|e| quote(e.text())).collect();
        out.push_str(",\n  edge: [ ");
        out.push_str(&edges.join(", "));
        out.push_str(" ]");
    }

    out.push_str("\n}\n");
    out
}

fn write_trace(trace: &SignalTrace) -> String {
    let mut fields = Vec::new();
    if let Some(name) = &trace.name {
        fields.push(format!("name: {}", quote(name)));
    }
    if let Some(wave) = &trace.wave {
        fields.push(format!("wave: {}", quote(wave)));
    }
    if !trace.data.is_empty() {
        let labels: Vec<String> = trace.data.iter().map(|d| quote(d)).collect();
        fields.push(format!("data: [{}]", labels.join(", ")));
    }
    if let Some(node) = &trace.node {
        fields.push(format!("node: {}", quote(node)));
    }

    if fields.is_empty() {
        "  {}".to_string()
    } else {
        format!("  {{ {} }}", fields.join(", "))
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
