//! Schema layer: WaveJSON shapes + the validated description record.
//!
//! This module is intentionally separate from the literal reader and from
//! rendering. It owns:
//! - SignalTrace (one row of the diagram)
//! - EdgeAnnotation (verbatim edge text plus its two endpoints)
//! - NodeIndex (where every node identifier is placed)
//! - WaveformDescription (construct / serialize / deserialize)

pub mod description;
pub mod edge;
pub mod node;
pub mod signal;

pub use description::WaveformDescription;
pub use edge::{EdgeAnnotation, Endpoints};
pub use node::{NodeAnchor, NodeIndex};
pub use signal::SignalTrace;
