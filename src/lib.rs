//! WaveJSON timing-diagram descriptions.
//!
//! A description lists signal traces (name, wave string, data labels, node
//! anchors) and edge annotations between nodes. The crate validates, reads
//! and writes descriptions; drawing them is left to WaveDrom.

pub mod error;
pub mod literal;
pub mod render;
pub mod report;
pub mod schema;

pub use error::{ParseError, ValidationError, WaveError, WaveResult};
pub use report::{DiagramReport, Lint, LintKind, build_report};
pub use schema::{EdgeAnnotation, NodeAnchor, NodeIndex, SignalTrace, WaveformDescription};

/// The SPI mode 2 (CPOL=1, CPHA=0) bus timing diagram, in literal form.
pub const SPI_MODE2_SAMPLE: &str = include_str!("../diagrams/spi_mode2.js");
