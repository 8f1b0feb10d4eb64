//! Hand-off to the external WaveDrom renderer.

pub mod html;

pub use html::{RenderOptions, render_html_page};
