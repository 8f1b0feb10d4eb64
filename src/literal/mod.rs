//! WaveDrom object-literal form.
//!
//! WaveDrom sources are JavaScript object literals rather than JSON:
//!
//! { signal: [
//!   {name: 'CLK', wave: '1...01010|101...', node: '....B......C......'},
//!   {              node: '.a..b......c.d.e' }
//! ],
//!   edge: [ 'A|a', 'a<->b t1' ]
//! }
//!
//! `normalize` turns that into strict JSON for serde; `write` emits it.

pub mod normalize;
pub mod write;

pub use normalize::normalize_literal;
pub use write::write_literal;
