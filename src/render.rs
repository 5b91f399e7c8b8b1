//! Canvas 2D drawing for the decorative layers.

pub mod bubbles;
pub mod waves;
