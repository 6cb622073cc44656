//! Simplify curves.
//!
//! Curves are simplified by dropping the points which contribute least to their shape.
pub mod rdp;

pub use rdp::{rdp_keep, rdp_reduce};
