//! Isometric drawing primitives.
//!
//! Everything here is pure: given the same projection and inputs, the emitted markup is
//! byte-identical.

/// Filled prism primitive.
pub mod block;
/// Bitmap font rendered as stacks of blocks.
pub mod font;
/// Grid-to-screen projection.
pub mod projection;
