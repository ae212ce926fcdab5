//! Public library API for decoding versioned sprite render data and
//! reconstructing sprite outlines from its geometry.

/// Sprite render-record decoding, version predicates, outline reconstruction, and dependency emission.
pub mod sprite;
