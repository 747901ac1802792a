//! The readability engine: markup-aware sentence extraction, per-sentence
//! scoring, normalization onto a common scale and the annotation host that
//! recomputes scores for whatever part of a document is on screen.

pub mod annotate;
pub mod document;
pub mod markup;
pub mod normalize;
pub mod pipeline;
pub mod readability;
pub mod sentence;
