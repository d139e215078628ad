//! Pixel-space image transformations.
//!
//! Currently the crop stage is the only transform in the flow. Operations
//! consume a source [`crate::Bitmap`] and produce a new one; the source is
//! never modified.

mod crop;

pub use crop::apply_crop;
