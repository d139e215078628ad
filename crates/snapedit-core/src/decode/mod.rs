//! Image decoding for the picker boundary.
//!
//! The picker collaborator hands this module raw file bytes; it hands back a
//! single upright [`Bitmap`] or a [`DecodeError`] that never propagates past
//! the picker stage.
//!
//! EXIF orientation is read before decoding and baked into the pixel data,
//! so the crop and adjustment stages always operate on upright pixels.

mod reader;
mod types;

pub use reader::{decode_image, get_orientation};
pub use types::{Bitmap, DecodeError, Orientation};
