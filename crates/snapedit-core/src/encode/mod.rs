//! Image encoding for the share handoff.
//!
//! The share collaborator on the host side consumes encoded bytes, so the
//! core provides JPEG export of the rendered preview.

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError};
