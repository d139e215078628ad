//! The editing session: picker, crop, adjust, share.
//!
//! [`EditSession`] models the flow as an explicit state machine. Control
//! flow is strictly linear and single-directional; no stage reads state
//! from a later one. Every fallible operation recovers at its own stage
//! boundary: a failed decode leaves the session at the picker, a rejected
//! crop keeps the crop stage active, a failed render keeps the last good
//! preview.
//!
//! The session is single-threaded; the host event loop drives it. The one
//! asynchronous edge is the picker load, which the host performs off-thread
//! and delivers back with the [`LoadTicket`] it was issued. A ticket that is
//! no longer current (the user re-opened the picker in the meantime) is
//! dropped without touching session state.

use thiserror::Error;

use crate::decode::{Bitmap, DecodeError};
use crate::filter::{render_preview, FilterError};
use crate::geometry::{map_view_to_image, CropError, ViewFrame, ViewRect};
use crate::transform::apply_crop;
use crate::Adjustments;

/// Initial crop overlay placement, in view points.
const INITIAL_OVERLAY: ViewRect = ViewRect {
    x: 50.0,
    y: 50.0,
    width: 200.0,
    height: 200.0,
};

/// Error types for session operations.
///
/// Stage errors convert in via `#[from]`; none of them advances or corrupts
/// the session state.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The picker failed to produce a usable bitmap.
    #[error("Image decode failed: {0}")]
    ImageDecode(#[from] DecodeError),

    /// The confirmed crop rectangle was empty or degenerate.
    #[error("Invalid crop region: {0}")]
    InvalidCrop(#[from] CropError),

    /// The preview render failed.
    #[error("Filter pipeline failed: {0}")]
    FilterPipeline(#[from] FilterError),

    /// Share was invoked before any successful render.
    #[error("Nothing to share: no preview has been rendered")]
    NothingToShare,

    /// The operation does not apply to the current stage.
    #[error("Operation `{0}` is not valid in the current stage")]
    WrongStage(&'static str),
}

/// Liveness token for an asynchronous picker load.
///
/// Issued by [`EditSession::begin_load`]; a delivered result is applied only
/// while its ticket is still the most recently issued one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// The three live stages of the flow. Share is a read on the adjust stage,
/// not a stage of its own.
#[derive(Debug)]
enum Stage {
    /// Waiting for the picker collaborator to deliver a bitmap.
    Picking,
    /// Showing the bitmap with the draggable crop overlay.
    Cropping { source: Bitmap, overlay: ViewRect },
    /// Adjusting the cropped bitmap; `preview` is the last good render.
    Adjusting {
        source: Bitmap,
        adjustments: Adjustments,
        preview: Bitmap,
    },
}

/// A single linear editing session.
#[derive(Debug)]
pub struct EditSession {
    stage: Stage,
    load_generation: u64,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Start a new session at the picker stage.
    pub fn new() -> Self {
        Self {
            stage: Stage::Picking,
            load_generation: 0,
        }
    }

    /// Register a new asynchronous picker load.
    ///
    /// Issuing a ticket invalidates all previously issued ones, so only the
    /// latest load can take effect.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        LoadTicket(self.load_generation)
    }

    /// Deliver the result of an asynchronous picker load.
    ///
    /// Returns `Ok(true)` when the bitmap was accepted and the session moved
    /// to the crop stage, `Ok(false)` when the ticket was stale and the
    /// result dropped. A decode error keeps the session at the picker stage.
    pub fn deliver(
        &mut self,
        ticket: LoadTicket,
        result: Result<Bitmap, DecodeError>,
    ) -> Result<bool, SessionError> {
        if ticket.0 != self.load_generation {
            return Ok(false);
        }
        let source = result?;
        self.stage = Stage::Cropping {
            source,
            overlay: INITIAL_OVERLAY,
        };
        Ok(true)
    }

    /// Move the crop overlay by an incremental gesture translation.
    pub fn drag_overlay(&mut self, dx: f64, dy: f64) -> Result<(), SessionError> {
        match &mut self.stage {
            Stage::Cropping { overlay, .. } => {
                overlay.drag_by(dx, dy);
                Ok(())
            }
            _ => Err(SessionError::WrongStage("drag_overlay")),
        }
    }

    /// Current overlay rectangle, while the crop stage is active.
    pub fn overlay(&self) -> Option<ViewRect> {
        match &self.stage {
            Stage::Cropping { overlay, .. } => Some(*overlay),
            _ => None,
        }
    }

    /// Confirm the crop and advance to the adjust stage.
    ///
    /// Maps the overlay into pixel space against the given displayed frame,
    /// crops, and renders the initial (neutral) preview. On any error the
    /// crop stage stays active with its overlay untouched.
    pub fn confirm_crop(&mut self, frame: ViewFrame) -> Result<(), SessionError> {
        let Stage::Cropping { source, overlay } = &self.stage else {
            return Err(SessionError::WrongStage("confirm_crop"));
        };

        let rect = map_view_to_image(*overlay, frame, source.width, source.height)?;
        let cropped = apply_crop(source, rect)?;
        let adjustments = Adjustments::default();
        let preview = render_preview(&cropped, &adjustments)?;

        self.stage = Stage::Adjusting {
            source: cropped,
            adjustments,
            preview,
        };
        Ok(())
    }

    /// Re-render the preview with a new adjustments snapshot.
    ///
    /// Always renders from the cropped source, never from the previous
    /// preview. On a render failure the previous preview stays in place and
    /// the previous adjustments remain current.
    pub fn set_adjustments(&mut self, next: Adjustments) -> Result<&Bitmap, SessionError> {
        let Stage::Adjusting {
            source,
            adjustments,
            preview,
        } = &mut self.stage
        else {
            return Err(SessionError::WrongStage("set_adjustments"));
        };

        let rendered = render_preview(source, &next)?;
        *adjustments = next;
        *preview = rendered;
        Ok(preview)
    }

    /// Adjustments snapshot backing the current preview, if adjusting.
    pub fn adjustments(&self) -> Option<Adjustments> {
        match &self.stage {
            Stage::Adjusting { adjustments, .. } => Some(*adjustments),
            _ => None,
        }
    }

    /// Last successfully rendered preview, if any.
    pub fn preview(&self) -> Option<&Bitmap> {
        match &self.stage {
            Stage::Adjusting { preview, .. } => Some(preview),
            _ => None,
        }
    }

    /// Hand the current preview to the share collaborator.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NothingToShare` when no render has happened
    /// yet; the session state is unaffected.
    pub fn share(&self) -> Result<&Bitmap, SessionError> {
        match &self.stage {
            Stage::Adjusting { preview, .. } => Ok(preview),
            _ => Err(SessionError::NothingToShare),
        }
    }
}
