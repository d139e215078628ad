//! Session bindings: the linear pick, crop, adjust, share flow.
//!
//! Wraps [`snapedit_core::EditSession`] for hosts that want the whole flow
//! managed in WASM rather than wiring the stage bindings together
//! themselves. Stage errors surface as thrown strings; the session stays on
//! its current stage, so the host can simply retry.

use crate::filter::Adjustments;
use crate::types::JsBitmap;
use snapedit_core::geometry::ViewFrame;
use snapedit_core::{EditSession, LoadTicket, SessionError};
use wasm_bindgen::prelude::*;

/// An editing session for JavaScript.
#[wasm_bindgen]
pub struct JsEditSession {
    inner: EditSession,
    // Tickets are handed to JS as plain numbers
    tickets: Vec<(u32, LoadTicket)>,
    next_ticket_id: u32,
}

#[wasm_bindgen]
impl JsEditSession {
    /// Start a new session at the picker stage.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: EditSession::new(),
            tickets: Vec::new(),
            next_ticket_id: 0,
        }
    }

    /// Register a new asynchronous picker load and get its ticket id.
    ///
    /// Starting a new load invalidates all earlier tickets.
    pub fn begin_load(&mut self) -> u32 {
        let ticket = self.inner.begin_load();
        self.next_ticket_id += 1;
        let id = self.next_ticket_id;
        self.tickets.push((id, ticket));
        id
    }

    /// Deliver picked image bytes for a previously issued ticket.
    ///
    /// Returns `true` when the image was accepted and the session moved to
    /// the crop stage, `false` when the ticket was stale and the bytes were
    /// dropped (the user started another pick in the meantime).
    ///
    /// # Errors
    ///
    /// Throws on decode failure; the session stays at the picker stage.
    pub fn deliver_picked_bytes(&mut self, ticket_id: u32, bytes: &[u8]) -> Result<bool, JsValue> {
        let Some(&(_, ticket)) = self.tickets.iter().find(|(id, _)| *id == ticket_id) else {
            return Ok(false);
        };

        let decoded = snapedit_core::decode_image(bytes);
        self.inner
            .deliver(ticket, decoded)
            .map_err(|e| js_error(&e))
    }

    /// Move the crop overlay by an incremental gesture translation.
    pub fn drag_overlay(&mut self, dx: f64, dy: f64) -> Result<(), JsValue> {
        self.inner.drag_overlay(dx, dy).map_err(|e| js_error(&e))
    }

    /// Confirm the crop against the displayed image frame and advance to
    /// the adjust stage.
    pub fn confirm_crop(
        &mut self,
        frame_x: f64,
        frame_y: f64,
        frame_width: f64,
        frame_height: f64,
    ) -> Result<(), JsValue> {
        let frame = ViewFrame::new(frame_x, frame_y, frame_width, frame_height);
        self.inner.confirm_crop(frame).map_err(|e| js_error(&e))
    }

    /// Re-render the preview with new adjustments and return it.
    pub fn set_adjustments(&mut self, adjustments: &Adjustments) -> Result<JsBitmap, JsValue> {
        self.inner
            .set_adjustments(*adjustments.inner())
            .map(|preview| JsBitmap::from_bitmap(preview.clone()))
            .map_err(|e| js_error(&e))
    }

    /// Get the current preview without re-rendering, if one exists.
    pub fn preview(&self) -> Option<JsBitmap> {
        self.inner
            .preview()
            .map(|preview| JsBitmap::from_bitmap(preview.clone()))
    }

    /// Hand the current preview to the share surface.
    ///
    /// # Errors
    ///
    /// Throws `NothingToShare` when no render has happened yet.
    pub fn share(&self) -> Result<JsBitmap, JsValue> {
        self.inner
            .share()
            .map(|preview| JsBitmap::from_bitmap(preview.clone()))
            .map_err(|e| js_error(&e))
    }
}

impl Default for JsEditSession {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(e: &SessionError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
