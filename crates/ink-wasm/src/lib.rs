//! WASM bridge for Inkpad — exposes the stroke recorder to JavaScript.
//!
//! Compiled via `wasm-pack build --target web` and loaded by the page in
//! `web/`. The page forwards raw pointer offsets and control values; all
//! stroke logic lives on this side of the boundary.

mod canvas2d;

use canvas2d::Canvas2dSurface;
use ink_core::input::PointerEvent;
use ink_core::model::{Color, StrokeStyle};
use ink_core::recorder::StrokeRecorder;
use ink_core::surface::Surface;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The main WASM-facing canvas controller.
///
/// Owns the stroke recorder and the canvas surface for the lifetime of the
/// mounted component. All interaction from the page JS goes through this
/// struct, strictly serialized on the UI thread.
#[wasm_bindgen]
pub struct InkCanvas {
    recorder: StrokeRecorder,
    surface: Canvas2dSurface,
}

#[wasm_bindgen]
impl InkCanvas {
    /// Mount onto the `<canvas>` element with the given id.
    ///
    /// Fails fast when the document, the element, or its 2d context is
    /// missing: invoking the component before mount is an integration
    /// bug the console should surface, not a silent no-op.
    pub fn mount(canvas_id: &str) -> Result<InkCanvas, JsValue> {
        console_error_panic_hook_setup();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document to mount on"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id \"{canvas_id}\"")))?
            .dyn_into()
            .map_err(|_| JsValue::from_str(&format!("\"{canvas_id}\" is not a <canvas>")))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("2d context has an unexpected type"))?;

        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        log::debug!("mounted on \"{canvas_id}\" ({width}x{height})");

        Ok(Self {
            recorder: StrokeRecorder::new(),
            surface: Canvas2dSurface::new(ctx, width, height),
        })
    }

    /// Handle pointer down. Returns `true` if anything was drawn.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.dispatch(&PointerEvent::Down { x, y })
    }

    /// Handle pointer move. Returns `true` if anything was drawn.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.dispatch(&PointerEvent::Move { x, y })
    }

    /// Handle pointer release.
    pub fn pointer_up(&mut self) -> bool {
        self.dispatch(&PointerEvent::Up)
    }

    /// Handle the pointer leaving the canvas. Ends a stroke like a release.
    pub fn pointer_leave(&mut self) -> bool {
        self.dispatch(&PointerEvent::Leave)
    }

    /// Set the pen width. Clamped to the slider's 1–10 range; applies to
    /// the next drawn segment.
    pub fn set_line_width(&mut self, width: f64) {
        self.recorder.set_line_width(width as f32);
    }

    /// Set the pen color from a hex string (`#RGB` or `#RRGGBB`).
    /// Returns `false` and leaves the pen unchanged if it does not parse.
    pub fn set_line_color(&mut self, hex: &str) -> bool {
        match Color::from_hex(hex) {
            Some(color) => {
                self.recorder.set_line_color(color);
                true
            }
            None => {
                log::debug!("rejected color {hex:?}");
                false
            }
        }
    }

    /// Erase the whole canvas. A stroke in progress stays in progress and
    /// resumes from its last point.
    pub fn clear(&mut self) {
        let ops = self.recorder.clear();
        self.surface.apply_all(&ops);
    }

    /// Update the remembered canvas dimensions after the host resizes the
    /// element.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface.resize(width, height);
    }

    /// Current control state as JSON, e.g.
    /// `{"drawing":false,"lineWidth":3.0,"lineColor":"#000000"}`.
    /// The toolbar initializes its widgets from this.
    pub fn state_json(&self) -> String {
        state_to_json(self.recorder.is_drawing(), self.recorder.style())
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl InkCanvas {
    fn dispatch(&mut self, event: &PointerEvent) -> bool {
        let ops = self.recorder.handle(event);
        if ops.is_empty() {
            return false;
        }
        self.surface.apply_all(&ops);
        true
    }
}

/// JS-facing snapshot of the control state.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateSnapshot {
    drawing: bool,
    line_width: f32,
    line_color: String,
}

fn state_to_json(drawing: bool, style: StrokeStyle) -> String {
    let snapshot = StateSnapshot {
        drawing,
        line_width: style.width,
        line_color: style.color.to_hex(),
    };
    serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string())
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Inkpad WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
