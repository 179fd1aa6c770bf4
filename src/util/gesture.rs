//! Window-level pointer capture for canvas drags.
//!
//! Item drags listen on the window rather than the element so fast
//! pointer movement cannot escape the target. The listeners are removed
//! when the gesture is dropped; leaking them would keep stale closures
//! firing on every later pointer move.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::PointerEvent;

/// An in-progress drag. Dropping it detaches both window listeners.
pub struct PointerGesture {
    window: web_sys::Window,
    on_move: Closure<dyn FnMut(PointerEvent)>,
    on_up: Closure<dyn FnMut(PointerEvent)>,
}

impl PointerGesture {
    /// Attach `pointermove`/`pointerup` listeners on the window. Returns
    /// `None` outside a browser or when attaching fails.
    pub fn begin(
        on_move: impl FnMut(PointerEvent) + 'static,
        on_up: impl FnMut(PointerEvent) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let on_move = Closure::wrap(Box::new(on_move) as Box<dyn FnMut(PointerEvent)>);
        let on_up = Closure::wrap(Box::new(on_up) as Box<dyn FnMut(PointerEvent)>);
        window
            .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())
            .ok()?;
        if window
            .add_event_listener_with_callback("pointerup", on_up.as_ref().unchecked_ref())
            .is_err()
        {
            let _ = window.remove_event_listener_with_callback(
                "pointermove",
                on_move.as_ref().unchecked_ref(),
            );
            return None;
        }
        Some(Self { window, on_move, on_up })
    }
}

impl Drop for PointerGesture {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.on_move.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "pointerup",
            self.on_up.as_ref().unchecked_ref(),
        );
    }
}
