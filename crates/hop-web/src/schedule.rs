//! Browser scheduling: the self-rescheduling animation frame loop and key listeners.

use std::cell::RefCell;
use std::rc::Rc;

use hop_engine::InputEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{KeyboardEvent, Window};

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// Run `frame` once per display refresh, forever.
///
/// Each callback re-registers itself with `requestAnimationFrame` after
/// `frame` returns, so one frame always completes before the next is queued.
/// The closure keeps itself alive through the `Rc` cycle; there is no stop.
pub fn run_animation_loop(mut frame: impl FnMut() + 'static) -> Result<(), JsValue> {
    let window = window()?;
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let reschedule = slot.clone();
    let win = window.clone();

    *slot.borrow_mut() = Some(Closure::new(move || {
        frame();
        if let Some(callback) = reschedule.borrow().as_ref() {
            if let Err(err) = win.request_animation_frame(callback.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed, loop stopped: {:?}", err);
            }
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// Forward window `keydown`/`keyup` events to `sink` as [`InputEvent`]s.
/// Listeners live for the rest of the page.
pub fn listen_keys(sink: impl Fn(InputEvent) + 'static) -> Result<(), JsValue> {
    let window = window()?;
    let sink = Rc::new(sink);

    let down_sink = sink.clone();
    let on_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
        (*down_sink)(InputEvent::KeyDown { key: e.key() });
    });
    let on_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
        (*sink)(InputEvent::KeyUp { key: e.key() });
    });

    window.add_event_listener_with_callback("keydown", on_down.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("keyup", on_up.as_ref().unchecked_ref())?;
    on_down.forget();
    on_up.forget();
    Ok(())
}
