use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

use crate::error::{Result, SketchError};

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<()> {
    window()
        .ok_or_else(|| SketchError::Js("no window".into()))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(SketchError::js)?;
    Ok(())
}

/// Runs `frame` once per display refresh until it returns an error.
///
/// The next frame is requested at the end of each tick, so the loop keeps
/// itself alive with no external driver. An error is logged and ends the
/// loop; there is no other way to stop it.
pub fn run_forever<F>(mut frame: F) -> Result<()>
where
    F: FnMut() -> Result<()> + 'static,
{
    // `f` holds the animation-frame closure so that it can re-request itself.
    // The `Option` lets us create the `Closure` first and then reach it from
    // inside its own body.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(err) = frame() {
            log::error!("render loop stopped: {err}");
            return;
        }

        let scheduled = match f.borrow().as_ref() {
            Some(callback) => request_frame(callback),
            None => Ok(()),
        };
        if let Err(err) = scheduled {
            log::error!("could not schedule next frame: {err}");
        }
    }) as Box<dyn FnMut()>));

    let first = g.borrow();
    first.as_ref().map_or(Ok(()), request_frame)
}

/// Calls `on_resize` with the window's inner size now and on every `resize`
/// event, undebounced.
pub fn track_window_size<F>(mut on_resize: F) -> Result<()>
where
    F: FnMut(u32, u32) + 'static,
{
    let win = window().ok_or_else(|| SketchError::Js("no window".into()))?;
    let (w, h) = inner_size(&win)?;
    on_resize(w, h);

    let resize_closure = Closure::wrap(Box::new(move || {
        let Some(win) = window() else { return };
        match inner_size(&win) {
            Ok((w, h)) => on_resize(w, h),
            Err(err) => log::warn!("ignoring resize: {err}"),
        }
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
        .map_err(SketchError::js)?;
    resize_closure.forget();
    Ok(())
}

/// Window inner width and height in CSS pixels.
pub fn inner_size(win: &web_sys::Window) -> Result<(u32, u32)> {
    let read = |value: std::result::Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value
            .map_err(SketchError::js)?
            .as_f64()
            .map(|v| v as u32)
            .ok_or_else(|| SketchError::Js("window size is not a number".into()))
    };
    Ok((read(win.inner_width())?, read(win.inner_height())?))
}

/// `performance.now()` in milliseconds.
pub fn now_ms() -> Result<f64> {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .ok_or_else(|| SketchError::Js("performance timer unavailable".into()))
}
