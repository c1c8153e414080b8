//! WASM bridge for Viravis — draws the live bar chart in the browser.
//!
//! Compiled via `wasm-pack build --target web`. The host page must contain
//! `<canvas id="canvas">` before the module loads. Optional attributes on
//! that element:
//!
//! - `data-poll="guarded"` skips timer ticks while a request is in flight
//!   (default `overlapping`).
//! - `data-log="debug"` sets the console log level (default `warn`).

mod canvas;
mod logger;
mod poll;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::CanvasSurface;
use viravis_core::config::CANVAS_ELEMENT_ID;
use viravis_core::{ChartClient, ClientConfig, ConfigError, PollPolicy, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// The client shared between the resize listener and in-flight polls.
pub(crate) type SharedClient = Rc<RefCell<ChartClient<CanvasSurface>>>;

/// Module entry point: bind the canvas, track the window size, start polling.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook_setup();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ELEMENT_ID)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {CANVAS_ELEMENT_ID:?}")))?
        .dyn_into::<HtmlCanvasElement>()?;

    logger::init(logger::level_from_attr(
        canvas.get_attribute("data-log").as_deref(),
    ));

    let policy = policy_from_attr(canvas.get_attribute("data-poll").as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let config = ClientConfig::with_policy(policy);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let client: SharedClient = Rc::new(RefCell::new(ChartClient::new(
        CanvasSurface::new(canvas, ctx),
        config.policy,
    )));

    fit_to_window(&window, &client);
    {
        let client = Rc::clone(&client);
        let win = window.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || fit_to_window(&win, &client));
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    poll::start(client, &config);
    Ok(())
}

/// Size the canvas to the window's inner dimensions.
fn fit_to_window(window: &Window, client: &SharedClient) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    match (width, height) {
        (Some(w), Some(h)) => client.borrow_mut().resize(Viewport::new(w, h)),
        _ => log::warn!("window size unavailable, canvas not resized"),
    }
}

fn policy_from_attr(attr: Option<&str>) -> Result<PollPolicy, ConfigError> {
    attr.map_or(Ok(PollPolicy::default()), str::parse)
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("viravis panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
