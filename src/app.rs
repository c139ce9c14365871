use crate::constants::LOAD_EVENT;
use crate::core::StateBinder;
use crate::dom::{self, DomSurface};
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

thread_local! {
    // Set once the page has loaded and the binder initialized
    static BINDER: RefCell<Option<StateBinder<DomSurface>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("auction-view starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "complete" {
        on_load();
    } else {
        dom::add_window_listener(LOAD_EVENT, on_load).map_err(to_js)?;
    }
    Ok(())
}

fn on_load() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mut binder = StateBinder::new(DomSurface::new(document));
    binder.initialize()?;
    BINDER.with(|slot| *slot.borrow_mut() = Some(binder));
    Ok(())
}

/// Switch the page to the view named `to` (`"bidding"`, `"results"`).
#[wasm_bindgen(js_name = changeState)]
pub fn change_state(to: &str) -> Result<(), JsValue> {
    BINDER
        .with(|slot| -> anyhow::Result<()> {
            let mut slot = slot.borrow_mut();
            let binder = slot
                .as_mut()
                .ok_or_else(|| anyhow::anyhow!("view state not initialized"))?;
            binder.transition_to_id(to)?;
            Ok(())
        })
        .map_err(|e| {
            log::error!("changeState({:?}) failed: {}", to, e);
            to_js(e)
        })
}

#[wasm_bindgen(js_name = currentState)]
pub fn current_state() -> Option<String> {
    BINDER.with(|slot| slot.borrow().as_ref().map(|b| b.current().id().to_string()))
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}
