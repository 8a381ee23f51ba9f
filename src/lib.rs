//! Browser entry point for the website switcher widget.
//!
//! Interaction state lives in `website-switcher-core`; this crate finds the
//! rendered markup, feeds DOM events into that state and applies the
//! resulting intents back to the page.

mod dom;
mod input;
mod markup;
mod runtime;
mod storage;
mod widget;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

use website_switcher_core::SwitcherOptions;

#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| {
            runtime::mount_all(&SwitcherOptions::default());
        })
        .forget();
    } else {
        runtime::mount_all(&SwitcherOptions::default());
    }
}

/// Mounts switchers added to the page after load. Already mounted roots are
/// left alone. Returns the number of newly mounted widgets.
#[wasm_bindgen(js_name = mountAll)]
pub fn mount_all() -> u32 {
    runtime::mount_all(&SwitcherOptions::default()) as u32
}
