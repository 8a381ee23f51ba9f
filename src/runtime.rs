use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, NodeList};

use website_switcher_core::SwitcherOptions;

use crate::dom::{MOUNTED_ATTR, ROOT_SELECTOR};
use crate::storage::js_err;
use crate::widget::Widget;

thread_local! {
    static WIDGETS: RefCell<Vec<Rc<Widget>>> = RefCell::new(Vec::new());
    static PAGE_LISTENERS: RefCell<Vec<EventListener>> = RefCell::new(Vec::new());
}

/// Mounts every unmounted `.website-switcher` root in the document and
/// returns how many were added.
pub(crate) fn mount_all(options: &SwitcherOptions) -> usize {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return 0;
    };
    let Ok(roots) = document.query_selector_all(ROOT_SELECTOR) else {
        return 0;
    };
    mount_roots(&document, &roots, options).len()
}

pub(crate) fn mount_roots(
    document: &Document,
    roots: &NodeList,
    options: &SwitcherOptions,
) -> Vec<Rc<Widget>> {
    let mut mounted = Vec::new();
    for index in 0..roots.length() {
        let Some(root) = roots
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        if root.has_attribute(MOUNTED_ATTR) {
            continue;
        }
        // Marked before mounting so a failed mark cannot lead to a second mount.
        if let Err(err) = root.set_attribute(MOUNTED_ATTR, "") {
            gloo::console::warn!(format!(
                "website switcher: root not mounted: {}",
                js_err(err)
            ));
            continue;
        }
        match Widget::mount(document, root.clone(), options) {
            Some(widget) => mounted.push(widget),
            None => {
                if let Err(err) = root.remove_attribute(MOUNTED_ATTR) {
                    gloo::console::warn!(format!(
                        "website switcher: mount mark not cleared: {}",
                        js_err(err)
                    ));
                }
            }
        }
    }
    let live = WIDGETS.with(|slot| {
        let mut widgets = slot.borrow_mut();
        widgets.retain(|widget| widget.is_connected());
        widgets.extend(mounted.iter().cloned());
        widgets.len()
    });
    if live > 0 {
        install_page_listeners(document);
    }
    mounted
}

/// Widgets whose root left the document are dropped here, which also
/// detaches their element listeners.
fn live_widgets() -> Vec<Rc<Widget>> {
    WIDGETS.with(|slot| {
        let mut widgets = slot.borrow_mut();
        widgets.retain(|widget| widget.is_connected());
        widgets.clone()
    })
}

fn for_each_widget<F>(action: F)
where
    F: Fn(&Rc<Widget>),
{
    for widget in &live_widgets() {
        action(widget);
    }
}

#[cfg(test)]
fn is_registered(widget: &Rc<Widget>) -> bool {
    WIDGETS.with(|slot| slot.borrow().iter().any(|other| Rc::ptr_eq(other, widget)))
}

fn page_listener<F>(target: &web_sys::EventTarget, event_type: &'static str, action: F) -> EventListener
where
    F: Fn(&Rc<Widget>, &Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event_type,
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        },
        move |event: &Event| for_each_widget(|widget| action(widget, event)),
    )
}

// One delegated set per page; each event fans out to every mounted widget.
fn install_page_listeners(document: &Document) {
    let installed = PAGE_LISTENERS.with(|slot| !slot.borrow().is_empty());
    if installed {
        return;
    }
    let mut listeners = Vec::new();
    for event_type in ["mousemove", "touchmove"] {
        listeners.push(page_listener(document, event_type, |widget, event| {
            widget.on_pointer_move(event)
        }));
    }
    for event_type in ["mouseup", "touchend", "touchcancel"] {
        listeners.push(page_listener(document, event_type, |widget, _| {
            widget.on_release()
        }));
    }
    listeners.push(page_listener(document, "click", |widget, event| {
        widget.on_document_click(event)
    }));
    listeners.push(page_listener(document, "keydown", |widget, event| {
        widget.on_document_keydown(event)
    }));
    if let Some(window) = web_sys::window() {
        listeners.push(page_listener(&window, "resize", |widget, _| {
            widget.on_resize()
        }));
    }
    PAGE_LISTENERS.with(|slot| {
        *slot.borrow_mut() = listeners;
    });
}
