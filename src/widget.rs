use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent};

use website_switcher_core::{
    refit_after_resize, restore_position, Intent, InteractionState, PositionStore,
    SwitcherOptions, TimerToken, WidgetConfig,
};

use crate::dom::{self, WidgetElements};
use crate::input;
use crate::markup;
use crate::storage::LocalStorage;

pub(crate) struct Widget {
    elements: WidgetElements,
    config: WidgetConfig,
    state: RefCell<InteractionState>,
    store: PositionStore<LocalStorage>,
    #[allow(dead_code)]
    listeners: RefCell<Vec<EventListener>>,
}

impl Widget {
    /// Returns `None` when the root is missing its toggle or panel.
    pub(crate) fn mount(
        document: &Document,
        root: HtmlElement,
        options: &SwitcherOptions,
    ) -> Option<Rc<Self>> {
        let Some(elements) = WidgetElements::discover(document, root) else {
            gloo::console::log!("website switcher: skipped root without toggle or dropdown");
            return None;
        };
        let config = markup::load_config(&elements);
        elements.apply_button_colors(
            config.button_background_color.as_deref(),
            config.button_text_color.as_deref(),
        );
        let store = PositionStore::with_key(LocalStorage::open(), &options.storage_key);
        let widget = Rc::new(Self {
            elements,
            config,
            state: RefCell::new(InteractionState::new(options.timing)),
            store,
            listeners: RefCell::new(Vec::new()),
        });
        widget.restore_position();
        widget.attach_listeners();
        gloo::console::log!(
            "website switcher: mounted",
            widget.config.destinations.len() as u32,
            widget.config.desktop_placement.as_str(),
            widget.config.mobile_placement.as_str()
        );
        Some(widget)
    }

    pub(crate) fn is_connected(&self) -> bool {
        self.elements.root.is_connected()
    }

    #[cfg(test)]
    pub(crate) fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> std::cell::Ref<'_, InteractionState> {
        self.state.borrow()
    }

    #[cfg(test)]
    pub(crate) fn elements(&self) -> &WidgetElements {
        &self.elements
    }

    fn restore_position(&self) {
        let Some(viewport) = dom::viewport() else {
            return;
        };
        let record = self.store.load();
        if let Some(intent) = restore_position(&record, viewport) {
            self.elements.apply(&intent);
        }
    }

    fn attach_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::with_capacity(4);

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(
            &self.elements.toggle,
            "click",
            move |event: &Event| {
                if let Some(widget) = weak.upgrade() {
                    widget.on_toggle_click(event);
                }
            },
        ));

        for event_type in ["mousedown", "touchstart"] {
            let weak = Rc::downgrade(self);
            listeners.push(EventListener::new_with_options(
                &self.elements.root,
                event_type,
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event: &Event| {
                    if let Some(widget) = weak.upgrade() {
                        widget.on_press(event);
                    }
                },
            ));
        }

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new_with_options(
            &self.elements.dropdown,
            "keydown",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                if let Some(widget) = weak.upgrade() {
                    widget.on_panel_keydown(event);
                }
            },
        ));

        *self.listeners.borrow_mut() = listeners;
    }

    pub(crate) fn on_toggle_click(self: &Rc<Self>, event: &Event) {
        if self.state.borrow().is_dragging() {
            return;
        }
        event.stop_propagation();
        let intents = self.state.borrow_mut().activate();
        self.apply(intents);
    }

    pub(crate) fn on_press(self: &Rc<Self>, event: &Event) {
        let Some(pointer) = input::client_point(event) else {
            return;
        };
        let target = self.elements.press_target(event);
        let rect = self.elements.rect();
        let intents = self.state.borrow_mut().press(target, pointer, rect);
        if let Some(intents) = intents {
            event.prevent_default();
            self.apply(intents);
        }
    }

    pub(crate) fn on_pointer_move(self: &Rc<Self>, event: &Event) {
        if !self.state.borrow().is_dragging() {
            return;
        }
        event.prevent_default();
        let (Some(pointer), Some(viewport)) = (input::client_point(event), dom::viewport()) else {
            return;
        };
        let rect = self.elements.rect();
        let intent = self.state.borrow().pointer_moved(pointer, rect, viewport);
        if let Some(intent) = intent {
            self.elements.apply(&intent);
        }
    }

    pub(crate) fn on_release(self: &Rc<Self>) {
        if !self.state.borrow().is_dragging() {
            return;
        }
        let Some(viewport) = dom::viewport() else {
            return;
        };
        let rect = self.elements.rect();
        let released = self.state.borrow_mut().release(rect, viewport);
        let Some(released) = released else {
            return;
        };
        self.apply(released.intents);
        if let Err(err) = self.store.save(released.class, released.position) {
            gloo::console::warn!(format!("website switcher: position not saved: {err}"));
        }
    }

    pub(crate) fn on_document_click(self: &Rc<Self>, event: &Event) {
        if !self.state.borrow().is_open() || self.elements.contains_target(event) {
            return;
        }
        let intents = self.state.borrow_mut().outside_activation();
        self.apply(intents);
    }

    pub(crate) fn on_document_keydown(self: &Rc<Self>, event: &Event) {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let intents = self.state.borrow_mut().key_pressed(&event.key());
        self.apply(intents);
    }

    pub(crate) fn on_panel_keydown(self: &Rc<Self>, event: &Event) {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let links = self.elements.links();
        let focused = self.elements.focused_link(&links);
        let intents = self.state.borrow().navigate(&event.key(), focused, links.len());
        if let Some(intents) = intents {
            event.prevent_default();
            self.apply(intents);
        }
    }

    pub(crate) fn on_resize(self: &Rc<Self>) {
        let Some(viewport) = dom::viewport() else {
            return;
        };
        if let Some(intent) = refit_after_resize(self.elements.rect(), viewport) {
            self.elements.apply(&intent);
        }
    }

    fn on_timer(self: &Rc<Self>, token: TimerToken) {
        let intents = self.state.borrow_mut().timer_fired(token);
        self.apply(intents);
    }

    fn apply(self: &Rc<Self>, intents: Vec<Intent>) {
        for intent in intents {
            match intent {
                Intent::Schedule { token, after_ms } => self.schedule(token, after_ms),
                other => self.elements.apply(&other),
            }
        }
    }

    // Timers are never cancelled; stale ones no-op on their token.
    fn schedule(self: &Rc<Self>, token: TimerToken, after_ms: u32) {
        let weak: Weak<Self> = Rc::downgrade(self);
        Timeout::new(after_ms, move || {
            if let Some(widget) = weak.upgrade() {
                widget.on_timer(token);
            }
        })
        .forget();
    }
}
