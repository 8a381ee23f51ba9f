use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node, NodeList};

use website_switcher_core::position::px;
use website_switcher_core::{Intent, Marker, Point, PressTarget, Rect, Viewport};

pub(crate) const ROOT_SELECTOR: &str = ".website-switcher";
pub(crate) const TOGGLE_SELECTOR: &str = ".website-switcher__toggle";
pub(crate) const DROPDOWN_SELECTOR: &str = ".website-switcher__dropdown";
pub(crate) const LINK_SELECTOR: &str = ".website-switcher__link";
pub(crate) const HANDLE_CLASS: &str = "website-switcher__drag-handle";
pub(crate) const MOUNTED_ATTR: &str = "data-switcher-mounted";

const EXPANDED_ATTR: &str = "aria-expanded";

pub(crate) struct WidgetElements {
    pub(crate) document: Document,
    pub(crate) root: HtmlElement,
    pub(crate) toggle: HtmlElement,
    pub(crate) dropdown: HtmlElement,
    pub(crate) handle: HtmlElement,
}

impl WidgetElements {
    /// `None` when the root lacks a toggle or a dropdown panel.
    pub(crate) fn discover(document: &Document, root: HtmlElement) -> Option<Self> {
        let toggle = find_html(&root, TOGGLE_SELECTOR)?;
        let dropdown = find_html(&root, DROPDOWN_SELECTOR)?;
        let handle = match find_html(&root, &format!(".{HANDLE_CLASS}")) {
            Some(handle) => handle,
            None => create_handle(document, &root)?,
        };
        Some(Self {
            document: document.clone(),
            root,
            toggle,
            dropdown,
            handle,
        })
    }

    pub(crate) fn links(&self) -> Vec<HtmlElement> {
        self.dropdown
            .query_selector_all(LINK_SELECTOR)
            .map(|list| html_elements(&list))
            .unwrap_or_default()
    }

    pub(crate) fn focused_link(&self, links: &[HtmlElement]) -> Option<usize> {
        let active: Node = self.document.active_element()?.into();
        links.iter().position(|link| link.is_same_node(Some(&active)))
    }

    pub(crate) fn rect(&self) -> Rect {
        let rect = self.root.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    pub(crate) fn contains_target(&self, event: &Event) -> bool {
        event_node(event)
            .map(|node| self.root.contains(Some(&node)))
            .unwrap_or(false)
    }

    pub(crate) fn press_target(&self, event: &Event) -> PressTarget {
        let Some(node) = event_node(event) else {
            return PressTarget::default();
        };
        PressTarget {
            in_dropdown: self.dropdown.contains(Some(&node)),
            in_trigger: self.toggle.contains(Some(&node)),
            in_handle: self.handle.contains(Some(&node)),
        }
    }

    /// Applies everything except timer scheduling, which the widget owns.
    pub(crate) fn apply(&self, intent: &Intent) {
        match intent {
            Intent::ShowPanel => self.dropdown.set_hidden(false),
            Intent::HidePanel => self.dropdown.set_hidden(true),
            Intent::AddMarker(marker) => {
                let _ = self
                    .marker_target(*marker)
                    .class_list()
                    .add_1(marker.class_name());
            }
            Intent::RemoveMarker(marker) => {
                let _ = self
                    .marker_target(*marker)
                    .class_list()
                    .remove_1(marker.class_name());
            }
            Intent::SetExpanded(expanded) => {
                let value = if *expanded { "true" } else { "false" };
                let _ = self.toggle.set_attribute(EXPANDED_ATTR, value);
            }
            Intent::FocusFirstEntry => {
                if let Some(link) = self.links().first() {
                    let _ = link.focus();
                }
            }
            Intent::FocusEntry(index) => {
                if let Some(link) = self.links().get(*index) {
                    let _ = link.focus();
                }
            }
            Intent::FocusTrigger => {
                let _ = self.toggle.focus();
            }
            Intent::MoveTo(origin) => self.move_to(*origin),
            Intent::Schedule { .. } => {}
        }
    }

    pub(crate) fn apply_button_colors(&self, background: Option<&str>, text: Option<&str>) {
        let style = self.toggle.style();
        if let Some(color) = background {
            let _ = style.set_property("background-color", color);
        }
        if let Some(color) = text {
            let _ = style.set_property("color", color);
        }
    }

    fn marker_target(&self, marker: Marker) -> &HtmlElement {
        match marker {
            Marker::Dragging => &self.root,
            _ => &self.dropdown,
        }
    }

    // Absolute offsets only win once the authored anchoring is neutralized.
    fn move_to(&self, origin: Point) {
        let style = self.root.style();
        let _ = style.set_property("left", &px(origin.x));
        let _ = style.set_property("top", &px(origin.y));
        let _ = style.set_property("right", "auto");
        let _ = style.set_property("bottom", "auto");
        let _ = style.set_property("transform", "none");
    }
}

pub(crate) fn viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

pub(crate) fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn find_html(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()??
        .dyn_into::<HtmlElement>()
        .ok()
}

fn create_handle(document: &Document, root: &HtmlElement) -> Option<HtmlElement> {
    let handle = document
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    handle.set_class_name(HANDLE_CLASS);
    let first = root.first_child();
    root.insert_before(&handle, first.as_ref()).ok()?;
    Some(handle)
}

fn event_node(event: &Event) -> Option<Node> {
    event.target()?.dyn_into::<Node>().ok()
}
