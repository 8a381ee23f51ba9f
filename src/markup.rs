use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use website_switcher_core::{MarkupAttributes, WidgetConfig};

use crate::dom::WidgetElements;

const WEBSITES_ATTR: &str = "data-websites";
const BG_COLOR_ATTR: &str = "data-bg-color";
const TEXT_COLOR_ATTR: &str = "data-text-color";
const ICON_SELECTOR: &str = ".website-switcher__icon";
const LABEL_SELECTOR: &str = ".website-switcher__button-text";

pub(crate) fn read_attributes(elements: &WidgetElements) -> MarkupAttributes {
    let toggle = &elements.toggle;
    let trigger_icon_url = toggle
        .query_selector(ICON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|icon| icon.dyn_into::<HtmlImageElement>().ok())
        .map(|icon| icon.src());
    let trigger_label = toggle
        .query_selector(LABEL_SELECTOR)
        .ok()
        .flatten()
        .and_then(|label| label.text_content());
    let wrapper_classes = elements
        .root
        .parent_element()
        .map(|wrapper| {
            wrapper
                .class_name()
                .split_whitespace()
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    MarkupAttributes {
        websites_json: elements.root.get_attribute(WEBSITES_ATTR),
        trigger_icon_url,
        trigger_label,
        wrapper_classes,
        background_color: toggle.get_attribute(BG_COLOR_ATTR),
        text_color: toggle.get_attribute(TEXT_COLOR_ATTR),
    }
}

pub(crate) fn load_config(elements: &WidgetElements) -> WidgetConfig {
    let (config, problems) = WidgetConfig::from_markup(&read_attributes(elements));
    for problem in problems {
        gloo::console::warn!(format!("website switcher: {problem}"));
    }
    config
}
