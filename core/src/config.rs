use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_TRIGGER_LABEL: &str = "Our Websites";

const DESKTOP_PLACEMENT_PREFIX: &str = "placement-desktop-";
const MOBILE_PLACEMENT_PREFIX: &str = "placement-mobile-";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

impl Placement {
    pub const ALL: [Placement; 6] = [
        Placement::TopLeft,
        Placement::TopCenter,
        Placement::TopRight,
        Placement::BottomLeft,
        Placement::BottomCenter,
        Placement::BottomRight,
    ];

    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|placement| placement.as_str() == value)
            .ok_or_else(|| ConfigError::UnknownPlacement(value.to_string()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Placement::TopLeft => "top-left",
            Placement::TopCenter => "top-center",
            Placement::TopRight => "top-right",
            Placement::BottomLeft => "bottom-left",
            Placement::BottomCenter => "bottom-center",
            Placement::BottomRight => "bottom-right",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub url: String,
    #[serde(
        rename = "icon",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_url: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.trim().is_empty()))
}

/// Raw attribute values gathered from the rendered markup, before parsing.
#[derive(Clone, Debug, Default)]
pub struct MarkupAttributes {
    pub websites_json: Option<String>,
    pub trigger_icon_url: Option<String>,
    pub trigger_label: Option<String>,
    pub wrapper_classes: Vec<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub destinations: Vec<Destination>,
    pub trigger_icon_url: Option<String>,
    pub trigger_label: String,
    pub desktop_placement: Placement,
    pub mobile_placement: Placement,
    pub button_background_color: Option<String>,
    pub button_text_color: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            destinations: Vec::new(),
            trigger_icon_url: None,
            trigger_label: DEFAULT_TRIGGER_LABEL.to_string(),
            desktop_placement: Placement::default(),
            mobile_placement: Placement::default(),
            button_background_color: None,
            button_text_color: None,
        }
    }
}

impl WidgetConfig {
    /// Builds a config from markup. Recoverable problems are collected and
    /// returned next to the config, which falls back to defaults for the
    /// affected fields.
    pub fn from_markup(attrs: &MarkupAttributes) -> (Self, Vec<ConfigError>) {
        let mut config = WidgetConfig::default();
        let mut problems = Vec::new();

        if let Some(raw) = non_empty(attrs.websites_json.as_deref()) {
            match parse_destinations(raw) {
                Ok(destinations) => config.destinations = destinations,
                Err(err) => problems.push(err),
            }
        }
        if let Some(label) = non_empty(attrs.trigger_label.as_deref()) {
            config.trigger_label = label.to_string();
        }
        config.trigger_icon_url = non_empty(attrs.trigger_icon_url.as_deref()).map(str::to_string);
        config.button_background_color =
            non_empty(attrs.background_color.as_deref()).map(str::to_string);
        config.button_text_color = non_empty(attrs.text_color.as_deref()).map(str::to_string);

        for class in &attrs.wrapper_classes {
            let (slot, value) = if let Some(value) = class.strip_prefix(DESKTOP_PLACEMENT_PREFIX) {
                (&mut config.desktop_placement, value)
            } else if let Some(value) = class.strip_prefix(MOBILE_PLACEMENT_PREFIX) {
                (&mut config.mobile_placement, value)
            } else {
                continue;
            };
            match Placement::parse(value) {
                Ok(placement) => *slot = placement,
                Err(err) => problems.push(err),
            }
        }

        (config, problems)
    }
}

pub fn parse_destinations(raw: &str) -> Result<Vec<Destination>, ConfigError> {
    serde_json::from_str(raw).map_err(ConfigError::InvalidDestinations)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
