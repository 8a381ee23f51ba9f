use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::viewport::{Point, ViewportClass};

pub const POSITION_STORAGE_KEY: &str = "websiteSwitcherPosition";

/// One remembered position, kept as CSS pixel strings (`"120px"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPosition {
    pub left: String,
    pub top: String,
}

impl StoredPosition {
    pub fn from_point(point: Point) -> Self {
        Self {
            left: px(point.x),
            top: px(point.y),
        }
    }

    pub fn to_point(&self) -> Option<Point> {
        Some(Point::new(parse_px(&self.left)?, parse_px(&self.top)?))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PositionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<StoredPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<StoredPosition>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl PositionRecord {
    /// Each class entry is decoded on its own: a malformed entry reads as
    /// absent and leaves the other one intact. Input that is not a JSON
    /// object reads as an empty record.
    pub fn parse(raw: &str) -> Self {
        let Ok(mut fields) = serde_json::from_str::<BTreeMap<String, Value>>(raw) else {
            return Self::default();
        };
        let desktop = fields.remove("desktop").and_then(decode_entry);
        let mobile = fields.remove("mobile").and_then(decode_entry);
        Self {
            desktop,
            mobile,
            extra: fields,
        }
    }

    pub fn get(&self, class: ViewportClass) -> Option<&StoredPosition> {
        match class {
            ViewportClass::Desktop => self.desktop.as_ref(),
            ViewportClass::Mobile => self.mobile.as_ref(),
        }
    }

    pub fn set(&mut self, class: ViewportClass, position: StoredPosition) {
        match class {
            ViewportClass::Desktop => self.desktop = Some(position),
            ViewportClass::Mobile => self.mobile = Some(position),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.desktop.is_none() && self.mobile.is_none()
    }
}

fn decode_entry(value: Value) -> Option<StoredPosition> {
    serde_json::from_value(value).ok()
}

pub fn px(value: f64) -> String {
    // -0 would otherwise print as "-0px"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}

pub fn parse_px(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_strings_match_css_form() {
        assert_eq!(px(120.0), "120px");
        assert_eq!(px(12.5), "12.5px");
        assert_eq!(px(-0.0), "0px");
        assert_eq!(parse_px("42px"), Some(42.0));
        assert_eq!(parse_px(" 7.25px "), Some(7.25));
        assert_eq!(parse_px("auto"), None);
    }

    #[test]
    fn corrupt_blob_is_empty() {
        let record = PositionRecord::parse("{not json");
        assert!(record.is_empty());
        assert_eq!(record, PositionRecord::default());
    }

    #[test]
    fn missing_classes_are_omitted_on_write() {
        let mut record = PositionRecord::default();
        record.set(
            ViewportClass::Mobile,
            StoredPosition::from_point(Point::new(10.0, 20.0)),
        );
        let raw = serde_json::to_string(&record).expect("encode");
        assert_eq!(raw, r#"{"mobile":{"left":"10px","top":"20px"}}"#);
    }

    #[test]
    fn unknown_keys_survive_a_rewrite() {
        let mut record = PositionRecord::parse(
            r#"{"desktop":{"left":"1px","top":"2px"},"version":3}"#,
        );
        record.set(
            ViewportClass::Desktop,
            StoredPosition::from_point(Point::new(5.0, 6.0)),
        );
        let raw = serde_json::to_string(&record).expect("encode");
        let reparsed: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(reparsed["version"], 3);
        assert_eq!(reparsed["desktop"]["left"], "5px");
    }

    #[test]
    fn malformed_entry_reads_as_absent_without_losing_the_other() {
        let record = PositionRecord::parse(
            r#"{"desktop":{"left":"10px"},"mobile":{"left":"5px","top":"6px"}}"#,
        );
        assert_eq!(record.get(ViewportClass::Desktop), None);
        let mobile = record.get(ViewportClass::Mobile).expect("mobile kept");
        assert_eq!(mobile.to_point(), Some(Point::new(5.0, 6.0)));

        let record = PositionRecord::parse(r#"{"desktop":42,"mobile":null}"#);
        assert!(record.is_empty());
    }
}
