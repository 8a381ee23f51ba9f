pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box in viewport coordinates, as reported by the layout engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn class(&self) -> ViewportClass {
        ViewportClass::from_width(self.width)
    }

    /// Largest origin that keeps a box of the given size fully visible,
    /// floored at zero when the box is larger than the viewport.
    pub fn max_origin(&self, width: f64, height: f64) -> Point {
        Point::new(
            (self.width - width).max(0.0),
            (self.height - height).max(0.0),
        )
    }

    pub fn clamp_origin(&self, origin: Point, width: f64, height: f64) -> Point {
        let max = self.max_origin(width, height);
        Point::new(origin.x.min(max.x).max(0.0), origin.y.min(max.y).max(0.0))
    }

    /// Origin to move a box back into view after a resize, or `None` when it
    /// still fits on the right and bottom edges.
    pub fn refit(&self, rect: Rect) -> Option<Point> {
        if rect.right() <= self.width && rect.bottom() <= self.height {
            return None;
        }
        Some(self.clamp_origin(rect.origin(), rect.width, rect.height))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            ViewportClass::Desktop
        } else {
            ViewportClass::Mobile
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewportClass::Desktop => "desktop",
            ViewportClass::Mobile => "mobile",
        }
    }
}
