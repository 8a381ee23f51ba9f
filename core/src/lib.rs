pub mod config;
pub mod drag;
pub mod dropdown;
pub mod error;
pub mod intent;
pub mod keyboard;
pub mod position;
pub mod store;
pub mod switcher;
pub mod viewport;

pub use config::{Destination, MarkupAttributes, Placement, WidgetConfig};
pub use drag::PressTarget;
pub use dropdown::{DropdownPhase, SwitcherTiming, ANIMATION_MS, FOCUS_DELAY_MS};
pub use error::{ConfigError, StoreError};
pub use intent::{Intent, Marker, TimerKind, TimerToken};
pub use position::{PositionRecord, StoredPosition, POSITION_STORAGE_KEY};
pub use store::{KeyValueStore, MemoryStore, PositionStore};
pub use switcher::{
    refit_after_resize, restore_position, DragRelease, InteractionState, SwitcherOptions,
};
pub use viewport::{Point, Rect, Viewport, ViewportClass, DESKTOP_MIN_WIDTH};
