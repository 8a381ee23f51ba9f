#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
    First,
    Last,
}

impl NavKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(NavKey::Next),
            "ArrowUp" => Some(NavKey::Previous),
            "Home" => Some(NavKey::First),
            "End" => Some(NavKey::Last),
            _ => None,
        }
    }
}

pub const CANCEL_KEY: &str = "Escape";

/// Index of the entry to focus. `current` is `None` when focus sits outside
/// the entry list, which behaves like a position before the first entry.
pub fn nav_target(current: Option<usize>, len: usize, key: NavKey) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    let current = current.filter(|index| *index <= last);
    let target = match key {
        NavKey::Next => match current {
            Some(index) if index < last => index + 1,
            _ => 0,
        },
        NavKey::Previous => match current {
            Some(index) if index > 0 => index - 1,
            _ => last,
        },
        NavKey::First => 0,
        NavKey::Last => last,
    };
    Some(target)
}
