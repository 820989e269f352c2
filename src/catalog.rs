/// Keys offered by the editor, in display order.
#[rustfmt::skip]
pub const STANDARD_KEYS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
    "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
    "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "f10", "f11", "f12",
    "space", "enter", "tab", "esc", "backspace", "delete", "insert",
    "home", "end", "pageup", "pagedown",
    "up", "down", "left", "right",
    "shift", "ctrl", "alt", "capslock", "numlock", "scrolllock",
    "-", "=", "[", "]", ";", "'", "`", "\\", ",", ".", "/",
    "num0", "num1", "num2", "num3", "num4", "num5", "num6", "num7", "num8", "num9",
    "num/", "num*", "num-", "num+", "num.", "numenter",
];

/// Source of valid key identifiers. Only consulted for validation and for
/// picking defaults; snapshots never hold a reference to it.
pub trait KeyCatalog {
    /// All keys, in catalog order.
    fn keys(&self) -> Vec<&str>;

    fn contains(&self, key: &str) -> bool {
        self.keys().contains(&key)
    }

    fn first(&self) -> Option<&str> {
        self.keys().first().copied()
    }
}

impl<C: KeyCatalog + ?Sized> KeyCatalog for &C {
    fn keys(&self) -> Vec<&str> {
        (**self).keys()
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }

    fn first(&self) -> Option<&str> {
        (**self).first()
    }
}

/// The built-in key list.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardKeys;

impl KeyCatalog for StandardKeys {
    fn keys(&self) -> Vec<&str> {
        STANDARD_KEYS.to_vec()
    }

    fn contains(&self, key: &str) -> bool {
        STANDARD_KEYS.contains(&key)
    }

    fn first(&self) -> Option<&str> {
        STANDARD_KEYS.first().copied()
    }
}

/// Caller-supplied catalog. Duplicates are dropped, first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyList {
    keys: Vec<String>,
}

impl KeyList {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Vec::new();
        for key in keys {
            let key = key.into();
            if !list.contains(&key) {
                list.push(key);
            }
        }
        Self { keys: list }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl KeyCatalog for KeyList {
    fn keys(&self) -> Vec<&str> {
        self.keys.iter().map(String::as_str).collect()
    }

    fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    fn first(&self) -> Option<&str> {
        self.keys.first().map(String::as_str)
    }
}
