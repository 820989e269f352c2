use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, FromRepr};

/// One timed key-press step of a macro.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MacroAction {
    pub key: String,
    #[serde(default)]
    pub hold_ms: u64,
    #[serde(default)]
    pub delay_ms: u64,
}

/// A trigger key bound to an ordered sequence of actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Macro {
    pub trigger: String,
    /// Raw playback mode, see [`Mode`].
    #[serde(default)]
    pub mode: u8,
    #[serde(default)]
    pub actions: Vec<MacroAction>,
}

impl Macro {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            mode: Mode::default() as u8,
            actions: Vec::new(),
        }
    }

    /// Decoded mode, `None` for values no released version ever wrote.
    pub fn playback(&self) -> Option<Mode> {
        Mode::from_repr(self.mode)
    }
}

/// Playback behaviour of a macro.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    FromRepr,
)]
#[repr(u8)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    #[default]
    Disabled = 0,
    /// Loops while the macro is active.
    Repeat = 1,
    /// Plays the sequence once per trigger press.
    Once = 2,
}

impl Mode {
    /// Validates a caller-supplied integer.
    pub fn from_raw(raw: i64) -> Option<Self> {
        u8::try_from(raw).ok().and_then(Self::from_repr)
    }
}

fn default_toggle_key() -> String {
    "`".to_string()
}

/// Configuration snapshot: the unit handed between the editor, the store and
/// the runner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MacroConfig {
    /// Runner on/off key. Empty means always active.
    #[serde(default = "default_toggle_key")]
    pub toggle_key: String,
    // Tables go last so the TOML encoding stays valid.
    #[serde(default)]
    pub macros: Vec<Macro>,
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            toggle_key: default_toggle_key(),
            macros: Vec::new(),
        }
    }
}

impl MacroConfig {
    /// First macro bound to `trigger`; later duplicates never fire.
    pub fn get_macro(&self, trigger: &str) -> Option<&Macro> {
        self.macros.iter().find(|m| m.trigger == trigger)
    }

    /// Trigger keys bound by more than one macro, with the positions binding them.
    pub fn duplicate_triggers(&self) -> BTreeMap<&str, Vec<usize>> {
        let mut seen: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (i, m) in self.macros.iter().enumerate() {
            seen.entry(m.trigger.as_str()).or_default().push(i);
        }
        seen.retain(|_, positions| positions.len() > 1);
        seen
    }

    pub fn action_count(&self) -> usize {
        self.macros.iter().map(|m| m.actions.len()).sum()
    }
}
