use std::fmt;

use crate::catalog::KeyCatalog;
use crate::engine;
use crate::error::EditError;
use crate::models::MacroConfig;

/// Configuration edits, one per transition function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    // Macros
    AddMacro,
    UpdateMacro {
        index: usize,
        trigger: String,
        mode: i64,
    },
    DeleteMacro {
        index: usize,
    },

    // Actions
    AddAction {
        macro_index: usize,
        key: String,
        hold_ms: i64,
        delay_ms: i64,
    },
    UpdateAction {
        macro_index: usize,
        action_index: usize,
        key: String,
        hold_ms: i64,
        delay_ms: i64,
    },
    DeleteAction {
        macro_index: usize,
        action_index: usize,
    },
    MoveAction {
        macro_index: usize,
        from_index: usize,
        to_index: usize,
    },

    // Runner
    SetToggleKey(String),
}

impl Edit {
    /// Runs the edit against `config`, returning the next snapshot.
    pub fn apply(
        &self,
        config: &MacroConfig,
        catalog: &impl KeyCatalog,
    ) -> Result<MacroConfig, EditError> {
        match self {
            Edit::AddMacro => Ok(engine::add_macro(config, catalog)),
            Edit::UpdateMacro {
                index,
                trigger,
                mode,
            } => engine::update_macro(config, catalog, *index, trigger, *mode),
            Edit::DeleteMacro { index } => engine::delete_macro(config, *index),
            Edit::AddAction {
                macro_index,
                key,
                hold_ms,
                delay_ms,
            } => engine::add_action(config, catalog, *macro_index, key, *hold_ms, *delay_ms),
            Edit::UpdateAction {
                macro_index,
                action_index,
                key,
                hold_ms,
                delay_ms,
            } => engine::update_action(
                config,
                catalog,
                *macro_index,
                *action_index,
                key,
                *hold_ms,
                *delay_ms,
            ),
            Edit::DeleteAction {
                macro_index,
                action_index,
            } => engine::delete_action(config, *macro_index, *action_index),
            Edit::MoveAction {
                macro_index,
                from_index,
                to_index,
            } => engine::move_action(config, *macro_index, *from_index, *to_index),
            Edit::SetToggleKey(key) => engine::set_toggle_key(config, catalog, key),
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Positions are shown one-based, as in the editor's tab labels.
        match self {
            Edit::AddMacro => write!(f, "Added macro"),
            Edit::UpdateMacro { index, trigger, .. } => {
                write!(f, "Updated macro {} [{}]", index + 1, trigger)
            }
            Edit::DeleteMacro { index } => write!(f, "Deleted macro {}", index + 1),
            Edit::AddAction {
                macro_index, key, ..
            } => write!(f, "Added action [{}] to macro {}", key, macro_index + 1),
            Edit::UpdateAction {
                macro_index,
                action_index,
                ..
            } => write!(
                f,
                "Updated action {} of macro {}",
                action_index + 1,
                macro_index + 1
            ),
            Edit::DeleteAction {
                macro_index,
                action_index,
            } => write!(
                f,
                "Deleted action {} of macro {}",
                action_index + 1,
                macro_index + 1
            ),
            Edit::MoveAction {
                macro_index,
                from_index,
                to_index,
            } => write!(
                f,
                "Moved action {} to {} in macro {}",
                from_index + 1,
                to_index + 1,
                macro_index + 1
            ),
            Edit::SetToggleKey(key) if key.is_empty() => write!(f, "Cleared toggle key"),
            Edit::SetToggleKey(key) => write!(f, "Set toggle key [{}]", key),
        }
    }
}

/// Direction for moving the selected action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StandardKeys;

    #[test]
    fn apply_matches_engine() {
        let config = MacroConfig::default();
        let edits = [
            Edit::AddMacro,
            Edit::UpdateMacro {
                index: 0,
                trigger: "f1".into(),
                mode: 1,
            },
            Edit::AddAction {
                macro_index: 0,
                key: "a".into(),
                hold_ms: 30,
                delay_ms: 70,
            },
            Edit::AddAction {
                macro_index: 0,
                key: "b".into(),
                hold_ms: 30,
                delay_ms: 70,
            },
            Edit::MoveAction {
                macro_index: 0,
                from_index: 1,
                to_index: 0,
            },
            Edit::SetToggleKey(String::new()),
        ];
        let result = edits
            .iter()
            .try_fold(config, |acc, edit| edit.apply(&acc, &StandardKeys))
            .unwrap();

        assert_eq!(result.toggle_key, "");
        assert_eq!(result.macros[0].trigger, "f1");
        assert_eq!(result.macros[0].actions[0].key, "b");
        assert_eq!(result.macros[0].actions[1].key, "a");
    }

    #[test]
    fn display_is_one_based() {
        let edit = Edit::MoveAction {
            macro_index: 0,
            from_index: 2,
            to_index: 1,
        };
        assert_eq!(edit.to_string(), "Moved action 3 to 2 in macro 1");
        assert_eq!(Edit::SetToggleKey("".into()).to_string(), "Cleared toggle key");
        assert_eq!(
            Edit::DeleteMacro { index: 4 }.to_string(),
            "Deleted macro 5"
        );
    }
}
