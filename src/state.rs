use crate::catalog::KeyCatalog;
use crate::edit::{Direction, Edit};
use crate::error::{EditError, IndexTarget};
use crate::models::MacroConfig;

/// Editing session: the single holder of the current snapshot
#[derive(Debug, Default)]
pub struct Session {
    /// Last good snapshot
    config: MacroConfig,
    /// Selected macro position (tab)
    pub selected_macro: usize,
    /// Selected action row within the selected macro
    pub selected_action: Option<usize>,
    /// Status message to display
    pub status_message: Option<String>,
    /// Unsaved edits since load or last save
    dirty: bool,
}

impl Session {
    pub fn new(config: MacroConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &MacroConfig {
        &self.config
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Selects a macro and clears the action selection.
    pub fn select_macro(&mut self, index: usize) -> Result<(), EditError> {
        let len = self.config.macros.len();
        if index >= len {
            return Err(self.reject(EditError::IndexOutOfRange {
                target: IndexTarget::Macro,
                index,
                len,
            }));
        }
        self.selected_macro = index;
        self.selected_action = None;
        self.set_status(format!("Selected macro {}", index + 1));
        Ok(())
    }

    /// Selects an action within the selected macro.
    pub fn select_action(&mut self, index: usize) -> Result<(), EditError> {
        let len = self.action_len();
        if index >= len {
            return Err(self.reject(EditError::IndexOutOfRange {
                target: IndexTarget::Action,
                index,
                len,
            }));
        }
        self.selected_action = Some(index);
        Ok(())
    }

    /// Applies `edit`. On failure the snapshot is kept and the error becomes
    /// the status line.
    pub fn apply(&mut self, edit: &Edit, catalog: &impl KeyCatalog) -> Result<(), EditError> {
        match edit.apply(&self.config, catalog) {
            Ok(next) => {
                self.config = next;
                self.dirty = true;
                self.follow_selection(edit);
                self.set_status(edit.to_string());
                Ok(())
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Moves the selected action one row. Returns `false` when there was
    /// nothing to move; the reason is left in the status line.
    pub fn move_selected(
        &mut self,
        direction: Direction,
        catalog: &impl KeyCatalog,
    ) -> Result<bool, EditError> {
        let Some(from) = self.selected_action else {
            self.set_status("Select an action to move");
            return Ok(false);
        };

        let to = match direction {
            Direction::Up if from == 0 => {
                self.set_status("Already at the top");
                return Ok(false);
            }
            Direction::Up => from - 1,
            Direction::Down if from + 1 >= self.action_len() => {
                self.set_status("Already at the bottom");
                return Ok(false);
            }
            Direction::Down => from + 1,
        };

        let edit = Edit::MoveAction {
            macro_index: self.selected_macro,
            from_index: from,
            to_index: to,
        };
        self.apply(&edit, catalog)?;
        Ok(true)
    }

    fn action_len(&self) -> usize {
        self.config
            .macros
            .get(self.selected_macro)
            .map_or(0, |m| m.actions.len())
    }

    fn reject(&mut self, e: EditError) -> EditError {
        self.set_status(format!("Error: {}", e));
        e
    }

    fn follow_selection(&mut self, edit: &Edit) {
        match edit {
            Edit::AddMacro => {
                self.selected_macro = self.config.macros.len().saturating_sub(1);
                self.selected_action = None;
            }
            Edit::DeleteMacro { .. } => {
                let len = self.config.macros.len();
                if self.selected_macro >= len {
                    self.selected_macro = len.saturating_sub(1);
                }
                self.selected_action = None;
            }
            Edit::DeleteAction { .. } => {
                self.selected_action = None;
            }
            Edit::MoveAction {
                macro_index,
                to_index,
                ..
            } if *macro_index == self.selected_macro => {
                self.selected_action = Some(*to_index);
            }
            _ => {}
        }
    }
}
