//! Transition functions over [`MacroConfig`] snapshots.
//!
//! Every function borrows the caller's snapshot and either returns a new,
//! fully valid one or a single [`EditError`]. All validation happens before
//! the copy is made, so a failed call has nothing to roll back and the
//! caller's value is never touched.
//!
//! Indices are zero-based positions; removing an element shifts everything
//! after it down by one.

use crate::catalog::KeyCatalog;
use crate::error::{DurationField, EditError, IndexTarget};
use crate::models::{Macro, MacroAction, MacroConfig, Mode};

type EditResult = std::result::Result<MacroConfig, EditError>;

fn check_macro(config: &MacroConfig, index: usize) -> Result<&Macro, EditError> {
    config.macros.get(index).ok_or(EditError::IndexOutOfRange {
        target: IndexTarget::Macro,
        index,
        len: config.macros.len(),
    })
}

fn check_action(m: &Macro, index: usize) -> Result<(), EditError> {
    if index < m.actions.len() {
        Ok(())
    } else {
        Err(EditError::IndexOutOfRange {
            target: IndexTarget::Action,
            index,
            len: m.actions.len(),
        })
    }
}

fn check_key(catalog: &impl KeyCatalog, key: &str) -> Result<(), EditError> {
    if catalog.contains(key) {
        Ok(())
    } else {
        Err(EditError::InvalidKey(key.to_string()))
    }
}

fn check_mode(mode: i64) -> Result<Mode, EditError> {
    Mode::from_raw(mode).ok_or(EditError::InvalidMode(mode))
}

fn check_duration(field: DurationField, value: i64) -> Result<u64, EditError> {
    u64::try_from(value).map_err(|_| EditError::InvalidDuration { field, value })
}

/// Builds a validated action. Key first, then hold, then delay.
fn new_action(
    catalog: &impl KeyCatalog,
    key: &str,
    hold_ms: i64,
    delay_ms: i64,
) -> Result<MacroAction, EditError> {
    check_key(catalog, key)?;
    Ok(MacroAction {
        key: key.to_string(),
        hold_ms: check_duration(DurationField::Hold, hold_ms)?,
        delay_ms: check_duration(DurationField::Delay, delay_ms)?,
    })
}

/// Appends a macro bound to the catalog's first key with the default mode and
/// no actions. An empty catalog yields an empty trigger.
pub fn add_macro(config: &MacroConfig, catalog: &impl KeyCatalog) -> MacroConfig {
    let mut next = config.clone();
    next.macros.push(Macro::new(catalog.first().unwrap_or_default()));
    next
}

pub fn update_macro(
    config: &MacroConfig,
    catalog: &impl KeyCatalog,
    index: usize,
    trigger: &str,
    mode: i64,
) -> EditResult {
    check_macro(config, index)?;
    check_key(catalog, trigger)?;
    let mode = check_mode(mode)?;

    let mut next = config.clone();
    let target = &mut next.macros[index];
    target.trigger = trigger.to_string();
    target.mode = mode as u8;
    Ok(next)
}

pub fn delete_macro(config: &MacroConfig, index: usize) -> EditResult {
    check_macro(config, index)?;

    let mut next = config.clone();
    next.macros.remove(index);
    Ok(next)
}

pub fn add_action(
    config: &MacroConfig,
    catalog: &impl KeyCatalog,
    macro_index: usize,
    key: &str,
    hold_ms: i64,
    delay_ms: i64,
) -> EditResult {
    check_macro(config, macro_index)?;
    let action = new_action(catalog, key, hold_ms, delay_ms)?;

    let mut next = config.clone();
    next.macros[macro_index].actions.push(action);
    Ok(next)
}

pub fn update_action(
    config: &MacroConfig,
    catalog: &impl KeyCatalog,
    macro_index: usize,
    action_index: usize,
    key: &str,
    hold_ms: i64,
    delay_ms: i64,
) -> EditResult {
    check_action(check_macro(config, macro_index)?, action_index)?;
    let action = new_action(catalog, key, hold_ms, delay_ms)?;

    let mut next = config.clone();
    next.macros[macro_index].actions[action_index] = action;
    Ok(next)
}

pub fn delete_action(config: &MacroConfig, macro_index: usize, action_index: usize) -> EditResult {
    check_action(check_macro(config, macro_index)?, action_index)?;

    let mut next = config.clone();
    next.macros[macro_index].actions.remove(action_index);
    Ok(next)
}

/// Moves an action to a new position, shifting the ones in between. This is a
/// positional move, not a swap.
pub fn move_action(
    config: &MacroConfig,
    macro_index: usize,
    from_index: usize,
    to_index: usize,
) -> EditResult {
    let target = check_macro(config, macro_index)?;
    check_action(target, from_index)?;
    check_action(target, to_index)?;

    let mut next = config.clone();
    if from_index != to_index {
        let actions = &mut next.macros[macro_index].actions;
        let action = actions.remove(from_index);
        actions.insert(to_index, action);
    }
    Ok(next)
}

/// Sets the runner toggle key. An empty key clears it.
pub fn set_toggle_key(config: &MacroConfig, catalog: &impl KeyCatalog, key: &str) -> EditResult {
    if !key.is_empty() {
        check_key(catalog, key)?;
    }

    let mut next = config.clone();
    next.toggle_key = key.to_string();
    Ok(next)
}
