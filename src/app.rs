use std::fmt::Write as _;

use crate::catalog::{KeyCatalog, StandardKeys};
use crate::cli::Command;
use crate::edit::{Direction, Edit};
use crate::error::Result;
use crate::models::MacroConfig;
use crate::state::Session;
use crate::store::ConfigStore;

/// Main application struct
pub struct App<C = StandardKeys> {
    store: ConfigStore,
    catalog: C,
    session: Session,
}

impl App<StandardKeys> {
    pub async fn new(store: ConfigStore) -> Result<Self> {
        Self::with_catalog(store, StandardKeys).await
    }
}

impl<C: KeyCatalog> App<C> {
    pub async fn with_catalog(store: ConfigStore, catalog: C) -> Result<Self> {
        let config = store.load_or_default().await?;
        let mut session = Session::new(config);

        // A fresh install starts with one macro so index 0 is addressable.
        if session.config().macros.is_empty() {
            session.apply(&Edit::AddMacro, &catalog)?;
        }

        Ok(Self {
            store,
            catalog,
            session,
        })
    }

    pub fn config(&self) -> &MacroConfig {
        self.session.config()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs one command and returns the text to print. Edits are persisted
    /// only when they succeed.
    pub async fn run(&mut self, command: &Command) -> Result<String> {
        if let Some(edit) = command.to_edit() {
            return self.update(edit).await;
        }
        match command {
            Command::Keys => Ok(self.catalog.keys().join("\n")),
            Command::MoveUp {
                macro_index,
                action_index,
            } => self.step(*macro_index, *action_index, Direction::Up).await,
            Command::MoveDown {
                macro_index,
                action_index,
            } => self.step(*macro_index, *action_index, Direction::Down).await,
            _ => Ok(render(self.session.config())),
        }
    }

    /// Moves one action a single row through the session selection. Edges
    /// are reported in the status without saving.
    async fn step(
        &mut self,
        macro_index: usize,
        action_index: usize,
        direction: Direction,
    ) -> Result<String> {
        self.session.select_macro(macro_index)?;
        self.session.select_action(action_index)?;
        let moved = match self.session.move_selected(direction, &self.catalog) {
            Ok(moved) => moved,
            Err(e) => {
                tracing::warn!(?direction, error = %e, "move rejected");
                return Err(e.into());
            }
        };

        if moved {
            tracing::info!(?direction, macro_index, action_index, "action moved");
            self.save().await?;
        }
        Ok(self.status())
    }

    async fn update(&mut self, edit: Edit) -> Result<String> {
        if let Err(e) = self.session.apply(&edit, &self.catalog) {
            tracing::warn!(%edit, error = %e, "edit rejected");
            return Err(e.into());
        }
        tracing::info!(%edit, "edit applied");

        self.save().await?;
        Ok(self.status())
    }

    async fn save(&mut self) -> Result<()> {
        self.store.save(self.session.config()).await?;
        self.session.mark_saved();
        Ok(())
    }

    fn status(&self) -> String {
        self.session.status_message.clone().unwrap_or_default()
    }
}

/// Plain-text listing of a snapshot, one block per macro.
pub fn render(config: &MacroConfig) -> String {
    let mut out = String::new();
    let toggle = if config.toggle_key.is_empty() {
        "(always active)"
    } else {
        config.toggle_key.as_str()
    };
    let _ = writeln!(out, "Toggle key: {}", toggle);

    for (i, m) in config.macros.iter().enumerate() {
        let mode = m
            .playback()
            .map_or_else(|| format!("unknown ({})", m.mode), |mode| mode.to_string());
        let _ = writeln!(
            out,
            "Macro {} [{}] {} ({} actions)",
            i + 1,
            m.trigger,
            mode,
            m.actions.len()
        );
        for (j, a) in m.actions.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:>3}. {:<10} hold {:>5} ms  delay {:>5} ms",
                j + 1,
                a.key,
                a.hold_ms,
                a.delay_ms
            );
        }
    }

    for (trigger, positions) in config.duplicate_triggers() {
        let labels: Vec<String> = positions.iter().map(|p| (p + 1).to_string()).collect();
        let _ = writeln!(
            out,
            "Warning: [{}] triggers macros {}; only the first fires",
            trigger,
            labels.join(", ")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Macro, MacroAction};

    #[test]
    fn render_lists_macros_and_duplicates() {
        let mut first = Macro::new("q");
        first.mode = 2;
        first.actions.push(MacroAction {
            key: "w".into(),
            hold_ms: 40,
            delay_ms: 60,
        });
        let mut second = Macro::new("q");
        second.mode = 9;
        let config = MacroConfig {
            toggle_key: String::new(),
            macros: vec![first, second],
        };

        let text = render(&config);
        assert!(text.starts_with("Toggle key: (always active)\n"));
        assert!(text.contains("Macro 1 [q] once (1 actions)"));
        assert!(text.contains("Macro 2 [q] unknown (9) (0 actions)"));
        assert!(text.contains("hold    40 ms"));
        assert!(text.contains("Warning: [q] triggers macros 1, 2; only the first fires"));
    }
}
