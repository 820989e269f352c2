//! Keyboard macro configurations: the snapshot model, the transition
//! functions that edit it, and a file store plus CLI built on top.
//!
//! ```
//! use keym::{Edit, MacroConfig, StandardKeys};
//!
//! let config = MacroConfig::default();
//! let config = Edit::AddMacro.apply(&config, &StandardKeys)?;
//! let config = keym::engine::add_action(&config, &StandardKeys, 0, "space", 50, 50)?;
//! assert_eq!(config.macros[0].actions.len(), 1);
//! # Ok::<(), keym::EditError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod cli;
pub mod edit;
pub mod engine;
pub mod error;
pub mod models;
pub mod state;
pub mod store;

pub use catalog::{KeyCatalog, KeyList, StandardKeys};
pub use edit::{Direction, Edit};
pub use error::{AppError, EditError, ErrorKind, Result};
pub use models::{Macro, MacroAction, MacroConfig, Mode};
pub use state::Session;
pub use store::{ConfigStore, Format};
