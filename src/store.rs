use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{AppError, Result};
use crate::models::MacroConfig;

/// On-disk encoding, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(AppError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parses `content`. Durations must fit in a signed 64-bit integer so
    /// every loaded snapshot can be written back as TOML.
    pub fn decode(self, content: &str) -> Result<MacroConfig> {
        let config: MacroConfig = match self {
            Self::Json => serde_json::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
        };
        check_durations(&config)?;
        Ok(config)
    }

    pub fn encode(self, config: &MacroConfig) -> Result<String> {
        Ok(match self {
            Self::Json => serde_json::to_string_pretty(config)?,
            Self::Toml => toml::to_string_pretty(config)?,
        })
    }
}

fn check_durations(config: &MacroConfig) -> Result<()> {
    for (i, m) in config.macros.iter().enumerate() {
        for (j, a) in m.actions.iter().enumerate() {
            if i64::try_from(a.hold_ms.max(a.delay_ms)).is_err() {
                return Err(AppError::Config(format!(
                    "macro {} action {}: duration above {} ms",
                    i + 1,
                    j + 1,
                    i64::MAX
                )));
            }
        }
    }
    Ok(())
}

/// File-backed persistence for configuration snapshots.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    format: Format,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = Format::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub async fn load(&self) -> Result<MacroConfig> {
        let content = fs::read_to_string(&self.path).await?;
        let config = self.format.decode(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            macros = config.macros.len(),
            actions = config.action_count(),
            "loaded config"
        );
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields an empty snapshot.
    pub async fn load_or_default(&self) -> Result<MacroConfig> {
        match self.load().await {
            Err(AppError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no config file, starting empty");
                Ok(MacroConfig::default())
            }
            other => other,
        }
    }

    /// Writes to a sibling temp file and renames it over the target, so a
    /// reader never sees a half-written config.
    pub async fn save(&self, config: &MacroConfig) -> Result<()> {
        let content = self.format.encode(config)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let tmp = self.temp_path()?;
        let written = match fs::write(&tmp, content).await {
            Ok(()) => fs::rename(&tmp, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            // Best effort, the temp file may not exist.
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        tracing::info!(
            path = %self.path.display(),
            macros = config.macros.len(),
            "saved config"
        );
        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let name = self
            .path
            .file_name()
            .ok_or_else(|| AppError::Config(format!("not a file path: {}", self.path.display())))?;
        let mut tmp_name = name.to_os_string();
        tmp_name.push(".tmp");
        Ok(self.path.with_file_name(tmp_name))
    }
}
