//! Config loading, normalization, and write-back.
//!
//! Resolution order: an explicit path wins; otherwise the well-known
//! `packgen.config.json` in the search directory; otherwise the builtin
//! defaults. The loaded config records its provenance so that write-back
//! can refuse to touch user-authored files.

use std::path::Path;
use tracing::{debug, info};

use crate::application::ApplicationError;
use crate::application::ports::Filesystem;
use crate::domain::{
    CONFIG_FILENAME, ConfigSource, LoadedConfig, RawConfig, ResolvedConfig, normalize,
};
use crate::error::PackgenResult;

/// Loads and persists generator configuration through the [`Filesystem`]
/// port.
pub struct ConfigService {
    filesystem: Box<dyn Filesystem>,
}

impl ConfigService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Locate, parse, and normalize a configuration.
    ///
    /// - `explicit` set: read that path; a missing file or invalid JSON is a
    ///   fatal config-read error. Source is `Explicit`.
    /// - otherwise `search_dir/packgen.config.json` if it exists. Source is
    ///   `Local`.
    /// - otherwise a fresh clone of the builtin defaults. Source is
    ///   `Builtin`.
    pub fn load(&self, explicit: Option<&Path>, search_dir: &Path) -> PackgenResult<LoadedConfig> {
        if let Some(path) = explicit {
            let config = self.read_config(path)?;
            info!(path = %path.display(), "loaded explicit config");
            return Ok(LoadedConfig {
                config,
                source: ConfigSource::Explicit,
                path: Some(path.to_path_buf()),
            });
        }

        let local = search_dir.join(CONFIG_FILENAME);
        if self.filesystem.exists(&local) {
            let config = self.read_config(&local)?;
            info!(path = %local.display(), "loaded local config");
            return Ok(LoadedConfig {
                config,
                source: ConfigSource::Local,
                path: Some(local),
            });
        }

        debug!("no config file found, using builtin defaults");
        Ok(LoadedConfig {
            config: ResolvedConfig::builtin(),
            source: ConfigSource::Builtin,
            path: None,
        })
    }

    /// Persist the resolved config into `target_dir`.
    ///
    /// Writes only when the config came from builtin defaults and no file
    /// already exists at the destination — a user-authored config is never
    /// overwritten.
    pub fn ensure_config_file(&self, target_dir: &Path, loaded: &LoadedConfig) -> PackgenResult<()> {
        if loaded.source != ConfigSource::Builtin {
            return Ok(());
        }
        let destination = target_dir.join(CONFIG_FILENAME);
        if self.filesystem.exists(&destination) {
            return Ok(());
        }

        let mut text = serde_json::to_string_pretty(&loaded.config).map_err(|e| {
            ApplicationError::ConfigRead {
                path: destination.clone(),
                reason: format!("failed to serialize config: {e}"),
            }
        })?;
        text.push('\n');
        self.filesystem.write_file(&destination, &text)?;
        info!(path = %destination.display(), "wrote default config file");
        Ok(())
    }

    fn read_config(&self, path: &Path) -> PackgenResult<ResolvedConfig> {
        let text = self
            .filesystem
            .read_file(path)
            .map_err(|e| ApplicationError::ConfigRead {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        let raw: RawConfig =
            serde_json::from_str(&text).map_err(|e| ApplicationError::ConfigRead {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(normalize(&raw)?)
    }
}
