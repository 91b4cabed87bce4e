//! Runtime configuration for the CLI.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use retint_core::PresetLibrary;

/// Log filter used when `RETINT_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";
/// Log filter used with `--verbose` when `RETINT_LOG` is unset.
const VERBOSE_LOG_FILTER: &str = "debug";

/// Settings read from the environment.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// `tracing` filter directive (`RETINT_LOG`).
    pub log_filter: Option<String>,
    /// JSON file of extra presets merged over the built-ins (`RETINT_PRESETS`).
    pub presets_path: Option<PathBuf>,
    /// Directory for outputs when no explicit path is given (`RETINT_OUTPUT_DIR`).
    pub output_dir: Option<PathBuf>,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            log_filter: non_empty("RETINT_LOG"),
            presets_path: non_empty("RETINT_PRESETS").map(PathBuf::from),
            output_dir: non_empty("RETINT_OUTPUT_DIR").map(PathBuf::from),
        }
    }

    pub fn log_filter(&self, verbose: bool) -> &str {
        match &self.log_filter {
            Some(filter) => filter.as_str(),
            None if verbose => VERBOSE_LOG_FILTER,
            None => DEFAULT_LOG_FILTER,
        }
    }

    /// Built-in presets, plus the configured preset file if there is one.
    pub fn presets(&self) -> Result<PresetLibrary> {
        let mut library = PresetLibrary::builtin();
        if let Some(path) = &self.presets_path {
            library.merge(load_preset_file(path)?);
            tracing::debug!(path = %path.display(), count = library.len(), "loaded preset file");
        }
        Ok(library)
    }

    /// Where an output named `file_name` goes when the user gave no path.
    pub fn default_output(&self, file_name: &str) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

fn load_preset_file(path: &Path) -> Result<PresetLibrary> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read preset file {}", path.display()))?;
    PresetLibrary::from_json(&json)
        .with_context(|| format!("failed to parse preset file {}", path.display()))
}
