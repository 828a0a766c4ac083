//! Pipeline configuration stored as TOML.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use antgen_compile::CompileOptions;
use antgen_core::{ErrorKind, Heading, StateId};
use antgen_space::{EdgeBehavior, GridConfig, GridSpec};
use antgen_tour::{TimingConstants, TwoOptStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything [`compile_grid`](crate::compile_grid) needs besides the grid.
///
/// Missing fields take their defaults, so an empty file is a valid config.
///
/// ```toml
/// stop_after_done = true
/// looping = false
/// strategy = "expanded_moves"
///
/// [grid]
/// cols = 64
/// rows = 48
/// edge = "clamp"
///
/// [timing]
/// version = 1
/// greedy_constant = 0.0001
/// two_opt_constant = 0.00001
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    /// State id of the first emitted rule.
    pub start_state: StateId,
    /// Final heading; unset uses the heading of the end anchor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<Heading>,
    /// Make the last rule halt the simulator.
    pub stop_after_done: bool,
    /// Toroidal (`true`) or clamped (`false`) distance. Overrides
    /// `grid.edge` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
    /// 2-opt acceptance rule.
    pub strategy: TwoOptStrategy,
    /// Fill unset anchors with the center cell facing right instead of
    /// failing.
    pub lazy_anchor: bool,
    /// Grid dimensions and edge behavior used when building grids.
    pub grid: GridConfig,
    /// Runtime model constants.
    pub timing: TimingConstants,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            start_state: 0,
            heading: None,
            stop_after_done: false,
            looping: None,
            strategy: TwoOptStrategy::default(),
            lazy_anchor: false,
            grid: GridConfig::default(),
            timing: TimingConstants::default(),
        }
    }
}

impl PipelineConfig {
    /// Check that the config describes a buildable grid and a usable
    /// runtime model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = self.grid_config();
        GridSpec::new(grid.cols, grid.rows, grid.edge)
            .map_err(|e| ConfigError::Invalid(format!("grid: {e}")))?;
        if self.timing.version != TimingConstants::CURRENT_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.timing.version,
                expected: TimingConstants::CURRENT_VERSION,
            });
        }
        if !self.timing.is_valid() {
            return Err(ConfigError::Invalid(
                "timing constants must be finite and > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Grid settings with `looping` applied.
    pub fn grid_config(&self) -> GridConfig {
        match self.looping {
            Some(looping) => GridConfig {
                edge: EdgeBehavior::from_looping(looping),
                ..self.grid
            },
            None => self.grid,
        }
    }

    /// Compiler options derived from this config.
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            start_state: self.start_state,
            heading: self.heading,
            stop_after_done: self.stop_after_done,
        }
    }
}

/// Errors from loading, saving, or validating a [`PipelineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    #[error("{action} {}: {source}", path.display())]
    Io {
        /// What was being attempted.
        action: &'static str,
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The file is not valid TOML for this config.
    #[error("parse {}: {source}", path.display())]
    Parse {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },
    /// The config could not be rendered as TOML.
    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// The timing record was written by an incompatible version.
    #[error("timing constants version {found} is not supported (expected {expected})")]
    UnsupportedVersion {
        /// Version in the file.
        found: u32,
        /// Version this build understands.
        expected: u32,
    },
    /// A field holds an unusable value.
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PipelineConfig::default()`.
pub fn load_config(path: &Path) -> Result<PipelineConfig, ConfigError> {
    if !path.exists() {
        let cfg = PipelineConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).map_err(io_error("read", path))?;
    let cfg: PipelineConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.validate()?;
    Ok(cfg)
}

/// Write config to disk via a temp file and rename.
pub fn save_config(path: &Path, cfg: &PipelineConfig) -> Result<(), ConfigError> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg)?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error("create directory", parent))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents).map_err(io_error("write", &tmp_path))?;
    fs::rename(&tmp_path, path).map_err(io_error("replace", path))?;
    Ok(())
}

fn io_error(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> ConfigError {
    let path = path.to_path_buf();
    move |source| ConfigError::Io {
        action,
        path,
        source,
    }
}
