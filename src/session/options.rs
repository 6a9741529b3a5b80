use crate::config::{SessionCompression, SessionConfig, SessionStorageMode};
use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

pub const DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES: u64 = 100 * 1024; // 100 KiB

/// Compression preference for stroke documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    /// Always write plain JSON.
    Off,
    /// Always write gzip-compressed JSON.
    On,
    /// Write gzip when payload exceeds the configured threshold.
    Auto,
}

/// Runtime options derived from configuration for stroke documents.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    pub base_dir: PathBuf,
    pub max_strokes: usize,
    pub max_file_size_bytes: u64,
    pub compression: CompressionMode,
    pub auto_compress_threshold_bytes: u64,
    pub backup_retention: usize,
}

impl DocumentOptions {
    /// Creates a basic options struct with sensible defaults. Intended mainly for tests.
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            max_strokes: 10_000,
            max_file_size_bytes: 10 * 1024 * 1024,
            compression: CompressionMode::Auto,
            auto_compress_threshold_bytes: DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES,
            backup_retention: 1,
        }
    }

    /// Resolves a document name (or a path) to a file path.
    ///
    /// Bare names are sanitised and placed in `base_dir` with a `.json` extension.
    pub fn document_path(&self, name: &str) -> PathBuf {
        let as_path = Path::new(name);
        if as_path.components().count() > 1 || as_path.extension().is_some() {
            return as_path.to_path_buf();
        }
        self.base_dir.join(format!("{}.json", sanitize_identifier(name)))
    }
}

/// Build runtime document options from configuration values.
pub fn options_from_config(
    session_cfg: &SessionConfig,
    config_dir: &Path,
) -> Result<DocumentOptions> {
    let base_dir = match session_cfg.storage {
        SessionStorageMode::Auto => {
            let root = dirs::data_dir().unwrap_or_else(|| config_dir.to_path_buf());
            root.join("hairsketch")
        }
        SessionStorageMode::Config => config_dir.to_path_buf(),
        SessionStorageMode::Custom => {
            let raw = session_cfg.custom_directory.as_ref().ok_or_else(|| {
                anyhow!("session.custom_directory must be set when storage = \"custom\"")
            })?;
            let expanded = expand_tilde(raw);
            if expanded.as_os_str().is_empty() {
                return Err(anyhow!("session.custom_directory resolved to an empty path"));
            }
            expanded
        }
    };

    let mut options = DocumentOptions::new(base_dir);
    options.max_strokes = session_cfg.max_strokes;
    options.max_file_size_bytes = session_cfg
        .max_file_size_mb
        .saturating_mul(1024 * 1024)
        .max(1);
    options.auto_compress_threshold_bytes = session_cfg
        .auto_compress_threshold_kb
        .saturating_mul(1024)
        .max(1);
    options.compression = match session_cfg.compress {
        SessionCompression::Auto => CompressionMode::Auto,
        SessionCompression::On => CompressionMode::On,
        SessionCompression::Off => CompressionMode::Off,
    };
    options.backup_retention = session_cfg.backup_retention;

    Ok(options)
}

pub(crate) fn sanitize_identifier(raw: &str) -> String {
    if raw.is_empty() {
        return "default".to_string();
    }

    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
