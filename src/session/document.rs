use super::options::{CompressionMode, DocumentOptions};
use crate::draw::StrokeList;
use anyhow::{Context, Result};
use chrono::Utc;
use flate2::{Compression, bufread::GzDecoder, write::GzEncoder};
use fs2::FileExt;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const CURRENT_VERSION: u32 = 1;

/// A stroke list together with the view size it was drawn in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeDocument {
    pub strokes: StrokeList,
    /// Width and height of the drawing view, if known
    pub view_size: Option<(i32, i32)>,
}

#[derive(Debug, Serialize, Deserialize)]
struct DocumentFile {
    version: u32,
    last_modified: String,
    #[serde(default)]
    view_size: Option<(i32, i32)>,
    #[serde(default)]
    strokes: StrokeList,
}

/// Writes `document` to `path`, rotating the previous file into a backup.
pub fn save_document(
    document: &StrokeDocument,
    path: &Path,
    options: &DocumentOptions,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create document directory {}", parent.display()))?;
    }

    let lock_path = lock_file_path(path);
    let lock_file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .with_context(|| format!("failed to open document lock file {}", lock_path.display()))?;
    lock_file
        .lock_exclusive()
        .with_context(|| format!("failed to lock document {}", lock_path.display()))?;

    let result = save_document_inner(document, path, options);

    lock_file.unlock().unwrap_or_else(|err| {
        warn!("failed to unlock document {}: {}", lock_path.display(), err)
    });

    result
}

fn save_document_inner(
    document: &StrokeDocument,
    path: &Path,
    options: &DocumentOptions,
) -> Result<()> {
    let file_payload = DocumentFile {
        version: CURRENT_VERSION,
        last_modified: Utc::now().to_rfc3339(),
        view_size: document.view_size,
        strokes: document.strokes.clone(),
    };

    let mut json_bytes =
        serde_json::to_vec_pretty(&file_payload).context("failed to serialise stroke document")?;

    if json_bytes.len() as u64 > options.max_file_size_bytes {
        warn!(
            "Stroke document size {} bytes exceeds the configured limit of {} bytes; skipping save",
            json_bytes.len(),
            options.max_file_size_bytes
        );
        return Ok(());
    }

    let should_compress = match options.compression {
        CompressionMode::Off => false,
        CompressionMode::On => true,
        CompressionMode::Auto => (json_bytes.len() as u64) >= options.auto_compress_threshold_bytes,
    };

    if should_compress {
        json_bytes = compress_bytes(&json_bytes)?;
    }

    let tmp_path = temp_path(path);
    {
        let mut tmp_file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .with_context(|| {
                format!(
                    "failed to open temporary document file {}",
                    tmp_path.display()
                )
            })?;
        tmp_file
            .write_all(&json_bytes)
            .context("failed to write stroke document")?;
        tmp_file
            .sync_all()
            .context("failed to sync temporary document file")?;
    }

    if path.exists() {
        if options.backup_retention > 0 {
            let backup_path = backup_file_path(path);
            if backup_path.exists() {
                fs::remove_file(&backup_path).ok();
            }
            fs::rename(path, &backup_path).with_context(|| {
                format!(
                    "failed to rotate previous document {} -> {}",
                    path.display(),
                    backup_path.display()
                )
            })?;
        } else {
            fs::remove_file(path).ok();
        }
    }

    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "failed to move temporary document {} -> {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    info!(
        "Stroke document saved to {} ({} strokes, {} bytes, compression={})",
        path.display(),
        document.strokes.len(),
        json_bytes.len(),
        should_compress
    );

    Ok(())
}

/// Reads a stroke document. Returns `Ok(None)` if the file does not exist
/// or exceeds the size limit.
pub fn load_document(path: &Path, options: &DocumentOptions) -> Result<Option<StrokeDocument>> {
    if !path.exists() {
        debug!("No stroke document at {}, skipping load", path.display());
        return Ok(None);
    }

    let metadata = fs::metadata(path)
        .with_context(|| format!("failed to stat stroke document {}", path.display()))?;
    if metadata.len() > options.max_file_size_bytes {
        warn!(
            "Stroke document {} is {} bytes (limit {} bytes); refusing to load",
            path.display(),
            metadata.len(),
            options.max_file_size_bytes
        );
        return Ok(None);
    }

    let mut file_bytes = Vec::new();
    {
        let mut file = File::open(path)
            .with_context(|| format!("failed to open stroke document {}", path.display()))?;
        file.read_to_end(&mut file_bytes)
            .context("failed to read stroke document")?;
    }

    let decompressed = if is_gzip(&file_bytes) {
        let mut decoder = GzDecoder::new(&file_bytes[..]);
        let mut out = Vec::new();
        decoder
            .read_to_end(&mut out)
            .context("failed to decompress stroke document")?;
        out
    } else {
        file_bytes
    };

    let file: DocumentFile =
        serde_json::from_slice(&decompressed).context("failed to parse stroke document json")?;
    if file.version > CURRENT_VERSION {
        warn!(
            "Stroke document {} has version {} (newer than {}); loading what we understand",
            path.display(),
            file.version,
            CURRENT_VERSION
        );
    }

    let mut strokes = file.strokes;
    if options.max_strokes > 0 && strokes.len() > options.max_strokes {
        warn!(
            "Stroke document contains {} strokes which exceeds the limit of {}; truncating",
            strokes.len(),
            options.max_strokes
        );
        strokes.truncate(options.max_strokes);
    }

    Ok(Some(StrokeDocument {
        strokes,
        view_size: file.view_size,
    }))
}

fn lock_file_path(path: &Path) -> PathBuf {
    path.with_extension("lock")
}

fn backup_file_path(path: &Path) -> PathBuf {
    path.with_extension("json.bak")
}

fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .context("failed to compress stroke document")?;
    encoder
        .finish()
        .context("failed to finalise compressed stroke document")
}

fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() > 2 && bytes[0] == 0x1f && bytes[1] == 0x8b
}

fn temp_path(target: &Path) -> PathBuf {
    let mut candidate = target.with_extension("json.tmp");
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_extension(format!("json.tmp{}", counter));
    }
    candidate
}
