use std::fs;
use std::io;
use std::path::PathBuf;

use image::ImageFormat;
use thiserror::Error;

use crate::canvas::Canvas;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Writes finished canvases into a single output directory.
#[derive(Debug, Clone)]
pub struct StorageService {
    output_dir: PathBuf,
}

impl StorageService {
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Creates the output directory and any missing parents. Must run before
    /// the first [`StorageService::save_png`].
    pub fn ensure_output_dir(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Encodes `canvas` as PNG under `file_name`, replacing any previous file.
    pub fn save_png(&self, canvas: Canvas, file_name: &str) -> StorageResult<PathBuf> {
        let target = self.output_dir.join(file_name);
        canvas
            .into_image()
            .save_with_format(&target, ImageFormat::Png)?;
        Ok(target)
    }
}
