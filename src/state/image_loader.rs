//! Background loading of the preview image

use base64::prelude::*;
use image::{ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

/// Errors produced while turning a file into a preview image
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported image format")]
    UnsupportedFormat,
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// A decoded image ready for the preview pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub mime: &'static str,
    pub width: u32,
    pub height: u32,
    /// Self-contained `data:` URL with the file contents
    pub data_url: String,
}

impl LoadedImage {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Sniff the format, read the dimensions and encode the bytes as a data URL
pub fn encode_image(path: &Path, bytes: &[u8]) -> Result<LoadedImage, ImageLoadError> {
    let format: ImageFormat =
        image::guess_format(bytes).map_err(|_| ImageLoadError::UnsupportedFormat)?;
    let (width, height) = ImageReader::with_format(Cursor::new(bytes), format).into_dimensions()?;
    let mime = format.to_mime_type();

    Ok(LoadedImage {
        path: path.to_path_buf(),
        mime,
        width,
        height,
        data_url: format!("data:{mime};base64,{}", BASE64_STANDARD.encode(bytes)),
    })
}

async fn read_image(path: &Path) -> Result<LoadedImage, ImageLoadError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ImageLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    encode_image(path, &bytes)
}

/// Completion of a background read, delivered to the UI loop
#[derive(Debug)]
pub struct ImageLoaded {
    pub generation: u64,
    pub path: PathBuf,
    pub result: Result<LoadedImage, ImageLoadError>,
}

/// Loader state as seen by the form and preview
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageState {
    #[default]
    Idle,
    Reading {
        path: PathBuf,
    },
    Ready(LoadedImage),
    Failed {
        path: PathBuf,
        reason: String,
    },
}

/// Reads selected files on the runtime and keeps only the latest selection
#[derive(Debug)]
pub struct ImageLoader {
    state: ImageState,
    generation: u64,
    tx: UnboundedSender<ImageLoaded>,
}

impl ImageLoader {
    pub fn new(tx: UnboundedSender<ImageLoaded>) -> Self {
        Self {
            state: ImageState::Idle,
            generation: 0,
            tx,
        }
    }

    pub fn state(&self) -> &ImageState {
        &self.state
    }

    /// The file the user picked, whatever the outcome of reading it
    pub fn selected_file(&self) -> Option<&Path> {
        match &self.state {
            ImageState::Idle => None,
            ImageState::Reading { path } | ImageState::Failed { path, .. } => Some(path),
            ImageState::Ready(image) => Some(&image.path),
        }
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        match &self.state {
            ImageState::Ready(image) => Some(image),
            _ => None,
        }
    }

    /// Data URL of the ready image, empty otherwise
    pub fn image_url(&self) -> &str {
        self.image().map(|i| i.data_url.as_str()).unwrap_or("")
    }

    /// Start reading `path` in the background. Must run inside a tokio runtime.
    pub fn select(&mut self, path: PathBuf) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        tracing::debug!("Reading image {} (generation {generation})", path.display());
        self.state = ImageState::Reading { path: path.clone() };

        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = read_image(&path).await;
            // Receiver is gone once the modal has been dropped
            let _ = tx.send(ImageLoaded {
                generation,
                path,
                result,
            });
        });

        generation
    }

    /// Drop the current selection; reads still in flight become stale
    pub fn clear(&mut self) {
        self.generation += 1;
        self.state = ImageState::Idle;
    }

    /// Apply a finished read. Returns false if the read was superseded.
    pub fn apply(&mut self, event: ImageLoaded) -> bool {
        if event.generation != self.generation {
            tracing::debug!(
                "Discarding stale image read of {} (generation {}, current {})",
                event.path.display(),
                event.generation,
                self.generation
            );
            return false;
        }

        self.state = match event.result {
            Ok(image) => {
                tracing::info!(
                    "Image ready: {} ({}x{}, {})",
                    image.path.display(),
                    image.width,
                    image.height,
                    image.mime
                );
                ImageState::Ready(image)
            }
            Err(err) => {
                tracing::warn!("Could not load image {}: {err}", event.path.display());
                ImageState::Failed {
                    path: event.path,
                    reason: err.to_string(),
                }
            }
        };
        true
    }
}
