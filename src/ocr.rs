use std::error::Error;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

use crate::normalize::normalize_ocr_text;
use crate::recipe::Ingredient;

pub const DEFAULT_TESSERACT_CMD: &str = "tesseract";

#[derive(Debug)]
pub enum OcrError {
    ImageNotFound(PathBuf),
    Spawn { command: String, source: std::io::Error },
    Failed { status: Option<i32>, stderr: String },
    InvalidOutput(std::string::FromUtf8Error),
}

impl fmt::Display for OcrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OcrError::ImageNotFound(path) => write!(f, "Image not found at: {:?}", path),
            OcrError::Spawn { command, source } => {
                write!(f, "Failed to run OCR command '{}': {}", command, source)
            }
            OcrError::Failed { status, stderr } => match status {
                Some(code) => write!(f, "OCR command exited with status {}: {}", code, stderr),
                None => write!(f, "OCR command terminated by signal: {}", stderr),
            },
            OcrError::InvalidOutput(err) => write!(f, "OCR output is not valid UTF-8: {}", err),
        }
    }
}

impl Error for OcrError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            OcrError::Spawn { source, .. } => Some(source),
            OcrError::InvalidOutput(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::string::FromUtf8Error> for OcrError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        OcrError::InvalidOutput(err)
    }
}

/// Anything that can read the text out of an image file.
pub trait TextExtractor {
    fn extract_text(&self, image: &Path) -> impl Future<Output = Result<String, OcrError>> + Send;
}

/// Runs the `tesseract` command line tool and reads the recognized text from stdout.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    command: String,
    language: Option<String>,
}

impl TesseractOcr {
    pub fn new(command: impl Into<String>, language: Option<String>) -> Self {
        Self {
            command: command.into(),
            language,
        }
    }

    fn args(&self, image: &Path) -> Vec<String> {
        let mut args = vec![image.to_string_lossy().into_owned(), "stdout".to_string()];
        if let Some(language) = &self.language {
            args.push("-l".to_string());
            args.push(language.clone());
        }
        args
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new(DEFAULT_TESSERACT_CMD, None)
    }
}

impl TextExtractor for TesseractOcr {
    fn extract_text(&self, image: &Path) -> impl Future<Output = Result<String, OcrError>> + Send {
        let image = image.to_path_buf();
        let args = self.args(&image);
        let command = self.command.clone();
        async move {
            if !image.exists() {
                return Err(OcrError::ImageNotFound(image));
            }
            debug!(command = %command, ?args, "running OCR");

            let output = Command::new(&command)
                .args(&args)
                .output()
                .await
                .map_err(|source| OcrError::Spawn {
                    command: command.clone(),
                    source,
                })?;

            if !output.status.success() {
                return Err(OcrError::Failed {
                    status: output.status.code(),
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                });
            }
            Ok(String::from_utf8(output.stdout)?)
        }
    }
}

/// Reads an image and turns its text into ingredient tokens for the matcher.
pub async fn scan_ingredients<E: TextExtractor>(extractor: &E, image: &Path) -> Result<Vec<Ingredient>, OcrError> {
    let text = extractor.extract_text(image).await?;
    let ingredients = normalize_ocr_text(&text);
    info!(image = ?image, tokens = ingredients.len(), "extracted ingredients from image");
    Ok(ingredients)
}
