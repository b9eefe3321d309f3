use std::{io, path::PathBuf};

use thiserror::Error;

use crate::positioning_structs::{ScreenArea, ScreenPoint};

/// Anything that can go wrong between an image and a recognized string.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("cannot open image {}: {source}", .path.display())]
    OpenImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot decode image: {0}")]
    DecodeImage(#[source] image::ImageError),
    #[error("cannot encode image as png: {0}")]
    EncodeImage(#[source] image::ImageError),
    #[error("tesseract {stage} failed: {message}")]
    Ocr { stage: &'static str, message: String },
    #[error("screen capture failed: {0}")]
    Capture(String),
}

impl ExtractError {
    pub fn ocr(stage: &'static str, err: impl ToString) -> Self {
        return Self::Ocr { stage, message: err.to_string() };
    }
}

#[derive(Debug, Error)]
pub enum VpnError {
    #[error("cannot launch {}: {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("input injection failed: {0}")]
    Input(String),
    #[error("{name} point {point} lies outside the primary display {area}")]
    OffScreen {
        name: &'static str,
        point: ScreenPoint,
        area: ScreenArea,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot load config {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },
    #[error("invalid value {value:?} for [{section}] {key}")]
    Invalid {
        section: String,
        key: String,
        value: String,
    },
}

impl ConfigError {
    pub fn invalid(section: &str, key: &str, value: &str) -> Self {
        return Self::Invalid {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        };
    }
}
