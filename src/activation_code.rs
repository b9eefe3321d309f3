//! Six-digit activation code extraction.
//!
//! The pipeline is image → PNG bytes → OCR text → first `\b\d{6}\b` match.
//! Every failure along the way folds into a single [`CodeReport::Failed`]
//! line; callers only ever see one of three printed outcomes.

use std::{fmt, path::Path, sync::OnceLock};

use log::debug;
use regex::Regex;

use crate::{error::ExtractError, ocr::{self, TextRecognizer}};

pub const NOT_FOUND_MESSAGE: &str = "No activation code found.";

fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\d{6}\b").expect("activation code pattern is valid"))
}

/// First run of exactly six digits standing alone as a word.
pub fn find_activation_code(text: &str) -> Option<&str> {
    return code_pattern().find(text).map(|m| m.as_str());
}

pub fn extract_from_png<R: TextRecognizer + ?Sized>(
    png: &[u8],
    recognizer: &mut R,
) -> Result<Option<String>, ExtractError> {
    let text = recognizer.recognize_png(png)?;
    debug!("Recognized text: {:?}", text);
    return Ok(find_activation_code(&text).map(str::to_string));
}

pub fn extract_from_file<R: TextRecognizer + ?Sized>(
    path: &Path,
    recognizer: &mut R,
) -> Result<Option<String>, ExtractError> {
    let png = ocr::load_png_bytes(path)?;
    return extract_from_png(&png, recognizer);
}

/// The one line the extractor prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeReport {
    Found(String),
    NotFound,
    Failed(String),
}

impl CodeReport {
    pub fn from_outcome(outcome: Result<Option<String>, ExtractError>) -> Self {
        match outcome {
            Ok(Some(code)) => Self::Found(code),
            Ok(None) => Self::NotFound,
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Found(code) => Some(code.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for CodeReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Found(code) => write!(f, "{}", code),
            Self::NotFound => write!(f, "{}", NOT_FOUND_MESSAGE),
            Self::Failed(message) => write!(f, "Error: {}", message),
        }
    }
}

/// Runs the whole file pipeline and never fails.
pub fn analyze_file<R: TextRecognizer + ?Sized>(path: &Path, recognizer: &mut R) -> CodeReport {
    return CodeReport::from_outcome(extract_from_file(path, recognizer));
}
