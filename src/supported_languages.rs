use std::{fmt, str::FromStr};

use crate::error::ConfigError;

/// Tesseract traineddata names the OCR step knows how to ask for.
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub enum SupportedLanguages {
    #[default]
    Eng,
    ChiSim,
    ChiTra,
}

impl fmt::Display for SupportedLanguages {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Eng => write!(f, "eng"),
            Self::ChiSim => write!(f, "chi_sim"),
            Self::ChiTra => write!(f, "chi_tra"),
        }
    }
}

impl FromStr for SupportedLanguages {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eng" => Ok(Self::Eng),
            "chi_sim" => Ok(Self::ChiSim),
            "chi_tra" => Ok(Self::ChiTra),
            other => Err(ConfigError::invalid("ocr", "language", other)),
        }
    }
}
