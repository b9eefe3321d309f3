use std::{io::Cursor, path::Path};

use image::{DynamicImage, ImageFormat};
use log::debug;
use tesseract::{PageSegMode, Tesseract};

use crate::{config::OcrSettings, error::ExtractError, supported_languages::SupportedLanguages};

/// Turns PNG bytes into plain text.
pub trait TextRecognizer {
    fn recognize_png(&mut self, png: &[u8]) -> Result<String, ExtractError>;
}

pub struct TesseractRecognizer {
    language: SupportedLanguages,
    datapath: Option<String>,
}

impl TesseractRecognizer {
    pub fn new(settings: &OcrSettings) -> Self {
        Self {
            language: settings.language,
            datapath: settings.datapath.clone(),
        }
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize_png(&mut self, png: &[u8]) -> Result<String, ExtractError> {
        debug!("Executing OCR ({})", self.language);
        let mut tesseract = Tesseract::new(self.datapath.as_deref(), Some(&self.language.to_string()))
            .map_err(|e| ExtractError::ocr("init", e))?;
        tesseract.set_page_seg_mode(PageSegMode::PsmAuto);

        let mut tesseract = tesseract
            .set_image_from_mem(png)
            .map_err(|e| ExtractError::ocr("set image", e))?
            .recognize()
            .map_err(|e| ExtractError::ocr("recognize", e))?;
        let text = tesseract.get_text().map_err(|e| ExtractError::ocr("get text", e))?;
        debug!("OCR Complete, {} chars", text.len());
        return Ok(text);
    }
}

/// Opens any format `image` understands and re-encodes it as PNG for tesseract.
pub fn load_png_bytes(path: &Path) -> Result<Vec<u8>, ExtractError> {
    let image = image::open(path).map_err(|source| ExtractError::OpenImage {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
    return encode_png(&image);
}

/// Checks that captured bytes are a decodable image before handing them on.
pub fn normalize_png_bytes(bytes: &[u8]) -> Result<Vec<u8>, ExtractError> {
    let image = image::load_from_memory(bytes).map_err(ExtractError::DecodeImage)?;
    return encode_png(&image);
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, ExtractError> {
    let mut bytes: Vec<u8> = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(ExtractError::EncodeImage)?;
    return Ok(bytes);
}
