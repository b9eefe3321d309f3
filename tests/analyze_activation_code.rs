use std::{
    path::{Path, PathBuf},
    process::Command,
};

use screen_chores::{
    activation_code::{analyze_file, extract_from_file, CodeReport},
    ocr::TextRecognizer,
    ExtractError,
};

/// Stands in for tesseract: returns canned text for any decodable PNG.
struct CannedRecognizer {
    text: String,
    calls: usize,
}

impl CannedRecognizer {
    fn new(text: &str) -> Self {
        Self { text: text.to_string(), calls: 0 }
    }
}

impl TextRecognizer for CannedRecognizer {
    fn recognize_png(&mut self, png: &[u8]) -> Result<String, ExtractError> {
        assert!(png.starts_with(b"\x89PNG"), "recognizer should always receive png bytes");
        self.calls += 1;
        Ok(self.text.clone())
    }
}

struct BrokenRecognizer;

impl TextRecognizer for BrokenRecognizer {
    fn recognize_png(&mut self, _png: &[u8]) -> Result<String, ExtractError> {
        Err(ExtractError::ocr("init", "Failed loading language 'eng'"))
    }
}

struct TempImage(PathBuf);

impl TempImage {
    fn jpeg(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("screen_chores_{}_{}.jpg", name, std::process::id()));
        image::RgbImage::from_pixel(32, 16, image::Rgb([240, 240, 240])).save(&path).unwrap();
        Self(path)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempImage {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[test]
fn prints_code_found_in_screenshot() {
    let image = TempImage::jpeg("found");
    let mut recognizer = CannedRecognizer::new("Pokemon Trainer Club\nYour code: 731905\nThanks");

    let report = analyze_file(image.path(), &mut recognizer);

    assert_eq!(report, CodeReport::Found("731905".to_string()));
    assert_eq!(report.to_string(), "731905");
    assert_eq!(recognizer.calls, 1);
}

#[test]
fn prints_not_found_when_only_wrong_lengths_present() {
    let image = TempImage::jpeg("not_found");
    let mut recognizer = CannedRecognizer::new("ticket 12345, order 1234567");

    let report = analyze_file(image.path(), &mut recognizer);

    assert_eq!(report.to_string(), "No activation code found.");
    assert_eq!(extract_from_file(image.path(), &mut recognizer).unwrap(), None);
}

#[test]
fn missing_file_prints_error_without_running_ocr() {
    let mut recognizer = CannedRecognizer::new("123456");

    let report = analyze_file(Path::new("/nonexistent/activation.png"), &mut recognizer);

    assert!(report.to_string().starts_with("Error: "), "{}", report);
    assert_eq!(recognizer.calls, 0);
}

#[test]
fn ocr_failure_prints_error() {
    let image = TempImage::jpeg("ocr_failure");

    let report = analyze_file(image.path(), &mut BrokenRecognizer);

    assert_eq!(report.to_string(), "Error: tesseract init failed: Failed loading language 'eng'");
}

#[test]
fn unreadable_image_prints_error() {
    let path = std::env::temp_dir().join(format!("screen_chores_garbage_{}.png", std::process::id()));
    std::fs::write(&path, b"definitely not a png").unwrap();

    let report = analyze_file(&path, &mut CannedRecognizer::new("123456"));
    std::fs::remove_file(&path).ok();

    assert!(matches!(report, CodeReport::Failed(_)));
}

#[test]
fn cli_without_path_exits_with_status_one() {
    let output = Command::new(env!("CARGO_BIN_EXE_analyze_activation_code"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn cli_reports_missing_file_on_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_analyze_activation_code"))
        .arg("/nonexistent/activation.png")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Error: "), "{}", stdout);
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn cli_rejects_path_together_with_screen() {
    let output = Command::new(env!("CARGO_BIN_EXE_analyze_activation_code"))
        .args(["--screen", "/tmp/activation.png"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot be used with"));
}
