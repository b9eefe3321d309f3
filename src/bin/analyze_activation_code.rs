use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use clipboard::{ClipboardContext, ClipboardProvider};
use log::{info, warn};

use screen_chores::{
    activation_code::{self, CodeReport},
    config::AppConfig,
    ocr::TesseractRecognizer,
    screen_access,
};

/// Print the six-digit activation code found in a screenshot.
#[derive(Parser, Debug)]
#[command(name = "analyze_activation_code", version)]
struct Cli {
    /// Screenshot to read
    #[arg(required_unless_present = "screen")]
    image_path: Option<PathBuf>,

    /// Capture the primary display instead of reading a file
    #[arg(long, conflicts_with = "image_path")]
    screen: bool,

    /// Also copy a found code to the clipboard
    #[arg(long)]
    copy: bool,

    /// INI file with an [ocr] section
    #[arg(long)]
    config: Option<PathBuf>,
}

fn copy_to_clipboard(code: &str) -> Result<(), String> {
    let mut clipboard: ClipboardContext = ClipboardProvider::new().map_err(|e| e.to_string())?;
    clipboard.set_contents(code.to_string()).map_err(|e| e.to_string())
}

fn run(cli: &Cli) -> CodeReport {
    let config = match AppConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return CodeReport::Failed(e.to_string()),
    };
    let mut recognizer = TesseractRecognizer::new(&config.ocr);

    match &cli.image_path {
        Some(path) => {
            info!("Analyzing {}", path.display());
            activation_code::analyze_file(path, &mut recognizer)
        }
        _ => {
            info!("Analyzing primary display");
            let outcome = screen_access::capture_primary_png()
                .and_then(|png| activation_code::extract_from_png(&png, &mut recognizer));
            CodeReport::from_outcome(outcome)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::from(1);
        }
        Err(e) => e.exit(),
    };

    let report = run(&cli);
    println!("{}", report);

    if cli.copy {
        if let Some(code) = report.code() {
            if let Err(e) = copy_to_clipboard(code) {
                warn!("Could not copy code to clipboard: {}", e);
            }
        }
    }

    ExitCode::SUCCESS
}
