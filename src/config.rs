//! INI configuration shared by both tools.
//!
//! Every key is optional. A missing file section or key keeps the value the
//! original scripts had hardcoded, so running without `--config` reproduces
//! them exactly.

use std::{path::{Path, PathBuf}, str::FromStr, time::Duration};

use configparser::ini::Ini;
use log::debug;

use crate::{error::ConfigError, positioning_structs::ScreenPoint, supported_languages::SupportedLanguages};

pub const DEFAULT_CLIENT_PATH: &str = r"C:\Program Files\Surfshark\Surfshark.exe";

/// Upper bound for `[vpn] scroll_amount`, in wheel units. Keeps the notch
/// count times the wheel delta inside an `i32` for the input backend.
pub const MAX_SCROLL_AMOUNT: u32 = 1_200_000;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OcrSettings {
    pub language: SupportedLanguages,
    /// Directory holding `*.traineddata`; tesseract's own default when unset.
    pub datapath: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VpnSettings {
    pub client_path: PathBuf,
    pub server_list: ScreenPoint,
    pub location: ScreenPoint,
    pub location_clicks: u32,
    pub connect: ScreenPoint,
    pub close: ScreenPoint,
    /// Raw wheel units per scroll step, 120 per notch. 500 is a little over four notches.
    pub scroll_amount: u32,
    pub wrap_after: Option<u32>,
    pub timing: VpnTiming,
}

impl Default for VpnSettings {
    fn default() -> Self {
        Self {
            client_path: PathBuf::from(DEFAULT_CLIENT_PATH),
            server_list: ScreenPoint::new(1864, 1370),
            location: ScreenPoint::new(1605, 857),
            location_clicks: 2,
            connect: ScreenPoint::new(1911, 1151),
            close: ScreenPoint::new(2983, 309),
            scroll_amount: 500,
            wrap_after: None,
            timing: VpnTiming::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VpnTiming {
    pub launch_wait: Duration,
    pub server_list_wait: Duration,
    pub scroll_wait: Duration,
    pub select_wait: Duration,
    pub connect_wait: Duration,
    pub close_wait: Duration,
}

impl Default for VpnTiming {
    fn default() -> Self {
        Self {
            launch_wait: Duration::from_secs(5),
            server_list_wait: Duration::from_secs(2),
            scroll_wait: Duration::from_secs(1),
            select_wait: Duration::from_secs(2),
            connect_wait: Duration::from_secs(5),
            close_wait: Duration::from_secs(2),
        }
    }
}

impl VpnTiming {
    /// All waits set to zero, for dry runs and tests.
    pub fn immediate() -> Self {
        Self {
            launch_wait: Duration::ZERO,
            server_list_wait: Duration::ZERO,
            scroll_wait: Duration::ZERO,
            select_wait: Duration::ZERO,
            connect_wait: Duration::ZERO,
            close_wait: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub ocr: OcrSettings,
    pub vpn: VpnSettings,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut ini = Ini::new();
        ini.load(path).map_err(|message| ConfigError::Load {
            path: path.to_path_buf(),
            message,
        })?;
        debug!("Loaded config from {}", path.display());
        return Self::from_ini(&ini);
    }

    /// Uses `path` when given, built-in defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_ini_str(contents: &str) -> Result<Self, ConfigError> {
        let mut ini = Ini::new();
        ini.read(contents.to_string()).map_err(|message| ConfigError::Load {
            path: PathBuf::from("<string>"),
            message,
        })?;
        return Self::from_ini(&ini);
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(language) = parsed::<SupportedLanguages>(ini, "ocr", "language")? {
            config.ocr.language = language;
        }
        config.ocr.datapath = ini.get("ocr", "datapath");

        let vpn = &mut config.vpn;
        if let Some(client_path) = ini.get("vpn", "client_path") {
            vpn.client_path = PathBuf::from(client_path);
        }
        override_with(&mut vpn.server_list, parsed(ini, "vpn", "server_list")?);
        override_with(&mut vpn.location, parsed(ini, "vpn", "location")?);
        override_with(&mut vpn.location_clicks, parsed(ini, "vpn", "location_clicks")?);
        override_with(&mut vpn.connect, parsed(ini, "vpn", "connect")?);
        override_with(&mut vpn.close, parsed(ini, "vpn", "close")?);
        if let Some(scroll_amount) = parsed::<u32>(ini, "vpn", "scroll_amount")? {
            if scroll_amount > MAX_SCROLL_AMOUNT {
                return Err(ConfigError::invalid("vpn", "scroll_amount", &scroll_amount.to_string()));
            }
            vpn.scroll_amount = scroll_amount;
        }
        if let Some(wrap_after) = parsed::<u32>(ini, "vpn", "wrap_after")? {
            if wrap_after == 0 {
                return Err(ConfigError::invalid("vpn", "wrap_after", "0"));
            }
            vpn.wrap_after = Some(wrap_after);
        }

        let timing = &mut vpn.timing;
        override_with(&mut timing.launch_wait, millis(ini, "launch_wait")?);
        override_with(&mut timing.server_list_wait, millis(ini, "server_list_wait")?);
        override_with(&mut timing.scroll_wait, millis(ini, "scroll_wait")?);
        override_with(&mut timing.select_wait, millis(ini, "select_wait")?);
        override_with(&mut timing.connect_wait, millis(ini, "connect_wait")?);
        override_with(&mut timing.close_wait, millis(ini, "close_wait")?);

        return Ok(config);
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn parsed<T: FromStr>(ini: &Ini, section: &str, key: &str) -> Result<Option<T>, ConfigError> {
    match ini.get(section, key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::invalid(section, key, &raw)),
        None => Ok(None),
    }
}

fn millis(ini: &Ini, key: &str) -> Result<Option<Duration>, ConfigError> {
    return Ok(parsed::<u64>(ini, "timing", key)?.map(Duration::from_millis));
}
