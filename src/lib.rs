//! Two small desktop chores: reading a six-digit activation code out of a
//! screenshot, and rotating a VPN client to its next server by clicking
//! through its window.

pub mod activation_code;
pub mod config;
pub mod error;
pub mod input;
pub mod ocr;
pub mod positioning_structs;
pub mod screen_access;
pub mod supported_languages;
pub mod vpn;

pub use activation_code::{find_activation_code, CodeReport};
pub use config::AppConfig;
pub use error::{ConfigError, ExtractError, VpnError};
