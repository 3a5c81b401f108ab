//! Connection and timing settings for the hand adapter.

use std::{collections::HashMap, fs, time::Duration};

#[derive(Debug, Clone)]
pub struct HandSettings {
    pub port: String,
    pub baud: u32,
    /// Wait after opening the port, so the actuator firmware can boot
    /// before the first command byte.
    pub settle_delay: Duration,
    /// Interval between an animation's own steps.
    pub variant_tick: Duration,
    /// Interval between idle animation switches. Must exceed any variant's
    /// natural run.
    pub rotation_interval: Duration,
}

impl Default for HandSettings {
    fn default() -> Self {
        Self {
            port: "/dev/ttyACM0".into(),
            baud: 9600,
            settle_delay: Duration::from_secs(2),
            variant_tick: Duration::from_secs(1),
            rotation_interval: Duration::from_secs(10),
        }
    }
}

/// Layers `hand.toml` and environment overrides over the defaults.
pub fn load_settings() -> HandSettings {
    let mut settings = HandSettings::default();

    if let Ok(raw) = fs::read_to_string("hand.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("port") {
                settings.port = v.clone();
            }
            if let Some(v) = file_cfg.get("baud").and_then(|v| v.parse().ok()) {
                settings.baud = v;
            }
        }
    }

    if let Ok(v) = std::env::var("HAND_PORT") {
        settings.port = v;
    }
    if let Ok(v) = std::env::var("HAND_BAUD") {
        if let Ok(baud) = v.parse() {
            settings.baud = baud;
        }
    }

    settings
}
