use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_level")]
    pub level: String, // "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_true")]
    pub console_logging_enabled: bool,
    #[serde(default = "default_false")]
    pub file_logging_enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_prefix")]
    pub file_name_prefix: String,
    #[serde(default = "default_true")]
    pub show_target: bool,
    #[serde(default = "default_true")]
    pub ansi_colors: bool,
    #[serde(default = "default_rotation")]
    pub rotation: String, // "daily", "hourly", "minutely", "never"
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            console_logging_enabled: default_true(),
            file_logging_enabled: default_false(),
            log_dir: default_log_dir(),
            file_name_prefix: default_prefix(),
            show_target: default_true(),
            ansi_colors: default_true(),
            rotation: default_rotation(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_log_dir() -> String {
    "logs".to_string()
}
fn default_prefix() -> String {
    "keyblue".to_string()
}
fn default_rotation() -> String {
    "daily".to_string()
}

/// Persistent application settings.
///
/// The SDP identity fields are what the stack advertises to hosts; the
/// defaults reproduce the identity the app has always used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // SDP identity
    #[serde(default = "default_device_name")]
    pub device_name: String,
    #[serde(default = "default_device_description")]
    pub device_description: String,
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_version")]
    pub version: String,

    /// Interval between the press and release reports, in milliseconds.
    /// Lets the host register a discrete keypress rather than a held key.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    // Logging Settings
    #[serde(default)]
    pub log_settings: LogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            device_name: default_device_name(),
            device_description: default_device_description(),
            provider: default_provider(),
            version: default_version(),
            debounce_ms: default_debounce_ms(),
            log_settings: LogSettings::default(),
        }
    }
}

fn default_device_name() -> String {
    "KeyBlue".to_string()
}
fn default_device_description() -> String {
    "Bluetooth Keyboard".to_string()
}
fn default_provider() -> String {
    "keyblue".to_string()
}
fn default_version() -> String {
    "1.0".to_string()
}
fn default_debounce_ms() -> u64 {
    50
}

pub struct SettingsService {
    settings: Settings,
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_path()?;
        let settings = Self::load_from_file(&settings_path).unwrap_or_default();

        Ok(Self {
            settings,
            settings_path,
        })
    }

    fn get_settings_path() -> anyhow::Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        path.push("KeyBlue");
        fs::create_dir_all(&path)?;
        path.push("settings.json");
        Ok(path)
    }

    fn load_from_file(path: &PathBuf) -> anyhow::Result<Settings> {
        let contents = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)?;
        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.settings_path, json)?;
        Ok(())
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    pub fn get_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_advertised_identity() {
        let settings = Settings::default();
        assert_eq!(settings.device_name, "KeyBlue");
        assert_eq!(settings.device_description, "Bluetooth Keyboard");
        assert_eq!(settings.version, "1.0");
        assert_eq!(settings.debounce_ms, 50);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"debounce_ms": 20}"#).unwrap();
        assert_eq!(settings.debounce_ms, 20);
        assert_eq!(settings.device_name, "KeyBlue");
        assert_eq!(settings.log_settings.level, "info");
    }
}
