// wio/src/core/config.rs
use super::{LogoPosition, OutputFormat};
use ini::{Ini, ParseOption, Properties};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "config.ini";
pub const SETTINGS_SECTION: &str = "settings";

/// Run configuration. Loading never fails: anything missing or malformed
/// takes the value from [`OptimizeConfig::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeConfig {
    pub rename: bool,
    pub prefix: String,
    pub start_number: u64,
    pub numbering_digits: usize,
    pub format: OutputFormat,
    /// Extension written to output names, as configured (`jpg` and `jpeg` both stay as given).
    pub extension: String,
    pub quality: u8,
    pub max_width: u32,
    pub max_height: u32,
    pub logo_position: LogoPosition,
    pub optimize_png: bool,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            rename: true,
            prefix: "imagename".to_string(),
            start_number: 1,
            numbering_digits: 3,
            format: OutputFormat::WebP,
            extension: "webp".to_string(),
            quality: 80,
            max_width: 0,
            max_height: 0,
            logo_position: LogoPosition::BottomRight,
            optimize_png: true,
        }
    }
}

impl OptimizeConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        match Ini::load_from_file_opt(path, parse_option()) {
            Ok(ini) => {
                log::debug!("Loaded configuration from {}", path.display());
                Self::from_ini(&ini)
            }
            Err(e) => {
                log::warn!(
                    "Could not read configuration {} ({}), using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn from_ini_str(source: &str) -> Self {
        match Ini::load_from_str_opt(source, parse_option()) {
            Ok(ini) => Self::from_ini(&ini),
            Err(e) => {
                log::warn!("Malformed configuration ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn from_ini(ini: &Ini) -> Self {
        let Some(section) = ini.section(Some(SETTINGS_SECTION)) else {
            log::warn!("No [{}] section in configuration, using defaults", SETTINGS_SECTION);
            return Self::default();
        };

        let settings = Settings(section);
        let defaults = Self::default();

        let (format, extension) = match settings.string("format") {
            Some(name) => match OutputFormat::from_name(&name) {
                Some(format) => (format, name.to_lowercase()),
                None => {
                    log::warn!(
                        "Unsupported output format '{}', falling back to {}",
                        name,
                        defaults.extension
                    );
                    (defaults.format, defaults.extension.clone())
                }
            },
            None => (defaults.format, defaults.extension.clone()),
        };

        let logo_position = match settings.string("logo_position") {
            Some(name) => LogoPosition::from_name(&name).unwrap_or_else(|| {
                log::warn!("Unknown logo position '{}', using bottom-right", name);
                LogoPosition::BottomRight
            }),
            None => defaults.logo_position,
        };

        let quality = settings.int("quality", i64::from(defaults.quality));
        let quality = if (1..=100).contains(&quality) {
            quality as u8
        } else {
            log::warn!("Quality {} out of range, clamping to 1-100", quality);
            quality.clamp(1, 100) as u8
        };

        Self {
            rename: settings.boolean("rename", defaults.rename),
            prefix: settings.string("prefix").unwrap_or(defaults.prefix),
            start_number: settings.bounded("start_number", 0, defaults.start_number),
            numbering_digits: settings.bounded("numbering_digits", 1, defaults.numbering_digits),
            format,
            extension,
            quality,
            max_width: settings.bounded("max_width", 0, defaults.max_width),
            max_height: settings.bounded("max_height", 0, defaults.max_height),
            logo_position,
            optimize_png: settings.boolean("optimize_png", defaults.optimize_png),
        }
    }
}

// Values are taken literally; backslashes belong to the value.
fn parse_option() -> ParseOption {
    ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    }
}

/// Typed lookups over the `[settings]` section. Keys match case-insensitively.
struct Settings<'a>(&'a Properties);

impl Settings<'_> {
    fn raw(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name.trim().eq_ignore_ascii_case(key))
            .map(|(_, value)| value.trim())
    }

    fn string(&self, key: &str) -> Option<String> {
        self.raw(key).map(|value| strip_quotes(value).to_string())
    }

    fn boolean(&self, key: &str, fallback: bool) -> bool {
        let Some(value) = self.raw(key) else {
            return fallback;
        };

        match value.to_lowercase().as_str() {
            "1" | "yes" | "true" | "on" => true,
            "0" | "no" | "false" | "off" => false,
            _ => {
                log::warn!("Invalid boolean '{}' for {}, using {}", value, key, fallback);
                fallback
            }
        }
    }

    fn int(&self, key: &str, fallback: i64) -> i64 {
        let Some(value) = self.raw(key) else {
            return fallback;
        };

        value.parse().unwrap_or_else(|_| {
            log::warn!("Invalid integer '{}' for {}, using {}", value, key, fallback);
            fallback
        })
    }

    /// Integer lookup that also rejects values below `min` or outside `T`.
    fn bounded<T>(&self, key: &str, min: i64, fallback: T) -> T
    where
        T: Copy + TryFrom<i64> + std::fmt::Display,
    {
        let Some(value) = self.raw(key) else {
            return fallback;
        };

        match value.parse::<i64>() {
            Ok(n) if n >= min => T::try_from(n).unwrap_or_else(|_| {
                log::warn!("Value {} for {} is too large, using {}", n, key, fallback);
                fallback
            }),
            _ => {
                log::warn!("Invalid value '{}' for {}, using {}", value, key, fallback);
                fallback
            }
        }
    }
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches(|c| c == '"' || c == '\'')
}
