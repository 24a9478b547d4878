//! Serializable icon-set configuration.
//!
//! An [`IconSetConfig`] describes one batch: which icons to convert, their
//! target sizes, how identifiers are named and where outputs go. It replaces
//! per-script constants so one pipeline serves every icon set.
//!
//! # Example
//!
//! ```
//! use lvgl_icon_renderer::{IconSetConfig, IconSpec};
//!
//! let config = IconSetConfig::new("status")
//!     .with_prefix("status_")
//!     .with_icon(IconSpec::new("wifi.svg", "wifi.svg", 24, 24));
//!
//! let json = config.to_json().unwrap();
//! let restored = IconSetConfig::from_json(&json).unwrap();
//! assert_eq!(restored.icons.len(), 1);
//! ```
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "name": "weather",
//!   "baseUrl": "https://github.com/basmilius/weather-icons/blob/dev/production/fill/svg-static/",
//!   "identifierPrefix": "",
//!   "renderSize": 512,
//!   "lvglVersion": "v9",
//!   "output": {
//!     "sourceDir": "generated_assets",
//!     "previewDir": "debug_pngs",
//!     "headerFile": "weather_icons.h"
//!   },
//!   "icons": [
//!     { "source": "clear-day.svg", "destination": "weather_01d.svg", "width": 60, "height": 60 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::encode::LvglVersion;
use crate::error::ConfigError;
use crate::icon::IconSpec;
use crate::raster::{DEFAULT_RENDER_SIZE, MAX_RENDER_SIZE};

/// Meteocons "fill" static SVG set.
pub const WEATHER_BASE_URL: &str =
    "https://github.com/basmilius/weather-icons/blob/dev/production/fill/svg-static/";

/// Size of the main weather condition icons.
pub const WEATHER_ICON_SIZE: u32 = 60;

/// Size of the small inline info icons.
pub const INFO_ICON_SIZE: u32 = 16;

// ============================================================================
// OutputLayout
// ============================================================================

/// Where generated files are written, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct OutputLayout {
    /// Directory for the `.c` files and the header.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Directory for the PNG previews.
    #[serde(default = "default_preview_dir")]
    pub preview_dir: PathBuf,

    /// File name of the header, placed in `source_dir`.
    #[serde(default = "default_header_file")]
    pub header_file: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            preview_dir: default_preview_dir(),
            header_file: default_header_file(),
        }
    }
}

impl OutputLayout {
    pub fn source_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir)
    }

    pub fn preview_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.preview_dir)
    }

    pub fn header_path_in(&self, root: &Path) -> PathBuf {
        self.source_dir_in(root).join(&self.header_file)
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("generated_assets")
}

fn default_preview_dir() -> PathBuf {
    PathBuf::from("debug_pngs")
}

fn default_header_file() -> String {
    "icons.h".to_string()
}

/// `<base><source>?raw=true`; GitHub blob URLs need the query to serve the file.
pub(crate) fn raw_url(base: &str, spec: &IconSpec) -> String {
    format!("{base}{}?raw=true", spec.source)
}

fn default_render_size() -> u32 {
    DEFAULT_RENDER_SIZE
}

// ============================================================================
// IconSetConfig
// ============================================================================

/// A named batch of icons sharing naming and output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct IconSetConfig {
    /// Human-readable set name, used in log output.
    pub name: String,

    /// URL prefix the source files are downloaded from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Prepended to every generated identifier.
    #[serde(default)]
    pub identifier_prefix: String,

    /// Edge length of the square working render.
    #[serde(default = "default_render_size")]
    pub render_size: u32,

    #[serde(default)]
    pub lvgl_version: LvglVersion,

    #[serde(default)]
    pub output: OutputLayout,

    #[serde(default)]
    pub icons: Vec<IconSpec>,
}

impl IconSetConfig {
    /// Creates an empty set with default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: None,
            identifier_prefix: String::new(),
            render_size: DEFAULT_RENDER_SIZE,
            lvgl_version: LvglVersion::default(),
            output: OutputLayout::default(),
            icons: Vec::new(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.identifier_prefix = prefix.into();
        self
    }

    pub fn with_render_size(mut self, size: u32) -> Self {
        self.render_size = size;
        self
    }

    pub fn with_lvgl_version(mut self, version: LvglVersion) -> Self {
        self.lvgl_version = version;
        self
    }

    pub fn with_output(mut self, output: OutputLayout) -> Self {
        self.output = output;
        self
    }

    pub fn with_icon(mut self, icon: IconSpec) -> Self {
        self.icons.push(icon);
        self
    }

    /// The icon table of the weather station display.
    ///
    /// OpenWeather condition codes map to Meteocons artwork at 60x60; the
    /// detail rows use 16x16 glyphs.
    pub fn weather() -> Self {
        let big = |source: &str, destination: &str| {
            IconSpec::new(source, destination, WEATHER_ICON_SIZE, WEATHER_ICON_SIZE)
        };
        let small = |source: &str, destination: &str| {
            IconSpec::new(source, destination, INFO_ICON_SIZE, INFO_ICON_SIZE)
        };

        let icons = vec![
            big("clear-day.svg", "weather_01d.svg"),
            big("clear-night.svg", "weather_01n.svg"),
            big("partly-cloudy-day.svg", "weather_02d.svg"),
            big("partly-cloudy-night.svg", "weather_02n.svg"),
            big("cloudy.svg", "weather_03.svg"),
            big("overcast.svg", "weather_04.svg"),
            big("rain.svg", "weather_09.svg"),
            big("partly-cloudy-day-rain.svg", "weather_10d.svg"),
            big("partly-cloudy-night-rain.svg", "weather_10n.svg"),
            big("thunderstorms-day.svg", "weather_11d.svg"),
            big("thunderstorms-night.svg", "weather_11n.svg"),
            big("snow.svg", "weather_13.svg"),
            big("mist.svg", "weather_50.svg"),
            big("not-available.svg", "weather_NA.svg"),
            big("barometer.svg", "icon_barometer.svg"),
            big("thermometer.svg", "icon_thermometer.svg"),
            small("clear-day.svg", "uvi_icon.svg"),
            small("wind.svg", "wind_speed_icon.svg"),
            small("windsock.svg", "wind_direction_icon.svg"),
            small("barometer.svg", "pressure_icon.svg"),
            small("thermometer-sun.svg", "feels_like_icon.svg"),
        ];

        Self {
            icons,
            output: OutputLayout {
                header_file: "weather_icons.h".to_string(),
                ..OutputLayout::default()
            },
            ..Self::new("weather").with_base_url(WEATHER_BASE_URL)
        }
    }

    /// Download URL for an icon, if the set has a base URL.
    pub fn source_url(&self, spec: &IconSpec) -> Option<String> {
        self.base_url.as_deref().map(|base| raw_url(base, spec))
    }

    /// Checks every entry and the render size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render_size == 0 {
            return Err(ConfigError::ZeroRenderSize);
        }
        if self.render_size > MAX_RENDER_SIZE {
            return Err(ConfigError::RenderSizeTooLarge {
                size: self.render_size,
                max: MAX_RENDER_SIZE,
            });
        }
        self.icons.iter().try_for_each(IconSpec::validate)
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_serialization_roundtrip() {
        let config = IconSetConfig::new("status")
            .with_prefix("status_")
            .with_lvgl_version(LvglVersion::V8)
            .with_render_size(256)
            .with_icon(IconSpec::new("wifi.svg", "wifi.svg", 24, 24));

        let json = config.to_json().unwrap();
        let restored = IconSetConfig::from_json(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn config_json_format() {
        let json = IconSetConfig::weather().to_json_pretty().unwrap();

        assert!(json.contains("\"identifierPrefix\""));
        assert!(json.contains("\"renderSize\": 512"));
        assert!(json.contains("\"lvglVersion\": \"v9\""));
        assert!(json.contains("\"headerFile\": \"weather_icons.h\""));
        assert!(json.contains("\"baseUrl\""));
    }

    #[test]
    fn minimal_config_gets_defaults() {
        let config = IconSetConfig::from_json(r#"{ "name": "tiny" }"#).unwrap();

        assert_eq!(config.render_size, DEFAULT_RENDER_SIZE);
        assert_eq!(config.lvgl_version, LvglVersion::V9);
        assert_eq!(config.output, OutputLayout::default());
        assert!(config.icons.is_empty());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn weather_preset_table() {
        let config = IconSetConfig::weather();
        assert_eq!(config.icons.len(), 21);
        assert!(config.validate().is_ok());

        let big = config.icons.iter().filter(|i| i.width == WEATHER_ICON_SIZE).count();
        let small = config.icons.iter().filter(|i| i.width == INFO_ICON_SIZE).count();
        assert_eq!((big, small), (16, 5));

        assert_eq!(config.icons[0].source, "clear-day.svg");
        assert_eq!(config.icons[0].destination, "weather_01d.svg");
        assert_eq!(config.identifier_prefix, "");
    }

    #[test]
    fn source_url_uses_raw_blob() {
        let config = IconSetConfig::weather();
        let url = config.source_url(&config.icons[0]).unwrap();
        assert_eq!(
            url,
            "https://github.com/basmilius/weather-icons/blob/dev/production/fill/svg-static/clear-day.svg?raw=true"
        );

        let local = IconSetConfig::new("local");
        assert!(local.source_url(&config.icons[0]).is_none());
    }

    #[test]
    fn validation_rejects_bad_entries() {
        let config = IconSetConfig::new("bad").with_icon(IconSpec::new("a.svg", "a.svg", 0, 60));
        assert!(matches!(config.validate(), Err(ConfigError::ZeroSize { .. })));

        let config = IconSetConfig::new("bad").with_render_size(0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroRenderSize)));
    }

    #[test]
    fn validation_caps_render_size() {
        let config = IconSetConfig::from_json(r#"{ "name": "huge", "renderSize": 70000 }"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RenderSizeTooLarge { size: 70000, max: MAX_RENDER_SIZE })
        ));

        let config = IconSetConfig::new("edge").with_render_size(MAX_RENDER_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn output_paths_are_rooted() {
        let layout = IconSetConfig::weather().output;
        let root = Path::new("out");
        assert_eq!(layout.source_dir_in(root), Path::new("out/generated_assets"));
        assert_eq!(layout.preview_dir_in(root), Path::new("out/debug_pngs"));
        assert_eq!(
            layout.header_path_in(root),
            Path::new("out/generated_assets/weather_icons.h")
        );
    }

    #[test]
    fn from_path_reports_missing_file() {
        let result = IconSetConfig::from_path(Path::new("/nonexistent/icons.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
