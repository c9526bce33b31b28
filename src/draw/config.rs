use crate::style::{Rgba, StyleError, StyleSource, StyleToken, parse_hex_color};
use crate::io::FaceFile;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default palette used when styles come from an external list.
pub const DEFAULT_PALETTE: [&str; 7] = ["k-", "r-", "b-", "g-", "m-", "c-", "y-"];

/// Color cycle for faces whose style has no color (matplotlib "tab10").
pub const DEFAULT_COLOR_CYCLE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Configuration for plotting faces.
///
/// Every field may be omitted in a TOML file, missing fields take the
/// values of [`PlotConfig::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    // Labels
    pub session_name: String,
    pub entity_prefix: String,

    // Sizes in UI points, independent of zoom
    pub line_radius: f32,
    pub marker_size: f32,

    /// Hex colors for faces whose style names no color.
    pub color_cycle: Vec<String>,

    // Styling
    pub style_source: StyleSource,
    pub palette: Vec<StyleToken>,
}

impl PlotConfig {
    pub fn new() -> Self {
        Self {
            session_name: "faceplot".to_string(),
            entity_prefix: "faces".to_string(),

            line_radius: 0.75,
            marker_size: 20.0,

            color_cycle: DEFAULT_COLOR_CYCLE.iter().map(|c| c.to_string()).collect(),

            style_source: StyleSource::Annotations,
            palette: DEFAULT_PALETTE.iter().map(|t| StyleToken::new(*t)).collect(),
        }
    }

    /// Reads a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config: {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.color_cycle_rgba()?;
        Ok(config)
    }

    /// Color cycle parsed into RGBA.
    pub fn color_cycle_rgba(&self) -> Result<Vec<Rgba>, StyleError> {
        self.color_cycle.iter().map(|c| parse_hex_color(c)).collect()
    }

    /// Style tokens for the faces of `file`, according to `style_source`.
    pub fn style_tokens<'a>(&'a self, file: &'a FaceFile) -> &'a [StyleToken] {
        match self.style_source {
            StyleSource::Annotations => &file.annotations,
            StyleSource::Palette => &self.palette,
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_faces_str;

    #[test]
    fn test_defaults() {
        let config = PlotConfig::new();
        assert_eq!(config.session_name, "faceplot");
        assert_eq!(config.entity_prefix, "faces");
        assert_eq!(config.marker_size, 20.0);
        assert_eq!(config.style_source, StyleSource::Annotations);
        assert_eq!(config.palette.len(), 7);
        assert_eq!(config.color_cycle_rgba().unwrap().len(), 10);
    }

    #[test]
    fn test_default_trait() {
        let config = PlotConfig::default();
        assert_eq!(config.session_name, "faceplot");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = PlotConfig::from_toml("").unwrap();
        assert_eq!(config, PlotConfig::new());
    }

    #[test]
    fn test_partial_toml() {
        let text = r##"
            style_source = "palette"
            palette = ["k:", "bo"]
            marker_size = 8.0
            color_cycle = ["#000000"]
        "##;
        let config = PlotConfig::from_toml(text).unwrap();
        assert_eq!(config.style_source, StyleSource::Palette);
        assert_eq!(
            config.palette,
            vec![StyleToken::new("k:"), StyleToken::new("bo")]
        );
        assert_eq!(config.marker_size, 8.0);
        assert_eq!(config.color_cycle_rgba().unwrap(), vec![(0.0, 0.0, 0.0, 1.0)]);
        // Untouched fields keep their defaults
        assert_eq!(config.session_name, "faceplot");
    }

    #[test]
    fn test_bad_toml() {
        assert!(PlotConfig::from_toml("style_source = \"colors\"").is_err());
        assert!(PlotConfig::from_toml("unknown_field = 1").is_err());
        assert!(PlotConfig::from_toml("color_cycle = [\"red\"]").is_err());
    }

    #[test]
    fn test_style_tokens_by_source() {
        let file = parse_faces_str("face >r:\n(0,0)\n(1,1)\n").unwrap();
        let mut config = PlotConfig::new();
        assert_eq!(config.style_tokens(&file), &[StyleToken::new("r:")]);

        config.style_source = StyleSource::Palette;
        assert_eq!(config.style_tokens(&file).len(), 7);
        assert_eq!(config.style_tokens(&file)[0].as_str(), "k-");
    }
}
