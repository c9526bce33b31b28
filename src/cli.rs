use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use faceplot::{PlotConfig, StyleSource, StyleToken};

/// Plots polygon faces read from a text file of (x,y) coordinates.
#[derive(Debug, Clone, Parser)]
#[clap(name = "faceplot", version)]
pub struct CliArguments {
    /// Face file to plot
    #[arg(default_value = "orig.txt")]
    pub input: PathBuf,

    /// TOML configuration file
    #[arg(short, long, env = "FACEPLOT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Comma separated style tokens, one per face (e.g. "k-,r:,bo")
    #[arg(
        short,
        long,
        value_delimiter = ',',
        value_name = "LIST",
        allow_hyphen_values = true,
        conflicts_with = "annotations"
    )]
    pub palette: Option<Vec<String>>,

    /// Takes styles from `>` annotations in the face file
    #[arg(long)]
    pub annotations: bool,

    /// Writes a Rerun recording (.rrd) instead of spawning a viewer
    #[arg(short, long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Sets the level of logging verbosity:
    /// -v = info, -vv = debug, -vvv = trace
    #[clap(short, long, action = ArgAction::Count)]
    pub verbosity: u8,
}

impl CliArguments {
    /// Configuration file (or defaults) with command line overrides applied.
    pub fn plot_config(&self) -> Result<PlotConfig> {
        let mut config = match &self.config {
            Some(path) => PlotConfig::from_file(path)?,
            None => PlotConfig::new(),
        };
        if let Some(palette) = &self.palette {
            config.style_source = StyleSource::Palette;
            config.palette = palette.iter().map(|t| StyleToken::new(t.trim())).collect();
        }
        if self.annotations {
            config.style_source = StyleSource::Annotations;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() -> Result<()> {
        let args = CliArguments::try_parse_from(["faceplot"])?;
        assert_eq!(args.input, PathBuf::from("orig.txt"));
        assert_eq!(args.verbosity, 0);
        assert!(args.save.is_none());
        assert_eq!(args.plot_config()?.style_source, StyleSource::Annotations);
        Ok(())
    }

    #[test]
    fn test_palette_flag() -> Result<()> {
        let args = CliArguments::try_parse_from(["faceplot", "rooms.txt", "-p", "k-, r:,bo", "-vv"])?;
        assert_eq!(args.input, PathBuf::from("rooms.txt"));
        assert_eq!(args.verbosity, 2);
        let config = args.plot_config()?;
        assert_eq!(config.style_source, StyleSource::Palette);
        assert_eq!(
            config.palette,
            vec![
                StyleToken::new("k-"),
                StyleToken::new("r:"),
                StyleToken::new("bo")
            ]
        );
        Ok(())
    }

    #[test]
    fn test_palette_conflicts_with_annotations() {
        let res = CliArguments::try_parse_from(["faceplot", "-p", "k-", "--annotations"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_annotations_override_config_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "style_source = \"palette\"")?;
        writeln!(file, "entity_prefix = \"rooms\"")?;
        let path = file.path().to_str().unwrap_or_default().to_string();

        let args = CliArguments::try_parse_from(["faceplot", "-c", &path])?;
        let config = args.plot_config()?;
        assert_eq!(config.style_source, StyleSource::Palette);
        assert_eq!(config.entity_prefix, "rooms");

        let args = CliArguments::try_parse_from(["faceplot", "-c", &path, "--annotations"])?;
        assert_eq!(args.plot_config()?.style_source, StyleSource::Annotations);
        Ok(())
    }

    #[test]
    fn test_missing_config_file() -> Result<()> {
        let args = CliArguments::try_parse_from(["faceplot", "-c", "/nonexistent/faceplot.toml"])?;
        assert!(args.plot_config().is_err());
        Ok(())
    }
}
