//! Drawing faces with Rerun.
//!
//! Faces are logged as 2D line strips. Rerun's 2D view keeps one unit in x
//! equal to one unit in y, so shapes are never stretched.

pub mod config;
pub mod rerun;

use crate::io::FaceFile;
use crate::style::bind_styles;
use anyhow::Result;
use config::PlotConfig;

/// Binds styles to all faces of `file` and draws them.
///
/// Nothing is drawn if styles cannot be bound. Returns the number of faces
/// drawn.
pub fn plot_faces(
    session: &::rerun::RecordingStream,
    file: &FaceFile,
    config: &PlotConfig,
) -> Result<usize> {
    let tokens = config.style_tokens(file);
    let styled = bind_styles(&file.faces, tokens)?;
    self::rerun::draw_faces(session, &styled, config)?;
    tracing::info!(faces = styled.len(), source = ?config.style_source, "faces drawn");
    Ok(styled.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_faces_str;
    use crate::style::{StyleError, StyleSource};

    #[test]
    fn test_plot_annotated_faces() -> Result<()> {
        let session = ::rerun::RecordingStream::disabled();
        let file = parse_faces_str("face >k-\n(0,0)\n(1,0)\n(1,1)\nface >b:\n(2,2)\n(3,2)\n")?;
        assert_eq!(plot_faces(&session, &file, &PlotConfig::new())?, 2);
        Ok(())
    }

    #[test]
    fn test_missing_annotation_draws_nothing() -> Result<()> {
        let session = ::rerun::RecordingStream::disabled();
        let file = parse_faces_str("(0,0)\n(1,1)\nfoo>kr\n(2,2)\n(3,3)\nbar\n")?;
        let err = plot_faces(&session, &file, &PlotConfig::new()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<StyleError>(),
            Some(&StyleError::NotEnoughStyles {
                faces: 2,
                styles: 1
            })
        );
        Ok(())
    }

    #[test]
    fn test_palette_ignores_annotations() -> Result<()> {
        let session = ::rerun::RecordingStream::disabled();
        let file = parse_faces_str("(0,0)\n(1,1)\nfoo>kr\n(2,2)\n(3,3)\nbar\n")?;
        let mut config = PlotConfig::new();
        config.style_source = StyleSource::Palette;
        assert_eq!(plot_faces(&session, &file, &config)?, 2);
        Ok(())
    }

    #[test]
    fn test_empty_file() -> Result<()> {
        let session = ::rerun::RecordingStream::disabled();
        let file = parse_faces_str("")?;
        assert_eq!(plot_faces(&session, &file, &PlotConfig::new())?, 0);
        Ok(())
    }
}
