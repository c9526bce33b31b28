//! Style tokens and their pairing with faces.
//!
//! Tokens use the short format strings known from matplotlib, e.g. `k-`
//! (black solid line), `r:` (red dotted line) or `bo` (blue circles, no line).

use crate::Face;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// sRGB color tuple (red, green, blue, alpha) with values in 0.0..=1.0.
pub type Rgba = (f32, f32, f32, f32);

const MARKERS: &str = ".,ov^<>12348spP*hH+xXDd|_";

/// Raw style code attached to a face.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleToken(String);

impl StyleToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the token into a drawable [`Style`].
    pub fn style(&self) -> Style {
        Style::parse(&self.0)
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the style of each face comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleSource {
    /// Tokens written after `>` in the face file itself.
    #[default]
    Annotations,
    /// An external list, one token per face.
    Palette,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("not enough styles: {faces} faces but {styles} style tokens")]
    NotEnoughStyles { faces: usize, styles: usize },
    #[error("invalid color {0:?}, expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

/// Resolved drawing style of a face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// `None` means: take the next color of the color cycle.
    pub color: Option<Rgba>,
    /// `None` means: draw no line, only markers.
    pub line: Option<LineKind>,
    pub marker: Option<char>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: None,
            line: Some(LineKind::Solid),
            marker: None,
        }
    }
}

impl Style {
    /// Parses a format string.
    ///
    /// Unknown characters and repeated colors, lines or markers are logged
    /// and ignored; the first occurrence wins.
    pub fn parse(code: &str) -> Self {
        let mut color = None;
        let mut line = None;
        let mut marker = None;

        let mut rest = code;
        while let Some(c) = rest.chars().next() {
            let (kind, len) = if rest.starts_with("--") {
                (Some(LineKind::Dashed), 2)
            } else if rest.starts_with("-.") {
                (Some(LineKind::DashDot), 2)
            } else if c == '-' {
                (Some(LineKind::Solid), 1)
            } else if c == ':' {
                (Some(LineKind::Dotted), 1)
            } else {
                (None, c.len_utf8())
            };

            if let Some(kind) = kind {
                if line.is_some() {
                    tracing::warn!(code, "style has more than one line kind");
                } else {
                    line = Some(kind);
                }
            } else if let Some(rgba) = base_color(c) {
                if color.is_some() {
                    tracing::warn!(code, "style has more than one color, using the first");
                } else {
                    color = Some(rgba);
                }
            } else if MARKERS.contains(c) {
                if marker.is_some() {
                    tracing::warn!(code, "style has more than one marker");
                } else {
                    marker = Some(c);
                }
            } else {
                tracing::warn!(code, ch = %c, "ignoring unknown style character");
            }
            rest = &rest[len..];
        }

        let line = match (line, marker) {
            (Some(kind), _) => Some(kind),
            (None, Some(_)) => None,
            (None, None) => Some(LineKind::Solid),
        };

        Self {
            color,
            line,
            marker,
        }
    }
}

/// Single-letter base colors.
fn base_color(c: char) -> Option<Rgba> {
    let rgba = match c {
        'b' => (0.0, 0.0, 1.0, 1.0),
        'g' => (0.0, 0.5, 0.0, 1.0),
        'r' => (1.0, 0.0, 0.0, 1.0),
        'c' => (0.0, 0.75, 0.75, 1.0),
        'm' => (0.75, 0.0, 0.75, 1.0),
        'y' => (0.75, 0.75, 0.0, 1.0),
        'k' => (0.0, 0.0, 0.0, 1.0),
        'w' => (1.0, 1.0, 1.0, 1.0),
        _ => return None,
    };
    Some(rgba)
}

/// Parses `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(hex: &str) -> Result<Rgba, StyleError> {
    let invalid = || StyleError::InvalidColor(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return Err(invalid());
    }
    let mut channels = [1.0_f32; 4];
    for (i, slot) in channels.iter_mut().enumerate().take(digits.len() / 2) {
        let byte = u8::from_str_radix(&digits[2 * i..2 * i + 2], 16).map_err(|_| invalid())?;
        *slot = byte as f32 / 255.0;
    }
    Ok((channels[0], channels[1], channels[2], channels[3]))
}

/// A face together with the token it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledFace<'a> {
    /// Position of the face in the file.
    pub index: usize,
    pub face: &'a Face,
    pub token: &'a StyleToken,
}

/// Pairs the i-th face with the i-th token.
///
/// Fails if there are fewer tokens than faces. Surplus tokens are unused.
pub fn bind_styles<'a>(
    faces: &'a [Face],
    tokens: &'a [StyleToken],
) -> Result<Vec<StyledFace<'a>>, StyleError> {
    if tokens.len() < faces.len() {
        return Err(StyleError::NotEnoughStyles {
            faces: faces.len(),
            styles: tokens.len(),
        });
    }
    if tokens.len() > faces.len() {
        tracing::warn!(
            faces = faces.len(),
            styles = tokens.len(),
            "more style tokens than faces, extra tokens are unused"
        );
    }

    Ok(faces
        .iter()
        .zip(tokens)
        .enumerate()
        .map(|(index, (face, token))| StyledFace { index, face, token })
        .collect())
}
