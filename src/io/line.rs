//! Classification of single lines of a face file.
//!
//! A line is one of:
//! - a coordinate line, containing `(x,y)`; the pair is read from the first
//!   `(` up to the first `)`, surrounding text is ignored,
//! - an annotation line, without `(` but with `>` followed by a style token,
//! - anything else, which only delimits faces.

use crate::{Point, StyleToken};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Pair starting at the first `(`. `a` stops at the first comma, `b` at the
/// first `)`. Both halves are parsed separately.
static PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(([^,)]*),([^)]*)\)").expect("pair pattern is valid"));

/// Number of characters after `>` that make up a style token.
const TOKEN_LEN: usize = 2;

/// Classified line of a face file.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Coordinate(Point),
    Annotation(StyleToken),
    Delimiter,
}

/// Why a coordinate line could not be read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    #[error("expected a coordinate pair like (x,y)")]
    MalformedPair,
    #[error("invalid number {text:?}")]
    InvalidNumber { text: String },
}

/// Classifies one line (without its line terminator).
pub fn classify_line(line: &str) -> Result<Line, LineError> {
    if line.contains('(') {
        return parse_pair(line).map(Line::Coordinate);
    }
    match line.find('>') {
        Some(pos) => Ok(Line::Annotation(annotation_token(&line[pos + 1..]))),
        None => Ok(Line::Delimiter),
    }
}

/// Parses the text between the first `(` and the first `)` of a line.
pub fn parse_pair(line: &str) -> Result<Point, LineError> {
    let open = line.find('(').ok_or(LineError::MalformedPair)?;
    // A `)` ahead of the first `(` leaves no pair to read
    if line[..open].contains(')') {
        return Err(LineError::MalformedPair);
    }
    let caps = PAIR.captures(&line[open..]).ok_or(LineError::MalformedPair)?;
    let x = parse_number(&caps[1])?;
    let y = parse_number(&caps[2])?;
    Ok(Point::new(x, y))
}

fn parse_number(text: &str) -> Result<f64, LineError> {
    let text = text.trim();
    text.parse::<f64>().map_err(|_| LineError::InvalidNumber {
        text: text.to_string(),
    })
}

fn annotation_token(rest: &str) -> StyleToken {
    let token: String = rest.chars().take(TOKEN_LEN).collect();
    StyleToken::new(token.trim_end())
}
