//! Face file reader.
//!
//! Consecutive coordinate lines form one face. Any other line closes the
//! face being built. Annotation lines also contribute a style token; the
//! n-th token belongs to the n-th face.

use crate::io::line::{Line, classify_line};
use crate::{Face, Point, StyleToken};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Faces and annotation tokens read from one file, both in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceFile {
    pub faces: Vec<Face>,
    pub annotations: Vec<StyleToken>,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Accumulating(Vec<Point>),
}

/// Groups a stream of classified lines into faces.
#[derive(Debug, Default)]
pub struct FaceAssembler {
    state: State,
    out: FaceFile,
}

impl FaceAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next line of the file.
    pub fn push(&mut self, line: Line) {
        match line {
            Line::Coordinate(p) => match &mut self.state {
                State::Accumulating(pts) => pts.push(p),
                State::Idle => self.state = State::Accumulating(vec![p]),
            },
            Line::Annotation(token) => {
                self.out.annotations.push(token);
                self.close_face();
            }
            Line::Delimiter => self.close_face(),
        }
    }

    /// Closes a pending face and returns everything collected.
    pub fn finish(mut self) -> FaceFile {
        self.close_face();
        self.out
    }

    fn close_face(&mut self) {
        if let State::Accumulating(pts) = std::mem::take(&mut self.state) {
            // Accumulating always holds at least one point
            self.out.faces.push(Face { pts });
        }
    }
}

/// Reads faces from any buffered source.
pub fn parse_faces<R: BufRead>(reader: R) -> Result<FaceFile> {
    let mut assembler = FaceAssembler::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", i + 1))?;
        let kind = classify_line(&line)
            .with_context(|| format!("Invalid line {}: {}", i + 1, line.trim()))?;
        assembler.push(kind);
    }
    let file = assembler.finish();
    tracing::debug!(
        faces = file.faces.len(),
        annotations = file.annotations.len(),
        "parsed face file"
    );
    Ok(file)
}

/// Reads faces from a string.
pub fn parse_faces_str(text: &str) -> Result<FaceFile> {
    parse_faces(text.as_bytes())
}

/// Reads faces from a file on disk.
///
/// # Example
/// ```no_run
/// use faceplot::io::read_faces;
/// use std::path::Path;
///
/// let file = read_faces(Path::new("orig.txt")).unwrap();
/// println!("{} faces", file.faces.len());
/// ```
pub fn read_faces(path: &Path) -> Result<FaceFile> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let faces = parse_faces(reader).with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        faces = faces.faces.len(),
        "read face file"
    );
    Ok(faces)
}
