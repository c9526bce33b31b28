//! Reading face files.
//!
//! A face file is line based text: coordinate lines `(x,y)` build faces,
//! everything else separates them. See [`line`] for the line grammar.

pub mod faces;
pub mod line;

pub use faces::{FaceAssembler, FaceFile, parse_faces, parse_faces_str, read_faces};
pub use line::{Line, LineError, classify_line};
